//! Suppression policy tables.
//!
//! Some entity ids legitimately never exist in certain deployments (the
//! known-unavailable set), and some system entities reject writes in the
//! cloud offering (the protected set). Both are represented as swappable
//! data tables so the classification policy can evolve without touching
//! orchestration logic.
//!
//! Matching on exact HTTP message text is a known compatibility risk: the
//! store's wording is not a stable contract. Status codes drive every rule;
//! message text is only consulted where the status alone is ambiguous, and
//! the reason comparison mode is configurable.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Exact 403 message returned by the cloud offering for operations it does
/// not expose. Fetch failures carrying this text are suppressed on export.
pub const CLOUD_UNAVAILABLE_MESSAGE: &str =
    "this operation is not available in the managed-identity cloud offering";

/// Legacy file-install config id. 404 messages referencing it are benign
/// leftovers of file-based provisioning and are suppressed on export.
pub const FILE_INSTALL_ID: &str = "org.apache.felix.fileinstall";

/// The reason text a known-unavailable 404 must carry to be suppressed.
pub const NOT_FOUND_REASON: &str = "Not Found";

/// Ids that legitimately never exist in some deployments.
const DEFAULT_KNOWN_UNAVAILABLE: &[&str] = &[
    "script",
    "scheduler",
    "cluster",
    "endpoint/validator",
    "endpoint/oauthproxy",
    "endpoint/mappingDetails",
    "fieldPolicy",
];

/// Default-realm system templates whose write conflicts are expected in the
/// cloud offering.
const DEFAULT_PROTECTED: &[&str] = &[
    "emailTemplate/frOnboarding",
    "emailTemplate/registration",
    "emailTemplate/forgotUsername",
    "emailTemplate/resetPassword",
    "emailTemplate/updatePassword",
    "emailTemplate/welcome",
];

/// How the 404 reason string is compared against [`NOT_FOUND_REASON`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReasonMatch {
    /// Byte-for-byte equality.
    #[default]
    Exact,

    /// ASCII case-insensitive equality, for stores that localize or
    /// re-case their reason phrases.
    CaseInsensitive,
}

impl ReasonMatch {
    #[must_use]
    pub fn matches(self, reason: &str, expected: &str) -> bool {
        match self {
            Self::Exact => reason == expected,
            Self::CaseInsensitive => reason.eq_ignore_ascii_case(expected),
        }
    }
}

/// The two id tables plus the reason comparison mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuppressionPolicy {
    known_unavailable: BTreeSet<String>,
    protected: BTreeSet<String>,
    reason_match: ReasonMatch,
}

impl Default for SuppressionPolicy {
    fn default() -> Self {
        Self {
            known_unavailable: DEFAULT_KNOWN_UNAVAILABLE
                .iter()
                .map(ToString::to_string)
                .collect(),
            protected: DEFAULT_PROTECTED.iter().map(ToString::to_string).collect(),
            reason_match: ReasonMatch::Exact,
        }
    }
}

impl SuppressionPolicy {
    #[must_use]
    pub const fn reason_match(&self) -> ReasonMatch {
        self.reason_match
    }

    #[must_use]
    pub fn with_reason_match(mut self, mode: ReasonMatch) -> Self {
        self.reason_match = mode;
        self
    }

    /// Merge extra ids over the built-in known-unavailable table.
    #[must_use]
    pub fn with_known_unavailable<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.known_unavailable.extend(ids.into_iter().map(Into::into));
        self
    }

    /// Merge extra ids over the built-in protected table.
    #[must_use]
    pub fn with_protected<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.protected.extend(ids.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn is_known_unavailable(&self, id: &str) -> bool {
        self.known_unavailable.contains(id)
    }

    #[must_use]
    pub fn is_protected(&self, id: &str) -> bool {
        self.protected.contains(id)
    }

    /// True when `reason` counts as the not-found reason under the
    /// configured comparison mode.
    #[must_use]
    pub fn is_not_found_reason(&self, reason: &str) -> bool {
        self.reason_match.matches(reason, NOT_FOUND_REASON)
    }
}
