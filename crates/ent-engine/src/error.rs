//! Engine error types: listing-phase failures and batch aggregation.

use ent_store::StoreError;
use thiserror::Error;

/// Why one item in a batch failed.
#[derive(Debug, Error)]
pub enum ItemFailure {
    /// The store call for this id failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Local script-hook validation failed; no store call was made.
    #[error("validation failed: {0}")]
    Validation(String),
}

/// One failed item, keyed by entity id.
#[derive(Debug, Error)]
#[error("{id}: {source}")]
pub struct ItemError {
    pub id: String,
    #[source]
    pub source: ItemFailure,
}

impl ItemError {
    #[must_use]
    pub fn new(id: impl Into<String>, source: impl Into<ItemFailure>) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
        }
    }
}

/// N≥1 per-item failures from a batch, raised only after every item was
/// attempted. Partial success at the store is possible: callers must read
/// this as "some or all items failed", not "no changes were made".
#[derive(Debug, Error)]
#[error("{operation}: {} of {attempted} entities failed", .errors.len())]
pub struct AggregateError {
    /// Which batch operation produced the failures.
    pub operation: &'static str,

    /// How many items the batch attempted.
    pub attempted: usize,

    /// The recorded failures, in attempt order.
    pub errors: Vec<ItemError>,
}

/// Errors raised by the batch orchestrators.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The working set could not be enumerated; nothing was attempted.
    #[error("listing configuration entities failed: {0}")]
    List(#[source] StoreError),

    /// One or more items in the batch failed.
    #[error(transparent)]
    Aggregate(#[from] AggregateError),
}

impl EngineError {
    /// The aggregated per-item failures, if this is a batch failure.
    #[must_use]
    pub const fn aggregate(&self) -> Option<&AggregateError> {
        match self {
            Self::Aggregate(inner) => Some(inner),
            Self::List(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_err(status: u16) -> StoreError {
        StoreError::Api {
            status,
            reason: "Forbidden".to_string(),
            message: "denied".to_string(),
        }
    }

    #[test]
    fn aggregate_display_counts_failures() {
        let err = AggregateError {
            operation: "import",
            attempted: 5,
            errors: vec![
                ItemError::new("audit", store_err(403)),
                ItemError::new("managed", store_err(500)),
            ],
        };
        assert_eq!(err.to_string(), "import: 2 of 5 entities failed");
    }

    #[test]
    fn item_error_display_includes_id() {
        let err = ItemError::new("script", store_err(403));
        assert!(err.to_string().starts_with("script: "));
    }

    #[test]
    fn engine_error_exposes_aggregate() {
        let err = EngineError::from(AggregateError {
            operation: "delete-all",
            attempted: 1,
            errors: vec![ItemError::new("audit", store_err(500))],
        });
        assert_eq!(err.aggregate().unwrap().errors.len(), 1);

        let listing = EngineError::List(store_err(401));
        assert!(listing.aggregate().is_none());
    }
}
