//! Reqwest-backed `ConfigStore` for the store's `/config` REST surface.
//!
//! Endpoints:
//! - `GET {base}/config` — stub listing (`{"configurations": [...]}`)
//! - `GET {base}/config?_queryFilter=true` — bulk body fetch
//! - `GET {base}/config?_queryFilter=_id sw '{type}'` — typed subset
//! - `GET|PUT|DELETE {base}/config/{id}` — point CRUD
//!
//! Non-success responses are mapped to [`StoreError::Api`] carrying the
//! store's `{code, reason, message}` error body when it parses, falling
//! back to the status reason phrase and raw body text.

use async_trait::async_trait;
use ent_core::{Entity, EntityStub};
use serde::Deserialize;

use crate::{ConfigStore, StoreError};

/// Authentication material applied to every request.
#[derive(Debug, Clone, Default)]
pub enum Auth {
    /// No credentials (local development stores).
    #[default]
    None,

    /// `Authorization: Bearer <token>`.
    Bearer(String),

    /// HTTP basic auth.
    Basic { username: String, password: String },
}

/// HTTP client for one configuration store.
pub struct HttpConfigStore {
    http: reqwest::Client,
    base_url: String,
    auth: Auth,
}

#[derive(Deserialize)]
struct StubListing {
    configurations: Vec<EntityStub>,
}

#[derive(Deserialize)]
struct QueryResult {
    result: Vec<Entity>,
}

#[derive(Deserialize)]
struct ErrorBody {
    reason: Option<String>,
    message: Option<String>,
}

impl HttpConfigStore {
    /// Create a client for the store at `base_url` (no trailing slash).
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(base_url: impl Into<String>, auth: Auth, timeout_secs: u64) -> Self {
        Self {
            http: reqwest::Client::builder()
                .user_agent(concat!("entsync/", env!("CARGO_PKG_VERSION")))
                .timeout(std::time::Duration::from_secs(timeout_secs))
                .build()
                .expect("reqwest client should build"),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            auth,
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn apply_auth(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.auth {
            Auth::None => req,
            Auth::Bearer(token) => req.bearer_auth(token),
            Auth::Basic { username, password } => req.basic_auth(username, Some(password)),
        }
    }

    fn entity_url(&self, id: &str) -> String {
        format!("{}/config/{}", self.base_url, encode_id(id))
    }

    async fn query(&self, filter: &str) -> Result<Vec<Entity>, StoreError> {
        let url = format!(
            "{}/config?_queryFilter={}",
            self.base_url,
            urlencoding::encode(filter)
        );
        let resp = check_response(self.apply_auth(self.http.get(&url)).send().await?).await?;
        let data: QueryResult = resp.json().await?;
        Ok(data.result)
    }
}

#[async_trait]
impl ConfigStore for HttpConfigStore {
    async fn list_stubs(&self) -> Result<Vec<EntityStub>, StoreError> {
        let url = format!("{}/config", self.base_url);
        let resp = check_response(self.apply_auth(self.http.get(&url)).send().await?).await?;
        let data: StubListing = resp.json().await?;
        Ok(data.configurations)
    }

    async fn list_entities(&self) -> Result<Vec<Entity>, StoreError> {
        self.query("true").await
    }

    async fn list_entities_by_type(
        &self,
        entity_type: &str,
    ) -> Result<Vec<Entity>, StoreError> {
        self.query(&format!("_id sw '{entity_type}'")).await
    }

    async fn get_entity(&self, id: &str) -> Result<Entity, StoreError> {
        let resp = check_response(
            self.apply_auth(self.http.get(self.entity_url(id))).send().await?,
        )
        .await?;
        Ok(resp.json().await?)
    }

    async fn put_entity(
        &self,
        id: &str,
        body: &Entity,
        wait: bool,
    ) -> Result<Entity, StoreError> {
        let mut url = self.entity_url(id);
        if wait {
            url.push_str("?waitForCompletion=true");
        }
        let resp =
            check_response(self.apply_auth(self.http.put(url)).json(body).send().await?)
                .await?;
        Ok(resp.json().await?)
    }

    async fn delete_entity(&self, id: &str) -> Result<Entity, StoreError> {
        let resp = check_response(
            self.apply_auth(self.http.delete(self.entity_url(id))).send().await?,
        )
        .await?;
        Ok(resp.json().await?)
    }
}

/// Percent-encode each segment of a path-like id, keeping `/` separators.
fn encode_id(id: &str) -> String {
    id.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Check an HTTP response, mapping non-success statuses to
/// [`StoreError::Api`] with the parsed error body.
async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, StoreError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(api_error(status, &body))
}

fn api_error(status: reqwest::StatusCode, body: &str) -> StoreError {
    let fallback_reason = status.canonical_reason().unwrap_or("Unknown").to_string();
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => StoreError::Api {
            status: status.as_u16(),
            reason: parsed.reason.unwrap_or(fallback_reason),
            message: parsed.message.unwrap_or_else(|| body.to_string()),
        },
        Err(_) => StoreError::Api {
            status: status.as_u16(),
            reason: fallback_reason,
            message: body.to_string(),
        },
    }
}
