//! HTTP implementation of the label and event services
//!
//! Requests carry a bearer token plus the session UID and app version
//! headers. Responses use the `{ "Code": 1000, ... }` envelope; anything
//! else is turned into [`ApiError::Rejected`] with the server's `Error` text.

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tokio::sync::Mutex;

use super::{ApiError, EventManager, LabelService};
use crate::config::ApiConfig;
use crate::constants::{API_CODE_SUCCESS, EVENT_MAX_PAGES, HEADER_APP_VERSION, HEADER_UID};
use crate::label::{Label, LabelPayload};

#[derive(Deserialize)]
struct ErrorEnvelope {
    #[serde(rename = "Code")]
    code: Option<i64>,
    #[serde(rename = "Error")]
    error: Option<String>,
}

#[derive(Deserialize)]
struct LabelEnvelope {
    #[serde(rename = "Label")]
    label: Option<Label>,
}

#[derive(Deserialize)]
struct EventEnvelope {
    #[serde(rename = "EventID")]
    event_id: String,
    #[serde(rename = "More", default)]
    more: i32,
}

/// Authenticated client bound to one API base URL
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: Url,
    http: Client,
}

impl ApiClient {
    /// Build a client
    ///
    /// # Arguments
    /// * `base_url` - API root, e.g. `https://mail.example.com/api`
    /// * `token` - bearer token sent with every request
    /// * `uid` - optional session UID header
    /// * `app_version` - value of the app version header
    /// * `timeout` - per-request timeout
    pub fn new(
        base_url: &str,
        token: &str,
        uid: Option<&str>,
        app_version: &str,
        timeout: Duration,
    ) -> Result<Self, ApiError> {
        let base_url =
            Url::parse(base_url).map_err(|e| ApiError::InvalidConfig(format!("base_url '{base_url}': {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidConfig(format!("base_url '{base_url}' cannot be a base")));
        }

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, header_value("Authorization", &format!("Bearer {token}"))?);
        headers.insert(HEADER_APP_VERSION, header_value(HEADER_APP_VERSION, app_version)?);
        if let Some(uid) = uid {
            headers.insert(HEADER_UID, header_value(HEADER_UID, uid)?);
        }

        let http = Client::builder().default_headers(headers).timeout(timeout).build()?;
        Ok(Self { base_url, http })
    }

    /// Build a client from the `[api]` config section and an already resolved token.
    pub fn from_config(config: &ApiConfig, token: &str, uid: Option<&str>) -> Result<Self, ApiError> {
        Self::new(
            &config.base_url,
            token,
            uid,
            &config.app_version,
            Duration::from_secs(config.timeout_secs),
        )
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidConfig(format!("base_url '{}' cannot be a base", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ApiError> {
        let url = self.endpoint(segments)?;
        debug!("API: GET {}", url);
        let response = self.http.get(url).send().await?;
        read_envelope(response).await
    }
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue, ApiError> {
    HeaderValue::from_str(value).map_err(|_| ApiError::InvalidConfig(format!("invalid value for header {name}")))
}

/// Decode a response body, mapping error envelopes and non-success codes.
async fn read_envelope<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        let envelope = serde_json::from_str::<ErrorEnvelope>(&body).ok();
        return Err(ApiError::Rejected {
            status: status.as_u16(),
            code: envelope.as_ref().and_then(|e| e.code),
            message: envelope.and_then(|e| e.error),
        });
    }

    let value: serde_json::Value = serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))?;
    if let Some(code) = value.get("Code").and_then(serde_json::Value::as_i64) {
        if code != API_CODE_SUCCESS {
            return Err(ApiError::Rejected {
                status: status.as_u16(),
                code: Some(code),
                message: value.get("Error").and_then(|e| e.as_str()).map(str::to_string),
            });
        }
    }

    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Label endpoints: `POST labels` and `PUT labels/{ID}`
#[derive(Clone, Debug)]
pub struct HttpLabelService {
    client: ApiClient,
}

impl HttpLabelService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl LabelService for HttpLabelService {
    async fn create(&self, payload: &LabelPayload) -> Result<Label, ApiError> {
        info!("API: Creating label '{}' (exclusive={})", payload.name, payload.exclusive);
        let url = self.client.endpoint(&["labels"])?;
        let response = self.client.http.post(url).json(payload).send().await?;
        let envelope: LabelEnvelope = read_envelope(response).await?;
        envelope.label.ok_or(ApiError::MissingLabel)
    }

    async fn update(&self, payload: &LabelPayload) -> Result<Label, ApiError> {
        let id = payload
            .id
            .as_deref()
            .filter(|id| !id.is_empty())
            .ok_or_else(|| ApiError::InvalidConfig("update requires a label ID".to_string()))?;
        info!("API: Updating label {} to '{}'", id, payload.name);
        let url = self.client.endpoint(&["labels", id])?;
        let response = self.client.http.put(url).json(payload).send().await?;
        let envelope: LabelEnvelope = read_envelope(response).await?;
        envelope.label.ok_or(ApiError::MissingLabel)
    }
}

/// Event polling used as the global refresh after a save.
///
/// The first call only establishes the cursor from `events/latest`; later
/// calls follow `events/{EventID}` while the server reports `More: 1`.
#[derive(Debug)]
pub struct HttpEventManager {
    client: ApiClient,
    cursor: Mutex<Option<String>>,
}

impl HttpEventManager {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            cursor: Mutex::new(None),
        }
    }

    /// Start from a known event ID instead of asking for the latest one
    pub fn with_cursor(client: ApiClient, event_id: impl Into<String>) -> Self {
        Self {
            client,
            cursor: Mutex::new(Some(event_id.into())),
        }
    }

    pub async fn cursor(&self) -> Option<String> {
        self.cursor.lock().await.clone()
    }
}

#[async_trait]
impl EventManager for HttpEventManager {
    async fn call(&self) -> Result<(), ApiError> {
        let mut cursor = self.cursor.lock().await;

        let Some(mut event_id) = cursor.clone() else {
            let latest: EventEnvelope = self.client.get(&["events", "latest"]).await?;
            debug!("Events: cursor initialized at {}", latest.event_id);
            *cursor = Some(latest.event_id);
            return Ok(());
        };

        for page in 0..EVENT_MAX_PAGES {
            let events: EventEnvelope = self.client.get(&["events", event_id.as_str()]).await?;
            event_id = events.event_id;
            if events.more == 0 {
                break;
            }
            if page + 1 == EVENT_MAX_PAGES {
                warn!("Events: stopping after {} pages, more events pending", EVENT_MAX_PAGES);
            }
        }

        debug!("Events: cursor moved to {}", event_id);
        *cursor = Some(event_id);
        Ok(())
    }
}
