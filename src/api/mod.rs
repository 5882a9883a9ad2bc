//! KOTO backend REST client.
//!
//! [`DirectoryService`] is the seam the folder browser fetches through;
//! [`ApiClient`] implements it over HTTP and also loads and saves the
//! configuration document.
//!
//! Endpoints:
//!
//! | Method | Path | Body |
//! |--------|------|------|
//! | `GET` | `/api/folders?parentId={id}` | `{ "folders": [{ "id", "name" }] }` |
//! | `GET` | `/api/config` | full configuration document |
//! | `POST` | `/api/config` | full configuration document |

use std::future::Future;
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::browser::FolderRef;
use crate::config::ApiConfig;
use crate::document::{self, ConfigDocument};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid API base URL {url:?}: {reason}")]
    InvalidBase { url: String, reason: String },

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("malformed response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Source of folder listings for the browser.
pub trait DirectoryService {
    /// Immediate child folders of `parent_id`. An empty id lists the drive root.
    fn list_folders(
        &self,
        parent_id: &str,
    ) -> impl Future<Output = Result<Vec<FolderRef>, ApiError>> + Send;
}

#[derive(Debug, Deserialize)]
struct FolderListResponse {
    folders: Vec<FolderRef>,
}

/// HTTP client for one KOTO backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base: Url,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let base = parse_base(&config.base_url)?;

        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build().map_err(|e| ApiError::Transport {
            url: base.to_string(),
            source: e,
        })?;

        Ok(Self { http, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Load the configuration document, upgrading legacy fields.
    pub async fn fetch_config(&self) -> Result<ConfigDocument, ApiError> {
        let url = self.endpoint("api/config")?;
        let raw: serde_json::Value = self.get_json(url.clone()).await?;
        document::parse_document(raw).map_err(|source| ApiError::Decode {
            url: url.to_string(),
            source,
        })
    }

    /// Persist the full configuration document. There is no partial update.
    pub async fn save_config(&self, document: &ConfigDocument) -> Result<(), ApiError> {
        let url = self.endpoint("api/config")?;
        let body = serde_json::to_vec(document)?;

        debug!(url = %url, bytes = body.len(), "saving config");
        let response = self
            .http
            .post(url.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.to_string(),
                source,
            })?;

        check_status(&url, response.status())?;
        info!(url = %url, "config saved");
        Ok(())
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base.join(path).map_err(|e| ApiError::InvalidBase {
            url: self.base.to_string(),
            reason: e.to_string(),
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        debug!(url = %url, "GET");
        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.to_string(),
                source,
            })?;

        check_status(&url, response.status())?;

        let bytes = response.bytes().await.map_err(|source| ApiError::Transport {
            url: url.to_string(),
            source,
        })?;
        serde_json::from_slice(&bytes).map_err(|source| ApiError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

impl DirectoryService for ApiClient {
    async fn list_folders(&self, parent_id: &str) -> Result<Vec<FolderRef>, ApiError> {
        let mut url = self.endpoint("api/folders")?;
        url.query_pairs_mut().append_pair("parentId", parent_id);

        let response: FolderListResponse = self.get_json(url).await?;
        Ok(response.folders)
    }
}

fn check_status(url: &Url, status: reqwest::StatusCode) -> Result<(), ApiError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(ApiError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        })
    }
}

/// Parse the base URL so that relative endpoint paths join under it.
fn parse_base(raw: &str) -> Result<Url, ApiError> {
    let trimmed = raw.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };
    let url = Url::parse(&with_slash).map_err(|e| ApiError::InvalidBase {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;
    if url.cannot_be_a_base() {
        return Err(ApiError::InvalidBase {
            url: raw.to_string(),
            reason: "not a hierarchical URL".into(),
        });
    }
    Ok(url)
}
