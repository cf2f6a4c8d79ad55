//! REST client for the plugin view.

use serde::de::DeserializeOwned;

use plugdoc_mdx::PluginRecord;

/// View that exposes the publicly documented plugins.
pub const DEFAULT_VIEW: &str = "public_plugin";

/// Environment variable holding the project URL.
pub const URL_VAR: &str = "SUPABASE_URL";

/// Environment variable holding the API key.
pub const KEY_VAR: &str = "SUPABASE_KEY";

/// Errors from the record source.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// URL or key was not provided, or was empty.
    #[error("SUPABASE_URL and SUPABASE_KEY environment variables must be set")]
    MissingCredentials,

    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint returned a non-2xx status code.
    #[error("Table API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The body was not the JSON array of rows we expected.
    #[error("Failed to decode rows: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Connection settings for the hosted table.
#[derive(Debug, Clone, PartialEq)]
pub struct Credentials {
    /// Project base URL, e.g. `https://abc.supabase.co`
    pub url: String,
    /// Anon or service key
    pub key: String,
}

impl Credentials {
    /// Build credentials, rejecting absent or empty values.
    pub fn new(url: Option<String>, key: Option<String>) -> Result<Self, SourceError> {
        match (url, key) {
            (Some(url), Some(key)) if !url.is_empty() && !key.is_empty() => Ok(Self { url, key }),
            _ => Err(SourceError::MissingCredentials),
        }
    }
}

/// Read-only client for one project's REST endpoint.
pub struct TableClient {
    client: reqwest::Client,
    credentials: Credentials,
}

impl TableClient {
    /// Create a client for the given project.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            client: reqwest::Client::new(),
            credentials,
        }
    }

    /// Base URL of the REST API, without a trailing slash.
    fn rest_url(&self) -> String {
        format!("{}/rest/v1", self.credentials.url.trim_end_matches('/'))
    }

    /// Fetch every row of `view`, all columns, in server order.
    pub async fn select_all<T: DeserializeOwned>(&self, view: &str) -> Result<Vec<T>, SourceError> {
        let url = format!("{}/{}", self.rest_url(), view);
        tracing::debug!("GET {}?select=*", url);

        let response = self
            .client
            .get(&url)
            .query(&[("select", "*")])
            .header("apikey", &self.credentials.key)
            .bearer_auth(&self.credentials.key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(SourceError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Fetch all plugin records from `view`.
    pub async fn fetch_plugins(&self, view: &str) -> Result<Vec<PluginRecord>, SourceError> {
        self.select_all(view).await
    }
}
