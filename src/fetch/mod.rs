use reqwest::Client;
use std::time::Duration;

use crate::config::HttpConfig;
use crate::extractors::{html, pdf};
use crate::{ExtractError, Result};

/// Sentinel returned for remote content that is neither PDF nor HTML.
/// A recognized terminal result, not an error.
pub const UNSUPPORTED_URL_CONTENT: &str = "Unsupported URL content type\n";

/// What the response `Content-Type` header tells us to do with the body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ContentKind {
    Pdf,
    Html,
    Other,
}

impl ContentKind {
    fn from_content_type(content_type: &str) -> Self {
        let lowered = content_type.to_lowercase();
        if lowered.contains("application/pdf") {
            ContentKind::Pdf
        } else if lowered.contains("text/html") {
            ContentKind::Html
        } else {
            ContentKind::Other
        }
    }
}

/// Fetches remote documents and extracts their text by content type
pub struct RemoteFetcher {
    client: Client,
}

impl RemoteFetcher {
    /// Build a fetcher with the configured user agent and request timeout.
    ///
    /// A browser-like user agent matters here: some servers reject requests
    /// carrying default or bot-like agents.
    pub fn new(http: &HttpConfig) -> Self {
        let client = Client::builder()
            .user_agent(&http.user_agent)
            .timeout(Duration::from_secs(http.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// GET a URL and extract text from the body according to its `Content-Type`.
    ///
    /// PDF bodies go through the PDF extractor, HTML bodies through the HTML
    /// extractor; any other content type yields [`UNSUPPORTED_URL_CONTENT`].
    /// Network failures and non-2xx responses surface as fetch errors.
    pub async fn fetch(&self, url: &str) -> Result<String> {
        tracing::debug!("Fetching remote document: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| fetch_error(url, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(fetch_error(url, format!("HTTP {status}")));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        match ContentKind::from_content_type(&content_type) {
            ContentKind::Pdf => {
                let bytes = response
                    .bytes()
                    .await
                    .map_err(|e| fetch_error(url, e.to_string()))?;
                pdf::extract_from_bytes(&bytes)
            }
            ContentKind::Html => {
                let body = response
                    .text()
                    .await
                    .map_err(|e| fetch_error(url, e.to_string()))?;
                Ok(html::extract(&body))
            }
            ContentKind::Other => {
                tracing::debug!("Unsupported content type '{}' for {}", content_type, url);
                Ok(UNSUPPORTED_URL_CONTENT.to_string())
            }
        }
    }
}

fn fetch_error(url: &str, message: String) -> ExtractError {
    ExtractError::Fetch {
        url: url.to_string(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_kind_from_content_type() {
        assert_eq!(
            ContentKind::from_content_type("application/pdf"),
            ContentKind::Pdf
        );
        assert_eq!(
            ContentKind::from_content_type("Application/PDF; charset=binary"),
            ContentKind::Pdf
        );
        assert_eq!(
            ContentKind::from_content_type("text/html; charset=utf-8"),
            ContentKind::Html
        );
        assert_eq!(
            ContentKind::from_content_type("image/png"),
            ContentKind::Other
        );
        assert_eq!(ContentKind::from_content_type(""), ContentKind::Other);
    }
}
