use encoding_rs::{Encoding, UTF_8};
use futures::StreamExt;
use reqwest::header::CONTENT_TYPE;
use thiserror::Error;
use url::Url;

/// Default upper bound on a feed response body.
pub const DEFAULT_MAX_FEED_SIZE: usize = 10 * 1024 * 1024; // 10MB

/// Errors that can occur while downloading a feed document.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network-level error (DNS, connection, TLS, etc.)
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),
    /// HTTP response with non-2xx status code
    #[error("HTTP error: status {0}")]
    HttpStatus(u16),
    /// Response body exceeded the configured size limit
    #[error("Response too large")]
    ResponseTooLarge,
}

/// Builds the HTTP client used for feed requests.
pub fn build_client(user_agent: &str) -> Result<reqwest::Client, FetchError> {
    let client = reqwest::Client::builder().user_agent(user_agent).build()?;
    Ok(client)
}

/// Downloads a feed document and returns its body as text.
///
/// Performs a single GET with no retry. Any non-2xx status fails with
/// [`FetchError::HttpStatus`]. The body is read with a size cap of
/// `max_bytes` and decoded with the `charset` of the `Content-Type`
/// header (UTF-8 when absent or unknown). A leading byte-order mark
/// overrides the declared charset and is dropped; invalid sequences are
/// replaced.
pub async fn fetch_feed(
    client: &reqwest::Client,
    url: &Url,
    max_bytes: usize,
) -> Result<String, FetchError> {
    tracing::debug!(url = %url, "Fetching feed");

    let response = client.get(url.clone()).send().await?;

    if !response.status().is_success() {
        tracing::debug!(url = %url, status = %response.status(), "Feed request rejected");
        return Err(FetchError::HttpStatus(response.status().as_u16()));
    }

    let encoding = response_encoding(&response);
    let bytes = read_limited_bytes(response, max_bytes).await?;

    let (text, used, had_errors) = encoding.decode(&bytes);
    tracing::debug!(
        url = %url,
        bytes = bytes.len(),
        encoding = used.name(),
        had_errors = had_errors,
        "Feed downloaded"
    );

    Ok(text.into_owned())
}

/// Encoding named by the `charset` parameter of `Content-Type`.
fn response_encoding(response: &reqwest::Response) -> &'static Encoding {
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(charset_label)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8)
}

fn charset_label(content_type: &str) -> Option<&str> {
    content_type.split(';').skip(1).find_map(|param| {
        let (key, value) = param.split_once('=')?;
        key.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim().trim_matches('"'))
    })
}

async fn read_limited_bytes(
    response: reqwest::Response,
    limit: usize,
) -> Result<Vec<u8>, FetchError> {
    // Fast path: check Content-Length header
    if let Some(len) = response.content_length() {
        if len > limit as u64 {
            return Err(FetchError::ResponseTooLarge);
        }
    }

    let mut bytes = Vec::new();
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        if bytes.len().saturating_add(chunk.len()) > limit {
            return Err(FetchError::ResponseTooLarge);
        }
        bytes.extend_from_slice(&chunk);
    }

    Ok(bytes)
}
