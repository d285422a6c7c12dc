//! End-to-end pipeline: source URL to rendered output.

use crate::error::ReaderError;
use crate::feed::{self, DEFAULT_MAX_FEED_SIZE};
use crate::render::{self, OutputFormat};
use crate::util::validate_url;

/// Parameters for a single feed read.
#[derive(Debug, Clone)]
pub struct ReadOptions {
    /// Feed URL as given by the user.
    pub source: String,
    /// Maximum number of items; `None` or `Some(0)` shows all.
    pub limit: Option<usize>,
    pub format: OutputFormat,
    /// Upper bound on the downloaded document size in bytes.
    pub max_feed_size: usize,
    /// Whether localhost and private-network hosts may be fetched.
    pub allow_private_hosts: bool,
}

impl ReadOptions {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            limit: None,
            format: OutputFormat::Text,
            max_feed_size: DEFAULT_MAX_FEED_SIZE,
            allow_private_hosts: true,
        }
    }
}

/// Extracts a channel from `xml` and renders it.
///
/// Returns the output lines; JSON output is a single element.
pub fn parse_and_render(
    xml: &str,
    limit: Option<usize>,
    format: OutputFormat,
) -> Result<Vec<String>, ReaderError> {
    let channel = feed::extract(xml)?;
    Ok(render::render(&channel, limit, format)?)
}

/// Fetches the feed at `options.source` and returns the rendered output,
/// lines joined with `\n`.
///
/// Nothing is produced unless every stage succeeds.
pub async fn read_feed(
    client: &reqwest::Client,
    options: &ReadOptions,
) -> Result<String, ReaderError> {
    let url = validate_url(&options.source, options.allow_private_hosts)?;
    let xml = feed::fetch_feed(client, &url, options.max_feed_size).await?;
    let lines = parse_and_render(&xml, options.limit, options.format)?;

    tracing::debug!(
        source = %url,
        format = ?options.format,
        lines = lines.len(),
        "Rendered feed"
    );

    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::ExtractError;

    #[test]
    fn test_parse_and_render_text() {
        let xml = "<rss><channel><title>Some RSS Channel</title><link>https://some.rss.com</link><description>Some RSS Channel</description></channel></rss>";
        let lines = parse_and_render(xml, None, OutputFormat::Text).unwrap();
        assert_eq!(
            lines,
            vec![
                "Feed: Some RSS Channel",
                "Link: https://some.rss.com",
                "Description: Some RSS Channel",
                "",
            ]
        );
    }

    #[test]
    fn test_parse_and_render_missing_channel() {
        let err = parse_and_render("<rss></rss>", None, OutputFormat::Json).unwrap_err();
        assert!(matches!(
            err,
            ReaderError::Extract(ExtractError::MissingChannel)
        ));
    }

    #[test]
    fn test_parse_and_render_malformed_yields_no_output() {
        let result = parse_and_render("<rss><channel>", None, OutputFormat::Text);
        assert!(matches!(
            result,
            Err(ReaderError::Extract(ExtractError::Malformed(_)))
        ));
    }

    #[tokio::test]
    async fn test_read_feed_rejects_bad_scheme_before_fetching() {
        let client = reqwest::Client::new();
        let options = ReadOptions::new("ftp://example.com/feed");
        let err = read_feed(&client, &options).await.unwrap_err();
        assert!(matches!(err, ReaderError::InvalidUrl(_)));
    }
}
