//! Output renderers for an extracted channel.
//!
//! Both formats read the same [`ChannelRecord`] and truncate its items
//! with [`limit_items`], so a given limit selects the same entries in
//! text and JSON output.

mod json;
mod text;

use thiserror::Error;

use crate::feed::{ChannelRecord, ItemRecord};

pub use json::render_json;
pub use text::render_text;

/// Errors that can occur while rendering a channel.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to serialize feed as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Selects the output representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `Label: value` lines
    #[default]
    Text,
    /// A single pretty-printed JSON document
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Text
        }
    }
}

/// Renders `channel` in the requested format.
///
/// Text output is one string per line, to be joined with `\n`. JSON output
/// is a single-element vector holding the whole document.
pub fn render(
    channel: &ChannelRecord,
    limit: Option<usize>,
    format: OutputFormat,
) -> Result<Vec<String>, RenderError> {
    match format {
        OutputFormat::Text => Ok(render_text(channel, limit)),
        OutputFormat::Json => Ok(vec![render_json(channel, limit)?]),
    }
}

/// Truncates `items` to the first `limit` entries.
///
/// `None` and `Some(0)` both mean "no limit" and return every item.
pub fn limit_items(items: &[ItemRecord], limit: Option<usize>) -> &[ItemRecord] {
    match limit {
        Some(n) if n > 0 => &items[..n.min(items.len())],
        _ => items,
    }
}
