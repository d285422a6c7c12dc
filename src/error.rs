use thiserror::Error;

use crate::feed::{ExtractError, FetchError};
use crate::render::RenderError;
use crate::util::UrlValidationError;

/// Top-level failure of a feed read.
///
/// Each stage keeps its own error type; this enum is the one boundary the
/// command line reports from.
#[derive(Debug, Error)]
pub enum ReaderError {
    #[error("Invalid feed source: {0}")]
    InvalidUrl(#[from] UrlValidationError),

    #[error("Failed to fetch feed: {0}")]
    Fetch(#[from] FetchError),

    #[error("Failed to parse feed: {0}")]
    Extract(#[from] ExtractError),

    #[error("Failed to render feed: {0}")]
    Render(#[from] RenderError),
}
