//! Feed retrieval and extraction.
//!
//! - [`model`] - The channel/item records every renderer consumes
//! - [`parser`] - Turns an RSS 2.0 document into a [`ChannelRecord`]
//! - [`fetcher`] - Single-shot HTTP download of the feed document
//!
//! # Example
//!
//! ```
//! use rss_reader::feed::extract;
//!
//! let xml = "<rss><channel><title>News</title></channel></rss>";
//! let channel = extract(xml).unwrap();
//! assert_eq!(channel.title.as_deref(), Some("News"));
//! ```

mod fetcher;
mod model;
mod parser;

pub use fetcher::{build_client, fetch_feed, FetchError, DEFAULT_MAX_FEED_SIZE};
pub use model::{ChannelRecord, ItemRecord};
pub use parser::{extract, ExtractError};
