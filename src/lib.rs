//! Command-line RSS reader: fetches an RSS 2.0 feed and prints its channel
//! metadata and items as text or JSON.
//!
//! ```
//! use rss_reader::reader::parse_and_render;
//! use rss_reader::render::OutputFormat;
//!
//! let xml = "<rss><channel><title>News</title><link>https://example.com</link></channel></rss>";
//! let lines = parse_and_render(xml, None, OutputFormat::Text).unwrap();
//! assert_eq!(lines, vec!["Feed: News", "Link: https://example.com", ""]);
//! ```

pub mod config;
pub mod error;
pub mod feed;
pub mod reader;
pub mod render;
pub mod util;

pub use error::ReaderError;
