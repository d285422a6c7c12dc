/// Channel-level metadata and items extracted from an RSS document.
///
/// Scalar fields are `Some` only when the source element exists and its
/// decoded text is non-empty. Empty `categories`/`items` mean the feed had
/// none. The record is built once per parse and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelRecord {
    pub title: Option<String>,
    pub link: Option<String>,
    pub last_build_date: Option<String>,
    pub pub_date: Option<String>,
    pub language: Option<String>,
    pub managing_editor: Option<String>,
    pub description: Option<String>,
    /// `<category>` values in document order, duplicates kept.
    pub categories: Vec<String>,
    /// `<item>` entries in document order.
    pub items: Vec<ItemRecord>,
}

/// A single `<item>` entry of a channel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemRecord {
    pub title: Option<String>,
    pub author: Option<String>,
    pub pub_date: Option<String>,
    pub link: Option<String>,
    pub categories: Vec<String>,
    pub description: Option<String>,
}
