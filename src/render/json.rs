use serde::Serialize;

use crate::feed::{ChannelRecord, ItemRecord};

use super::{limit_items, RenderError};

/// JSON shape of a channel. Keys follow RSS element names and absent
/// fields are left out entirely.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonChannel<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    link: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_build_date: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub_date: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    managing_editor: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(rename = "category", skip_serializing_if = "no_values")]
    categories: &'a [String],
    #[serde(skip_serializing_if = "Vec::is_empty")]
    items: Vec<JsonItem<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonItem<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    author: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub_date: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    link: Option<&'a str>,
    #[serde(rename = "category", skip_serializing_if = "no_values")]
    categories: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
}

fn no_values(values: &&[String]) -> bool {
    values.is_empty()
}

impl<'a> From<&'a ItemRecord> for JsonItem<'a> {
    fn from(item: &'a ItemRecord) -> Self {
        Self {
            title: item.title.as_deref(),
            author: item.author.as_deref(),
            pub_date: item.pub_date.as_deref(),
            link: item.link.as_deref(),
            categories: &item.categories,
            description: item.description.as_deref(),
        }
    }
}

/// Renders a channel as a pretty-printed JSON document.
///
/// Uses two-space indentation and writes non-ASCII characters as-is.
/// Unlike the text view, channel categories are included (`category`).
pub fn render_json(channel: &ChannelRecord, limit: Option<usize>) -> Result<String, RenderError> {
    let view = JsonChannel {
        title: channel.title.as_deref(),
        link: channel.link.as_deref(),
        last_build_date: channel.last_build_date.as_deref(),
        pub_date: channel.pub_date.as_deref(),
        language: channel.language.as_deref(),
        managing_editor: channel.managing_editor.as_deref(),
        description: channel.description.as_deref(),
        categories: &channel.categories,
        items: limit_items(&channel.items, limit)
            .iter()
            .map(JsonItem::from)
            .collect(),
    };

    Ok(serde_json::to_string_pretty(&view)?)
}
