use crate::feed::{ChannelRecord, ItemRecord};

use super::limit_items;

/// Channel fields shown in text mode, in display order.
/// Channel categories are not part of the text view.
fn channel_fields(channel: &ChannelRecord) -> [(&'static str, Option<&str>); 7] {
    [
        ("Feed", channel.title.as_deref()),
        ("Link", channel.link.as_deref()),
        ("Last Build Date", channel.last_build_date.as_deref()),
        ("Publish Date", channel.pub_date.as_deref()),
        ("Language", channel.language.as_deref()),
        ("Editor", channel.managing_editor.as_deref()),
        ("Description", channel.description.as_deref()),
    ]
}

/// Labelled item fields, in display order. Categories and description
/// follow these with their own formatting.
fn item_fields(item: &ItemRecord) -> [(&'static str, Option<&str>); 4] {
    [
        ("Title", item.title.as_deref()),
        ("Author", item.author.as_deref()),
        ("Published", item.pub_date.as_deref()),
        ("Link", item.link.as_deref()),
    ]
}

/// Renders a channel as human-readable lines.
///
/// The channel block is always followed by one empty line. Each item
/// (after applying `limit`) contributes its labelled fields, a
/// `Categories:` line, its description preceded by a blank line, and a
/// trailing empty line.
pub fn render_text(channel: &ChannelRecord, limit: Option<usize>) -> Vec<String> {
    let mut lines: Vec<String> = channel_fields(channel)
        .into_iter()
        .filter_map(|(label, value)| value.map(|v| format!("{}: {}", label, v)))
        .collect();
    lines.push(String::new());

    for item in limit_items(&channel.items, limit) {
        push_item(&mut lines, item);
    }

    lines
}

fn push_item(lines: &mut Vec<String>, item: &ItemRecord) {
    lines.extend(
        item_fields(item)
            .into_iter()
            .filter_map(|(label, value)| value.map(|v| format!("{}: {}", label, v))),
    );
    if !item.categories.is_empty() {
        lines.push(format!("Categories: {}", item.categories.join(", ")));
    }
    if let Some(description) = &item.description {
        lines.push(format!("\n{}", description));
    }
    lines.push(String::new());
}
