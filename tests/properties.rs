//! Property tests over generated RSS documents.

use proptest::prelude::*;
use rss_reader::feed::extract;
use rss_reader::reader::parse_and_render;
use rss_reader::render::OutputFormat;

/// Escapes text for embedding in an XML element.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn document(title: &str, link: &str, item_titles: &[String]) -> String {
    let items: String = item_titles
        .iter()
        .map(|t| format!("<item><title>{}</title></item>", escape(t)))
        .collect();
    format!(
        "<rss><channel><title>{}</title><link>{}</link>{}</channel></rss>",
        escape(title),
        escape(link),
        items
    )
}

fn text_value() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 &<>'\"é]{1,20}"
}

proptest! {
    #[test]
    fn title_and_link_render_exactly(title in text_value(), link in text_value()) {
        let lines = parse_and_render(&document(&title, &link, &[]), None, OutputFormat::Text).unwrap();
        prop_assert_eq!(lines, vec![format!("Feed: {}", title), format!("Link: {}", link), String::new()]);
    }

    #[test]
    fn json_round_trips_decoded_values(title in text_value(), link in text_value()) {
        let json = parse_and_render(&document(&title, &link, &[]), None, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json[0]).unwrap();
        prop_assert_eq!(value["title"].as_str(), Some(title.as_str()));
        prop_assert_eq!(value["link"].as_str(), Some(link.as_str()));
    }

    #[test]
    fn limit_selects_same_prefix_in_both_modes(
        items in prop::collection::vec(text_value(), 0..8),
        limit in 0usize..10,
    ) {
        let xml = document("Feed", "https://example.com", &items);
        let expected = if limit == 0 { items.len() } else { limit.min(items.len()) };

        let text = parse_and_render(&xml, Some(limit), OutputFormat::Text).unwrap();
        let text_titles: Vec<String> = text
            .iter()
            .filter_map(|l| l.strip_prefix("Title: ").map(str::to_string))
            .collect();
        prop_assert_eq!(&text_titles[..], &items[..expected]);

        let json = parse_and_render(&xml, Some(limit), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json[0]).unwrap();
        let json_titles: Vec<String> = value["items"]
            .as_array()
            .map(|a| a.iter().filter_map(|i| i["title"].as_str().map(str::to_string)).collect())
            .unwrap_or_default();
        prop_assert_eq!(&json_titles[..], &items[..expected]);
    }

    #[test]
    fn extraction_is_idempotent(items in prop::collection::vec(text_value(), 0..5)) {
        let xml = document("Feed", "https://example.com", &items);
        prop_assert_eq!(extract(&xml).unwrap(), extract(&xml).unwrap());
        for format in [OutputFormat::Text, OutputFormat::Json] {
            prop_assert_eq!(
                parse_and_render(&xml, None, format).unwrap(),
                parse_and_render(&xml, None, format).unwrap()
            );
        }
    }
}
