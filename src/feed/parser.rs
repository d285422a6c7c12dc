use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use thiserror::Error;

use super::model::{ChannelRecord, ItemRecord};

/// Maximum element nesting accepted while building the document tree.
/// Guards the recursive channel lookup against pathological inputs.
const MAX_XML_DEPTH: usize = 256;

/// Errors that can occur while extracting a channel from an XML document.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The input is not well-formed XML.
    #[error("Malformed XML document: {0}")]
    Malformed(String),

    /// The document has no `<channel>` element.
    #[error("No <channel> element found in document")]
    MissingChannel,

    /// Element nesting exceeds the safety limit.
    #[error("XML nesting depth exceeds maximum of {0} levels")]
    MaxDepthExceeded(usize),
}

fn malformed(msg: impl Into<String>) -> ExtractError {
    ExtractError::Malformed(msg.into())
}

/// Minimal element tree: tag name, character data preceding the first
/// child element, child elements.
/// Attributes are never consulted by the extractor so they are not kept.
#[derive(Debug, Default)]
struct Element {
    name: String,
    text: String,
    children: Vec<Element>,
}

impl Element {
    fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Pre-order search, including `self`.
    fn find_first(&self, name: &str) -> Option<&Element> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find_first(name))
    }

    /// Decoded text of the first child named `name`, `None` when missing or empty.
    fn child_text(&self, name: &str) -> Option<String> {
        self.child(name)
            .filter(|c| !c.text.is_empty())
            .map(|c| c.text.clone())
    }

    fn children_text(&self, name: &str) -> Vec<String> {
        self.children_named(name)
            .filter(|c| !c.text.is_empty())
            .map(|c| c.text.clone())
            .collect()
    }
}

/// Extracts channel metadata and items from an RSS document.
///
/// The channel is the first `<channel>` element in document order, at any
/// depth. Scalar fields take the first matching direct child; `category`
/// and `item` children are collected in document order. Character and
/// predefined entity references are decoded exactly once.
///
/// # Errors
///
/// - [`ExtractError::Malformed`] if the input is not well-formed XML
/// - [`ExtractError::MissingChannel`] if no `<channel>` element exists
/// - [`ExtractError::MaxDepthExceeded`] if elements nest too deeply
///
/// # Security
///
/// `quick-xml` (0.37) does not process `<!ENTITY>` declarations. Only the
/// five XML builtins and numeric character references are resolved; any
/// other entity reference is reported as a malformed document.
pub fn extract(xml: &str) -> Result<ChannelRecord, ExtractError> {
    let root = parse_tree(xml)?;
    let channel = root
        .find_first("channel")
        .ok_or(ExtractError::MissingChannel)?;

    let record = ChannelRecord {
        title: channel.child_text("title"),
        link: channel.child_text("link"),
        last_build_date: channel.child_text("lastBuildDate"),
        pub_date: channel.child_text("pubDate"),
        language: channel.child_text("language"),
        managing_editor: channel.child_text("managingEditor"),
        description: channel.child_text("description"),
        categories: channel.children_text("category"),
        items: channel.children_named("item").map(extract_item).collect(),
    };

    tracing::debug!(
        title = ?record.title,
        categories = record.categories.len(),
        items = record.items.len(),
        "Extracted channel"
    );

    Ok(record)
}

fn extract_item(item: &Element) -> ItemRecord {
    ItemRecord {
        title: item.child_text("title"),
        author: item.child_text("author"),
        pub_date: item.child_text("pubDate"),
        link: item.child_text("link"),
        categories: item.children_text("category"),
        description: item.child_text("description"),
    }
}

/// Decodes the tag name and checks every attribute for well-formedness.
///
/// Attribute values are not kept, but an unquoted or duplicated
/// attribute, a raw `<` in a value, or an unknown entity reference makes
/// the whole document malformed.
fn start_tag_name(e: &BytesStart<'_>, reader: &Reader<&[u8]>) -> Result<String, ExtractError> {
    for attr_result in e.attributes() {
        let attr = attr_result.map_err(|e| malformed(e.to_string()))?;
        if attr.value.contains(&b'<') {
            return Err(malformed("'<' not allowed in attribute value"));
        }
        attr.decode_and_unescape_value(reader.decoder())
            .map_err(|e| malformed(e.to_string()))?;
    }

    reader
        .decoder()
        .decode(e.name().as_ref())
        .map(|name| name.into_owned())
        .map_err(|e| malformed(e.to_string()))
}

/// Appends character data to the open element. Only text before the
/// first child element belongs to the element's own text.
fn push_text(parent: &mut Element, text: &str) {
    if parent.children.is_empty() {
        parent.text.push_str(text);
    }
}

/// Closes `element`: attaches it to its parent, or makes it the root.
fn attach(element: Element, stack: &mut [Element], root: &mut Option<Element>) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None => *root = Some(element),
    }
}

fn parse_tree(xml: &str) -> Result<Element, ExtractError> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;
    let mut first_event = true;

    loop {
        let event = reader.read_event();
        let at_start = std::mem::replace(&mut first_event, false);

        match event {
            Ok(Event::Decl(_)) if !at_start => {
                return Err(malformed("XML declaration allowed only at document start"));
            }
            Ok(Event::Start(e)) => {
                if root.is_some() {
                    return Err(malformed("junk after document element"));
                }
                if stack.len() >= MAX_XML_DEPTH {
                    return Err(ExtractError::MaxDepthExceeded(MAX_XML_DEPTH));
                }
                let name = start_tag_name(&e, &reader)?;
                stack.push(Element {
                    name,
                    ..Default::default()
                });
            }
            Ok(Event::Empty(e)) => {
                if root.is_some() {
                    return Err(malformed("junk after document element"));
                }
                if stack.len() >= MAX_XML_DEPTH {
                    return Err(ExtractError::MaxDepthExceeded(MAX_XML_DEPTH));
                }
                let name = start_tag_name(&e, &reader)?;
                attach(
                    Element {
                        name,
                        ..Default::default()
                    },
                    &mut stack,
                    &mut root,
                );
            }
            Ok(Event::End(_)) => {
                // Reader checks that end names match their start tags
                let element = stack
                    .pop()
                    .ok_or_else(|| malformed("unexpected closing tag"))?;
                attach(element, &mut stack, &mut root);
            }
            Ok(Event::Text(t)) => {
                let text = t.unescape().map_err(|e| malformed(e.to_string()))?;
                match stack.last_mut() {
                    Some(parent) => push_text(parent, &text),
                    None if text.trim().is_empty() => {}
                    None => return Err(malformed("text outside of root element")),
                }
            }
            Ok(Event::CData(c)) => {
                let text = reader
                    .decoder()
                    .decode(&c)
                    .map_err(|e| malformed(e.to_string()))?;
                match stack.last_mut() {
                    Some(parent) => push_text(parent, &text),
                    None => return Err(malformed("CDATA outside of root element")),
                }
            }
            Ok(Event::Eof) => break,
            // Leading declaration, comments, processing instructions, DOCTYPE
            Ok(_) => {}
            Err(e) => return Err(malformed(e.to_string())),
        }
    }

    if let Some(open) = stack.last() {
        return Err(malformed(format!("unclosed element <{}>", open.name)));
    }

    root.ok_or_else(|| malformed("no root element found"))
}
