//! Rich-text document tree shared with the server's `json_content` column.
//!
//! The JSON shape is the ProseMirror one: every node has a `type`, optional
//! `attrs`, child `content`, and text nodes carry `text` plus `marks`. Node
//! and mark types are kept as strings so content written by other editors
//! survives a load/save cycle even when this crate does not render it.

mod html;
mod markdown;
mod template_html;

pub use markdown::{from_markdown, to_markdown};
pub use html::escape_html;
pub use template_html::markdown_from_html;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Node type names understood by the renderers.
pub mod kind {
    pub const DOC: &str = "doc";
    pub const PARAGRAPH: &str = "paragraph";
    pub const HEADING: &str = "heading";
    pub const TEXT: &str = "text";
    pub const BULLET_LIST: &str = "bulletList";
    pub const ORDERED_LIST: &str = "orderedList";
    pub const LIST_ITEM: &str = "listItem";
    pub const BLOCKQUOTE: &str = "blockquote";
    pub const CODE_BLOCK: &str = "codeBlock";
    pub const HARD_BREAK: &str = "hardBreak";
}

/// Mark type names understood by the renderers.
pub mod mark {
    pub const BOLD: &str = "bold";
    pub const ITALIC: &str = "italic";
    pub const UNDERLINE: &str = "underline";
    pub const STRIKE: &str = "strike";
    pub const CODE: &str = "code";
    pub const LINK: &str = "link";
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Mark {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attrs: Option<Map<String, Value>>,
}

impl Mark {
    pub fn new(kind: &str) -> Self {
        Self {
            kind: kind.to_string(),
            attrs: None,
        }
    }

    pub fn link(href: &str) -> Self {
        let mut attrs = Map::new();
        attrs.insert("href".into(), Value::String(href.to_string()));
        Self {
            kind: mark::LINK.to_string(),
            attrs: Some(attrs),
        }
    }

    pub fn href(&self) -> Option<&str> {
        self.attrs.as_ref()?.get("href")?.as_str()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Node {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attrs: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<Node>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub marks: Vec<Mark>,
}

impl Node {
    pub fn new(kind: &str, content: Vec<Node>) -> Self {
        Self {
            kind: kind.to_string(),
            content,
            ..Default::default()
        }
    }

    pub fn doc(content: Vec<Node>) -> Self {
        Self::new(kind::DOC, content)
    }

    pub fn paragraph(content: Vec<Node>) -> Self {
        Self::new(kind::PARAGRAPH, content)
    }

    pub fn heading(level: u8, content: Vec<Node>) -> Self {
        let mut node = Self::new(kind::HEADING, content);
        node.set_attr("level", Value::from(level));
        node
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self {
            kind: kind::TEXT.to_string(),
            text: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn marked_text(text: impl Into<String>, marks: Vec<Mark>) -> Self {
        Self {
            marks,
            ..Self::text(text)
        }
    }

    pub fn is(&self, kind: &str) -> bool {
        self.kind == kind
    }

    pub fn attr(&self, name: &str) -> Option<&Value> {
        self.attrs.as_ref()?.get(name)
    }

    pub fn set_attr(&mut self, name: &str, value: Value) {
        self.attrs
            .get_or_insert_with(Map::new)
            .insert(name.to_string(), value);
    }

    /// Heading level, if this node is a heading.
    pub fn level(&self) -> Option<u8> {
        if !self.is(kind::HEADING) {
            return None;
        }
        self.attr("level")?.as_u64().and_then(|level| u8::try_from(level).ok())
    }

    pub fn has_mark(&self, kind: &str) -> bool {
        self.marks.iter().any(|mark| mark.kind == kind)
    }

    /// Concatenated text of all descendants, without separators.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        if let Some(text) = &self.text {
            out.push_str(text);
        }
        for child in &self.content {
            child.collect_text(out);
        }
    }

    /// Text of the first top-level level-1 heading, or an empty string.
    pub fn title(&self) -> String {
        self.content
            .iter()
            .find(|node| node.level() == Some(1))
            .map(Node::text_content)
            .unwrap_or_default()
    }

    /// All text in the tree with sibling nodes separated by one space.
    ///
    /// Block boundaries carry no whitespace in the tree, so joining with a
    /// space keeps words from adjacent paragraphs apart.
    pub fn plain_text(&self) -> String {
        self.content
            .iter()
            .map(|child| match &child.text {
                Some(text) if child.is(kind::TEXT) => text.clone(),
                _ => child.plain_text(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty() && self.text.as_deref().is_none_or(str::is_empty)
    }

    /// HTML rendering of the tree.
    pub fn to_html(&self) -> String {
        html::render(self)
    }
}

/// Keeps the first `limit` whitespace-separated words, appending `...` when
/// anything was cut.
pub fn truncate_words(text: &str, limit: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= limit {
        return words.join(" ");
    }
    let mut truncated = words[..limit].join(" ");
    truncated.push_str("...");
    truncated
}

/// Single-paragraph, plain-text preview of `document` cut to `limit` words.
/// A document without content is returned unchanged.
pub fn preview(document: &Node, limit: usize) -> Node {
    if document.content.is_empty() {
        return document.clone();
    }
    let text = truncate_words(&document.plain_text(), limit);
    let paragraph = if text.is_empty() {
        Node::paragraph(Vec::new())
    } else {
        Node::paragraph(vec![Node::text(text)])
    };
    Node::doc(vec![paragraph])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        Node::doc(vec![
            Node::paragraph(vec![Node::text("Intro")]),
            Node::heading(
                1,
                vec![
                    Node::text("Acme "),
                    Node::marked_text("launches", vec![Mark::new(mark::BOLD)]),
                ],
            ),
            Node::heading(1, vec![Node::text("Second")]),
            Node::paragraph(vec![Node::text("Body text here")]),
        ])
    }

    #[test]
    fn title_is_first_top_level_h1() {
        assert_eq!(sample().title(), "Acme launches");
    }

    #[test]
    fn title_ignores_nested_and_lower_headings() {
        let doc = Node::doc(vec![
            Node::heading(2, vec![Node::text("Sub")]),
            Node::new(kind::BLOCKQUOTE, vec![Node::heading(1, vec![Node::text("Quoted")])]),
        ]);
        assert_eq!(doc.title(), "");
    }

    #[test]
    fn plain_text_joins_siblings_with_spaces() {
        assert_eq!(
            sample().plain_text(),
            "Intro Acme  launches Second Body text here"
        );
    }

    #[test]
    fn preview_truncates_and_flattens() {
        let preview = preview(&sample(), 3);
        assert_eq!(preview.content.len(), 1);
        assert!(preview.content[0].is(kind::PARAGRAPH));
        assert_eq!(preview.text_content(), "Intro Acme launches...");
    }

    #[test]
    fn preview_within_limit_has_no_ellipsis() {
        let doc = Node::doc(vec![Node::paragraph(vec![Node::text("short one")])]);
        assert_eq!(preview(&doc, 10).text_content(), "short one");
    }

    #[test]
    fn preview_of_empty_document_is_unchanged() {
        let doc = Node::doc(Vec::new());
        assert_eq!(preview(&doc, 5), doc);
    }

    #[test]
    fn decodes_editor_json_and_keeps_unknown_attrs() {
        let json = r#"{
            "type": "doc",
            "content": [
                {"type": "heading", "attrs": {"level": 1, "textAlign": "left"},
                 "content": [{"type": "text", "text": "Title"}]},
                {"type": "image", "attrs": {"src": "x.png"}}
            ]
        }"#;
        let doc: Node = serde_json::from_str(json).unwrap();
        assert_eq!(doc.title(), "Title");
        let back = serde_json::to_value(&doc).unwrap();
        assert_eq!(back["content"][0]["attrs"]["textAlign"], "left");
        assert_eq!(back["content"][1]["type"], "image");
        assert!(back["content"][1].get("content").is_none());
    }

    #[test]
    fn truncate_counts_words_not_characters() {
        assert_eq!(truncate_words("  one   two three ", 2), "one two...");
        assert_eq!(truncate_words("one two", 2), "one two");
        assert_eq!(truncate_words("", 2), "");
    }
}
