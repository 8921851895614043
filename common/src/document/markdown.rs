//! Markdown bridge used by the editor textarea.
//!
//! The editor lets authors type markdown (with `<u>` for underline) and keeps
//! the ProseMirror tree in sync on every keystroke. Loading goes the other
//! way, from the stored tree to editable text.

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd};
use serde_json::Value;

use super::{Mark, Node, kind, mark};

/// Parses editor markdown into a document tree.
pub fn from_markdown(input: &str) -> Node {
    let mut builder = TreeBuilder::new();
    let parser = Parser::new_ext(input, Options::ENABLE_STRIKETHROUGH);
    for event in parser {
        builder.push(event);
    }
    builder.finish()
}

struct TreeBuilder {
    stack: Vec<Node>,
    marks: Vec<Mark>,
    image_depth: usize,
}

impl TreeBuilder {
    fn new() -> Self {
        Self {
            stack: vec![Node::doc(Vec::new())],
            marks: Vec::new(),
            image_depth: 0,
        }
    }

    fn top(&self) -> Option<&Node> {
        self.stack.last()
    }

    fn open(&mut self, node: Node) {
        self.close_implicit_paragraph();
        self.stack.push(node);
    }

    fn close(&mut self) {
        if self.stack.len() > 1 {
            if let Some(node) = self.stack.pop() {
                self.append(node);
            }
        }
    }

    fn append(&mut self, node: Node) {
        if let Some(parent) = self.stack.last_mut() {
            parent.content.push(node);
        }
    }

    /// Tight list items and bare text inside a quote carry no paragraph
    /// event; the tree still needs one.
    fn ensure_textblock(&mut self) {
        let needs_paragraph = self
            .top()
            .is_some_and(|node| !node.is(kind::PARAGRAPH) && !node.is(kind::HEADING));
        if needs_paragraph {
            self.stack.push(Node::paragraph(Vec::new()));
        }
    }

    fn close_implicit_paragraph(&mut self) {
        if self.top().is_some_and(|node| node.is(kind::PARAGRAPH)) {
            self.close();
        }
    }

    fn push_text(&mut self, text: &str) {
        if text.is_empty() || self.image_depth > 0 {
            return;
        }
        if let Some(block) = self.stack.last_mut().filter(|node| node.is(kind::CODE_BLOCK)) {
            match block.content.first_mut() {
                Some(existing) => existing.text.get_or_insert_with(String::new).push_str(text),
                None => block.content.push(Node::text(text)),
            }
            return;
        }
        self.ensure_textblock();
        let marks = self.marks.clone();
        if let Some(parent) = self.stack.last_mut() {
            if let Some(last) = parent
                .content
                .last_mut()
                .filter(|last| last.is(kind::TEXT) && last.marks == marks)
            {
                last.text.get_or_insert_with(String::new).push_str(text);
                return;
            }
            parent.content.push(Node::marked_text(text, marks));
        }
    }

    fn push_inline(&mut self, node: Node) {
        self.ensure_textblock();
        self.append(node);
    }

    fn remove_mark(&mut self, kind: &str) {
        if let Some(position) = self.marks.iter().rposition(|mark| mark.kind == kind) {
            self.marks.remove(position);
        }
    }

    fn inline_html(&mut self, html: &str) {
        let tag = html.trim().to_ascii_lowercase();
        match tag.as_str() {
            "<u>" => self.marks.push(Mark::new(mark::UNDERLINE)),
            "</u>" => self.remove_mark(mark::UNDERLINE),
            "<br>" | "<br/>" | "<br />" => self.push_inline(Node::new(kind::HARD_BREAK, Vec::new())),
            _ => log::debug!("ignoring inline html {html}"),
        }
    }

    fn push(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) => self.push_text(&text),
            Event::Code(code) => {
                if self.image_depth > 0 {
                    return;
                }
                let mut marks = self.marks.clone();
                marks.push(Mark::new(mark::CODE));
                self.push_inline(Node::marked_text(code.to_string(), marks));
            }
            Event::InlineHtml(html) => self.inline_html(&html),
            Event::SoftBreak => self.push_text(" "),
            Event::HardBreak => self.push_inline(Node::new(kind::HARD_BREAK, Vec::new())),
            _ => {}
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => self.open(Node::paragraph(Vec::new())),
            Tag::Heading { level, .. } => self.open(Node::heading(level as u8, Vec::new())),
            Tag::BlockQuote(_) => self.open(Node::new(kind::BLOCKQUOTE, Vec::new())),
            Tag::CodeBlock(code) => {
                let mut node = Node::new(kind::CODE_BLOCK, Vec::new());
                if let CodeBlockKind::Fenced(language) = code {
                    if !language.is_empty() {
                        node.set_attr("language", Value::String(language.to_string()));
                    }
                }
                self.open(node);
            }
            Tag::List(Some(start)) => {
                let mut node = Node::new(kind::ORDERED_LIST, Vec::new());
                node.set_attr("start", Value::from(start));
                self.open(node);
            }
            Tag::List(None) => self.open(Node::new(kind::BULLET_LIST, Vec::new())),
            Tag::Item => self.open(Node::new(kind::LIST_ITEM, Vec::new())),
            Tag::Emphasis => self.marks.push(Mark::new(mark::ITALIC)),
            Tag::Strong => self.marks.push(Mark::new(mark::BOLD)),
            Tag::Strikethrough => self.marks.push(Mark::new(mark::STRIKE)),
            Tag::Link { dest_url, .. } => self.marks.push(Mark::link(&dest_url)),
            Tag::Image { .. } => self.image_depth += 1,
            _ => {}
        }
    }

    fn end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph | TagEnd::Heading(_) => self.close(),
            TagEnd::CodeBlock => {
                if let Some(text) = self
                    .stack
                    .last_mut()
                    .and_then(|block| block.content.first_mut())
                    .and_then(|node| node.text.as_mut())
                {
                    if text.ends_with('\n') {
                        text.pop();
                    }
                }
                self.close();
            }
            TagEnd::BlockQuote(_) | TagEnd::List(_) | TagEnd::Item => {
                self.close_implicit_paragraph();
                self.close();
            }
            TagEnd::Emphasis => self.remove_mark(mark::ITALIC),
            TagEnd::Strong => self.remove_mark(mark::BOLD),
            TagEnd::Strikethrough => self.remove_mark(mark::STRIKE),
            TagEnd::Link => self.remove_mark(mark::LINK),
            TagEnd::Image => self.image_depth = self.image_depth.saturating_sub(1),
            _ => {}
        }
    }

    fn finish(mut self) -> Node {
        while self.stack.len() > 1 {
            self.close();
        }
        self.stack.pop().unwrap_or_else(|| Node::doc(Vec::new()))
    }
}

/// Renders a document tree as editor markdown.
pub fn to_markdown(document: &Node) -> String {
    blocks(&document.content).join("\n\n")
}

fn blocks(nodes: &[Node]) -> Vec<String> {
    nodes.iter().map(block).collect()
}

fn block(node: &Node) -> String {
    match node.kind.as_str() {
        kind::HEADING => {
            let level = node.level().unwrap_or(1).clamp(1, 6) as usize;
            format!("{} {}", "#".repeat(level), text_block(&node.content))
        }
        kind::BULLET_LIST => list(node, |_| "- ".to_string()),
        kind::ORDERED_LIST => {
            let start = node.attr("start").and_then(Value::as_u64).unwrap_or(1);
            list(node, |index| format!("{}. ", start + index as u64))
        }
        kind::BLOCKQUOTE => blocks(&node.content)
            .join("\n\n")
            .lines()
            .map(|line| if line.is_empty() { ">".to_string() } else { format!("> {line}") })
            .collect::<Vec<_>>()
            .join("\n"),
        kind::CODE_BLOCK => {
            let language = node.attr("language").and_then(Value::as_str).unwrap_or_default();
            format!("```{language}\n{}\n```", node.text_content())
        }
        kind::PARAGRAPH => text_block(&node.content),
        _ if node.content.iter().all(|child| child.is(kind::TEXT) || child.is(kind::HARD_BREAK)) => {
            text_block(&node.content)
        }
        _ => blocks(&node.content).join("\n\n"),
    }
}

fn list(node: &Node, marker: impl Fn(usize) -> String) -> String {
    node.content
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let marker = marker(index);
            let indent = " ".repeat(marker.len());
            let body = blocks(&item.content).join("\n");
            let mut lines = body.lines();
            let mut out = format!("{marker}{}", lines.next().unwrap_or_default());
            for line in lines {
                out.push('\n');
                if !line.is_empty() {
                    out.push_str(&indent);
                    out.push_str(line);
                }
            }
            out
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Inline markdown of a textblock, with every line guarded against being
/// read back as a block marker.
fn text_block(nodes: &[Node]) -> String {
    inline(nodes)
        .split('\n')
        .map(escape_line_start)
        .collect::<Vec<_>>()
        .join("\n")
}

fn escape_line_start(line: &str) -> String {
    let body = line.trim_start_matches(' ');
    let indent = &line[..line.len() - body.len()];
    if body.starts_with(['#', '>', '-', '+', '=']) {
        return format!("{indent}\\{body}");
    }
    let digits = body.len() - body.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits > 0 && body[digits..].starts_with(['.', ')']) {
        return format!("{indent}{}\\{}", &body[..digits], &body[digits..]);
    }
    line.to_string()
}

fn inline(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        if node.is(kind::HARD_BREAK) {
            out.push_str("\\\n");
            continue;
        }
        let Some(text) = node.text.as_deref() else {
            out.push_str(&inline(&node.content));
            continue;
        };
        if node.has_mark(mark::CODE) {
            out.push('`');
            out.push_str(text);
            out.push('`');
            continue;
        }
        // Emphasis delimiters only work when they hug non-space text.
        let core = text.trim();
        if core.is_empty() || node.marks.is_empty() {
            out.push_str(&escape(text));
            continue;
        }
        let leading = &text[..text.len() - text.trim_start().len()];
        let trailing = &text[text.trim_end().len()..];
        out.push_str(leading);
        let mut wrapped = escape(core);
        for mark in node.marks.iter().rev() {
            wrapped = match mark.kind.as_str() {
                mark::BOLD => format!("**{wrapped}**"),
                mark::ITALIC => format!("*{wrapped}*"),
                mark::STRIKE => format!("~~{wrapped}~~"),
                mark::UNDERLINE => format!("<u>{wrapped}</u>"),
                mark::LINK => format!("[{wrapped}](<{}>)", mark.href().unwrap_or_default()),
                _ => wrapped,
            };
        }
        out.push_str(&wrapped);
        out.push_str(trailing);
    }
    out
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '*' | '_' | '`' | '~' | '<' | '[' | '&') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_headings_marks_and_tight_lists() {
        let doc = from_markdown(
            "# Acme *launches*\n\nSome **bold**, ~~old~~ and <u>under</u> text.\n\n- one\n- two",
        );
        assert_eq!(doc.title(), "Acme launches");

        let paragraph = &doc.content[1];
        assert!(paragraph.is(kind::PARAGRAPH));
        let bold = paragraph.content.iter().find(|n| n.has_mark(mark::BOLD)).unwrap();
        assert_eq!(bold.text.as_deref(), Some("bold"));
        assert!(paragraph.content.iter().any(|n| n.has_mark(mark::STRIKE)));
        let under = paragraph.content.iter().find(|n| n.has_mark(mark::UNDERLINE)).unwrap();
        assert_eq!(under.text.as_deref(), Some("under"));

        let list = &doc.content[2];
        assert!(list.is(kind::BULLET_LIST));
        assert_eq!(list.content.len(), 2);
        assert!(list.content[0].content[0].is(kind::PARAGRAPH));
        assert_eq!(list.content[1].text_content(), "two");
    }

    #[test]
    fn bracket_placeholders_stay_plain_text() {
        let doc = from_markdown("**[City, Country]** – [Company Name] today announced");
        let paragraph = &doc.content[0];
        assert_eq!(paragraph.text_content(), "[City, Country] – [Company Name] today announced");
        assert!(paragraph.content.iter().all(|n| !n.has_mark(mark::LINK)));
    }

    #[test]
    fn angle_bracket_links_keep_placeholder_targets() {
        let doc = from_markdown("Visit [[company website]](<[company website]>).");
        let link = doc.content[0]
            .content
            .iter()
            .find(|n| n.has_mark(mark::LINK))
            .unwrap();
        assert_eq!(link.text.as_deref(), Some("[company website]"));
        assert_eq!(link.marks[0].href(), Some("[company website]"));
    }

    #[test]
    fn hard_breaks_become_nodes() {
        let doc = from_markdown("**[Full Name]**\\\n[Job Title]");
        let kinds: Vec<_> = doc.content[0].content.iter().map(|n| n.kind.as_str()).collect();
        assert_eq!(kinds, ["text", "hardBreak", "text"]);
    }

    #[test]
    fn markdown_survives_a_load_save_cycle() {
        let source = "# Title\n\nPlain **bold** *it* ~~gone~~ <u>under</u> `code`\n\n- one\n- two\n\n> quoted\n\n```rust\nlet x = 1;\n```";
        let doc = from_markdown(source);
        assert_eq!(to_markdown(&doc), source);
        assert_eq!(from_markdown(&to_markdown(&doc)), doc);
    }

    #[test]
    fn marks_do_not_swallow_surrounding_spaces() {
        let doc = Node::doc(vec![Node::paragraph(vec![
            Node::marked_text("Acme ", vec![Mark::new(mark::BOLD)]),
            Node::text("launches 2*3"),
        ])]);
        assert_eq!(to_markdown(&doc), "**Acme** launches 2\\*3");
    }

    #[test]
    fn plain_text_that_looks_like_markdown_stays_plain() {
        let samples = [
            "# 1 in Africa",
            "1. Kenya leads",
            "2) Nigeria follows",
            "> 50 journalists",
            "- not a bullet",
            "+ not a bullet either",
            "Contact <Jane Doe> today",
            "See [site](x) now",
            "Q&amp;A with ![logo](y)",
        ];
        for sample in samples {
            let doc = Node::doc(vec![Node::paragraph(vec![Node::text(sample)])]);
            let reloaded = from_markdown(&to_markdown(&doc));
            assert_eq!(reloaded, doc, "{sample} changed on reload");
            assert_eq!(reloaded.title(), "");
        }
    }

    #[test]
    fn line_markers_after_a_hard_break_stay_plain() {
        let doc = Node::doc(vec![Node::paragraph(vec![
            Node::text("Highlights:"),
            Node::new(kind::HARD_BREAK, Vec::new()),
            Node::text("3. Ghana"),
        ])]);
        assert_eq!(from_markdown(&to_markdown(&doc)), doc);
    }

    #[test]
    fn heading_text_keeps_its_leading_hash() {
        let doc = Node::doc(vec![Node::heading(1, vec![Node::text("#1 in Africa")])]);
        let reloaded = from_markdown(&to_markdown(&doc));
        assert_eq!(reloaded, doc);
        assert_eq!(reloaded.title(), "#1 in Africa");
    }
}
