use super::{Mark, Node, kind, mark};

pub(super) fn render(node: &Node) -> String {
    let mut out = String::new();
    write_node(node, &mut out);
    out
}

/// Escapes the characters that would otherwise be read as markup.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn write_children(node: &Node, out: &mut String) {
    for child in &node.content {
        write_node(child, out);
    }
}

fn wrap(tag: &str, node: &Node, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    out.push('>');
    write_children(node, out);
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn write_node(node: &Node, out: &mut String) {
    match node.kind.as_str() {
        kind::DOC => write_children(node, out),
        kind::PARAGRAPH => wrap("p", node, out),
        kind::HEADING => {
            let tag = format!("h{}", node.level().unwrap_or(1).clamp(1, 6));
            wrap(&tag, node, out);
        }
        kind::BULLET_LIST => wrap("ul", node, out),
        kind::ORDERED_LIST => match node.attr("start").and_then(|v| v.as_u64()) {
            Some(start) if start != 1 => {
                out.push_str(&format!("<ol start=\"{start}\">"));
                write_children(node, out);
                out.push_str("</ol>");
            }
            _ => wrap("ol", node, out),
        },
        kind::LIST_ITEM => wrap("li", node, out),
        kind::BLOCKQUOTE => wrap("blockquote", node, out),
        kind::CODE_BLOCK => {
            match node.attr("language").and_then(|v| v.as_str()) {
                Some(language) if !language.is_empty() => {
                    out.push_str(&format!(
                        "<pre><code class=\"language-{}\">",
                        escape_html(language)
                    ));
                }
                _ => out.push_str("<pre><code>"),
            }
            out.push_str(&escape_html(&node.text_content()));
            out.push_str("</code></pre>");
        }
        kind::HARD_BREAK => out.push_str("<br>"),
        kind::TEXT => write_text(node, out),
        _ => write_children(node, out),
    }
}

fn write_text(node: &Node, out: &mut String) {
    let text = node.text.as_deref().unwrap_or_default();
    for mark in &node.marks {
        open_mark(mark, out);
    }
    out.push_str(&escape_html(text));
    for mark in node.marks.iter().rev() {
        close_mark(mark, out);
    }
}

fn mark_tag(kind: &str) -> Option<&'static str> {
    match kind {
        mark::BOLD => Some("strong"),
        mark::ITALIC => Some("em"),
        mark::UNDERLINE => Some("u"),
        mark::STRIKE => Some("s"),
        mark::CODE => Some("code"),
        mark::LINK => Some("a"),
        _ => None,
    }
}

fn open_mark(mark: &Mark, out: &mut String) {
    match (mark_tag(&mark.kind), mark.href()) {
        (Some("a"), Some(href)) => {
            out.push_str(&format!(
                "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer nofollow\">",
                escape_html(href)
            ));
        }
        (Some(tag), _) => {
            out.push('<');
            out.push_str(tag);
            out.push('>');
        }
        (None, _) => {}
    }
}

fn close_mark(mark: &Mark, out: &mut String) {
    if let Some(tag) = mark_tag(&mark.kind) {
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_blocks_and_nested_marks() {
        let doc = Node::doc(vec![
            Node::heading(1, vec![Node::text("Acme & Co")]),
            Node::paragraph(vec![
                Node::marked_text("big", vec![Mark::new(mark::BOLD), Mark::new(mark::ITALIC)]),
                Node::new(kind::HARD_BREAK, Vec::new()),
                Node::marked_text("site", vec![Mark::link("https://acme.co/?a=1&b=2")]),
            ]),
            Node::new(
                kind::BULLET_LIST,
                vec![Node::new(
                    kind::LIST_ITEM,
                    vec![Node::paragraph(vec![Node::text("<one>")])],
                )],
            ),
        ]);
        assert_eq!(
            doc.to_html(),
            "<h1>Acme &amp; Co</h1>\
             <p><strong><em>big</em></strong><br>\
             <a href=\"https://acme.co/?a=1&amp;b=2\" target=\"_blank\" rel=\"noopener noreferrer nofollow\">site</a></p>\
             <ul><li><p>&lt;one&gt;</p></li></ul>"
        );
    }

    #[test]
    fn unknown_nodes_render_their_children() {
        let doc = Node::doc(vec![Node::new(
            "callout",
            vec![Node::paragraph(vec![Node::text("kept")])],
        )]);
        assert_eq!(doc.to_html(), "<p>kept</p>");
    }

    #[test]
    fn code_block_escapes_and_tags_language() {
        let mut block = Node::new(kind::CODE_BLOCK, vec![Node::text("a < b")]);
        block.set_attr("language", "rust".into());
        assert_eq!(
            Node::doc(vec![block]).to_html(),
            "<pre><code class=\"language-rust\">a &lt; b</code></pre>"
        );
    }
}
