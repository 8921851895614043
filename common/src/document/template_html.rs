//! Converts the small HTML subset used by starter templates into editor
//! markdown, so a press release seeded from a template opens as editable text.

use std::sync::LazyLock;

use regex::{Captures, Regex};

struct Rule {
    pattern: Regex,
    replacement: &'static str,
}

fn rule(pattern: &str, replacement: &'static str) -> Rule {
    Rule {
        pattern: Regex::new(pattern).expect("static pattern"),
        replacement,
    }
}

const UNDERLINE_OPEN: &str = "\u{E000}";
const UNDERLINE_CLOSE: &str = "\u{E001}";

static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        rule(r"(?s)<!--.*?-->", ""),
        rule(r"(?i)<img\b[^>]*>", ""),
        rule(r"(?is)<a\b[^>]*\bhref\s*=\s*['\x22]([^'\x22]*)['\x22][^>]*>(.*?)</a\s*>", "[$2](<$1>)"),
        rule(r"(?i)</?(?:strong|b)\s*>", "**"),
        rule(r"(?i)</?(?:em|i)\s*>", "*"),
        rule(r"(?i)</?(?:s|strike|del)\s*>", "~~"),
        rule(r"(?i)<u\s*>", UNDERLINE_OPEN),
        rule(r"(?i)</u\s*>", UNDERLINE_CLOSE),
        rule(r"(?i)<br\s*/?>[ \t]*\n?", "\\\n"),
        rule(r"(?i)</h[1-6]\s*>", "\n\n"),
        rule(r"(?i)</?p\b[^>]*>", "\n\n"),
        rule(r"(?i)</?(?:ul|ol)\b[^>]*>", "\n\n"),
        rule(r"(?i)</li\s*>\s*", ""),
        rule(r"(?i)<li\b[^>]*>\s*", "\n- "),
        rule(r"</?[A-Za-z][A-Za-z0-9]*\b[^>]*>", ""),
    ]
});

static HEADING_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<h([1-6])\b[^>]*>").expect("static pattern"));

static BLANK_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").expect("static pattern"));

/// Markdown rendering of template HTML.
///
/// Images and comments are dropped, headings, paragraphs, emphasis, links,
/// line breaks and bullet lists are kept. Bracketed placeholders pass through
/// untouched.
pub fn markdown_from_html(html: &str) -> String {
    let mut text = HEADING_OPEN
        .replace_all(html, |caps: &Captures<'_>| {
            let level = caps[1].parse::<usize>().unwrap_or(1);
            format!("\n\n{} ", "#".repeat(level))
        })
        .into_owned();
    for rule in RULES.iter() {
        text = rule.pattern.replace_all(&text, rule.replacement).into_owned();
    }
    let text = decode_entities(&text)
        .replace(UNDERLINE_OPEN, "<u>")
        .replace(UNDERLINE_CLOSE, "</u>");

    let trimmed = text.lines().map(str::trim).collect::<Vec<_>>().join("\n");
    BLANK_RUNS.replace_all(&trimmed, "\n\n").trim().to_string()
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{from_markdown, kind, mark};

    const SAMPLE: &str = r#"
        <h1>[Company Name] Announces [News Headline]</h1>

        <!-- Optional Hero Image -->
        <img src="[image-url]" alt="[Brief image description]" style="max-width: 100%;" />
        <p style="text-align: center;">[Optional caption]</p>

        <p><strong>[City, Country]</strong> – <em>[Date]</em> – today announced.</p>

        <h2>Highlights</h2>
        <ul>
          <li>Keynote by [Speaker Name]</li>
          <li>Panels &amp; workshops</li>
        </ul>

        <p>For more information, visit <a href="[company website]">[company website]</a>.</p>

        <h2>Media Contact</h2>
        <p>
          <strong>[Full Name]</strong><br />
          [Job Title]<br />
          [Email Address]
        </p>
    "#;

    #[test]
    fn converts_template_subset() {
        let markdown = markdown_from_html(SAMPLE);
        assert_eq!(
            markdown,
            "# [Company Name] Announces [News Headline]\n\n\
             [Optional caption]\n\n\
             **[City, Country]** – *[Date]* – today announced.\n\n\
             ## Highlights\n\n\
             - Keynote by [Speaker Name]\n\
             - Panels & workshops\n\n\
             For more information, visit [[company website]](<[company website]>).\n\n\
             ## Media Contact\n\n\
             **[Full Name]**\\\n\
             [Job Title]\\\n\
             [Email Address]"
        );
    }

    #[test]
    fn converted_template_parses_into_the_expected_tree() {
        let doc = from_markdown(&markdown_from_html(SAMPLE));
        assert_eq!(doc.title(), "[Company Name] Announces [News Headline]");

        let list = doc.content.iter().find(|n| n.is(kind::BULLET_LIST)).unwrap();
        assert_eq!(list.content.len(), 2);

        let link = doc
            .content
            .iter()
            .flat_map(|block| block.content.iter())
            .find(|n| n.has_mark(mark::LINK))
            .unwrap();
        assert_eq!(link.marks[0].href(), Some("[company website]"));
    }

    #[test]
    fn underline_survives_tag_stripping() {
        assert_eq!(
            markdown_from_html("<p><u>keep</u> <span>drop tags</span></p>"),
            "<u>keep</u> drop tags"
        );
    }
}
