//! Pure helpers of the press release editor.
//!
//! - **Index conversion** between the UTF-8 byte offsets Rust slices with and
//!   the UTF-16 offsets reported by `selectionStart`/`selectionEnd`.
//! - **Formatting**: inserting markdown (and `<u>` for underline) at the
//!   current selection, returning the new text and the range to select.
//! - **Dirty tracking** through an MD5 of the last saved text, mirrored to the
//!   `window.app_dirty` flag so the page can warn before leaving.

use js_sys::Reflect;
use wasm_bindgen::JsValue;

/// Text inserted when a style is applied to an empty selection.
const PLACEHOLDER: &str = "text";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Heading(u8),
    Bold,
    Italic,
    Underline,
    Strike,
    Bullets,
}

impl Style {
    pub const TOOLBAR: [Style; 8] = [
        Style::Heading(1),
        Style::Heading(2),
        Style::Heading(3),
        Style::Bold,
        Style::Italic,
        Style::Underline,
        Style::Strike,
        Style::Bullets,
    ];

    pub fn icon(&self) -> &'static str {
        match self {
            Style::Heading(_) => "title",
            Style::Bold => "format_bold",
            Style::Italic => "format_italic",
            Style::Underline => "format_underlined",
            Style::Strike => "strikethrough_s",
            Style::Bullets => "format_list_bulleted",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Style::Heading(1) => "H1",
            Style::Heading(2) => "H2",
            Style::Heading(_) => "H3",
            Style::Bold => "Bold",
            Style::Italic => "Italic",
            Style::Underline => "Underline",
            Style::Strike => "Strikethrough",
            Style::Bullets => "Bulleted list",
        }
    }

    fn wrappers(&self) -> Option<(&'static str, &'static str)> {
        match self {
            Style::Bold => Some(("**", "**")),
            Style::Italic => Some(("*", "*")),
            Style::Underline => Some(("<u>", "</u>")),
            Style::Strike => Some(("~~", "~~")),
            Style::Heading(_) | Style::Bullets => None,
        }
    }
}

/// Assistant entries of the floating toolbar. None is wired to a backend yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiAction {
    Summarize,
    Improve,
    Shorten,
    Explain,
}

impl AiAction {
    pub const ALL: [AiAction; 4] = [AiAction::Summarize, AiAction::Improve, AiAction::Shorten, AiAction::Explain];

    pub fn label(&self) -> &'static str {
        match self {
            AiAction::Summarize => "Summarize",
            AiAction::Improve => "Improve",
            AiAction::Shorten => "Shorten",
            AiAction::Explain => "Explain",
        }
    }
}

/// Result of applying a style: the new text and the byte range to select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Styled {
    pub text: String,
    pub select_start: usize,
    pub select_end: usize,
}

/// Applies `style` to the byte range `start..end` of `text`.
///
/// Inline styles wrap the selection (or a placeholder when it is empty).
/// Headings replace any heading marker of the first selected line, bullets
/// prefix every selected line.
pub fn apply_style(text: &str, start: usize, end: usize, style: Style) -> Styled {
    let (start, end) = clamp_range(text, start, end);
    match style.wrappers() {
        Some((open, close)) => wrap(text, start, end, open, close),
        None => prefix_lines(text, start, end, style),
    }
}

fn clamp_range(text: &str, start: usize, end: usize) -> (usize, usize) {
    let fix = |index: usize| {
        let mut index = index.min(text.len());
        while !text.is_char_boundary(index) {
            index -= 1;
        }
        index
    };
    let (a, b) = (fix(start), fix(end));
    (a.min(b), a.max(b))
}

fn wrap(text: &str, start: usize, end: usize, open: &str, close: &str) -> Styled {
    let inner = if start == end { PLACEHOLDER } else { &text[start..end] };
    let result = format!("{}{open}{inner}{close}{}", &text[..start], &text[end..]);
    let select_start = start + open.len();
    Styled {
        text: result,
        select_start,
        select_end: select_start + inner.len(),
    }
}

fn prefix_lines(text: &str, start: usize, end: usize, style: Style) -> Styled {
    let line_start = text[..start].rfind('\n').map_or(0, |i| i + 1);
    let line_end = text[end..].find('\n').map_or(text.len(), |i| end + i);
    let block = &text[line_start..line_end];

    let replaced: String = match style {
        Style::Heading(level) => {
            let marker = "#".repeat(usize::from(level.clamp(1, 3)));
            let mut lines = block.split('\n');
            let first = lines.next().unwrap_or_default();
            let bare = strip_heading(first);
            let bare = if bare.is_empty() { PLACEHOLDER } else { bare };
            std::iter::once(format!("{marker} {bare}"))
                .chain(lines.map(str::to_string))
                .collect::<Vec<_>>()
                .join("\n")
        }
        _ => block
            .split('\n')
            .map(|line| {
                if line.is_empty() {
                    format!("- {PLACEHOLDER}")
                } else if line.starts_with("- ") {
                    line.to_string()
                } else {
                    format!("- {line}")
                }
            })
            .collect::<Vec<_>>()
            .join("\n"),
    };

    let result = format!("{}{replaced}{}", &text[..line_start], &text[line_end..]);
    Styled {
        text: result,
        select_start: line_start,
        select_end: line_start + replaced.len(),
    }
}

fn strip_heading(line: &str) -> &str {
    let trimmed = line.trim_start_matches('#');
    if trimmed.len() != line.len() {
        trimmed.trim_start()
    } else {
        line
    }
}

/// Linear undo/redo stack of full text snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
    index: usize,
}

impl History {
    pub fn new(initial: &str) -> Self {
        Self {
            entries: vec![initial.to_string()],
            index: 0,
        }
    }

    pub fn current(&self) -> &str {
        &self.entries[self.index]
    }

    /// Records `text`, dropping any redo tail. Returns `false` when unchanged.
    pub fn push(&mut self, text: &str) -> bool {
        if self.current() == text {
            return false;
        }
        self.entries.truncate(self.index + 1);
        self.entries.push(text.to_string());
        self.index = self.entries.len() - 1;
        true
    }

    pub fn undo(&mut self) -> Option<&str> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        Some(self.current())
    }

    pub fn redo(&mut self) -> Option<&str> {
        if self.index + 1 >= self.entries.len() {
            return None;
        }
        self.index += 1;
        Some(self.current())
    }
}

/// Autosave bookkeeping. Every change starts a save right away; only the
/// response to the latest one is applied.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Autosave {
    seq: u64,
    in_flight: bool,
}

impl Autosave {
    pub fn begin(&mut self) -> u64 {
        self.seq += 1;
        self.in_flight = true;
        self.seq
    }

    /// Returns `false` for a response superseded by a later save.
    pub fn finish(&mut self, seq: u64) -> bool {
        if seq != self.seq {
            return false;
        }
        self.in_flight = false;
        true
    }

    pub fn is_saving(&self) -> bool {
        self.in_flight
    }

    pub fn latest(&self) -> u64 {
        self.seq
    }
}

/// Converts a UTF-8 byte index to the UTF-16 index used by textarea APIs.
pub fn byte_to_utf16_idx(s: &str, byte_idx: usize) -> u32 {
    s[..byte_idx.min(s.len())].encode_utf16().count() as u32
}

/// Converts a UTF-16 index reported by the browser to a UTF-8 byte index.
pub fn utf16_to_byte_idx(s: &str, utf16_idx: usize) -> usize {
    let mut units = 0;
    for (byte_idx, ch) in s.char_indices() {
        if units >= utf16_idx {
            return byte_idx;
        }
        units += ch.len_utf16();
    }
    s.len()
}

pub fn compute_md5(input: &str) -> String {
    format!("{:x}", md5::compute(input))
}

/// Whether `text` differs from the text whose hash was last saved.
pub fn is_dirty(original_md5: Option<&str>, text: &str) -> bool {
    original_md5.map_or(!text.is_empty(), |original| original != compute_md5(text))
}

/// Mirrors the unsaved-changes state to `window.app_dirty`.
pub fn set_window_dirty_flag(dirty: bool) {
    if let Some(window) = web_sys::window() {
        let _ = Reflect::set(&window, &JsValue::from_str("app_dirty"), &JsValue::from_bool(dirty));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_wraps_the_selection() {
        let styled = apply_style("make this loud", 10, 14, Style::Bold);
        assert_eq!(styled.text, "make this **loud**");
        assert_eq!(&styled.text[styled.select_start..styled.select_end], "loud");
    }

    #[test]
    fn empty_selection_inserts_a_placeholder() {
        let styled = apply_style("ab", 1, 1, Style::Underline);
        assert_eq!(styled.text, "a<u>text</u>b");
        assert_eq!(&styled.text[styled.select_start..styled.select_end], "text");
    }

    #[test]
    fn heading_replaces_an_existing_marker() {
        let styled = apply_style("intro\n### Launch\nbody", 9, 9, Style::Heading(1));
        assert_eq!(styled.text, "intro\n# Launch\nbody");
    }

    #[test]
    fn bullets_prefix_every_selected_line() {
        let text = "one\ntwo\n- three";
        let styled = apply_style(text, 0, text.len(), Style::Bullets);
        assert_eq!(styled.text, "- one\n- two\n- three");
    }

    #[test]
    fn reversed_and_out_of_range_selections_are_clamped() {
        let styled = apply_style("abc", 99, 1, Style::Strike);
        assert_eq!(styled.text, "a~~bc~~");
    }

    #[test]
    fn new_edit_drops_the_redo_tail() {
        let mut history = History::new("");
        assert!(history.push("a"));
        assert!(history.push("ab"));
        assert!(!history.push("ab"));
        assert_eq!(history.undo(), Some("a"));
        assert!(history.push("ac"));
        assert_eq!(history.redo(), None);
        assert_eq!(history.undo(), Some("a"));
        assert_eq!(history.undo(), Some(""));
        assert_eq!(history.undo(), None);
        assert_eq!(history.redo(), Some("a"));
    }

    #[test]
    fn each_change_saves_and_only_the_latest_response_counts() {
        let mut autosave = Autosave::default();
        let first = autosave.begin();
        let second = autosave.begin();
        assert_ne!(first, second);
        assert!(autosave.is_saving());

        assert!(!autosave.finish(first));
        assert!(autosave.is_saving());
        assert!(autosave.finish(second));
        assert!(!autosave.is_saving());
    }

    #[test]
    fn utf16_offsets_round_trip_across_wide_chars() {
        let text = "a😀b";
        assert_eq!(utf16_to_byte_idx(text, 1), 1);
        assert_eq!(utf16_to_byte_idx(text, 3), 5);
        assert_eq!(byte_to_utf16_idx(text, 5), 3);
        assert_eq!(utf16_to_byte_idx(text, 10), text.len());
    }

    #[test]
    fn dirty_compares_against_the_saved_hash() {
        let saved = compute_md5("hello");
        assert!(!is_dirty(Some(&saved), "hello"));
        assert!(is_dirty(Some(&saved), "hello!"));
        assert!(!is_dirty(None, ""));
    }
}
