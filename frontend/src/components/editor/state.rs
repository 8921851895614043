//! Runtime state of the press release editor: the markdown text with its
//! undo/redo history, the active tab, the current selection (which drives the
//! floating toolbar) and the autosave bookkeeping.

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::helpers::{compute_md5, is_dirty, Autosave, History};
use crate::app::AppContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Editor,
    Preview,
}

pub struct PressReleaseEditor {
    pub context: AppContext,

    pub text: String,

    pub history: History,

    pub active_tab: Tab,
    pub textarea_ref: NodeRef,

    /// Non-empty selection in UTF-16 units, `None` when collapsed.
    pub selection: Option<(u32, u32)>,

    /// MD5 of the text the server last confirmed.
    pub original_md5: Option<String>,

    pub autosave: Autosave,
}

impl PressReleaseEditor {
    pub fn new(context: AppContext, initial: &str) -> Self {
        Self {
            context,
            text: initial.to_string(),
            history: History::new(initial),
            active_tab: Tab::Editor,
            textarea_ref: NodeRef::default(),
            selection: None,
            original_md5: Some(compute_md5(initial)),
            autosave: Autosave::default(),
        }
    }

    pub fn is_dirty(&self) -> bool {
        is_dirty(self.original_md5.as_deref(), &self.text)
    }

    /// Replaces the text with an edit, recording it for undo.
    pub fn edit(&mut self, text: String) -> bool {
        if !self.history.push(&text) {
            return false;
        }
        self.text = text;
        true
    }

    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(text) => {
                self.text = text.to_string();
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(text) => {
                self.text = text.to_string();
                true
            }
            None => false,
        }
    }

    /// Grows the textarea to its content so it never shows an inner scrollbar.
    pub fn resize_textarea(&self) {
        if let Some(textarea) = self.textarea_ref.cast::<HtmlTextAreaElement>() {
            if let Ok(element) = textarea.clone().dyn_into::<HtmlElement>() {
                let style = element.style();
                let _ = style.set_property("height", "auto");
                let _ = style.set_property("height", &format!("{}px", textarea.scroll_height()));
            }
        }
    }
}
