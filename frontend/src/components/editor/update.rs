//! Update function of the press release editor.
//!
//! Every change to the text (typing, a toolbar style, undo or redo) records
//! history, refreshes the dirty flag and starts an autosave. The autosave
//! derives the tree, HTML and title from the markdown and PATCHes all three;
//! responses of superseded saves are ignored by sequence number.

use common::document::from_markdown;
use common::model::press_release::ContentUpdate;
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use super::helpers::{apply_style, byte_to_utf16_idx, compute_md5, set_window_dirty_flag, utf16_to_byte_idx};
use super::messages::Msg;
use super::state::{PressReleaseEditor, Tab};
use crate::components::toast::{show_toast, toast_api_error, ToastKind};
use crate::http::api;

pub fn update(editor: &mut PressReleaseEditor, ctx: &Context<PressReleaseEditor>, msg: Msg) -> bool {
    match msg {
        Msg::UpdateText(text) => {
            if editor.edit(text) {
                changed(editor, ctx);
            }
            true
        }
        Msg::Undo => {
            if editor.undo() {
                changed(editor, ctx);
            }
            true
        }
        Msg::Redo => {
            if editor.redo() {
                changed(editor, ctx);
            }
            true
        }
        Msg::SetTab(tab) => {
            editor.active_tab = tab;
            editor.selection = None;
            if tab == Tab::Editor {
                let link = ctx.link().clone();
                wasm_bindgen_futures::spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(200).await;
                    link.send_message(Msg::AutoResize);
                });
            }
            true
        }
        Msg::ApplyStyle(style) => {
            let Some(textarea) = editor.textarea_ref.cast::<HtmlTextAreaElement>() else {
                return false;
            };
            let start_utf16 = textarea.selection_start().ok().flatten().unwrap_or(0) as usize;
            let end_utf16 = textarea.selection_end().ok().flatten().unwrap_or(0) as usize;
            let start = utf16_to_byte_idx(&editor.text, start_utf16);
            let end = utf16_to_byte_idx(&editor.text, end_utf16);

            let styled = apply_style(&editor.text, start, end, style);
            let select_start = byte_to_utf16_idx(&styled.text, styled.select_start);
            let select_end = byte_to_utf16_idx(&styled.text, styled.select_end);
            textarea.set_value(&styled.text);
            if editor.edit(styled.text) {
                changed(editor, ctx);
            }

            let textarea_ref = editor.textarea_ref.clone();
            wasm_bindgen_futures::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(10).await;
                if let Some(textarea) = textarea_ref.cast::<HtmlTextAreaElement>() {
                    textarea.set_selection_range(select_start, select_end).ok();
                    textarea.focus().ok();
                }
            });
            ctx.link().send_message(Msg::AutoResize);
            true
        }
        Msg::AutoResize => {
            editor.resize_textarea();
            false
        }
        Msg::Select(start, end) => {
            let selection = (start != end).then_some((start.min(end), start.max(end)));
            if editor.selection == selection {
                return false;
            }
            editor.selection = selection;
            true
        }
        Msg::Ai(action) => {
            show_toast(&format!("{} with AI is unavailable for now", action.label()), ToastKind::Info);
            false
        }
        Msg::Save => {
            let seq = editor.autosave.begin();
            let md5 = compute_md5(&editor.text);
            let body = ContentUpdate::from_document(from_markdown(&editor.text));
            let client = editor.context.client.clone();
            let id = ctx.props().release_id.to_string();
            ctx.link().send_future(async move {
                let result = api::update_press_release(&client, &id, &body).await;
                Msg::Saved { seq, md5, result }
            });
            true
        }
        Msg::Saved { seq, md5, result } => {
            if !editor.autosave.finish(seq) {
                log::debug!("dropping autosave #{seq}, #{} is newer", editor.autosave.latest());
                return false;
            }
            match result {
                Ok(release) => {
                    editor.original_md5 = Some(md5);
                    set_window_dirty_flag(editor.is_dirty());
                    ctx.props().on_saved.emit(release);
                }
                Err(error) => toast_api_error("Failed to save the press release", &error),
            }
            true
        }
    }
}

fn changed(editor: &mut PressReleaseEditor, ctx: &Context<PressReleaseEditor>) {
    set_window_dirty_flag(editor.is_dirty());
    ctx.link().send_message(Msg::Save);
}
