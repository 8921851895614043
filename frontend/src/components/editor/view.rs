//! View of the press release editor: a fixed toolbar, the Editor/Preview tab
//! bar with the unsaved-changes dot, and either the growing textarea (plus
//! the floating toolbar while text is selected) or the rendered preview.

use common::document::from_markdown;
use web_sys::HtmlTextAreaElement;
use yew::html::Scope;
use yew::prelude::*;

use super::helpers::{AiAction, Style};
use super::messages::Msg;
use super::state::{PressReleaseEditor, Tab};
use crate::components::preview::DocumentView;

pub fn view(editor: &PressReleaseEditor, ctx: &Context<PressReleaseEditor>) -> Html {
    let link = ctx.link();
    html! {
        <div class="editor-root">
            { build_toolbar(editor, link) }
            { build_tab_bar(editor, link) }
            {
                match editor.active_tab {
                    Tab::Editor => build_editor_tab(editor, link),
                    Tab::Preview => html! {
                        <DocumentView document={from_markdown(&editor.text)} class={classes!("editor-preview")} />
                    },
                }
            }
        </div>
    }
}

fn build_toolbar(editor: &PressReleaseEditor, link: &Scope<PressReleaseEditor>) -> Html {
    let status = if editor.autosave.is_saving() {
        "Saving..."
    } else if editor.is_dirty() {
        "Unsaved changes"
    } else {
        "All changes saved"
    };
    html! {
        <div class="icon-toolbar">
            { icon_button("undo", "Undo", link.callback(|_| Msg::Undo)) }
            { icon_button("redo", "Redo", link.callback(|_| Msg::Redo)) }
            { for Style::TOOLBAR.iter().map(|style| style_button(*style, link)) }
            <span class="save-status">{ status }</span>
        </div>
    }
}

fn style_button(style: Style, link: &Scope<PressReleaseEditor>) -> Html {
    let onclick = link.callback(move |e: MouseEvent| {
        e.prevent_default();
        Msg::ApplyStyle(style)
    });
    match style {
        Style::Heading(_) => html! {
            <button class="icon-btn text" title={style.label()} {onclick}>{ style.label() }</button>
        },
        _ => icon_button(style.icon(), style.label(), onclick),
    }
}

fn build_tab_bar(editor: &PressReleaseEditor, link: &Scope<PressReleaseEditor>) -> Html {
    let tab = |target: Tab, label: &'static str, dot: bool| {
        html! {
            <button
                class={classes!("tab-btn", (editor.active_tab == target).then_some("active"))}
                onclick={link.callback(move |_| Msg::SetTab(target))}
            >
                { label }
                if dot {
                    <span class="dirty-dot" title="Unsaved changes" />
                }
            </button>
        }
    };
    html! {
        <div class="tab-bar">
            { tab(Tab::Editor, "Editor", editor.is_dirty()) }
            { tab(Tab::Preview, "Preview", false) }
        </div>
    }
}

fn build_editor_tab(editor: &PressReleaseEditor, link: &Scope<PressReleaseEditor>) -> Html {
    let select = link.callback(|e: Event| {
        let textarea = e.target_unchecked_into::<HtmlTextAreaElement>();
        selection_msg(&textarea)
    });
    let release = link.callback(|e: MouseEvent| {
        let textarea = e.target_unchecked_into::<HtmlTextAreaElement>();
        selection_msg(&textarea)
    });
    let keyup = link.callback(|e: KeyboardEvent| {
        let textarea = e.target_unchecked_into::<HtmlTextAreaElement>();
        selection_msg(&textarea)
    });
    html! {
        <div class="editor-surface">
            if editor.selection.is_some() {
                { build_floating_toolbar(link) }
            }
            <textarea
                class="editor-textarea"
                ref={editor.textarea_ref.clone()}
                value={editor.text.clone()}
                placeholder="# Title\n\nStart writing your press release..."
                spellcheck="true"
                oninput={link.batch_callback(|e: InputEvent| {
                    let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
                    vec![Msg::UpdateText(value), Msg::AutoResize]
                })}
                onselect={select}
                onmouseup={release}
                onkeyup={keyup}
                onkeydown={link.batch_callback(|e: KeyboardEvent| {
                    if !(e.ctrl_key() || e.meta_key()) {
                        return vec![];
                    }
                    match e.key().as_str() {
                        "z" => {
                            e.prevent_default();
                            vec![Msg::Undo]
                        }
                        "y" => {
                            e.prevent_default();
                            vec![Msg::Redo]
                        }
                        "b" => {
                            e.prevent_default();
                            vec![Msg::ApplyStyle(Style::Bold)]
                        }
                        "i" => {
                            e.prevent_default();
                            vec![Msg::ApplyStyle(Style::Italic)]
                        }
                        _ => vec![],
                    }
                })}
            />
        </div>
    }
}

fn build_floating_toolbar(link: &Scope<PressReleaseEditor>) -> Html {
    html! {
        <div class="floating-toolbar">
            { for Style::TOOLBAR.iter().map(|style| style_button(*style, link)) }
            <span class="separator" />
            { for AiAction::ALL.iter().map(|action| {
                let action = *action;
                html! {
                    <button class="icon-btn text ai" onclick={link.callback(move |_| Msg::Ai(action))}>
                        <i class="material-icons">{ "auto_awesome" }</i>
                        { action.label() }
                    </button>
                }
            }) }
        </div>
    }
}

fn selection_msg(textarea: &HtmlTextAreaElement) -> Msg {
    let start = textarea.selection_start().ok().flatten().unwrap_or(0);
    let end = textarea.selection_end().ok().flatten().unwrap_or(0);
    Msg::Select(start, end)
}

fn icon_button(icon_name: &str, label: &str, on_click: Callback<MouseEvent>) -> Html {
    html! {
        <button class="icon-btn" title={label.to_string()} onclick={on_click}>
            <i class="material-icons">{ icon_name.to_string() }</i>
            <span class="icon-label">{ label.to_string() }</span>
        </button>
    }
}
