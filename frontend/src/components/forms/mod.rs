//! Create/edit forms and the small dialogs that capture action input.
//!
//! The field helpers below render a labelled control and hand back plain
//! strings, so each form's update logic only deals with its own state.

pub mod client;
pub mod journalist;
pub mod link;
pub mod process_withdrawal;
pub mod reject_link;
pub mod withdrawal;

use std::sync::LazyLock;

use regex::Regex;
use web_sys::{File, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

pub fn is_valid_email(value: &str) -> bool {
    EMAIL.is_match(value.trim())
}

pub fn input_field(label: &str, kind: &'static str, value: &str, required: bool, on_input: Callback<String>) -> Html {
    let oninput = on_input.reform(|e: InputEvent| e.target_unchecked_into::<HtmlInputElement>().value());
    html! {
        <label class="field">
            <span class="field-label">{ label }{ if required { " *" } else { "" } }</span>
            <input type={kind} value={value.to_string()} {required} {oninput} />
        </label>
    }
}

pub fn text_field(label: &str, value: &str, required: bool, on_input: Callback<String>) -> Html {
    input_field(label, "text", value, required, on_input)
}

pub fn area_field(label: &str, value: &str, rows: u32, on_input: Callback<String>) -> Html {
    let oninput = on_input.reform(|e: InputEvent| e.target_unchecked_into::<HtmlTextAreaElement>().value());
    html! {
        <label class="field">
            <span class="field-label">{ label }</span>
            <textarea rows={rows.to_string()} value={value.to_string()} {oninput} />
        </label>
    }
}

/// `<select>` over `(value, label)` pairs with an optional empty choice.
pub fn select_field(
    label: &str,
    value: &str,
    placeholder: Option<&str>,
    options: &[(String, String)],
    on_change: Callback<String>,
) -> Html {
    let onchange = on_change.reform(|e: Event| e.target_unchecked_into::<HtmlSelectElement>().value());
    html! {
        <label class="field">
            <span class="field-label">{ label }</span>
            <select {onchange}>
                { for placeholder.map(|text| html! { <option value="" selected={value.is_empty()}>{ text }</option> }) }
                { for options.iter().map(|(option, text)| html! {
                    <option value={option.clone()} selected={option == value}>{ text }</option>
                }) }
            </select>
        </label>
    }
}

/// Choices built from plain labels.
pub fn options_of<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<(String, String)> {
    values
        .into_iter()
        .map(|value| (value.to_string(), value.to_string()))
        .collect()
}

pub fn file_field(label: &str, accept: &'static str, on_change: Callback<Option<File>>) -> Html {
    let onchange = on_change.reform(|e: Event| {
        e.target_unchecked_into::<HtmlInputElement>()
            .files()
            .and_then(|files| files.get(0))
    });
    html! {
        <label class="field">
            <span class="field-label">{ label }</span>
            <input type="file" {accept} {onchange} />
        </label>
    }
}

pub fn form_buttons(submit: &str, processing: bool, disabled: bool, on_cancel: Callback<()>) -> Html {
    html! {
        <div class="form-buttons">
            <button type="button" class="btn btn-outline" onclick={on_cancel.reform(|_: MouseEvent| ())}>{"Cancel"}</button>
            <button type="submit" class="btn btn-primary" disabled={processing || disabled}>
                { if processing { "Saving..." } else { submit } }
            </button>
        </div>
    }
}

/// `onsubmit` handler that keeps the browser from reloading the page.
pub fn on_submit<C: Component>(link: &yew::html::Scope<C>, msg: fn() -> C::Message) -> Callback<SubmitEvent> {
    link.callback(move |e: SubmitEvent| {
        e.prevent_default();
        msg()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("jane@wezawire.com"));
        assert!(is_valid_email("  desk@nation.co.ke "));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email("jane"));
        assert!(!is_valid_email("jane@desk"));
        assert!(!is_valid_email("jane doe@desk.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn options_repeat_the_label_as_value() {
        assert_eq!(
            options_of(["Kenya", "Ghana"]),
            vec![
                ("Kenya".to_string(), "Kenya".to_string()),
                ("Ghana".to_string(), "Ghana".to_string())
            ]
        );
    }
}
