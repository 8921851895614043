//! Non-blocking notifications injected at the bottom of the page.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::http::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

impl ToastKind {
    fn background(&self) -> &'static str {
        match self {
            ToastKind::Info => "rgba(0, 0, 0, 0.8)",
            ToastKind::Success => "rgba(22, 101, 52, 0.92)",
            ToastKind::Error => "rgba(185, 28, 28, 0.92)",
        }
    }
}

const TOAST_MILLIS: u32 = 3000;

/// Shows `message` for three seconds. The text is set as text content, so
/// server messages cannot inject markup.
pub fn show_toast(message: &str, kind: ToastKind) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };
    toast.set_text_content(Some(message));
    toast.set_class_name("toast");
    let toast: HtmlElement = toast.unchecked_into();
    let style = toast.style();
    style.set_property("position", "fixed").ok();
    style.set_property("bottom", "20px").ok();
    style.set_property("left", "50%").ok();
    style.set_property("transform", "translateX(-50%)").ok();
    style.set_property("background", kind.background()).ok();
    style.set_property("color", "#fff").ok();
    style.set_property("padding", "10px 20px").ok();
    style.set_property("border-radius", "6px").ok();
    style.set_property("z-index", "10000").ok();

    if body.append_child(&toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_MILLIS).await;
            toast.remove();
        });
    }
}

pub fn toast_success(message: &str) {
    show_toast(message, ToastKind::Success);
}

pub fn toast_error(message: &str) {
    show_toast(message, ToastKind::Error);
}

/// One toast per failed call, except for aborts and the 401 redirect.
pub fn toast_api_error(context: &str, error: &ApiError) {
    if error.is_reportable() {
        toast_error(&format!("{context}: {error}"));
    }
}
