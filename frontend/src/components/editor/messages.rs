use common::model::press_release::PressRelease;

use super::helpers::{AiAction, Style};
use super::state::Tab;
use crate::http::ApiError;

pub enum Msg {
    SetTab(Tab),
    UpdateText(String),
    Undo,
    Redo,
    ApplyStyle(Style),
    AutoResize,
    /// Selection reported by the textarea, in UTF-16 units.
    Select(u32, u32),
    Ai(AiAction),
    Save,
    Saved {
        seq: u64,
        md5: String,
        result: Result<PressRelease, ApiError>,
    },
}
