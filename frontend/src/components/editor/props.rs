use common::model::press_release::PressRelease;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct EditorProps {
    pub release_id: AttrValue,
    /// Markdown the editor starts from.
    pub initial: AttrValue,
    /// Receives the server copy after every successful autosave.
    #[prop_or_default]
    pub on_saved: Callback<PressRelease>,
}
