//! Sheets mounted once by the layout and opened through the event bus, plus
//! the journalist import sheet owned by the journalists page.

pub mod delete;
pub mod generate;
pub mod share;
pub mod template_selector;
pub mod upload;

use yew::prelude::*;

use delete::DeleteModal;
use generate::GenerateModal;
use share::ShareModal;
use template_selector::TemplateSelector;

/// Every bus-driven modal, rendered next to the routed page.
#[function_component(GlobalModals)]
pub fn global_modals() -> Html {
    html! {
        <>
            <GenerateModal />
            <TemplateSelector />
            <ShareModal />
            <DeleteModal />
        </>
    }
}
