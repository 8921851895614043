use yew::prelude::*;

use crate::components::modals::upload::UploadModal;
use crate::components::resource_list::ResourcePage;
use crate::resources::journalists::Journalists;

#[function_component(JournalistsPage)]
pub fn journalists_page() -> Html {
    let importing = use_state(|| false);
    let open = {
        let importing = importing.clone();
        Callback::from(move |_: MouseEvent| importing.set(true))
    };
    let close = {
        let importing = importing.clone();
        Callback::from(move |_: ()| importing.set(false))
    };
    html! {
        <div class="page">
            <div class="page-actions">
                <button class="btn btn-outline" onclick={open}>
                    <span class="material-icons">{ "upload_file" }</span>
                    { "Import from Excel" }
                </button>
            </div>
            <ResourcePage<Journalists> />
            <UploadModal open={*importing} on_close={close} />
        </div>
    }
}
