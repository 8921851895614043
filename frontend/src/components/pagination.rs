use yew::prelude::*;

/// Previous / next controls with the current position. Renders nothing for a
/// single page.
pub fn pagination(current: u32, total: u32, on_change: Callback<u32>) -> Html {
    if total <= 1 {
        return html! {};
    }
    let previous = {
        let on_change = on_change.clone();
        Callback::from(move |_: MouseEvent| on_change.emit(current.saturating_sub(1).max(1)))
    };
    let next = Callback::from(move |_: MouseEvent| on_change.emit((current + 1).min(total)));
    html! {
        <div class="pagination">
            <button class="btn btn-outline" disabled={current <= 1} onclick={previous}>{"Previous"}</button>
            <span class="pagination-position">{ format!("Page {current} of {total}") }</span>
            <button class="btn btn-outline" disabled={current >= total} onclick={next}>{"Next"}</button>
        </div>
    }
}
