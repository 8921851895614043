//! The concrete lists plugged into
//! [`ResourcePage`](crate::components::resource_list::ResourcePage).

pub mod clients;
pub mod journalists;
pub mod my_links;
pub mod my_withdrawals;
pub mod pending_links;
pub mod press_releases;
pub mod templates;
pub mod withdrawals;

use common::model::published_link::LinkStatus;
use common::model::withdrawal::{WithdrawalRequest, WithdrawalStatus};
use yew::prelude::*;

fn badge(label: &'static str, tone: &'static str) -> Html {
    html! { <span class={classes!("badge", tone)}>{ label }</span> }
}

pub fn link_status_badge(status: LinkStatus) -> Html {
    let tone = match status {
        LinkStatus::Pending => "badge-warning",
        LinkStatus::Approved => "badge-success",
        LinkStatus::Rejected => "badge-danger",
    };
    badge(status.label(), tone)
}

pub fn withdrawal_status_badge(status: WithdrawalStatus) -> Html {
    let tone = match status {
        WithdrawalStatus::Pending => "badge-warning",
        WithdrawalStatus::Approved => "badge-info",
        WithdrawalStatus::Rejected => "badge-danger",
        WithdrawalStatus::Completed => "badge-success",
    };
    badge(status.label(), tone)
}

/// Payout destination for tables, `-` when the details do not match the method.
pub fn payment_summary(request: &WithdrawalRequest) -> String {
    request
        .details()
        .map_or_else(|| "-".to_string(), |details| details.summary())
}
