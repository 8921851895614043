//! The signed-in journalist's withdrawal requests.

use common::events::AppEvent;
use common::model::page::ListQuery;
use common::model::withdrawal::WithdrawalRequest;
use web_sys::AbortSignal;
use yew::prelude::*;

use super::{payment_summary, withdrawal_status_badge};
use crate::components::format::{format_date, format_ksh, format_points};
use crate::components::forms::withdrawal::WithdrawalForm;
use crate::components::resource_list::{FetchFuture, Outcome, Resource};
use crate::http::{api, HttpClient};

/// Points the journalist can still withdraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AvailablePoints(pub i64);

#[derive(PartialEq)]
pub struct MyWithdrawals;

impl Resource for MyWithdrawals {
    type Item = WithdrawalRequest;
    type Filter = AvailablePoints;
    type Action = ();

    const TITLE: &'static str = "My withdrawals";
    const EMPTY: &'static str = "No withdrawal requests yet.";
    const SEARCHABLE: bool = false;
    const CREATE_LABEL: Option<&'static str> = Some("Request withdrawal");

    fn columns() -> &'static [&'static str] {
        &["Requested", "Points", "Amount", "Method", "Details", "Status", "Reference"]
    }

    fn cells(request: &WithdrawalRequest) -> Vec<Html> {
        vec![
            html! { <>{ format_date(request.created_at) }</> },
            html! { <>{ format_points(request.points) }</> },
            html! { <>{ format_ksh(request.amount) }</> },
            html! { <>{ request.payment_method.clone() }</> },
            html! { <>{ payment_summary(request) }</> },
            withdrawal_status_badge(request.status),
            html! { <>{ request.transaction_reference.clone().unwrap_or_else(|| "-".to_string()) }</> },
        ]
    }

    fn fetch(
        client: HttpClient,
        query: ListQuery,
        _filter: AvailablePoints,
        signal: Option<AbortSignal>,
    ) -> FetchFuture<WithdrawalRequest> {
        Box::pin(async move { api::list_withdrawals(&client, &query, signal.as_ref()).await })
    }

    fn form(
        _editing: Option<&WithdrawalRequest>,
        available: &AvailablePoints,
        on_done: Callback<Outcome<WithdrawalRequest>>,
        on_cancel: Callback<()>,
    ) -> Html {
        html! {
            <WithdrawalForm
                available_points={available.0}
                on_saved={on_done.reform(Outcome::Insert)}
                {on_cancel}
            />
        }
    }

    /// The balance in the dashboard header changes with every request.
    fn after_mutation() -> Option<AppEvent> {
        Some(AppEvent::ReloadDashboard)
    }
}
