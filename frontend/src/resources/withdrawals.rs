//! Withdrawal requests as seen by an admin.

use common::events::AppEvent;
use common::model::page::ListQuery;
use common::model::withdrawal::{WithdrawalRequest, WithdrawalStatus};
use common::validation::ProcessAction;
use web_sys::AbortSignal;
use yew::prelude::*;

use super::{payment_summary, withdrawal_status_badge};
use crate::components::format::{format_date, format_ksh, format_points, or_dash};
use crate::components::forms::process_withdrawal::ProcessWithdrawalDialog;
use crate::components::resource_list::{FetchFuture, Outcome, Resource, Step};
use crate::http::{api, HttpClient};

/// Status filter of the table; `None` shows every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusFilter(pub Option<WithdrawalStatus>);

#[derive(PartialEq)]
pub struct Withdrawals;

impl Resource for Withdrawals {
    type Item = WithdrawalRequest;
    type Filter = StatusFilter;
    type Action = ProcessAction;

    const TITLE: &'static str = "Withdrawal requests";
    const EMPTY: &'static str = "No withdrawal requests.";
    const SEARCH_PLACEHOLDER: &'static str = "Search withdrawals...";

    fn columns() -> &'static [&'static str] {
        &["Journalist", "Points", "Amount", "Method", "Details", "Status", "Requested", "Reference"]
    }

    fn cells(request: &WithdrawalRequest) -> Vec<Html> {
        vec![
            html! { <>{ or_dash(&request.journalist_name).to_string() }</> },
            html! { <>{ format_points(request.points) }</> },
            html! { <>{ format_ksh(request.amount) }</> },
            html! { <>{ request.payment_method.clone() }</> },
            html! { <>{ payment_summary(request) }</> },
            withdrawal_status_badge(request.status),
            html! { <>{ format_date(request.created_at) }</> },
            html! { <>{ request.transaction_reference.clone().unwrap_or_else(|| "-".to_string()) }</> },
        ]
    }

    fn fetch(
        client: HttpClient,
        query: ListQuery,
        _filter: StatusFilter,
        signal: Option<AbortSignal>,
    ) -> FetchFuture<WithdrawalRequest> {
        Box::pin(async move { api::list_withdrawals(&client, &query, signal.as_ref()).await })
    }

    fn visible(request: &WithdrawalRequest, filter: &StatusFilter) -> bool {
        filter.0.is_none_or(|status| request.status == status)
    }

    fn actions(request: &WithdrawalRequest) -> Vec<ProcessAction> {
        ProcessAction::available_for(request.status).to_vec()
    }

    fn action_label(action: &ProcessAction) -> &'static str {
        action.label()
    }

    fn step(_request: &WithdrawalRequest, _action: &ProcessAction) -> Step {
        Step::Dialog
    }

    fn action_view(
        request: &WithdrawalRequest,
        action: &ProcessAction,
        on_done: Callback<Outcome<WithdrawalRequest>>,
        on_cancel: Callback<()>,
    ) -> Html {
        html! {
            <ProcessWithdrawalDialog
                request={request.clone()}
                action={*action}
                on_processed={on_done.reform(Outcome::Replace)}
                {on_cancel}
            />
        }
    }

    /// Processing moves points between the dashboard counters.
    fn after_mutation() -> Option<AppEvent> {
        Some(AppEvent::ReloadDashboard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(status: WithdrawalStatus) -> WithdrawalRequest {
        WithdrawalRequest {
            id: "w1".into(),
            points: 50,
            status,
            ..Default::default()
        }
    }

    #[test]
    fn filter_hides_other_statuses() {
        let pending = request(WithdrawalStatus::Pending);
        assert!(Withdrawals::visible(&pending, &StatusFilter(None)));
        assert!(Withdrawals::visible(&pending, &StatusFilter(Some(WithdrawalStatus::Pending))));
        assert!(!Withdrawals::visible(&pending, &StatusFilter(Some(WithdrawalStatus::Completed))));
    }

    #[test]
    fn actions_follow_the_status() {
        assert_eq!(
            Withdrawals::actions(&request(WithdrawalStatus::Pending)),
            vec![ProcessAction::Approve, ProcessAction::Reject]
        );
        assert_eq!(
            Withdrawals::actions(&request(WithdrawalStatus::Approved)),
            vec![ProcessAction::Complete]
        );
        assert!(Withdrawals::actions(&request(WithdrawalStatus::Completed)).is_empty());
    }
}
