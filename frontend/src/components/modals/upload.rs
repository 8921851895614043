//! Bulk import of journalists from an Excel workbook.

use common::events::AppEvent;
use common::model::journalist::{is_spreadsheet, UploadSummary};
use web_sys::File;
use yew::prelude::*;

use crate::app::{app_context, AppContext};
use crate::components::forms::{file_field, on_submit};
use crate::components::toast::{toast_api_error, toast_error, toast_success};
use crate::components::top_sheet::TopSheet;
use crate::http::{api, ApiError};

pub enum Msg {
    Pick(Option<File>),
    Submit,
    Uploaded(Result<UploadSummary, ApiError>),
}

#[derive(Properties, PartialEq)]
pub struct UploadProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

pub struct UploadModal {
    context: AppContext,
    file: Option<File>,
    uploading: bool,
}

/// Toasts shown for a finished import: the counts, then failures on their own.
pub fn summary_messages(summary: &UploadSummary) -> (String, Option<String>) {
    let counts = format!(
        "Import finished: {} created, {} updated",
        summary.created, summary.updated
    );
    let failures = summary
        .has_failures()
        .then(|| format!("{} rows could not be imported", summary.failed));
    (counts, failures)
}

impl Component for UploadModal {
    type Message = Msg;
    type Properties = UploadProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            context: app_context(ctx),
            file: None,
            uploading: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Pick(file) => {
                if let Some(picked) = &file {
                    if !is_spreadsheet(&picked.name()) {
                        toast_error("Only .xlsx and .xls files are accepted");
                        self.file = None;
                        return true;
                    }
                }
                self.file = file;
            }
            Msg::Submit => {
                if self.uploading {
                    return false;
                }
                let Some(file) = self.file.clone() else {
                    toast_error("Choose a spreadsheet first");
                    return false;
                };
                self.uploading = true;
                let client = self.context.client.clone();
                ctx.link()
                    .send_future(async move { Msg::Uploaded(api::upload_journalists(&client, &file).await) });
            }
            Msg::Uploaded(result) => {
                self.uploading = false;
                match result {
                    Ok(summary) => {
                        log::info!("journalist import: {summary:?}");
                        let (counts, failures) = summary_messages(&summary);
                        toast_success(&counts);
                        if let Some(failures) = failures {
                            toast_error(&failures);
                        }
                        self.file = None;
                        self.context.bus.emit(AppEvent::ReloadData);
                        ctx.props().on_close.emit(());
                    }
                    Err(error) => toast_api_error("Failed to import journalists", &error),
                }
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let on_close = ctx.props().on_close.clone();
        html! {
            <TopSheet open={ctx.props().open} title="Import journalists" on_close={on_close.clone()}>
                <form onsubmit={on_submit(link, || Msg::Submit)}>
                    <p class="hint">{ "Upload an Excel workbook (.xlsx or .xls) with one journalist per row." }</p>
                    { file_field("Spreadsheet", ".xlsx,.xls", link.callback(Msg::Pick)) }
                    <div class="form-buttons">
                        <button type="button" class="btn btn-outline" disabled={self.uploading}
                            onclick={on_close.reform(|_: MouseEvent| ())}>
                            { "Cancel" }
                        </button>
                        <button type="submit" class="btn btn-primary" disabled={self.uploading || self.file.is_none()}>
                            { if self.uploading { "Uploading..." } else { "Upload" } }
                        </button>
                    </div>
                </form>
            </TopSheet>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failures_get_their_own_notice() {
        let (counts, failures) = summary_messages(&UploadSummary {
            created: 4,
            updated: 2,
            failed: 1,
        });
        assert_eq!(counts, "Import finished: 4 created, 2 updated");
        assert_eq!(failures.as_deref(), Some("1 rows could not be imported"));
    }

    #[test]
    fn clean_import_has_no_failure_notice() {
        let (_, failures) = summary_messages(&UploadSummary {
            created: 3,
            updated: 0,
            failed: 0,
        });
        assert!(failures.is_none());
    }
}
