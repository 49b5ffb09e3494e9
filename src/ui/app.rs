/// Root application component for ThreadCraft

use patternfly_yew::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::browser;
use crate::summary::{issue_report_url, SummaryResponse, ThreadSummary};
use crate::ui::components::PipelineView;
use crate::ui::form::UrlForm;
use crate::ui::results::ResultsView;

// Import JS bridge functions
#[wasm_bindgen(module = "/bridge.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn summarizeThread(url: &str) -> Result<JsValue, JsValue>;
}

#[derive(Clone, PartialEq)]
enum AppState {
    Idle,
    Processing,
    Ready(ThreadSummary),
    Failed(String),
}

#[function_component(App)]
pub fn app() -> Html {
    let state = use_state(|| AppState::Idle);
    let last_url = use_state(String::new);
    let reset_signal = use_state(|| 0u32);

    let on_submit = {
        let state = state.clone();
        let last_url = last_url.clone();

        Callback::from(move |url: String| {
            last_url.set(url.clone());
            state.set(AppState::Processing);

            let state = state.clone();
            spawn_local(async move {
                match summarize(&url).await {
                    Ok(summary) => {
                        state.set(AppState::Ready(summary));
                    }
                    Err(e) => {
                        log::warn!("Summarize failed: {}", e);
                        state.set(AppState::Failed(e));
                    }
                }
            });
        })
    };

    let on_reset = {
        let state = state.clone();
        let last_url = last_url.clone();
        let reset_signal = reset_signal.clone();

        Callback::from(move |_: ()| {
            state.set(AppState::Idle);
            last_url.set(String::new());
            reset_signal.set(*reset_signal + 1);
        })
    };

    let on_report_issue = {
        let state = state.clone();
        let last_url = last_url.clone();

        Callback::from(move |_| {
            let error_message = match &*state {
                AppState::Failed(message) => message.clone(),
                _ => String::new(),
            };

            let url = issue_report_url(
                &last_url,
                &error_message,
                &browser::user_agent(),
                &js_sys::Date::new_0().to_iso_string().as_string().unwrap_or_default(),
            );

            if let Err(e) = browser::open_in_new_tab(&url) {
                log::warn!("Could not open issue page: {}", e);
            }
        })
    };

    let busy = matches!(*state, AppState::Processing);

    html! {
        <div class="container" style="max-width: 720px; margin: 0 auto; padding: 32px 20px;">
            <header style="text-align: center; margin-bottom: 24px;">
                <h1 style="margin-bottom: 4px;">{"ThreadCraft"}</h1>
                <p style="color: #6b7280; margin: 0;">
                    {"Paste a Twitter/X thread URL and get an AI-generated summary"}
                </p>
            </header>

            <UrlForm
                on_submit={on_submit}
                on_reset={on_reset.clone()}
                busy={busy}
                reset_signal={*reset_signal}
            />

            {match &*state {
                AppState::Idle => html! {},
                AppState::Processing => html! {
                    <PipelineView />
                },
                AppState::Ready(summary) => html! {
                    <ResultsView summary={summary.clone()} on_reset={on_reset.clone()} />
                },
                AppState::Failed(message) => html! {
                    <div class="error-section" style="margin-top: 24px;">
                        <Alert r#type={AlertType::Danger} title={"Could not summarize thread"} inline={true}>
                            <span class="error-message">{message.clone()}</span>
                        </Alert>
                        <div style="display: flex; gap: 8px; margin-top: 12px;">
                            <Button onclick={on_reset.reform(|_| ())} variant={ButtonVariant::Primary}>
                                {"↺ Try Again"}
                            </Button>
                            <Button onclick={on_report_issue} variant={ButtonVariant::Secondary}>
                                {"🐛 Report Issue"}
                            </Button>
                        </div>
                    </div>
                },
            }}

            <p class="footer" style="text-align: center; color: #9ca3af; font-size: 12px; margin-top: 40px;">
                {"ThreadCraft v0.1.0"}
            </p>
        </div>
    }
}

// Helper functions

async fn summarize(url: &str) -> Result<ThreadSummary, String> {
    let response_js = summarizeThread(url)
        .await
        .map_err(|e| format!("Request failed: {:?}", e))?;

    let response: SummaryResponse = serde_wasm_bindgen::from_value(response_js)
        .map_err(|e| format!("Failed to parse response: {:?}", e))?;

    if response.success {
        response
            .summary
            .ok_or_else(|| "Response was missing the summary".to_string())
    } else {
        Err(response
            .error
            .unwrap_or_else(|| "Unknown error".to_string()))
    }
}
