/// URL input form with live validation feedback

use gloo_timers::callback::Timeout;
use patternfly_yew::prelude::*;
use web_sys::{Event, HtmlInputElement};
use yew::prelude::*;

use crate::feedback::{FeedbackState, SubmitDecision, DEBOUNCE_MS, ERROR_DISMISS_MS, PASTE_SETTLE_MS};
use crate::ui::components::{UrlErrorBanner, ValidatorBadge};
use crate::validate::validate;

const EXAMPLE_URLS: [&str; 2] = [
    "https://twitter.com/naval/status/1002103360646823936",
    "https://x.com/paulg/status/1589337397850771456",
];

#[derive(Properties, PartialEq)]
pub struct UrlFormProps {
    /// Fires with the trimmed URL once the submit gate lets it through.
    pub on_submit: Callback<String>,
    /// Escape / reset shortcut asked for a full page reset.
    pub on_reset: Callback<()>,
    /// Submission in flight: submit affordance goes busy/disabled.
    pub busy: bool,
    /// Bump to clear the field and feedback externally.
    pub reset_signal: u32,
}

#[function_component(UrlForm)]
pub fn url_form(props: &UrlFormProps) -> Html {
    let value = use_state(String::new);
    // Authoritative feedback state, shared with timer callbacks so a
    // verdict always lands against the state current at fire time;
    // `feedback` is the rendered copy.
    let feedback_model = use_mut_ref(FeedbackState::new);
    let feedback = use_state(FeedbackState::new);
    let debounce_timer = use_state(|| None::<Timeout>);
    let error_timer = use_state(|| None::<Timeout>);
    let input_ref = use_node_ref();

    // External reset: clear content and feedback, refocus the field
    {
        let value = value.clone();
        let feedback_model = feedback_model.clone();
        let feedback = feedback.clone();
        let input_ref = input_ref.clone();

        use_effect_with(props.reset_signal, move |_| {
            value.set(String::new());
            feedback_model.borrow_mut().reset();
            feedback.set(feedback_model.borrow().clone());

            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                input.set_value("");
                let _ = input.focus();
            }
            || ()
        });
    }

    // Auto-focus on mount
    {
        let input_ref = input_ref.clone();
        use_effect_with((), move |_| {
            let handle = Timeout::new(500, move || {
                if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                    let _ = input.focus();
                }
            });
            move || drop(handle)
        });
    }

    // Schedule a validation of `text` after `delay_ms`, superseding any
    // pending one. When the timer fires, the verdict is checked against
    // the live model: a superseded or reset token is a no-op, and state
    // changed in the meantime (like a raised submit error) is kept.
    let schedule_validation = {
        let value = value.clone();
        let feedback_model = feedback_model.clone();
        let feedback = feedback.clone();
        let debounce_timer = debounce_timer.clone();

        Callback::from(move |(text, delay_ms): (String, u32)| {
            value.set(text.clone());

            let token = feedback_model.borrow_mut().note_input();
            feedback.set(feedback_model.borrow().clone());

            // Replacing the handle cancels the in-flight timer
            debounce_timer.set(None);

            let feedback_model = feedback_model.clone();
            let feedback = feedback.clone();
            let handle = Timeout::new(delay_ms, move || {
                let applied = feedback_model
                    .borrow_mut()
                    .apply_debounced(token, validate(&text));
                if applied {
                    feedback.set(feedback_model.borrow().clone());
                }
            });
            debounce_timer.set(Some(handle));
        })
    };

    let on_input = {
        let schedule_validation = schedule_validation.clone();

        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                schedule_validation.emit((input.value(), DEBOUNCE_MS));
            }
        })
    };

    // Pasted content lands in the field asynchronously; re-read the value
    // after a short settle delay instead of the full debounce.
    let on_paste = {
        let schedule_validation = schedule_validation.clone();

        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                let schedule_validation = schedule_validation.clone();
                let handle = Timeout::new(PASTE_SETTLE_MS, move || {
                    schedule_validation.emit((input.value(), 0));
                });
                handle.forget();
            }
        })
    };

    let dismiss_error = {
        let feedback_model = feedback_model.clone();
        let feedback = feedback.clone();

        Callback::from(move |_: ()| {
            feedback_model.borrow_mut().dismiss_error();
            feedback.set(feedback_model.borrow().clone());
        })
    };

    // Synchronous submit gate, shared by the form submit event and the
    // Ctrl/Cmd+Enter shortcut.
    let try_submit = {
        let value = value.clone();
        let feedback_model = feedback_model.clone();
        let feedback = feedback.clone();
        let error_timer = error_timer.clone();
        let dismiss_error = dismiss_error.clone();
        let submit = props.on_submit.clone();
        let busy = props.busy;

        Callback::from(move |_: ()| {
            if busy {
                return;
            }

            let decision = feedback_model.borrow_mut().submit(&value);
            feedback.set(feedback_model.borrow().clone());

            match decision {
                SubmitDecision::Proceed => {
                    submit.emit(value.trim().to_string());
                }
                SubmitDecision::Block(_) => {
                    let dismiss_error = dismiss_error.clone();
                    error_timer.set(None);
                    let handle = Timeout::new(ERROR_DISMISS_MS, move || {
                        dismiss_error.emit(());
                    });
                    error_timer.set(Some(handle));
                }
            }
        })
    };

    let on_submit = {
        let try_submit = try_submit.clone();

        Callback::from(move |e: SubmitEvent| {
            // The summarize call goes over the API bridge, never a
            // native form submission
            e.prevent_default();
            try_submit.emit(());
        })
    };

    let on_keydown = {
        let try_submit = try_submit.clone();
        let reset = props.on_reset.clone();

        Callback::from(move |e: KeyboardEvent| {
            if (e.ctrl_key() || e.meta_key()) && e.key() == "Enter" {
                e.prevent_default();
                try_submit.emit(());
            } else if e.key() == "Escape" {
                reset.emit(());
            }
        })
    };

    let fill_example = {
        let schedule_validation = schedule_validation.clone();
        let input_ref = input_ref.clone();

        Callback::from(move |url: &'static str| {
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                input.set_value(url);
                let _ = input.focus();
            }
            // Filled content validates immediately, no debounce
            schedule_validation.emit((url.to_string(), 0));
        })
    };

    let input_class = classes!("url-input", feedback.visual.css_class());

    html! {
        <form id="thread-form" onsubmit={on_submit} onkeydown={on_keydown}>
            <div class="input-group" style="display: flex; flex-direction: column;">
                <input
                    ref={input_ref}
                    id="url"
                    type="text"
                    class={input_class}
                    placeholder="https://x.com/username/status/123456789"
                    oninput={on_input}
                    onpaste={on_paste}
                    disabled={props.busy}
                    style="padding: 12px 16px; border-radius: 8px; border: 1px solid #d1d5db; font-size: 15px;"
                />

                <ValidatorBadge badge={feedback.badge} />

                if let Some(message) = feedback.error.clone() {
                    <UrlErrorBanner message={message} on_dismiss={dismiss_error.clone()} />
                }
            </div>

            <div class="examples" style="display: flex; gap: 8px; margin-top: 12px;">
                <span style="color: #6b7280; font-size: 13px;">{"Try:"}</span>
                {for EXAMPLE_URLS.iter().map(|url| {
                    html! {
                        <button
                            type="button"
                            class="example-url"
                            onclick={fill_example.reform(move |_| *url)}
                            style="background: none; border: none; color: #6366f1; cursor: pointer; font-size: 13px; text-decoration: underline;"
                        >
                            {url.split("//").nth(1).unwrap_or(url)}
                        </button>
                    }
                })}
            </div>

            <div style="margin-top: 16px;">
                <Button
                    r#type={ButtonType::Submit}
                    variant={ButtonVariant::Primary}
                    disabled={props.busy}
                    block={true}
                >
                    if props.busy {
                        <Spinner />
                        {" Processing..."}
                    } else {
                        {"✨ Summarize"}
                    }
                </Button>
            </div>
        </form>
    }
}
