/// Reusable UI components

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::feedback::BadgeState;
use crate::pipeline::{
    PipelineSequence, StatusRotation, TypingText, PIPELINE_STEPS, PROCESSING_TEXTS, TEXT_HOLD_MS,
    TYPE_TICK_MS,
};

/// How long a toast stays visible before auto-dismissing.
pub const TOAST_MS: u32 = 3000;

#[derive(Properties, PartialEq)]
pub struct ValidatorBadgeProps {
    pub badge: BadgeState,
}

/// Inline badge confirming a well-formed thread URL.
#[function_component(ValidatorBadge)]
pub fn validator_badge(props: &ValidatorBadgeProps) -> Html {
    match props.badge {
        BadgeState::Hidden => html! {},
        BadgeState::Confirmed => html! {
            <div class="url-validator show" style="background: rgba(34, 197, 94, 0.1); border: 1px solid rgba(34, 197, 94, 0.2); color: #16a34a; padding: 6px 10px; border-radius: 6px; margin-top: 6px; font-size: 13px;">
                <span class="validator-icon">{"✓ "}</span>
                <span class="validator-text">{props.badge.text()}</span>
            </div>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct UrlErrorBannerProps {
    pub message: String,
    pub on_dismiss: Callback<()>,
}

/// Dismissible error attached under the URL input by the submit gate.
#[function_component(UrlErrorBanner)]
pub fn url_error_banner(props: &UrlErrorBannerProps) -> Html {
    html! {
        <div class="url-error" style="display: flex; align-items: center; gap: 8px; color: #dc2626; background: #fef2f2; border: 1px solid #fecaca; padding: 8px 12px; border-radius: 6px; margin-top: 8px; font-size: 13px;">
            <span>{"⚠"}</span>
            <span class="error-text" style="flex: 1;">{&props.message}</span>
            <button
                type="button"
                onclick={props.on_dismiss.reform(|_| ())}
                style="background: none; border: none; cursor: pointer; color: inherit;"
            >
                {"✗"}
            </button>
        </div>
    }
}

#[derive(PartialEq, Clone, Copy)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub message: String,
    #[prop_or(ToastKind::Info)]
    pub kind: ToastKind,
}

/// Transient fire-and-forget notification. The parent owns the
/// auto-dismiss timer; see [`use_toast`].
#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    let background = match props.kind {
        ToastKind::Success => "#22c55e",
        ToastKind::Error => "#ef4444",
        ToastKind::Info => "#6366f1",
    };

    html! {
        <div
            class="toast"
            style={format!("position: fixed; top: 20px; right: 20px; background: {}; color: white; padding: 12px 20px; border-radius: 8px; z-index: 1000;", background)}
        >
            <div class="toast-content">
                <span>{&props.message}</span>
            </div>
        </div>
    }
}

/// Toast state plus a setter that restarts the auto-dismiss timer.
#[hook]
pub fn use_toast() -> (
    UseStateHandle<Option<(String, ToastKind)>>,
    Callback<(String, ToastKind)>,
) {
    let toast = use_state(|| None::<(String, ToastKind)>);
    let timer = use_state(|| None::<Timeout>);

    let show = {
        let toast = toast.clone();
        let timer = timer.clone();

        Callback::from(move |(message, kind): (String, ToastKind)| {
            toast.set(Some((message, kind)));

            // Replacing the handle cancels any previous dismiss timer
            timer.set(None);
            let toast = toast.clone();
            let handle = Timeout::new(TOAST_MS, move || {
                toast.set(None);
            });
            timer.set(Some(handle));
        })
    };

    (toast, show)
}

/// Processing display: staged pipeline steps plus the typed status line.
/// Drives its own timers; all sequencing decisions live in the
/// `pipeline` module's models.
#[function_component(PipelineView)]
pub fn pipeline_view() -> Html {
    let sequence = use_state(PipelineSequence::new);
    let step_delay = use_state(|| 1000u32); // initial pause before the first step lights
    let step_tick = use_state(|| 0u32);

    let typing = use_state(|| TypingText::new(PROCESSING_TEXTS[0]));
    let rotation = use_state(StatusRotation::new);
    let type_tick = use_state(|| 0u32);

    // Step scheduler: one pending timer, rescheduled with the delay the
    // sequence model asks for.
    {
        let sequence = sequence.clone();
        let step_delay = step_delay.clone();
        let step_tick = step_tick.clone();

        use_effect_with(*step_tick, move |_| {
            let tick_value = *step_tick;
            let delay = *step_delay;

            let handle = Timeout::new(delay, move || {
                let mut next = (*sequence).clone();
                let next_delay = next.advance();
                sequence.set(next);
                step_delay.set(next_delay);
                step_tick.set(tick_value + 1);
            });

            move || drop(handle)
        });
    }

    // Typing scheduler: reveal characters, hold on a finished text, then
    // rotate to the next one.
    {
        let typing = typing.clone();
        let rotation = rotation.clone();
        let type_tick = type_tick.clone();

        use_effect_with(*type_tick, move |_| {
            let tick_value = *type_tick;
            let delay = if typing.is_complete() {
                TEXT_HOLD_MS
            } else {
                TYPE_TICK_MS
            };

            let handle = Timeout::new(delay, move || {
                if typing.is_complete() {
                    let mut next_rotation = *rotation;
                    let next_text = next_rotation.advance();
                    rotation.set(next_rotation);
                    typing.set(TypingText::new(next_text));
                } else {
                    let mut next = (*typing).clone();
                    next.tick();
                    typing.set(next);
                }
                type_tick.set(tick_value + 1);
            });

            move || drop(handle)
        });
    }

    html! {
        <div class="processing-display" style="margin-top: 24px;">
            <p id="typing-text" style="min-height: 20px; color: #6366f1; font-size: 14px;">
                {typing.visible()}
            </p>
            <div class="pipeline" style="display: flex; gap: 12px; margin-top: 16px;">
                {for PIPELINE_STEPS.iter().enumerate().map(|(index, label)| {
                    let lit = sequence.is_lit(index);
                    let style = if lit {
                        "padding: 8px 12px; border-radius: 6px; background: #6366f1; color: white; font-size: 13px; transition: all 0.3s;"
                    } else {
                        "padding: 8px 12px; border-radius: 6px; background: #e5e7eb; color: #6b7280; font-size: 13px; transition: all 0.3s;"
                    };

                    html! {
                        <div
                            key={index}
                            class={if lit { "pipeline-step active" } else { "pipeline-step" }}
                            style={style}
                        >
                            {*label}
                        </div>
                    }
                })}
            </div>
        </div>
    }
}
