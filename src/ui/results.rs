/// Results view: summary points with copy / share / download actions

use patternfly_yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::browser;
use crate::summary::ThreadSummary;
use crate::ui::components::{use_toast, Toast, ToastKind};

#[derive(Properties, PartialEq)]
pub struct ResultsViewProps {
    pub summary: ThreadSummary,
    pub on_reset: Callback<()>,
}

#[function_component(ResultsView)]
pub fn results_view(props: &ResultsViewProps) -> Html {
    let (toast, show_toast) = use_toast();
    let summary = props.summary.clone();

    // Copy one numbered point
    let on_copy_point = {
        let summary = summary.clone();
        let show_toast = show_toast.clone();

        Callback::from(move |index: usize| {
            let Some(line) = summary.point_line(index) else {
                return;
            };
            let show_toast = show_toast.clone();

            spawn_local(async move {
                match browser::copy_to_clipboard(&line).await {
                    Ok(_) => show_toast.emit(("Point copied!".to_string(), ToastKind::Success)),
                    Err(e) => log::warn!("Copy failed: {}", e),
                }
            });
        })
    };

    // Share one point, clipboard fallback when no share sheet exists
    let on_share_point = {
        let summary = summary.clone();
        let show_toast = show_toast.clone();

        Callback::from(move |index: usize| {
            let Some(line) = summary.point_line(index) else {
                return;
            };
            let show_toast = show_toast.clone();

            spawn_local(async move {
                match browser::share_or_copy("Thread Summary Point", &line, &browser::page_href())
                    .await
                {
                    Ok(true) => {}
                    Ok(false) => {
                        show_toast.emit(("Link copied!".to_string(), ToastKind::Success));
                    }
                    Err(e) => log::warn!("Share failed: {}", e),
                }
            });
        })
    };

    let on_copy_all = {
        let summary = summary.clone();
        let show_toast = show_toast.clone();

        Callback::from(move |_: ()| {
            let text = summary.clipboard_text(&browser::page_href());
            let show_toast = show_toast.clone();

            spawn_local(async move {
                match browser::copy_to_clipboard(&text).await {
                    Ok(_) => show_toast.emit(("Summary copied!".to_string(), ToastKind::Success)),
                    Err(e) => log::warn!("Copy failed: {}", e),
                }
            });
        })
    };

    let on_share = {
        let summary = summary.clone();
        let show_toast = show_toast.clone();

        Callback::from(move |_| {
            let title = format!("Thread Summary by {}", summary.author);
            let show_toast = show_toast.clone();

            spawn_local(async move {
                match browser::share_or_copy(
                    &title,
                    "Check out this AI-generated thread summary!",
                    &browser::page_href(),
                )
                .await
                {
                    Ok(true) => {}
                    Ok(false) => {
                        show_toast.emit(("Link copied!".to_string(), ToastKind::Success));
                    }
                    Err(e) => log::warn!("Share failed: {}", e),
                }
            });
        })
    };

    let on_download = {
        let summary = summary.clone();
        let show_toast = show_toast.clone();

        Callback::from(move |_| {
            let generated_on = format_date_now();
            let content = summary.download_text(&generated_on, &browser::page_origin());
            let filename = summary.download_file_name(js_sys::Date::now() as i64);

            match browser::download_text(&content, &filename) {
                Ok(_) => show_toast.emit((
                    "Summary downloaded successfully!".to_string(),
                    ToastKind::Success,
                )),
                Err(e) => {
                    log::warn!("Download failed: {}", e);
                    show_toast.emit(("Download failed".to_string(), ToastKind::Error));
                }
            }
        })
    };

    // Ctrl/Cmd+C with focus inside the results copies the whole summary
    let on_keydown = {
        let on_copy_all = on_copy_all.clone();

        Callback::from(move |e: KeyboardEvent| {
            if is_copy_all_shortcut(e.ctrl_key(), e.meta_key(), &e.key()) {
                e.prevent_default();
                on_copy_all.emit(());
            }
        })
    };

    html! {
        <div class="results-section" style="margin-top: 24px;" onkeydown={on_keydown}>
            if let Some((message, kind)) = (*toast).clone() {
                <Toast message={message} kind={kind} />
            }

            <div class="results-header" style="display: flex; justify-content: space-between; align-items: center;">
                <h2 style="margin: 0;">{"Thread Summary"}</h2>
                <div class="metadata" style="color: #6b7280; font-size: 13px;">
                    <span class="author-info">
                        {"by "}<span class="value">{&props.summary.author}</span>
                    </span>
                    {" • "}
                    <span class="metadata-item">
                        <span class="value">{props.summary.tweet_count}</span>{" tweets"}
                    </span>
                </div>
            </div>

            <div class="bullet-points" style="margin-top: 16px; display: flex; flex-direction: column; gap: 12px;">
                {for props.summary.bullet_points.iter().enumerate().map(|(index, point)| {
                    html! {
                        <div key={index} class="bullet-point" style="display: flex; gap: 12px; padding: 12px; border: 1px solid #e5e7eb; border-radius: 8px;">
                            <span style="color: #6366f1; font-weight: 600;">{index + 1}</span>
                            <span class="point-text" style="flex: 1;">{point}</span>
                            <Button
                                variant={ButtonVariant::Plain}
                                onclick={on_copy_point.reform(move |_| index)}
                            >
                                {"📋"}
                            </Button>
                            <Button
                                variant={ButtonVariant::Plain}
                                onclick={on_share_point.reform(move |_| index)}
                            >
                                {"↗"}
                            </Button>
                        </div>
                    }
                })}
            </div>

            <div class="result-actions" style="display: flex; gap: 8px; margin-top: 20px; flex-wrap: wrap;">
                <Button onclick={on_copy_all.reform(|_| ())} variant={ButtonVariant::Secondary}>
                    {"📋 Copy All"}
                </Button>
                <Button onclick={on_share} variant={ButtonVariant::Secondary}>
                    {"↗ Share"}
                </Button>
                <Button onclick={on_download} variant={ButtonVariant::Secondary}>
                    {"💾 Download"}
                </Button>
                <a
                    class="view-original-btn"
                    href={props.summary.source_url.clone()}
                    target="_blank"
                    style="align-self: center; color: #6366f1; font-size: 14px;"
                >
                    {"View original thread"}
                </a>
                <Button onclick={props.on_reset.reform(|_| ())} variant={ButtonVariant::Primary}>
                    {"↺ Summarize Another"}
                </Button>
            </div>
        </div>
    }
}

fn format_date_now() -> String {
    let date = js_sys::Date::new_0();
    format!(
        "{:04}-{:02}-{:02}",
        date.get_full_year(),
        date.get_month() + 1,
        date.get_date()
    )
}

/// Either modifier counts, and the key match is case-insensitive so a
/// held Shift does not defeat the shortcut.
fn is_copy_all_shortcut(ctrl: bool, meta: bool, key: &str) -> bool {
    (ctrl || meta) && key.eq_ignore_ascii_case("c")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_all_shortcut_detection() {
        assert!(is_copy_all_shortcut(true, false, "c"));
        assert!(is_copy_all_shortcut(false, true, "c"));
        assert!(is_copy_all_shortcut(true, false, "C"));

        assert!(!is_copy_all_shortcut(false, false, "c"));
        assert!(!is_copy_all_shortcut(true, false, "v"));
        assert!(!is_copy_all_shortcut(true, true, "Enter"));
    }
}

