/// Browser-API glue: clipboard, share sheet, file download, new-tab open.
///
/// Every failure here is absorbed locally and logged; nothing in this
/// module surfaces an error to the user or breaks the page.
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, HtmlDocument, HtmlTextAreaElement, Url};

fn window() -> Result<web_sys::Window, String> {
    web_sys::window().ok_or_else(|| "No window object".to_string())
}

fn document() -> Result<web_sys::Document, String> {
    window()?
        .document()
        .ok_or_else(|| "No document object".to_string())
}

/// Copy text to the clipboard, falling back to a hidden textarea and
/// `execCommand("copy")` when the async Clipboard API is unavailable.
pub async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let navigator = window()?.navigator();

    let promise = navigator.clipboard().write_text(text);
    match JsFuture::from(promise).await {
        Ok(_) => Ok(()),
        Err(e) => {
            log::warn!("Clipboard API failed, using textarea fallback: {:?}", e);
            copy_via_textarea(text)
        }
    }
}

fn copy_via_textarea(text: &str) -> Result<(), String> {
    let document = document()?;
    let body = document.body().ok_or_else(|| "No document body".to_string())?;

    let textarea: HtmlTextAreaElement = document
        .create_element("textarea")
        .map_err(|e| format!("Failed to create textarea: {:?}", e))?
        .dyn_into()
        .map_err(|_| "Element was not a textarea".to_string())?;

    textarea.set_value(text);
    let style = textarea.style();
    let _ = style.set_property("position", "fixed");
    let _ = style.set_property("opacity", "0");

    body.append_child(&textarea)
        .map_err(|e| format!("Failed to attach textarea: {:?}", e))?;
    textarea.select();

    let copied = document
        .dyn_ref::<HtmlDocument>()
        .map(|doc| doc.exec_command("copy").unwrap_or(false))
        .unwrap_or(false);

    let _ = body.remove_child(&textarea);

    if copied {
        Ok(())
    } else {
        Err("execCommand copy failed".to_string())
    }
}

/// Open the native share sheet when the browser has one, otherwise copy
/// the URL to the clipboard. Best effort: failures are logged only.
/// Returns true if the share sheet was used, false for the fallback.
pub async fn share_or_copy(title: &str, text: &str, url: &str) -> Result<bool, String> {
    let navigator = window()?.navigator();

    if js_sys::Reflect::has(&navigator, &JsValue::from_str("share")).unwrap_or(false) {
        let data = web_sys::ShareData::new();
        data.set_title(title);
        data.set_text(text);
        data.set_url(url);

        match JsFuture::from(navigator.share_with_data(&data)).await {
            Ok(_) => return Ok(true),
            Err(e) => {
                // User dismissing the sheet lands here too; not an error
                log::warn!("Share sheet unavailable or dismissed: {:?}", e);
            }
        }
    }

    copy_to_clipboard(url).await?;
    Ok(false)
}

/// Offer `content` as a plain-text file download named `filename`.
pub fn download_text(content: &str, filename: &str) -> Result<(), String> {
    let document = document()?;

    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(content));

    let options = BlobPropertyBag::new();
    options.set_type("text/plain");

    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|e| format!("Failed to create blob: {:?}", e))?;

    let object_url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let clicked = click_download_anchor(&document, &object_url, filename);

    // Revoke whether or not the click went through, so a failed attach
    // does not leak the object URL
    let revoked = Url::revoke_object_url(&object_url)
        .map_err(|e| format!("Failed to revoke object URL: {:?}", e));

    clicked?;
    revoked
}

fn click_download_anchor(
    document: &web_sys::Document,
    object_url: &str,
    filename: &str,
) -> Result<(), String> {
    let body = document.body().ok_or_else(|| "No document body".to_string())?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into()
        .map_err(|_| "Element was not an anchor".to_string())?;

    anchor.set_href(object_url);
    anchor.set_download(filename);

    body.append_child(&anchor)
        .map_err(|e| format!("Failed to attach anchor: {:?}", e))?;
    anchor.click();
    let _ = body.remove_child(&anchor);

    Ok(())
}

/// Open a URL in a new tab (report-issue target).
pub fn open_in_new_tab(url: &str) -> Result<(), String> {
    window()?
        .open_with_url_and_target(url, "_blank")
        .map_err(|e| format!("Failed to open tab: {:?}", e))?;
    Ok(())
}

/// Current page URL, used in share and copy-all footers.
pub fn page_href() -> String {
    window()
        .and_then(|w| {
            w.location()
                .href()
                .map_err(|e| format!("Failed to read href: {:?}", e))
        })
        .unwrap_or_default()
}

/// Current page origin, used in the download footer.
pub fn page_origin() -> String {
    window()
        .and_then(|w| {
            w.location()
                .origin()
                .map_err(|e| format!("Failed to read origin: {:?}", e))
        })
        .unwrap_or_default()
}

/// Browser user-agent string for issue reports.
pub fn user_agent() -> String {
    window()
        .map(|w| w.navigator().user_agent().unwrap_or_default())
        .unwrap_or_default()
}
