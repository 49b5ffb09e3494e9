/// ThreadCraft - AI-powered Twitter/X thread summarizer, client UI
/// Built with Rust + WASM + Yew

pub mod browser;
pub mod feedback;
pub mod pipeline;
pub mod summary;
pub mod validate;
pub mod ui;

use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Re-export the URL check for JavaScript access
#[wasm_bindgen]
pub fn is_valid_thread_url(url: &str) -> bool {
    validate::is_valid_thread_url(url)
}

// Start the Yew app
#[wasm_bindgen]
pub fn start_app() {
    yew::Renderer::<ui::app::App>::new().render();
}
