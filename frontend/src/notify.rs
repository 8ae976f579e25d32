//! Toast notifications.
//!
//! Injects a self-removing `div` at the bottom of the viewport. Used across
//! the admin pages for action feedback; errors stay on screen a little
//! longer than confirmations.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Error,
}

impl Level {
    fn background(&self) -> &'static str {
        match self {
            Level::Info => "rgba(0, 0, 0, 0.8)",
            Level::Error => "rgba(179, 38, 30, 0.92)",
        }
    }

    fn duration_ms(&self) -> u32 {
        match self {
            Level::Info => 3000,
            Level::Error => 6000,
        }
    }
}

pub fn show(level: Level, message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", level.background()).ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();
                style.set_property("font-family", "Arial, sans-serif").ok();

                if body.append_child(&html_toast).is_ok() {
                    let timeout = level.duration_ms();
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(timeout).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

pub fn info(message: &str) {
    show(Level::Info, message);
}

pub fn error(message: &str) {
    show(Level::Error, message);
}
