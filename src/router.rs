use gloo::events::EventListener;
use wasm_bindgen::JsValue;

use kurukuru_core::LocationPort;

/// `LocationPort` over the History API. Only this type writes the address
/// bar; everything else goes through the controller.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct BrowserLocation;

impl LocationPort for BrowserLocation {
    fn read(&self) -> String {
        let Some(window) = web_sys::window() else {
            return String::new();
        };
        window.location().pathname().unwrap_or_default()
    }

    fn write(&self, path: &str, replace: bool) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Ok(history) = window.history() else {
            return;
        };
        let result = if replace {
            history.replace_state_with_url(&JsValue::NULL, "", Some(path))
        } else {
            history.push_state_with_url(&JsValue::NULL, "", Some(path))
        };
        if let Err(err) = result {
            gloo::console::warn!("history update failed", err);
        }
    }
}

/// Window-level popstate listener; dropping the returned listener detaches
/// it.
pub(crate) fn on_popstate(callback: impl Fn() + 'static) -> Option<EventListener> {
    let window = web_sys::window()?;
    Some(EventListener::new(&window, "popstate", move |_| callback()))
}
