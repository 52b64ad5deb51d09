use fractal_core::Location;
use wasm_bindgen::JsValue;
use web_sys as web;

/// `window.location.hash`, read and written without the leading `#`.
pub struct WebLocation {
    window: web::Window,
}

impl WebLocation {
    pub fn new(window: web::Window) -> Self {
        Self { window }
    }
}

impl Location for WebLocation {
    fn fragment(&self) -> String {
        self.window
            .location()
            .hash()
            .map(|h| h.trim_start_matches('#').to_string())
            .unwrap_or_default()
    }

    fn set_fragment(&mut self, fragment: &str) {
        if let Err(e) = self.window.location().set_hash(fragment) {
            log::warn!("[url] set_hash failed: {:?}", e);
        }
    }

    /// Drops the `#` entirely instead of leaving an empty one behind.
    fn clear_fragment(&mut self) {
        let loc = self.window.location();
        let path = match (loc.pathname(), loc.search()) {
            (Ok(p), Ok(s)) => format!("{}{}", p, s),
            _ => String::new(),
        };
        let Ok(history) = self.window.history() else {
            _ = loc.set_hash("");
            return;
        };
        if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(&path)) {
            log::warn!("[url] replace_state failed: {:?}", e);
        }
    }
}
