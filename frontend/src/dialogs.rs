//! Blocking alert/confirm dialogs behind a small trait so the view's
//! submit/delete contracts do not hard-code `window.alert` / `window.confirm`.
//! A non-blocking replacement only needs another `DialogService` impl.

use std::rc::Rc;

pub trait DialogService {
    /// Shows a blocking notification to the user.
    fn alert(&self, message: &str);

    /// Asks the user a yes/no question; `false` when the dialog cannot be
    /// shown at all.
    fn confirm(&self, message: &str) -> bool;
}

/// Native browser dialogs.
pub struct BrowserDialogs;

impl DialogService for BrowserDialogs {
    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            window.alert_with_message(message).ok();
        }
    }

    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}

pub fn browser_dialogs() -> Rc<dyn DialogService> {
    Rc::new(BrowserDialogs)
}
