//! Shared helpers: debounce, throttle, smooth scroll, clipboard, notifications

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use folio_web_model::ThrottleGate;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};

use crate::dom;
use crate::error::{Result, UiError};

/// Collapse a burst of calls into one, fired `wait_ms` after the last call
pub fn debounce<F>(handler: F, wait_ms: i32) -> impl FnMut()
where
    F: FnMut() + 'static,
{
    let handler = Rc::new(RefCell::new(handler));
    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

    move || {
        let Ok(win) = dom::window() else { return };
        if let Some(handle) = pending.take() {
            win.clear_timeout_with_handle(handle);
        }

        let handler = handler.clone();
        let pending_fire = pending.clone();
        match dom::set_timeout(
            move || {
                pending_fire.set(None);
                (*handler.borrow_mut())();
            },
            wait_ms,
        ) {
            Ok(handle) => pending.set(Some(handle)),
            Err(e) => tracing::warn!("debounce: timer not scheduled: {e}"),
        }
    }
}

/// Run `handler` at most once per `limit_ms`; extra calls are dropped
pub fn throttle<E, F>(mut handler: F, limit_ms: i32) -> impl FnMut(E)
where
    F: FnMut(E),
{
    let mut gate = ThrottleGate::new(f64::from(limit_ms));
    move |event| {
        if gate.try_pass(dom::now_ms()) {
            handler(event);
        }
    }
}

/// Smooth scroll so that `selector` sits `offset` pixels below the viewport top.
/// Does nothing if no element matches.
pub fn smooth_scroll_to(selector: &str, offset: f64) -> Result<()> {
    let Some(target) = dom::document()?.query_selector(selector)? else {
        return Ok(());
    };
    let Some(target) = dom::as_html(&target) else {
        return Ok(());
    };
    dom::scroll_to_smooth(f64::from(target.offset_top()) - offset)
}

/// Notification flavor, selects the CSS modifier and icon
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Self::Success => "fa-check-circle",
            Self::Error => "fa-exclamation-circle",
        }
    }
}

const NOTIFICATION_STYLE: &str = "position: fixed; top: 20px; right: 20px; \
    padding: 1rem 1.5rem; background: var(--background-primary); \
    border: 1px solid var(--border-color); border-radius: 0.5rem; \
    box-shadow: var(--shadow-medium); z-index: 9999; transform: translateX(100%); \
    transition: transform 0.3s ease; max-width: 300px;";

/// Slide-out transition before a toast leaves the DOM
pub const NOTIFICATION_SLIDE_OUT_MS: i32 = 300;

/// One toast to show
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub kind: NotificationKind,
    pub duration_ms: i32,
}

impl Notice {
    /// Time from showing until the element is removed
    pub const fn removal_delay_ms(&self) -> i32 {
        self.duration_ms + NOTIFICATION_SLIDE_OUT_MS
    }

    pub fn show(&self) -> Result<()> {
        show_notification(&self.message, self.kind, self.duration_ms)
    }
}

/// The single toast reporting a clipboard write
pub fn clipboard_notice(outcome: &Result<()>, success_message: &str, duration_ms: i32) -> Notice {
    let (message, kind) = match outcome {
        Ok(()) => (success_message, NotificationKind::Success),
        Err(_) => ("Failed to copy", NotificationKind::Error),
    };
    Notice {
        message: message.to_string(),
        kind,
        duration_ms,
    }
}

/// Slide-in toast, removed `duration_ms` later (after the slide-out)
pub fn show_notification(message: &str, kind: NotificationKind, duration_ms: i32) -> Result<()> {
    let doc = dom::document()?;
    let notification = doc.create_element("div")?;
    notification.set_class_name(&format!("notification notification-{}", kind.as_str()));

    let content = doc.create_element("div")?;
    content.set_class_name("notification-content");
    let icon = doc.create_element("i")?;
    icon.set_class_name(&format!("fas {}", kind.icon()));
    let text = doc.create_element("span")?;
    // Plain text, never parsed as markup
    text.set_text_content(Some(message));
    content.append_child(&icon)?;
    content.append_child(&text)?;
    notification.append_child(&content)?;
    notification.set_attribute("style", NOTIFICATION_STYLE)?;

    dom::body()?.append_child(&notification)?;

    let slide_in = notification.clone();
    dom::set_timeout(
        move || dom::set_style(&slide_in, "transform", "translateX(0)"),
        10,
    )?;

    dom::set_timeout(
        move || {
            dom::set_style(&notification, "transform", "translateX(100%)");
            let _ = dom::set_timeout(move || notification.remove(), NOTIFICATION_SLIDE_OUT_MS);
        },
        duration_ms,
    )?;
    Ok(())
}

fn clipboard_unavailable() -> UiError {
    UiError::Js("clipboard API unavailable".into())
}

/// Write `text` to the system clipboard
pub async fn copy_to_clipboard(text: &str) -> Result<()> {
    let navigator = dom::window()?.navigator();
    let clipboard = js_sys::Reflect::get(&navigator, &"clipboard".into())?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(clipboard_unavailable());
    }
    let write_text = js_sys::Reflect::get(&clipboard, &"writeText".into())?
        .dyn_into::<js_sys::Function>()
        .map_err(|_| UiError::Js("clipboard.writeText is not a function".into()))?;
    let promise = write_text
        .call1(&clipboard, &text.into())?
        .dyn_into::<js_sys::Promise>()
        .map_err(|_| UiError::Js("clipboard.writeText did not return a promise".into()))?;
    JsFuture::from(promise).await?;
    Ok(())
}

/// Copy in the background and report the outcome with exactly one toast
pub fn copy_with_notification(text: String, success_message: String, duration_ms: i32) {
    spawn_local(async move {
        let outcome = copy_to_clipboard(&text).await;
        if let Err(e) = &outcome {
            tracing::warn!("clipboard write failed: {e}");
        }
        if let Err(e) = clipboard_notice(&outcome, &success_message, duration_ms).show() {
            tracing::warn!("notification not shown: {e}");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_kinds() {
        assert_eq!(NotificationKind::Success.as_str(), "success");
        assert_eq!(NotificationKind::Error.icon(), "fa-exclamation-circle");
    }

    #[test]
    fn test_clipboard_success_notice() {
        let notice = clipboard_notice(&Ok(()), "Email copied to clipboard!", 3000);
        assert_eq!(notice.kind, NotificationKind::Success);
        assert_eq!(notice.message, "Email copied to clipboard!");
        assert_eq!(notice.removal_delay_ms(), 3300);
    }

    #[test]
    fn test_clipboard_failure_notice() {
        let denied = Err(UiError::Js("NotAllowedError: write permission denied".into()));
        let notice = clipboard_notice(&denied, "Email copied to clipboard!", 3000);
        assert_eq!(notice.kind, NotificationKind::Error);
        assert_eq!(notice.message, "Failed to copy");
        assert_eq!(notice.removal_delay_ms(), 3300);
    }

    #[test]
    fn test_missing_clipboard_reports_failure() {
        let missing = Err(clipboard_unavailable());
        let notice = clipboard_notice(&missing, "Phone number copied!", 1500);
        assert_eq!(notice.kind, NotificationKind::Error);
        assert_eq!(notice.removal_delay_ms(), 1800);
    }
}
