//! Decorative extras: hero typing effect and the scroll progress bar

use folio_web_model::{scroll_progress, TypingSequence};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement};

use crate::dom;
use crate::error::Result;
use crate::util;

const PROGRESS_STYLE: &str = "position: fixed; top: 0; left: 0; width: 0%; height: 3px; \
    background: linear-gradient(90deg, var(--primary-color), var(--accent-color)); \
    z-index: 9999; transition: width 0.1s ease;";

/// Type out `.hero-title[data-typing]`, if the page has one
pub fn setup_typing_effect(interval_ms: i32) -> Result<()> {
    let Some(title) = dom::document()?.query_selector(".hero-title")? else {
        return Ok(());
    };
    match title.get_attribute("data-typing") {
        Some(text) if !text.is_empty() => {
            create_typing_effect(&title, text, interval_ms);
            Ok(())
        }
        _ => Ok(()),
    }
}

/// Clear `element` and reveal `text` one character per `interval_ms`.
/// Runs to completion even if the element is detached meanwhile.
pub fn create_typing_effect(element: &Element, text: String, interval_ms: i32) {
    element.set_text_content(Some(""));
    type_next(element.clone(), TypingSequence::new(text), interval_ms);
}

fn type_next(element: Element, mut sequence: TypingSequence, interval_ms: i32) {
    let Some(prefix) = sequence.next() else {
        return;
    };
    element.set_text_content(Some(&prefix));
    if sequence.is_finished() {
        return;
    }
    if let Err(e) = dom::set_timeout(
        move || type_next(element, sequence, interval_ms),
        interval_ms,
    ) {
        tracing::warn!("typing effect stopped: {e}");
    }
}

/// Thin bar along the top edge tracking how far the page is scrolled
pub fn setup_scroll_progress(throttle_ms: i32) -> Result<()> {
    let doc = dom::document()?;
    let bar = doc.create_element("div")?;
    bar.set_class_name("scroll-progress");
    bar.set_attribute("style", PROGRESS_STYLE)?;
    dom::body()?.append_child(&bar)?;

    let Some(bar) = bar.dyn_ref::<HtmlElement>().cloned() else {
        return Ok(());
    };
    let update = util::throttle(
        move |_event: Event| {
            let percent = current_progress();
            let _ = bar.style().set_property("width", &format!("{percent}%"));
        },
        throttle_ms,
    );
    let win = dom::window()?;
    dom::listen(&win, "scroll", update)
}

fn current_progress() -> f64 {
    let Some(win) = web_sys::window() else {
        return 0.0;
    };
    let scroll_top = win.page_y_offset().unwrap_or(0.0);
    let viewport = win
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    let scroll_height = win
        .document()
        .and_then(|d| d.document_element())
        .map_or(0.0, |root| f64::from(root.scroll_height()));
    scroll_progress(scroll_top, scroll_height, viewport)
}
