//! Thin helpers over `web-sys` shared by the managers

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, NodeList, ScrollBehavior,
    ScrollToOptions, Window,
};

use crate::error::{Result, UiError};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(UiError::NoWindow)
}

/// Get document helper
pub fn document() -> Result<Document> {
    window()?.document().ok_or(UiError::NoDocument)
}

pub fn body() -> Result<HtmlElement> {
    document()?.body().ok_or_else(|| UiError::missing("body"))
}

/// First match for `selector`, or `MissingElement`
pub fn require(selector: &str) -> Result<Element> {
    document()?
        .query_selector(selector)?
        .ok_or_else(|| UiError::missing(selector))
}

pub fn require_id(id: &str) -> Result<Element> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| UiError::missing(format!("#{id}")))
}

/// All document matches for `selector`
pub fn query_all(selector: &str) -> Result<Vec<Element>> {
    Ok(elements(&document()?.query_selector_all(selector)?))
}

/// All descendants of `root` matching `selector`
pub fn query_all_in(root: &Element, selector: &str) -> Result<Vec<Element>> {
    Ok(elements(&root.query_selector_all(selector)?))
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn as_html(el: &Element) -> Option<HtmlElement> {
    el.dyn_ref::<HtmlElement>().cloned()
}

pub fn require_html(selector: &str) -> Result<HtmlElement> {
    as_html(&require(selector)?).ok_or_else(|| UiError::missing(selector))
}

/// Set one inline style property, ignoring elements without a style object
pub fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(html_el) = el.dyn_ref::<HtmlElement>() {
        let _ = html_el.style().set_property(property, value);
    }
}

/// Attach an event listener for the lifetime of the page
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

/// One-shot timer. Not cancellable: the callback runs even if whatever it
/// touches has left the document.
pub fn set_timeout<F>(callback: F, delay_ms: i32) -> Result<i32>
where
    F: FnOnce() + 'static,
{
    let callback = Closure::once_into_js(callback);
    Ok(window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        delay_ms,
    )?)
}

/// Animated window scroll to an absolute document offset
pub fn scroll_to_smooth(top: f64) -> Result<()> {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window()?.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

/// High resolution timestamp in milliseconds
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map_or_else(js_sys::Date::now, |p| p.now())
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Build an `IntersectionObserver` that hands every entry to `on_entry`
pub fn intersection_observer<F>(
    threshold: f64,
    root_margin: Option<&str>,
    mut on_entry: F,
) -> Result<IntersectionObserver>
where
    F: FnMut(&IntersectionObserverEntry, &IntersectionObserver) + 'static,
{
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for i in 0..entries.length() {
                if let Ok(entry) = entries.get(i).dyn_into::<IntersectionObserverEntry>() {
                    on_entry(&entry, &observer);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        options.set_root_margin(margin);
    }

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();
    Ok(observer)
}
