//! Portfolio page behavior compiled to WebAssembly: startup, exports and `window` globals

mod app;
mod config;
mod dom;
mod effects;
mod error;
mod managers;
mod util;

use std::cell::RefCell;
use std::rc::Rc;

use folio_web_model::Certificate;
use wasm_bindgen::prelude::*;

use crate::app::PortfolioApp;

thread_local! {
    static APP: RefCell<Option<Rc<PortfolioApp>>> = const { RefCell::new(None) };
}

fn with_app<R>(f: impl FnOnce(&PortfolioApp) -> R) -> Option<R> {
    let app = APP.with(|cell| cell.borrow().clone())?;
    Some(f(&app))
}

#[wasm_bindgen(start)]
pub fn main_js() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let app = PortfolioApp::new(config::load());
    APP.with(|cell| *cell.borrow_mut() = Some(app.clone()));
    app.start()?;
    expose_globals()?;
    Ok(())
}

/// Append a certification card to `#certificationsGrid`
#[wasm_bindgen(js_name = addCertificate)]
pub fn add_certificate(
    title: &str,
    provider: &str,
    year: &str,
    image_url: &str,
    certificate_url: &str,
) -> Result<(), JsValue> {
    let certificate = Certificate::new(title, provider, year, image_url, certificate_url);
    with_app(|app| app.add_certificate(&certificate))
        .transpose()
        .map_err(|e| {
            tracing::error!("addCertificate failed: {e}");
            JsValue::from(e)
        })?;
    Ok(())
}

#[wasm_bindgen(js_name = updateProfilePhoto)]
pub fn update_profile_photo(image_url: &str) {
    with_app(|app| app.update_profile_photo(image_url));
}

#[wasm_bindgen(js_name = toggleTheme)]
pub fn toggle_theme() {
    with_app(PortfolioApp::toggle_theme);
}

/// `window.addCertificate`: throws on failure, like the module export
#[allow(clippy::needless_pass_by_value)]
fn add_certificate_global(
    title: String,
    provider: String,
    year: String,
    image_url: String,
    certificate_url: String,
) -> Result<(), JsValue> {
    add_certificate(&title, &provider, &year, &image_url, &certificate_url)
}

/// Mirror the exports on `window` for inline page scripts
fn expose_globals() -> Result<(), JsValue> {
    let win = web_sys::window().ok_or("No window")?;

    let add = Closure::wrap(Box::new(add_certificate_global)
        as Box<dyn Fn(String, String, String, String, String) -> Result<(), JsValue>>);
    js_sys::Reflect::set(&win, &"addCertificate".into(), add.as_ref())?;
    add.forget();

    let photo = Closure::wrap(Box::new(|image_url: String| update_profile_photo(&image_url))
        as Box<dyn Fn(String)>);
    js_sys::Reflect::set(&win, &"updateProfilePhoto".into(), photo.as_ref())?;
    photo.forget();

    let theme = Closure::wrap(Box::new(toggle_theme) as Box<dyn Fn()>);
    js_sys::Reflect::set(&win, &"toggleTheme".into(), theme.as_ref())?;
    theme.forget();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_certificate_global_is_a_no_op_before_startup() {
        let result = add_certificate_global(
            "Rust Fundamentals".into(),
            "Example Academy".into(),
            "2024".into(),
            "/img/rust.png".into(),
            "https://example.com/cert".into(),
        );
        assert!(result.is_ok());
        assert!(APP.with(|cell| cell.borrow().is_none()));
    }
}
