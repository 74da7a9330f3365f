use folio_web_model::PortfolioConfig;
use wasm_bindgen::{JsCast, JsValue};

/// Global the host page may define before the module loads
const CONFIG_GLOBAL: &str = "PORTFOLIO_CONFIG";

/// Defaults, overridden by `window.PORTFOLIO_CONFIG` entries when present
pub fn load() -> PortfolioConfig {
    let mut config = PortfolioConfig::default();

    let Some(win) = web_sys::window() else {
        return config;
    };
    let Ok(overrides) = js_sys::Reflect::get(&win, &CONFIG_GLOBAL.into()) else {
        return config;
    };
    if !overrides.is_object() {
        return config;
    }

    let entries = js_sys::Object::entries(overrides.unchecked_ref::<js_sys::Object>());
    for entry in entries.iter() {
        let pair = js_sys::Array::from(&entry);
        let Some(key) = pair.get(0).as_string() else {
            continue;
        };
        let Some(value) = scalar_to_string(&pair.get(1)) else {
            tracing::warn!("{CONFIG_GLOBAL}.{key}: expected a string or number");
            continue;
        };
        if config.apply(&key, &value) {
            tracing::debug!("config override {key} = {value}");
        } else {
            tracing::warn!("{CONFIG_GLOBAL}.{key}: ignored");
        }
    }

    config
}

fn scalar_to_string(value: &JsValue) -> Option<String> {
    value
        .as_string()
        .or_else(|| value.as_f64().map(|n| n.to_string()))
}
