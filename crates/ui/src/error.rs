use wasm_bindgen::{JsCast, JsValue};

/// Failures of the DOM adapter layer
#[derive(Debug, thiserror::Error)]
pub enum UiError {
    #[error("no global `window` exists")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("missing element: {0}")]
    MissingElement(String),
    #[error("JS error: {0}")]
    Js(String),
}

pub type Result<T> = std::result::Result<T, UiError>;

impl UiError {
    pub fn missing(selector: impl Into<String>) -> Self {
        Self::MissingElement(selector.into())
    }
}

impl From<JsValue> for UiError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                value
                    .dyn_ref::<js_sys::Error>()
                    .map(|e| String::from(e.message()))
            })
            .unwrap_or_else(|| format!("{value:?}"));
        Self::Js(message)
    }
}

impl From<UiError> for JsValue {
    fn from(err: UiError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            UiError::missing("#themeToggle").to_string(),
            "missing element: #themeToggle"
        );
        assert_eq!(UiError::NoWindow.to_string(), "no global `window` exists");
    }
}
