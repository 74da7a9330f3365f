//! Light/dark toggle bound to `#themeToggle`

use std::cell::RefCell;
use std::rc::Rc;

use folio_web_model::{PortfolioConfig, PreferenceStore, Theme, ThemeState};
use web_sys::{Element, Storage};

use crate::dom;
use crate::error::{Result, UiError};

/// `window.localStorage`; unavailable storage reads as empty and drops writes
pub struct LocalStorageStore {
    storage: Option<Storage>,
}

impl LocalStorageStore {
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            tracing::warn!("localStorage unavailable, theme will not persist");
        }
        Self { storage }
    }
}

impl PreferenceStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            let _ = storage.set_item(key, value);
        }
    }
}

pub struct ThemeManager {
    root: Element,
    icon: Element,
    state: RefCell<ThemeState<LocalStorageStore>>,
}

impl ThemeManager {
    pub fn new(config: &PortfolioConfig) -> Result<Rc<Self>> {
        let button = dom::require_id("themeToggle")?;
        let icon = button
            .query_selector(".theme-icon")?
            .ok_or_else(|| UiError::missing("#themeToggle .theme-icon"))?;
        let root = dom::document()?
            .document_element()
            .ok_or_else(|| UiError::missing("html"))?;

        let state = ThemeState::load(LocalStorageStore::open(), &config.theme.storage_key);
        let manager = Rc::new(Self {
            root,
            icon,
            state: RefCell::new(state),
        });
        manager.apply();

        let on_click = manager.clone();
        dom::listen(&button, "click", move |_| on_click.toggle_theme())?;

        Ok(manager)
    }

    pub fn current(&self) -> Theme {
        self.state.borrow().current()
    }

    pub fn toggle_theme(&self) {
        let theme = self.state.borrow_mut().toggle();
        tracing::debug!("theme -> {theme}");
        self.apply();
    }

    fn apply(&self) {
        let theme = self.current();
        let _ = self.root.set_attribute("data-theme", theme.as_str());
        self.icon.set_class_name(theme.icon_class());
    }
}
