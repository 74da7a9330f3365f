//! Composition root: builds the managers and wires page-wide listeners

use std::cell::RefCell;
use std::rc::Rc;

use folio_web_model::{Certificate, PortfolioConfig, Shortcut};
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

use crate::dom;
use crate::effects;
use crate::error::Result;
use crate::managers::{
    AnimationManager, CertificateManager, ContactManager, NavigationManager, PerformanceManager,
    ProfilePhotoManager, ProjectManager, SkillsManager, ThemeManager,
};
use crate::util;

/// Managers built so far. Startup stops at the first failure, so later
/// slots stay empty.
#[derive(Default)]
struct Managers {
    theme: Option<Rc<ThemeManager>>,
    navigation: Option<Rc<NavigationManager>>,
    animation: Option<Rc<AnimationManager>>,
    certificate: Option<Rc<CertificateManager>>,
    profile: Option<Rc<ProfilePhotoManager>>,
    contact: Option<Rc<ContactManager>>,
    skills: Option<Rc<SkillsManager>>,
    projects: Option<Rc<ProjectManager>>,
    performance: Option<Rc<PerformanceManager>>,
}

pub struct PortfolioApp {
    config: PortfolioConfig,
    managers: RefCell<Managers>,
}

impl PortfolioApp {
    pub fn new(config: PortfolioConfig) -> Rc<Self> {
        Rc::new(Self {
            config,
            managers: RefCell::new(Managers::default()),
        })
    }

    /// Set up now, or on `DOMContentLoaded` while the document is still parsing
    pub fn start(self: &Rc<Self>) -> Result<()> {
        let doc = dom::document()?;
        if doc.ready_state() == "loading" {
            let app = self.clone();
            dom::listen(&doc, "DOMContentLoaded", move |_| app.run_setup())?;
        } else {
            self.run_setup();
        }
        Ok(())
    }

    fn run_setup(self: &Rc<Self>) {
        match self.setup_managers() {
            Ok(()) => tracing::info!("Portfolio app initialized successfully"),
            Err(e) => tracing::error!(
                "Error initializing portfolio app: {e} (running: {:?})",
                self.live_managers()
            ),
        }
    }

    fn setup_managers(self: &Rc<Self>) -> Result<()> {
        let config = &self.config;
        {
            let mut m = self.managers.borrow_mut();
            m.theme = Some(ThemeManager::new(config)?);
            m.navigation = Some(NavigationManager::new(config)?);
            let animation = AnimationManager::new(config)?;
            m.animation = Some(animation.clone());
            m.certificate = Some(CertificateManager::new(Some(animation))?);
            m.profile = Some(ProfilePhotoManager::new()?);
            let contact = ContactManager::new(config)?;
            tracing::debug!("contact links wired: {}", contact.copyable_links());
            m.contact = Some(contact);
            m.skills = Some(SkillsManager::new(config)?);
            m.projects = Some(ProjectManager::new(config)?);
            m.performance = Some(PerformanceManager::new(config)?);
        }

        self.setup_global_events()?;
        self.initialize_additional_features()
    }

    fn setup_global_events(self: &Rc<Self>) -> Result<()> {
        let win = dom::window()?;
        let doc = dom::document()?;

        let app = self.clone();
        let mut on_resize = util::debounce(
            move || app.handle_window_resize(),
            self.config.timing.resize_debounce_ms,
        );
        dom::listen(&win, "resize", move |_| on_resize())?;

        let visibility_doc = doc.clone();
        dom::listen(&doc, "visibilitychange", move |_| {
            let state = if visibility_doc.hidden() { "paused" } else { "running" };
            if let Some(body) = visibility_doc.body() {
                let _ = body.style().set_property("animation-play-state", state);
            }
        })?;

        let app = self.clone();
        dom::listen(&doc, "keydown", move |event| {
            if let Some(key_event) = event.dyn_ref::<KeyboardEvent>() {
                app.handle_keyboard_navigation(key_event);
            }
        })?;
        Ok(())
    }

    fn handle_window_resize(&self) {
        if let Some(navigation) = &self.managers.borrow().navigation {
            navigation.update_active_link();
        }
    }

    fn handle_keyboard_navigation(&self, event: &KeyboardEvent) {
        let Some(shortcut) =
            Shortcut::from_key(&event.key(), event.ctrl_key(), event.meta_key())
        else {
            return;
        };
        event.prevent_default();
        match shortcut {
            Shortcut::ToggleTheme => self.toggle_theme(),
            Shortcut::ScrollHome => {
                if let Err(e) = util::smooth_scroll_to("#home", self.config.navigation.home_offset)
                {
                    tracing::warn!("scroll home failed: {e}");
                }
            }
        }
    }

    fn initialize_additional_features(&self) -> Result<()> {
        effects::setup_typing_effect(self.config.timing.typing_interval_ms)?;
        effects::setup_scroll_progress(self.config.timing.scroll_throttle_ms)
    }

    // Public methods for the page's own scripts

    pub fn add_certificate(&self, certificate: &Certificate) -> Result<()> {
        let certificates = self.managers.borrow().certificate.clone();
        certificates.map_or(Ok(()), |manager| manager.add_certificate(certificate))
    }

    pub fn update_profile_photo(&self, image_url: &str) {
        if let Some(profile) = &self.managers.borrow().profile {
            profile.update_profile_photo(image_url);
        }
    }

    pub fn toggle_theme(&self) {
        let theme = self.managers.borrow().theme.clone();
        if let Some(theme) = theme {
            theme.toggle_theme();
        }
    }

    /// Names of the managers that were constructed, in startup order
    pub fn live_managers(&self) -> Vec<&'static str> {
        let m = self.managers.borrow();
        [
            ("theme", m.theme.is_some()),
            ("navigation", m.navigation.is_some()),
            ("animation", m.animation.is_some()),
            ("certificate", m.certificate.is_some()),
            ("profile", m.profile.is_some()),
            ("contact", m.contact.is_some()),
            ("skills", m.skills.is_some()),
            ("projects", m.projects.is_some()),
            ("performance", m.performance.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, live)| live.then_some(name))
        .collect()
    }
}
