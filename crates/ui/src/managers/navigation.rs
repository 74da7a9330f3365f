//! Smooth-scroll nav links and scroll-driven active link highlighting

use std::rc::Rc;

use folio_web_model::config::NavigationConfig;
use folio_web_model::layout::{active_position, active_section, nav_scroll_target, navbar_scrolled};
use folio_web_model::{PortfolioConfig, SectionBounds};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::dom;
use crate::error::Result;

pub struct NavigationManager {
    navbar: HtmlElement,
    links: Vec<Element>,
    sections: Vec<HtmlElement>,
    config: NavigationConfig,
}

impl NavigationManager {
    pub fn new(config: &PortfolioConfig) -> Result<Rc<Self>> {
        let navbar = dom::require_html(".main-navigation")?;
        let links = dom::query_all(".navigation-link")?;
        let sections = dom::query_all("section[id]")?
            .iter()
            .filter_map(dom::as_html)
            .collect();

        let manager = Rc::new(Self {
            navbar,
            links,
            sections,
            config: config.navigation.clone(),
        });
        manager.bind_events()?;
        manager.update_active_link();
        tracing::debug!(
            "navigation: {} links, {} sections",
            manager.links.len(),
            manager.sections.len()
        );
        Ok(manager)
    }

    fn bind_events(self: &Rc<Self>) -> Result<()> {
        for link in &self.links {
            let manager = self.clone();
            let target = link.clone();
            dom::listen(link, "click", move |event| {
                event.prevent_default();
                manager.scroll_to_link_target(&target);
            })?;
        }

        let manager = self.clone();
        let win = dom::window()?;
        dom::listen(&win, "scroll", move |_| {
            manager.update_active_link();
            manager.update_navbar_background();
        })?;
        Ok(())
    }

    fn navbar_height(&self) -> f64 {
        f64::from(self.navbar.offset_height())
    }

    fn scroll_to_link_target(&self, link: &Element) {
        if let Some(href) = link.get_attribute("href") {
            // href is "#section-id", which doubles as a selector
            match dom::document().and_then(|doc| Ok(doc.query_selector(&href)?)) {
                Ok(Some(section)) => {
                    if let Some(section) = dom::as_html(&section) {
                        let top = nav_scroll_target(
                            f64::from(section.offset_top()),
                            self.navbar_height(),
                            self.config.link_offset,
                        );
                        if let Err(e) = dom::scroll_to_smooth(top) {
                            tracing::warn!("navigation: scroll failed: {e}");
                        }
                    }
                }
                Ok(None) => {}
                Err(e) => tracing::warn!("navigation: bad link target {href:?}: {e}"),
            }
        }

        collapse_mobile_menu();
    }

    /// Geometry of every `section[id]` as currently laid out
    pub fn section_bounds(&self) -> Vec<SectionBounds> {
        self.sections
            .iter()
            .map(|section| {
                SectionBounds::new(
                    section.id(),
                    f64::from(section.offset_top()),
                    f64::from(section.offset_height()),
                )
            })
            .collect()
    }

    /// Mark the link of the section under the navbar as `active`; every other
    /// link (all of them, between sections) loses the mark.
    pub fn update_active_link(&self) {
        let position = active_position(dom::scroll_y(), self.navbar_height(), self.config.active_offset);
        let bounds = self.section_bounds();
        let active_href = active_section(&bounds, position).map(|s| format!("#{}", s.id));

        for link in &self.links {
            let is_active = active_href.is_some() && link.get_attribute("href") == active_href;
            let _ = link.class_list().toggle_with_force("active", is_active);
        }
    }

    fn update_navbar_background(&self) {
        let scrolled = navbar_scrolled(dom::scroll_y(), self.config.scrolled_threshold);
        let _ = self.navbar.class_list().toggle_with_force("scrolled", scrolled);
    }
}

/// Close the expanded mobile menu, through Bootstrap when it is loaded
fn collapse_mobile_menu() {
    let Ok(Some(menu)) = dom::document().and_then(|doc| Ok(doc.query_selector(".navbar-collapse")?))
    else {
        return;
    };
    if !menu.class_list().contains("show") {
        return;
    }
    if !hide_with_bootstrap(&menu) {
        let _ = menu.class_list().remove_1("show");
    }
}

/// `bootstrap.Collapse.getOrCreateInstance(menu).hide()`
fn hide_with_bootstrap(menu: &Element) -> bool {
    let Some(win) = web_sys::window() else {
        return false;
    };
    let call = || -> std::result::Result<(), wasm_bindgen::JsValue> {
        let bootstrap = js_sys::Reflect::get(&win, &"bootstrap".into())?;
        let collapse = js_sys::Reflect::get(&bootstrap, &"Collapse".into())?;
        let factory: js_sys::Function =
            js_sys::Reflect::get(&collapse, &"getOrCreateInstance".into())?.dyn_into()?;
        let instance = factory.call1(&collapse, menu)?;
        let hide: js_sys::Function = js_sys::Reflect::get(&instance, &"hide".into())?.dyn_into()?;
        hide.call0(&instance)?;
        Ok(())
    };
    call().is_ok()
}
