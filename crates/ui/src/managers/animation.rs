//! Fade-in reveal of page blocks as they scroll into view

use std::rc::Rc;

use folio_web_model::config::ObserverConfig;
use folio_web_model::PortfolioConfig;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};

use crate::dom;
use crate::error::Result;

/// Blocks that get the `fade-in` treatment
const REVEAL_SELECTORS: [&str; 6] = [
    ".stat-item",
    ".education-item",
    ".project-card",
    ".certification-card",
    ".skill-category",
    ".contact-item",
];

pub struct AnimationManager {
    observer: IntersectionObserver,
}

impl AnimationManager {
    pub fn new(config: &PortfolioConfig) -> Result<Rc<Self>> {
        for selector in REVEAL_SELECTORS {
            for element in dom::query_all(selector)? {
                let _ = element.class_list().add_1("fade-in");
            }
        }

        let observer = match reveal_observer(&config.observer) {
            Ok(observer) => observer,
            Err(e) => {
                tracing::warn!("animation: observer options rejected ({e}), using defaults");
                reveal_observer(&ObserverConfig::default())?
            }
        };

        let manager = Rc::new(Self { observer });
        let elements = dom::query_all(".fade-in")?;
        for element in &elements {
            manager.observe(element);
        }
        tracing::debug!("animation: observing {} elements", elements.len());
        Ok(manager)
    }

    /// Watch an element added after startup
    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }
}

fn reveal_observer(options: &ObserverConfig) -> Result<IntersectionObserver> {
    dom::intersection_observer(
        options.reveal_threshold,
        Some(options.reveal_root_margin.as_str()),
        reveal_entry,
    )
}

fn reveal_entry(entry: &IntersectionObserverEntry, observer: &IntersectionObserver) {
    let target = entry.target();
    let visible = target.class_list().contains("visible");
    if is_revealed(visible, entry.is_intersecting()) {
        let _ = target.class_list().add_1("visible");
        // Once visible, the element is no longer watched
        observer.unobserve(&target);
    }
}

/// Reveal is one-way: an element stays revealed once it has intersected
const fn is_revealed(visible: bool, intersecting: bool) -> bool {
    visible || intersecting
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_on_first_intersection() {
        assert!(!is_revealed(false, false));
        assert!(is_revealed(false, true));
    }

    #[test]
    fn test_reveal_never_reverts() {
        let observations = [false, true, false, false, true, false];
        let mut visible = false;
        let mut seen_visible = false;
        for intersecting in observations {
            visible = is_revealed(visible, intersecting);
            if seen_visible {
                assert!(visible, "reveal reverted after scrolling away");
            }
            seen_visible |= visible;
        }
        assert!(visible);
    }
}
