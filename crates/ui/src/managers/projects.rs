//! Hover highlight rippling across a project card's tech tags

use std::rc::Rc;

use folio_web_model::PortfolioConfig;
use web_sys::Element;

use crate::dom;
use crate::error::Result;

const HIGHLIGHT: [(&str, &str); 3] = [
    ("transform", "scale(1.05)"),
    ("background-color", "var(--primary-color)"),
    ("color", "white"),
];

const RESTING: [(&str, &str); 3] = [
    ("transform", "scale(1)"),
    ("background-color", "var(--background-secondary)"),
    ("color", "var(--text-primary)"),
];

pub struct ProjectManager;

impl ProjectManager {
    pub fn new(config: &PortfolioConfig) -> Result<Rc<Self>> {
        let stagger_ms = config.timing.tag_stagger_ms;

        for card in dom::query_all(".project-card")? {
            let tags = Rc::new(dom::query_all_in(&card, ".tech-tag")?);

            let on_enter = tags.clone();
            dom::listen(&card, "mouseenter", move |_| {
                for (index, tag) in on_enter.iter().enumerate() {
                    let tag = tag.clone();
                    let delay = i32::try_from(index)
                        .unwrap_or(i32::MAX)
                        .saturating_mul(stagger_ms);
                    // Pending highlights still land if the pointer already left.
                    let _ = dom::set_timeout(move || apply(&tag, &HIGHLIGHT), delay);
                }
            })?;

            let on_leave = tags;
            dom::listen(&card, "mouseleave", move |_| {
                for tag in on_leave.iter() {
                    apply(tag, &RESTING);
                }
            })?;
        }

        Ok(Rc::new(Self))
    }
}

fn apply(tag: &Element, styles: &[(&str, &str)]) {
    for (property, value) in styles {
        dom::set_style(tag, property, value);
    }
}
