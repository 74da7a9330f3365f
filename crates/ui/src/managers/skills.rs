use std::rc::Rc;

use folio_web_model::PortfolioConfig;
use web_sys::{Element, IntersectionObserver};

use crate::dom;
use crate::error::Result;

/// Longest random animation delay, in seconds
const MAX_SKILL_DELAY_S: f64 = 0.5;

/// Staggered entrance for `.skill-item` badges once half visible
pub struct SkillsManager {
    _observer: IntersectionObserver,
}

impl SkillsManager {
    pub fn new(config: &PortfolioConfig) -> Result<Rc<Self>> {
        let observer =
            dom::intersection_observer(config.observer.skill_threshold, None, |entry, _| {
                if entry.is_intersecting() {
                    animate_skill(&entry.target());
                }
            })?;

        for skill in dom::query_all(".skill-item")? {
            observer.observe(&skill);
        }
        Ok(Rc::new(Self {
            _observer: observer,
        }))
    }
}

fn animate_skill(skill: &Element) {
    let delay = rand::random::<f64>() * MAX_SKILL_DELAY_S;
    dom::set_style(skill, "animation-delay", &format!("{delay}s"));
    let _ = skill.class_list().add_1("skill-animate");
}
