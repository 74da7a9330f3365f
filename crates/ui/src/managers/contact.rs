//! Click-to-copy on `mailto:` / `tel:` contact links

use std::rc::Rc;

use folio_web_model::{ContactLink, PortfolioConfig};

use crate::dom;
use crate::error::Result;
use crate::util;

pub struct ContactManager {
    copyable: usize,
}

impl ContactManager {
    pub fn new(config: &PortfolioConfig) -> Result<Rc<Self>> {
        let navigate_delay = config.timing.contact_navigate_delay_ms;
        let toast_ms = config.timing.toast_duration_ms;
        let mut copyable = 0;

        for anchor in dom::query_all(".contact-details a")? {
            let Some(href) = anchor.get_attribute("href") else {
                continue;
            };
            let Some(link) = ContactLink::parse(&href) else {
                continue;
            };
            copyable += 1;

            dom::listen(&anchor, "click", move |event| {
                event.prevent_default();
                util::copy_with_notification(
                    link.copy_text().to_string(),
                    format!("Copied {} to clipboard!", link.display()),
                    toast_ms,
                );

                // The mail client / dialer still opens, a moment later
                let href = href.clone();
                let scheduled = dom::set_timeout(
                    move || {
                        if let Ok(win) = dom::window() {
                            let _ = win.location().set_href(&href);
                        }
                    },
                    navigate_delay,
                );
                if let Err(e) = scheduled {
                    tracing::warn!("contact: navigation not scheduled: {e}");
                }
            })?;
        }

        tracing::debug!("contact: {copyable} copyable links");
        Ok(Rc::new(Self { copyable }))
    }

    pub const fn copyable_links(&self) -> usize {
        self.copyable
    }
}
