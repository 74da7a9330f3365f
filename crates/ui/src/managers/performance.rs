//! Lazy images, throttled scroll hook and stylesheet preload hints

use std::rc::Rc;

use folio_web_model::PortfolioConfig;
use web_sys::{Event, IntersectionObserver};

use crate::dom;
use crate::error::{Result, UiError};
use crate::util;

pub struct PerformanceManager {
    _lazy_images: IntersectionObserver,
}

impl PerformanceManager {
    pub fn new(config: &PortfolioConfig) -> Result<Rc<Self>> {
        let lazy_images = lazy_load_images()?;
        optimize_scroll_events(config.timing.scroll_throttle_ms)?;
        preload_resources(&config.preload.stylesheets)?;
        Ok(Rc::new(Self {
            _lazy_images: lazy_images,
        }))
    }
}

/// Swap `data-src` into `src` the first time an image nears the viewport
fn lazy_load_images() -> Result<IntersectionObserver> {
    let observer = dom::intersection_observer(0.0, None, |entry, observer| {
        if !entry.is_intersecting() {
            return;
        }
        let image = entry.target();
        if let Some(src) = image.get_attribute("data-src") {
            let _ = image.set_attribute("src", &src);
            let _ = image.remove_attribute("data-src");
        }
        observer.unobserve(&image);
    })?;

    let images = dom::query_all("img[data-src]")?;
    for image in &images {
        observer.observe(image);
    }
    tracing::debug!("performance: {} lazy images", images.len());
    Ok(observer)
}

fn optimize_scroll_events(limit_ms: i32) -> Result<()> {
    let on_scroll = util::throttle(
        |_event: Event| tracing::trace!("scroll at {}", dom::scroll_y()),
        limit_ms,
    );
    let win = dom::window()?;
    dom::listen(&win, "scroll", on_scroll)
}

fn preload_resources(stylesheets: &[String]) -> Result<()> {
    let doc = dom::document()?;
    let head = doc.head().ok_or_else(|| UiError::missing("head"))?;
    for href in stylesheets {
        let link = doc.create_element("link")?;
        link.set_attribute("rel", "preload")?;
        link.set_attribute("href", href)?;
        link.set_attribute("as", "style")?;
        head.append_child(&link)?;
    }
    Ok(())
}
