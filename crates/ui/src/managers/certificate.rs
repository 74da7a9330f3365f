//! Certification cards: image placeholders and runtime insertion

use std::rc::Rc;

use folio_web_model::Certificate;
use web_sys::Element;

use super::AnimationManager;
use crate::dom;
use crate::error::Result;

pub struct CertificateManager {
    animations: Option<Rc<AnimationManager>>,
}

impl CertificateManager {
    pub fn new(animations: Option<Rc<AnimationManager>>) -> Result<Rc<Self>> {
        for image in dom::query_all(".certificate-image")? {
            wire_placeholder(&image)?;
        }
        Ok(Rc::new(Self { animations }))
    }

    /// Append a card to `#certificationsGrid`. Fields are escaped, so they show
    /// up literally and cannot inject markup.
    pub fn add_certificate(&self, certificate: &Certificate) -> Result<()> {
        let grid = dom::require_id("certificationsGrid")?;
        grid.insert_adjacent_html("beforeend", &certificate.card_html())?;

        let Some(column) = grid.last_element_child() else {
            return Ok(());
        };
        if let Some(image) = column.query_selector(".certificate-image")? {
            wire_placeholder(&image)?;
        }
        if let (Some(card), Some(animations)) =
            (column.query_selector(".certification-card")?, &self.animations)
        {
            animations.observe(&card);
        }
        tracing::info!("certificate added: {}", certificate.title);
        Ok(())
    }
}

/// Show the sibling `.certificate-placeholder` only while the image is broken
fn wire_placeholder(image: &Element) -> Result<()> {
    let loaded = image.clone();
    dom::listen(image, "load", move |_| {
        set_placeholder_display(&loaded, "none");
    })?;
    let failed = image.clone();
    dom::listen(image, "error", move |_| {
        set_placeholder_display(&failed, "flex");
    })?;
    Ok(())
}

fn set_placeholder_display(image: &Element, display: &str) {
    if let Some(placeholder) = image.next_element_sibling() {
        if placeholder.class_list().contains("certificate-placeholder") {
            dom::set_style(&placeholder, "display", display);
        }
    }
}
