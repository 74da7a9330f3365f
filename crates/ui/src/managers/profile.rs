use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlImageElement};

use crate::dom;
use crate::error::Result;

/// Profile photo with a placeholder shown while the image is broken.
/// Both elements are optional in the markup.
pub struct ProfilePhotoManager {
    photo: Option<HtmlImageElement>,
}

impl ProfilePhotoManager {
    pub fn new() -> Result<Rc<Self>> {
        let doc = dom::document()?;
        let photo = doc
            .query_selector(".profile-photo")?
            .and_then(|el| el.dyn_into::<HtmlImageElement>().ok());
        let placeholder: Option<HtmlElement> = doc
            .query_selector(".photo-placeholder")?
            .and_then(|el| dom::as_html(&el));

        if let Some(photo) = &photo {
            let on_load = placeholder.clone();
            dom::listen(photo, "load", move |_| {
                if let Some(p) = &on_load {
                    let _ = p.style().set_property("display", "none");
                }
            })?;
            let on_error = placeholder;
            dom::listen(photo, "error", move |_| {
                if let Some(p) = &on_error {
                    let _ = p.style().set_property("display", "flex");
                }
            })?;
        }

        Ok(Rc::new(Self { photo }))
    }

    pub fn update_profile_photo(&self, image_url: &str) {
        if let Some(photo) = &self.photo {
            photo.set_src(image_url);
        }
    }
}
