//! DOM-free behavior model for folio-web
//!
//! Everything the page script decides without touching the browser lives here:
//! theme state, section geometry, card markup, contact parsing and timing gates.
//! The wasm frontend (`folio-web-ui`) is a thin adapter over these types.

pub mod certificate;
pub mod config;
pub mod contact;
pub mod layout;
pub mod shortcut;
pub mod theme;
pub mod timing;
pub mod typing;

pub use certificate::Certificate;
pub use config::PortfolioConfig;
pub use contact::{format_phone_number, ContactLink};
pub use layout::{active_section, nav_scroll_target, navbar_scrolled, scroll_progress, SectionBounds};
pub use shortcut::Shortcut;
pub use theme::{MemoryStore, PreferenceStore, Theme, ThemeState};
pub use timing::ThrottleGate;
pub use typing::TypingSequence;
