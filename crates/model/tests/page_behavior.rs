use folio_web_model::layout::active_position;
use folio_web_model::{
    active_section, nav_scroll_target, Certificate, ContactLink, MemoryStore, PortfolioConfig,
    PreferenceStore, SectionBounds, Shortcut, Theme, ThemeState, TypingSequence,
};

fn sections() -> Vec<SectionBounds> {
    vec![
        SectionBounds::new("home", 0.0, 700.0),
        SectionBounds::new("about", 700.0, 500.0),
        SectionBounds::new("projects", 1200.0, 900.0),
        SectionBounds::new("contact", 2100.0, 400.0),
    ]
}

#[test]
fn test_theme_survives_reload() {
    let config = PortfolioConfig::default();
    let key = &config.theme.storage_key;

    let mut first_visit = ThemeState::load(MemoryStore::new(), key);
    assert_eq!(first_visit.current(), Theme::Light);
    first_visit.toggle();

    // A second page load reads what the first one persisted
    let stored = first_visit.store().get(key);
    let second_visit = ThemeState::load(MemoryStore::with_entry(key, stored.as_deref().unwrap()), key);
    assert_eq!(second_visit.current(), Theme::Dark);
}

#[test]
fn test_nav_click_lands_on_highlighted_section() {
    let config = PortfolioConfig::default();
    let navbar_height = 72.0;
    let sections = sections();

    for section in &sections {
        let scroll_y = nav_scroll_target(section.top, navbar_height, config.navigation.link_offset);
        let position = active_position(scroll_y.max(0.0), navbar_height, config.navigation.active_offset);
        let active = active_section(&sections, position).map(|s| s.id.as_str());
        assert_eq!(active, Some(section.id.as_str()), "after clicking #{}", section.id);
    }
}

#[test]
fn test_keyboard_shortcuts() {
    assert_eq!(Shortcut::from_key("d", true, false), Some(Shortcut::ToggleTheme));
    assert_eq!(Shortcut::from_key("h", false, true), Some(Shortcut::ScrollHome));
    assert_eq!(Shortcut::from_key("d", false, false), None);
}

#[test]
fn test_certificate_card_round_trip_through_markup() {
    let cert = Certificate::new(
        "Systems & <Safety>",
        "O'Reilly",
        "2025",
        "/img/cert.png?size=large&fmt=png",
        "https://example.com/c?id=1&v=\"2\"",
    );
    let html = cert.card_html();
    assert!(html.contains("Systems &amp; &lt;Safety&gt;"));
    assert!(html.contains("O&#39;Reilly"));
    assert!(html.contains("/img/cert.png?size=large&amp;fmt=png"));
    assert!(html.contains("https://example.com/c?id=1&amp;v=&quot;2&quot;"));
    assert_eq!(html.matches("certification-title").count(), 1);
}

#[test]
fn test_contact_links() {
    let email = ContactLink::parse("mailto:hello@example.dev").unwrap();
    assert_eq!(email.copy_text(), "hello@example.dev");
    assert_eq!(email.display(), "hello@example.dev");

    let phone = ContactLink::parse("tel:+919876543210").unwrap();
    assert_eq!(phone.copy_text(), "+919876543210");
    assert_eq!(phone.display(), "+91 9876-543210");

    assert!(ContactLink::parse("https://linkedin.com/in/someone").is_none());
}

#[test]
fn test_typing_effect_reaches_full_text() {
    let text = "Hello, I'm a developer";
    let last = TypingSequence::new(text).last();
    assert_eq!(last.as_deref(), Some(text));
    assert_eq!(TypingSequence::new(text).count(), text.chars().count());
}
