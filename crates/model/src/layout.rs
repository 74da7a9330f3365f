//! Section geometry and scroll arithmetic

/// Geometry snapshot of one `section[id]`, in document pixels
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    /// Half-open range `[top, top + height)`
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

/// Section whose range contains `position`.
///
/// Linear scan over every section; if ranges overlap the last match wins.
/// `None` when the position falls between (or outside) all sections.
pub fn active_section(sections: &[SectionBounds], position: f64) -> Option<&SectionBounds> {
    sections.iter().rev().find(|s| s.contains(position))
}

/// Probe position used for active-link highlighting
pub fn active_position(scroll_y: f64, navbar_height: f64, offset: f64) -> f64 {
    scroll_y + navbar_height + offset
}

/// Scroll target that lands a section just below the fixed navbar
pub fn nav_scroll_target(section_top: f64, navbar_height: f64, margin: f64) -> f64 {
    section_top - navbar_height - margin
}

/// Whether the navbar should switch to its scrolled appearance
pub fn navbar_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Scroll progress in percent: `100 * scroll_top / (scroll_height - viewport_height)`.
///
/// Not clamped. A page that cannot scroll (`scroll_height <= viewport_height`)
/// reports 0 rather than dividing by zero.
pub fn scroll_progress(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    scroll_top / scrollable * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn page() -> Vec<SectionBounds> {
        vec![
            SectionBounds::new("home", 0.0, 600.0),
            SectionBounds::new("about", 600.0, 400.0),
            // gap between 1000 and 1200
            SectionBounds::new("projects", 1200.0, 800.0),
        ]
    }

    #[test]
    fn test_active_section_inside() {
        let sections = page();
        assert_eq!(active_section(&sections, 0.0).map(|s| s.id.as_str()), Some("home"));
        assert_eq!(active_section(&sections, 600.0).map(|s| s.id.as_str()), Some("about"));
        assert_eq!(active_section(&sections, 1999.0).map(|s| s.id.as_str()), Some("projects"));
    }

    #[test]
    fn test_active_section_between_sections() {
        let sections = page();
        assert!(active_section(&sections, 1000.0).is_none());
        assert!(active_section(&sections, 1100.0).is_none());
        assert!(active_section(&sections, 2000.0).is_none());
        assert!(active_section(&sections, -1.0).is_none());
    }

    #[test]
    fn test_overlap_last_wins() {
        let sections = vec![
            SectionBounds::new("a", 0.0, 500.0),
            SectionBounds::new("b", 400.0, 500.0),
        ];
        assert_eq!(active_section(&sections, 450.0).map(|s| s.id.as_str()), Some("b"));
    }

    #[test]
    fn test_nav_scroll_target() {
        assert!((nav_scroll_target(1200.0, 70.0, 20.0) - 1110.0).abs() < f64::EPSILON);
        assert!((active_position(300.0, 70.0, 50.0) - 420.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_navbar_scrolled_threshold() {
        assert!(!navbar_scrolled(50.0, 50.0));
        assert!(navbar_scrolled(50.5, 50.0));
    }

    #[test]
    fn test_scroll_progress_unscrollable_page() {
        assert!(scroll_progress(0.0, 800.0, 800.0).abs() < f64::EPSILON);
        assert!(scroll_progress(10.0, 600.0, 800.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_scroll_progress_not_clamped() {
        // Overscroll (rubber banding) reports past 100
        assert!((scroll_progress(1100.0, 2000.0, 1000.0) - 110.0).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn progress_matches_formula(top in 0.0f64..10_000.0, viewport in 1.0f64..2_000.0, extra in 1.0f64..10_000.0) {
            let height = viewport + extra;
            let expected = 100.0 * top / (height - viewport);
            prop_assert!((scroll_progress(top, height, viewport) - expected).abs() <= 1e-9 * expected.max(1.0));
        }

        #[test]
        fn contiguous_sections_match_exactly_one(heights in proptest::collection::vec(1.0f64..2_000.0, 1..12), frac in 0.0f64..0.999) {
            let mut top = 0.0;
            let sections: Vec<_> = heights
                .iter()
                .enumerate()
                .map(|(i, h)| {
                    let s = SectionBounds::new(format!("s{i}"), top, *h);
                    top += h;
                    s
                })
                .collect();
            let position = top * frac;
            let matching = sections.iter().filter(|s| s.contains(position)).count();
            prop_assert_eq!(matching, 1);
            prop_assert!(active_section(&sections, position).is_some());
        }
    }
}
