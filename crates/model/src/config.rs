//! Configuration for folio-web
//!
//! Defaults match the stock portfolio markup. A page may override single
//! values through `window.PORTFOLIO_CONFIG` (flat keys, see [`PortfolioConfig::apply`]).

/// Theme persistence
#[derive(Debug, Clone)]
pub struct ThemeConfig {
    pub storage_key: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "portfolio-theme".to_string(),
        }
    }
}

/// Navigation offsets, in CSS pixels
#[derive(Debug, Clone)]
pub struct NavigationConfig {
    /// Gap left above a section after clicking its nav link
    pub link_offset: f64,
    /// Added to scroll position + navbar height when picking the active link
    pub active_offset: f64,
    /// Scroll distance after which the navbar gets its `scrolled` class
    pub scrolled_threshold: f64,
    /// Offset used by the Ctrl/Cmd+H shortcut
    pub home_offset: f64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            link_offset: 20.0,
            active_offset: 50.0,
            scrolled_threshold: 50.0,
            home_offset: 80.0,
        }
    }
}

/// Delays and rate limits, in milliseconds
#[derive(Debug, Clone)]
pub struct TimingConfig {
    pub resize_debounce_ms: i32,
    pub scroll_throttle_ms: i32,
    pub typing_interval_ms: i32,
    pub contact_navigate_delay_ms: i32,
    pub toast_duration_ms: i32,
    pub tag_stagger_ms: i32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            resize_debounce_ms: 250,
            scroll_throttle_ms: 16,
            typing_interval_ms: 100,
            contact_navigate_delay_ms: 1000,
            toast_duration_ms: 3000,
            tag_stagger_ms: 50,
        }
    }
}

/// Intersection observer tuning
#[derive(Debug, Clone)]
pub struct ObserverConfig {
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub skill_threshold: f64,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px".to_string(),
            skill_threshold: 0.5,
        }
    }
}

/// Stylesheets announced with `<link rel="preload">`
#[derive(Debug, Clone)]
pub struct PreloadConfig {
    pub stylesheets: Vec<String>,
}

impl Default for PreloadConfig {
    fn default() -> Self {
        Self {
            stylesheets: vec![
                "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css"
                    .to_string(),
                "https://cdnjs.cloudflare.com/ajax/libs/bootstrap/5.3.0/css/bootstrap.min.css"
                    .to_string(),
            ],
        }
    }
}

/// Full page configuration
#[derive(Debug, Clone, Default)]
pub struct PortfolioConfig {
    pub theme: ThemeConfig,
    pub navigation: NavigationConfig,
    pub timing: TimingConfig,
    pub observer: ObserverConfig,
    pub preload: PreloadConfig,
}

impl PortfolioConfig {
    /// Override one value by flat key. Unknown keys, unparsable values and
    /// values out of range are ignored; returns whether anything changed.
    pub fn apply(&mut self, key: &str, value: &str) -> bool {
        let value = value.trim();
        match key {
            "themeStorageKey" if !value.is_empty() => {
                self.theme.storage_key = value.to_string();
                true
            }
            "linkOffset" => set_offset(&mut self.navigation.link_offset, value),
            "activeOffset" => set_offset(&mut self.navigation.active_offset, value),
            "scrolledThreshold" => set_offset(&mut self.navigation.scrolled_threshold, value),
            "homeOffset" => set_offset(&mut self.navigation.home_offset, value),
            "resizeDebounceMs" => set_millis(&mut self.timing.resize_debounce_ms, value),
            "scrollThrottleMs" => set_millis(&mut self.timing.scroll_throttle_ms, value),
            "typingIntervalMs" => set_millis(&mut self.timing.typing_interval_ms, value),
            "contactNavigateDelayMs" => {
                set_millis(&mut self.timing.contact_navigate_delay_ms, value)
            }
            "toastDurationMs" => set_millis(&mut self.timing.toast_duration_ms, value),
            "tagStaggerMs" => set_millis(&mut self.timing.tag_stagger_ms, value),
            "revealThreshold" => set_ratio(&mut self.observer.reveal_threshold, value),
            "revealRootMargin" if is_root_margin(value) => {
                self.observer.reveal_root_margin = value.to_string();
                true
            }
            "skillThreshold" => set_ratio(&mut self.observer.skill_threshold, value),
            _ => false,
        }
    }
}

fn set_if<T: std::str::FromStr>(slot: &mut T, value: &str, valid: impl Fn(&T) -> bool) -> bool {
    match value.parse::<T>() {
        Ok(parsed) if valid(&parsed) => {
            *slot = parsed;
            true
        }
        _ => false,
    }
}

fn set_offset(slot: &mut f64, value: &str) -> bool {
    set_if(slot, value, |v| v.is_finite())
}

fn set_millis(slot: &mut i32, value: &str) -> bool {
    set_if(slot, value, |v| *v >= 0)
}

/// Intersection thresholds live in `[0, 1]`
fn set_ratio(slot: &mut f64, value: &str) -> bool {
    set_if(slot, value, |v| (0.0..=1.0).contains(v))
}

/// CSS margin shorthand as accepted by `IntersectionObserver`: one to four
/// lengths, each in `px` or `%`.
pub fn is_root_margin(value: &str) -> bool {
    let parts: Vec<&str> = value.split_whitespace().collect();
    (1..=4).contains(&parts.len())
        && parts.iter().all(|part| {
            let number = part
                .strip_suffix("px")
                .or_else(|| part.strip_suffix('%'))
                .unwrap_or(part);
            // Bare zero is the only unitless length
            if number.len() == part.len() {
                return number.parse::<f64>().is_ok_and(|n| n == 0.0);
            }
            number.parse::<f64>().is_ok_and(f64::is_finite)
        })
}
