//! Page keyboard shortcuts

/// Action bound to a Ctrl/Cmd key chord
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    /// Ctrl/Cmd+D
    ToggleTheme,
    /// Ctrl/Cmd+H
    ScrollHome,
}

impl Shortcut {
    /// Map a `keydown` to a shortcut. Requires Ctrl or Meta; `key` is the
    /// event's `key` value and is matched case-sensitively like the browser reports it.
    pub fn from_key(key: &str, ctrl: bool, meta: bool) -> Option<Self> {
        if !(ctrl || meta) {
            return None;
        }
        match key {
            "d" => Some(Self::ToggleTheme),
            "h" => Some(Self::ScrollHome),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_modifier() {
        assert_eq!(Shortcut::from_key("d", false, false), None);
        assert_eq!(Shortcut::from_key("h", false, false), None);
    }

    #[test]
    fn test_ctrl_and_meta() {
        assert_eq!(Shortcut::from_key("d", true, false), Some(Shortcut::ToggleTheme));
        assert_eq!(Shortcut::from_key("d", false, true), Some(Shortcut::ToggleTheme));
        assert_eq!(Shortcut::from_key("h", true, true), Some(Shortcut::ScrollHome));
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(Shortcut::from_key("D", true, false), None);
        assert_eq!(Shortcut::from_key("s", true, false), None);
        assert_eq!(Shortcut::from_key("Control", true, false), None);
    }
}
