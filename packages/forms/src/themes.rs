//! Theme picker. The choice is kept for the session only.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub premium: bool,
}

pub const THEMES: [Theme; 4] = [
    Theme {
        id: "minimal",
        name: "Minimal",
        description: "Clean, simple, and elegant design",
        premium: false,
    },
    Theme {
        id: "dark",
        name: "Dark Mode",
        description: "Sleek dark theme for night viewing",
        premium: false,
    },
    Theme {
        id: "gradient",
        name: "Gradient",
        description: "Beautiful color gradients for a modern look",
        premium: true,
    },
    Theme {
        id: "retro",
        name: "Retro",
        description: "Vintage vibes with nostalgic elements",
        premium: true,
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeOutcome {
    Applied(Theme),
    Premium(Theme),
    Unknown,
}

impl ThemeOutcome {
    /// `(title, description)` for the toast.
    pub fn toast(&self) -> (String, String) {
        match self {
            ThemeOutcome::Applied(theme) => (
                "Theme Applied".to_string(),
                format!("The {} theme has been applied.", theme.name),
            ),
            ThemeOutcome::Premium(_) => (
                "Premium Theme".to_string(),
                "This is a premium theme. Upgrade to access it!".to_string(),
            ),
            ThemeOutcome::Unknown => ("Unknown theme".to_string(), String::new()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemePicker {
    active: &'static str,
}

impl Default for ThemePicker {
    fn default() -> Self {
        Self { active: THEMES[0].id }
    }
}

impl ThemePicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> &'static str {
        self.active
    }

    pub fn apply(&mut self, id: &str) -> ThemeOutcome {
        match THEMES.iter().find(|t| t.id == id) {
            Some(theme) if theme.premium => ThemeOutcome::Premium(*theme),
            Some(theme) => {
                self.active = theme.id;
                ThemeOutcome::Applied(*theme)
            }
            None => ThemeOutcome::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_theme_applies() {
        let mut picker = ThemePicker::new();
        assert_eq!(picker.active(), "minimal");
        assert!(matches!(picker.apply("dark"), ThemeOutcome::Applied(_)));
        assert_eq!(picker.active(), "dark");
    }

    #[test]
    fn test_premium_theme_refused() {
        let mut picker = ThemePicker::new();
        let outcome = picker.apply("retro");
        assert!(matches!(outcome, ThemeOutcome::Premium(_)));
        assert_eq!(picker.active(), "minimal");
        assert_eq!(outcome.toast().0, "Premium Theme");
    }
}
