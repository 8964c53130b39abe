//! # Theme Vocabulary & User Preferences
//!
//! The fixed, closed vocabulary of song themes plus the per-request fact base
//! the rule engine evaluates against.
//!
//! - Theme names resolve case-insensitively ("heartbreak" == "HeartBreak").
//! - Names outside the vocabulary resolve to `None`; callers log and skip them.
//! - `UserPreferences` is built fresh per request and owns the score map the
//!   scorer fills in; it is never shared across requests.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

/// The fixed vocabulary of song themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Theme {
    Adventure,
    America,
    CarsTrucksTractors,
    Goodtimes,
    Grit,
    Home,
    Love,
    HeartBreak,
    Lessons,
    Rebellion,
}

/// Every vocabulary theme, in declaration order.
pub const ALL_THEMES: [Theme; 10] = [
    Theme::Adventure,
    Theme::America,
    Theme::CarsTrucksTractors,
    Theme::Goodtimes,
    Theme::Grit,
    Theme::Home,
    Theme::Love,
    Theme::HeartBreak,
    Theme::Lessons,
    Theme::Rebellion,
];

impl Theme {
    /// Resolve a theme name case-insensitively.
    /// Returns `None` for anything outside the vocabulary.
    pub fn resolve(name: &str) -> Option<Theme> {
        match name.to_ascii_lowercase().as_str() {
            "adventure" => Some(Theme::Adventure),
            "america" => Some(Theme::America),
            "carstruckstractors" => Some(Theme::CarsTrucksTractors),
            "goodtimes" => Some(Theme::Goodtimes),
            "grit" => Some(Theme::Grit),
            "home" => Some(Theme::Home),
            "love" => Some(Theme::Love),
            "heartbreak" => Some(Theme::HeartBreak),
            "lessons" => Some(Theme::Lessons),
            "rebellion" => Some(Theme::Rebellion),
            _ => None,
        }
    }

    /// Canonical display name (matches the catalog's camelCase keys).
    pub fn name(&self) -> &'static str {
        match self {
            Theme::Adventure => "adventure",
            Theme::America => "america",
            Theme::CarsTrucksTractors => "carsTrucksTractors",
            Theme::Goodtimes => "goodtimes",
            Theme::Grit => "grit",
            Theme::Home => "home",
            Theme::Love => "love",
            Theme::HeartBreak => "heartbreak",
            Theme::Lessons => "lessons",
            Theme::Rebellion => "rebellion",
        }
    }
}

/// Per-request fact base: one selected/not-selected flag per vocabulary theme,
/// plus the score map filled in by fired rules (song id -> score).
#[derive(Debug, Clone, Default)]
pub struct UserPreferences {
    pub adventure: bool,
    pub america: bool,
    pub cars_trucks_tractors: bool,
    pub goodtimes: bool,
    pub grit: bool,
    pub home: bool,
    pub love: bool,
    pub heart_break: bool,
    pub lessons: bool,
    pub rebellion: bool,
    /// Song id -> score, written once per fired rule.
    pub recommendations: HashMap<String, i32>,
}

impl UserPreferences {
    /// Build the fact base from a flat `{name: bool}` map (the decoded request).
    /// Keys outside the vocabulary are ignored with a warning.
    pub fn from_flags(flags: &HashMap<String, bool>) -> Self {
        let mut prefs = Self::default();
        for (name, &selected) in flags {
            match Theme::resolve(name) {
                Some(theme) => prefs.set(theme, selected),
                None => warn!(target: "recommend", theme = %name, "ignoring unknown theme in request"),
            }
        }
        prefs
    }

    /// Direct flag lookup; replaces the original's reflective field access.
    pub fn selected(&self, theme: Theme) -> bool {
        match theme {
            Theme::Adventure => self.adventure,
            Theme::America => self.america,
            Theme::CarsTrucksTractors => self.cars_trucks_tractors,
            Theme::Goodtimes => self.goodtimes,
            Theme::Grit => self.grit,
            Theme::Home => self.home,
            Theme::Love => self.love,
            Theme::HeartBreak => self.heart_break,
            Theme::Lessons => self.lessons,
            Theme::Rebellion => self.rebellion,
        }
    }

    pub fn set(&mut self, theme: Theme, value: bool) {
        match theme {
            Theme::Adventure => self.adventure = value,
            Theme::America => self.america = value,
            Theme::CarsTrucksTractors => self.cars_trucks_tractors = value,
            Theme::Goodtimes => self.goodtimes = value,
            Theme::Grit => self.grit = value,
            Theme::Home => self.home = value,
            Theme::Love => self.love = value,
            Theme::HeartBreak => self.heart_break = value,
            Theme::Lessons => self.lessons = value,
            Theme::Rebellion => self.rebellion = value,
        }
    }

    /// True if at least one of `themes` is selected (a rule's condition).
    pub fn any_selected(&self, themes: &[Theme]) -> bool {
        themes.iter().any(|&t| self.selected(t))
    }

    /// How many of the given themes the user selected.
    pub fn selected_count(&self, themes: &[Theme]) -> usize {
        themes.iter().filter(|&&t| self.selected(t)).count()
    }

    /// Number of selected flags across the whole vocabulary (for logging).
    pub fn total_selected(&self) -> usize {
        ALL_THEMES.iter().filter(|&&t| self.selected(t)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_is_case_insensitive() {
        assert_eq!(Theme::resolve("heartbreak"), Some(Theme::HeartBreak));
        assert_eq!(Theme::resolve("HeartBreak"), Some(Theme::HeartBreak));
        assert_eq!(Theme::resolve("HEARTBREAK"), Some(Theme::HeartBreak));
        assert_eq!(Theme::resolve("CarsTrucksTractors"), Some(Theme::CarsTrucksTractors));
    }

    #[test]
    fn resolve_rejects_unknown_names() {
        assert_eq!(Theme::resolve("polka"), None);
        assert_eq!(Theme::resolve(""), None);
    }

    #[test]
    fn name_round_trips_through_resolve() {
        for theme in ALL_THEMES {
            assert_eq!(Theme::resolve(theme.name()), Some(theme));
        }
    }

    #[test]
    fn from_flags_sets_known_and_skips_unknown() {
        let mut flags = HashMap::new();
        flags.insert("home".to_string(), true);
        flags.insert("america".to_string(), true);
        flags.insert("grit".to_string(), false);
        flags.insert("yodeling".to_string(), true); // not in the vocabulary

        let prefs = UserPreferences::from_flags(&flags);
        assert!(prefs.home);
        assert!(prefs.america);
        assert!(!prefs.grit);
        assert_eq!(prefs.total_selected(), 2);
        assert!(prefs.recommendations.is_empty());
    }

    #[test]
    fn any_selected_and_count() {
        let mut prefs = UserPreferences::default();
        prefs.set(Theme::Love, true);
        assert!(prefs.any_selected(&[Theme::Grit, Theme::Love]));
        assert!(!prefs.any_selected(&[Theme::Grit, Theme::Home]));
        assert_eq!(prefs.selected_count(&[Theme::Love, Theme::Grit, Theme::Home]), 1);
    }
}
