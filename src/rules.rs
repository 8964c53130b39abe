//! # Rule Compiler
//!
//! Turns each catalog song into one executable rule:
//! - `when`: the user selected at least one of the song's themes
//! - `then`: record the song's score, then retract the rule
//!
//! Replaces the original string-templated rule text with typed rules; the
//! condition is a direct flag lookup instead of reflective field access.
//!
//! A song whose theme map is empty (or all-blank, or all-unknown) compiles to
//! no rule at all: its condition could never be true.

use crate::catalog::Catalog;
use crate::scoring;
use crate::theme::{Theme, UserPreferences};
use tracing::{debug, warn};

/// Firing priority. All compiled rules share it (the original emitted
/// `salience 10` for every rule), so scan order is compilation order.
pub const DEFAULT_SALIENCE: i32 = 10;

/// A compiled, single-fire rule for one song.
#[derive(Debug, Clone)]
pub struct Rule {
    pub song_id: String,
    pub title: String,
    /// Non-empty by construction.
    pub themes: Vec<Theme>,
    pub salience: i32,
    active: bool,
}

impl Rule {
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The `when` part: does the fact base select any of this rule's themes?
    pub fn matches(&self, facts: &UserPreferences) -> bool {
        facts.any_selected(&self.themes)
    }

    /// The `then` part: score the song, then retract so this rule can never
    /// fire again within the same evaluation pass.
    pub fn fire(&mut self, facts: &mut UserPreferences) {
        let score = scoring::record_score(facts, &self.song_id, &self.themes);
        debug!(target: "engine", song = %self.song_id, score, "rule fired");
        self.active = false;
    }
}

/// Compile one rule per qualifying song, preserving catalog order.
pub fn compile(catalog: &Catalog) -> Vec<Rule> {
    let mut rules = Vec::with_capacity(catalog.len());

    for song in catalog.iter() {
        let mut themes = Vec::new();
        for (name, description) in &song.themes {
            if description.is_empty() {
                continue;
            }
            match Theme::resolve(name) {
                Some(theme) => themes.push(theme),
                None => warn!(
                    target: "engine",
                    song = %song.rule_id, theme = %name,
                    "ignoring unknown theme on catalog song"
                ),
            }
        }
        if themes.is_empty() {
            // No condition could ever hold; the song can never score.
            continue;
        }
        // HashMap iteration order is arbitrary; keep rule themes deterministic.
        themes.sort_by_key(|t| t.name());
        themes.dedup();

        rules.push(Rule {
            song_id: song.rule_id.clone(),
            title: song.title.clone(),
            themes,
            salience: DEFAULT_SALIENCE,
            active: true,
        });
    }

    rules
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SongDocument;

    fn doc(id: &str, themes: &[(&str, &str)]) -> SongDocument {
        SongDocument {
            rule_id: id.to_string(),
            artist: String::new(),
            title: String::new(),
            lyric_quote: String::new(),
            video_link: String::new(),
            themes: themes
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    #[test]
    fn compiles_one_rule_per_tagged_song() {
        let catalog = Catalog::new(vec![
            doc("A", &[("home", "x"), ("america", "y")]),
            doc("B", &[("love", "z")]),
        ]);
        let rules = compile(&catalog);
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].song_id, "A");
        assert_eq!(rules[0].themes.len(), 2);
        assert!(rules.iter().all(Rule::is_active));
    }

    #[test]
    fn skips_songs_with_no_usable_themes() {
        let catalog = Catalog::new(vec![
            doc("empty", &[]),
            doc("blank", &[("home", "")]),
            doc("unknown", &[("polka", "oom-pah")]),
            doc("ok", &[("grit", "tough")]),
        ]);
        let rules = compile(&catalog);
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].song_id, "ok");
    }

    #[test]
    fn unknown_theme_dropped_but_rest_kept() {
        let catalog = Catalog::new(vec![doc("A", &[("home", "x"), ("polka", "y")])]);
        let rules = compile(&catalog);
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].themes, vec![Theme::Home]);
    }

    #[test]
    fn firing_retracts_the_rule() {
        let catalog = Catalog::new(vec![doc("A", &[("home", "x")])]);
        let mut rules = compile(&catalog);
        let mut facts = UserPreferences::default();
        facts.set(Theme::Home, true);

        assert!(rules[0].matches(&facts));
        rules[0].fire(&mut facts);
        assert!(!rules[0].is_active());
        assert!(facts.recommendations.contains_key("A"));
    }

    #[test]
    fn theme_order_is_deterministic() {
        let catalog = Catalog::new(vec![doc(
            "A",
            &[("rebellion", "x"), ("america", "y"), ("grit", "z")],
        )]);
        let rules = compile(&catalog);
        assert_eq!(
            rules[0].themes,
            vec![Theme::America, Theme::Grit, Theme::Rebellion]
        );
    }
}
