//! # Scoring
//!
//! The action behind every fired rule: count how many of the song's themes the
//! user selected, scale, penalize the rest, and record the result.
//!
//! `raw = match_count * 10`
//! `score = raw - (theme_count - raw)`
//!
//! Note the penalty subtracts the *scaled* raw score from the theme count, so
//! large theme sets with low overlap go strongly negative. That interaction is
//! preserved literally; it determines the ranking.

use crate::theme::{Theme, UserPreferences};

/// Pure scoring formula over a song's theme set.
pub fn score_themes(facts: &UserPreferences, themes: &[Theme]) -> i32 {
    let match_count = facts.selected_count(themes) as i32;
    let raw = match_count * 10;
    // Slightly penalize themes unselected.
    raw - (themes.len() as i32 - raw)
}

/// Score a song and store the result in the fact base's score map.
/// Each rule fires at most once, so no key is ever overwritten in a pass.
pub fn record_score(facts: &mut UserPreferences, song_id: &str, themes: &[Theme]) -> i32 {
    let score = score_themes(facts, themes);
    facts.recommendations.insert(song_id.to_string(), score);
    score
}
