//! # Redactor
//!
//! Produces the output view of a selected song: identical metadata, and a
//! theme map where only user-selected themes keep their description. Keys are
//! never added or removed, so the consumer sees the song's full theme shape
//! with unselected values blanked.

use crate::catalog::SongDocument;
use crate::theme::{Theme, UserPreferences};
use std::collections::HashMap;

/// Pure, idempotent transform: keep a value iff its key resolves to a theme
/// the user selected (case-insensitive); blank everything else.
pub fn redact(song: &SongDocument, facts: &UserPreferences) -> SongDocument {
    let mut themes = HashMap::with_capacity(song.themes.len());
    for (name, description) in &song.themes {
        let keep = Theme::resolve(name).is_some_and(|t| facts.selected(t));
        let value = if keep { description.clone() } else { String::new() };
        themes.insert(name.clone(), value);
    }

    SongDocument {
        rule_id: song.rule_id.clone(),
        artist: song.artist.clone(),
        title: song.title.clone(),
        lyric_quote: song.lyric_quote.clone(),
        video_link: song.video_link.clone(),
        themes,
    }
}
