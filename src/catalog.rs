//! # Song Catalog
//!
//! Immutable catalog of theme-tagged songs, the input to rule compilation.
//!
//! - Loads from a JSON file (same shape the original table scan produced).
//! - Falls back to a built-in seed on any read/parse error.
//! - Catalog order is significant: it is the tie-break order for selection.
//!
//! Documents are read-only inside the core; a `Catalog` can be shared across
//! concurrent requests behind an `Arc`.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::{fs, path::Path};
use tracing::warn;

static SEED: Lazy<Vec<SongDocument>> = Lazy::new(|| {
    let raw = include_str!("../catalog_seed.json");
    serde_json::from_str::<Vec<SongDocument>>(raw).expect("valid catalog seed")
});

/// One catalog entry. Metadata fields are display-only and are not validated
/// by the core; only the theme map participates in matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SongDocument {
    #[serde(rename = "RuleID")]
    pub rule_id: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, rename = "lyricQuote")]
    pub lyric_quote: String,
    #[serde(default, rename = "videoLink")]
    pub video_link: String,
    /// Theme name -> description. Empty string means the theme is absent.
    #[serde(default)]
    pub themes: HashMap<String, String>,
}

/// Ordered, read-only sequence of songs.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    songs: Vec<SongDocument>,
}

impl Catalog {
    pub fn new(songs: Vec<SongDocument>) -> Self {
        Self { songs }
    }

    /// Load the catalog from a JSON file.
    /// Falls back to the built-in seed on error.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(s) => match serde_json::from_str::<Vec<SongDocument>>(&s) {
                Ok(songs) => Self { songs },
                Err(e) => {
                    warn!(target: "catalog", path = %path.display(), error = %e, "catalog parse failed, using seed");
                    Self::default_seed()
                }
            },
            Err(e) => {
                warn!(target: "catalog", path = %path.display(), error = %e, "catalog read failed, using seed");
                Self::default_seed()
            }
        }
    }

    /// Built-in seed catalog, embedded at compile time.
    pub fn default_seed() -> Self {
        Self { songs: SEED.clone() }
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Songs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &SongDocument> {
        self.songs.iter()
    }

    /// Song ids in catalog order (the selector's tie-break order).
    pub fn ids(&self) -> Vec<String> {
        self.songs.iter().map(|s| s.rule_id.clone()).collect()
    }

    pub fn get(&self, rule_id: &str) -> Option<&SongDocument> {
        self.songs.iter().find(|s| s.rule_id == rule_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn seed_parses_and_is_nonempty() {
        let catalog = Catalog::default_seed();
        assert!(!catalog.is_empty());
        for song in catalog.iter() {
            assert!(!song.rule_id.is_empty());
        }
    }

    #[test]
    fn missing_file_falls_back_to_seed() {
        let catalog = Catalog::load_from_file("no/such/catalog.json");
        assert_eq!(catalog.len(), Catalog::default_seed().len());
    }

    #[test]
    fn ids_preserve_insertion_order() {
        let catalog = Catalog::new(vec![doc("B", &[]), doc("A", &[])]);
        assert_eq!(catalog.ids(), vec!["B", "A"]);
    }

    #[test]
    fn document_json_uses_table_field_names() {
        let raw = r#"{
            "RuleID": "song-1",
            "artist": "Somebody",
            "title": "Some Song",
            "lyricQuote": "a line",
            "videoLink": "https://example.com/v",
            "themes": {"home": "about going home"}
        }"#;
        let song: SongDocument = serde_json::from_str(raw).expect("parse document");
        assert_eq!(song.rule_id, "song-1");
        assert_eq!(song.lyric_quote, "a line");
        assert_eq!(song.themes["home"], "about going home");
    }
}
