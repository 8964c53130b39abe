//! # Recommendation Pipeline
//! Same logic as the `/recommend` handler but purely functional for testing:
//! compile rules from the catalog, evaluate them against the fact base, take
//! the top N scorers, and redact each selected song to the user's themes.

use crate::catalog::{Catalog, SongDocument};
use crate::theme::UserPreferences;
use crate::{engine, redactor, rules, selector};
use tracing::info;

/// Default number of songs returned when the config does not override it.
pub const DEFAULT_TOP_N: usize = 3;

/// Run one full evaluation for one request. The catalog is shared read-only;
/// rules and the fact base are per-request, so concurrent callers never
/// observe each other's firing state.
pub fn recommend(catalog: &Catalog, facts: &mut UserPreferences, n: usize) -> Vec<SongDocument> {
    let mut rules = rules::compile(catalog);
    engine::evaluate(facts, &mut rules);

    let order = catalog.ids();
    let top = selector::top_n(&facts.recommendations, &order, n);

    let out: Vec<SongDocument> = top
        .iter()
        .filter_map(|id| catalog.get(id))
        .map(|song| redactor::redact(song, facts))
        .collect();

    info!(
        target: "recommend",
        selected_themes = facts.total_selected(),
        scored = facts.recommendations.len(),
        returned = out.len(),
        "recommendation pass complete"
    );
    out
}
