//! # Selector
//!
//! Orders scored songs descending by score and keeps the top N. Ties break by
//! catalog order (earlier song wins); N is clamped to the number of scored
//! songs. Songs that never fired are absent from the score map and therefore
//! never appear in the output.

use std::collections::HashMap;

/// Pick the ids of the top `n` scorers, ties broken by catalog order.
pub fn top_n(scores: &HashMap<String, i32>, catalog_order: &[String], n: usize) -> Vec<String> {
    // Walk the catalog order so the pre-sort sequence is deterministic, then
    // stable-sort by descending score; ties keep their catalog position.
    let mut ranked: Vec<(&String, i32)> = catalog_order
        .iter()
        .filter_map(|id| scores.get(id).map(|&s| (id, s)))
        .collect();
    ranked.sort_by_key(|&(_, score)| std::cmp::Reverse(score));

    ranked
        .into_iter()
        .take(n)
        .map(|(id, _)| id.clone())
        .collect()
}
