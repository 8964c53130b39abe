//! # Rule Engine
//! Minimal forward-chaining evaluator over a fact base of user preferences.
//! Pure application logic, no I/O, suitable for unit tests and offline runs.
//!
//! Each scan fires every active rule whose condition holds and retracts it
//! immediately; scanning repeats until a full scan fires nothing. Conditions
//! here read only the static preference flags, so a single scan already
//! settles everything, but the loop is the evaluator's general contract.

use crate::rules::Rule;
use crate::theme::UserPreferences;
use tracing::debug;

/// Evaluate all rules against the fact base. Side effect: every song whose
/// theme set overlaps the user's selections gets exactly one score recorded.
pub fn evaluate(facts: &mut UserPreferences, rules: &mut [Rule]) {
    // Stable sort, so equal salience preserves compilation (catalog) order.
    rules.sort_by_key(|r| std::cmp::Reverse(r.salience));

    let mut total_fired = 0usize;
    loop {
        let mut fired_this_scan = 0usize;
        for rule in rules.iter_mut() {
            if rule.is_active() && rule.matches(facts) {
                rule.fire(facts);
                fired_this_scan += 1;
            }
        }
        total_fired += fired_this_scan;
        if fired_this_scan == 0 {
            break;
        }
    }

    debug!(
        target: "engine",
        rules = rules.len(),
        fired = total_fired,
        "evaluation pass complete"
    );
}
