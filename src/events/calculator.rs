// src/events/calculator.rs
#![cfg(feature = "event-calculator")]

//! Event calculator.
//!
//! Runs the systems for one event in a single explicit call:
//! - scoring  → what the declared inventory is worth
//! - sniping  → which items to spend to close a point gap (only when a
//!   positive gap is given)
//!
//! The caller invokes [`calculate`] whenever any input changes; nothing is
//! recomputed implicitly and nothing is kept between calls.

use crate::catalog::{Catalog, CatalogError};
use crate::systems::scoring::{self, ScoreReport};
use crate::systems::sdk::PlayerState;
use crate::systems::sniping::{self, SnipeOutcome};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalculatorOutcome {
    pub event: String,
    pub title: String,
    pub score: ScoreReport,
    /// `None` when sniping is off or the gap is not positive.
    pub snipe: Option<SnipeOutcome>,
}

pub fn calculate(
    catalog: &Catalog,
    event_id: &str,
    state: &PlayerState,
    gap: Option<i64>,
) -> Result<CalculatorOutcome, CatalogError> {
    let event = catalog.event(event_id)?;
    let score = scoring::score(event, state);
    let snipe = gap
        .filter(|g| *g > 0)
        .map(|g| sniping::snipe(event, state, g));

    if let Some(s) = &snipe {
        log::debug!(
            "{event_id}: total={} snipe={}/{} closed={}",
            score.total,
            s.total_points,
            s.total_points + s.remaining,
            s.closed
        );
    }

    Ok(CalculatorOutcome {
        event: event_id.to_string(),
        title: event.title.clone(),
        score,
        snipe,
    })
}

/// Gap between a target score and what the inventory already scores.
/// Zero when the target is already reached.
pub fn gap_to_target(score: &ScoreReport, target: i64) -> i64 {
    target.saturating_sub(score.total).max(0)
}
