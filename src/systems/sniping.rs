//! Sniping: turn an event definition plus a player's inventory into
//! allocator input, then report how close the suggestion gets to the gap.

use crate::catalog::EventDef;
use crate::systems::sdk::{PlayerState, available_items};
use crate::{Allocation, CandidateItem, allocate};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SnipeOutcome {
    pub allocations: Vec<Allocation>,
    pub total_points: i64,
    /// Part of the gap the suggestion leaves open (never negative).
    pub remaining: i64,
    pub closed: bool,
}

/// Allocator input: available, positively scored items the player holds.
pub fn candidates(event: &EventDef, state: &PlayerState) -> Vec<CandidateItem> {
    available_items(event, state)
        .filter(|i| i.points > 0)
        .filter_map(|i| {
            let held = state.count(&i.name);
            (held > 0).then(|| CandidateItem::new(i.name.clone(), i.points, held).with_minimum_unit(i.unit()))
        })
        .collect()
}

pub fn snipe(event: &EventDef, state: &PlayerState, gap: i64) -> SnipeOutcome {
    if gap <= 0 {
        return SnipeOutcome::default();
    }
    let allocations = allocate(&candidates(event, state), gap);
    let total_points: i64 = allocations.iter().map(|a| a.points).sum();
    let remaining = gap - total_points;
    SnipeOutcome {
        allocations,
        total_points,
        remaining,
        closed: remaining == 0,
    }
}
