// src/systems/sdk.rs

//! # Systems SDK
//!
//! Shared player-side inputs for **systems** (self-contained calculations
//! over one event definition, such as scoring or sniping).
//!
//! A system reads an `EventDef` from the catalog plus a `PlayerState` and
//! returns a plain report. Systems are pure: the same event and state always
//! give the same report, and nothing is cached between calls. The calling
//! layer decides when to recompute (typically on every input change).
//!
//! ## What lives here
//! - `PlayerState`: item counts, special-action counts, toggle states and an
//!   optional troop-training input, keyed by catalog names.
//! - `TroopInput`: troop level, seconds per troop and speedup budget.
//! - `available_items`: the item walk every system shares (catalog order,
//!   toggle overrides applied).
//!
//! ## Input normalization
//! Counts entered as text go through `PlayerState::enter_count`, which parses
//! leniently and raises a positive count below an item's minimum amount up to
//! that minimum. Nothing here returns an error; bad input reads as zero.
//!
//! ## Feature flags
//! - Keep systems under `src/systems/*` and gate with `feature = "system-*"`.
//! - Do not import `events` here; events compose systems, not vice versa.

use std::collections::BTreeMap;

use crate::catalog::{EventDef, ItemDef};
use crate::mechanics::{input, troops};

/// Troop training input: level, time per troop and the speedup budget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TroopInput {
    pub level: u32,
    pub train_secs: u64,
    pub speedup_secs: u64,
}

impl TroopInput {
    pub fn with_speedups(level: u32, train_secs: u64, days: u64, hours: u64, minutes: u64) -> Self {
        Self {
            level,
            train_secs,
            speedup_secs: troops::speedup_seconds(days, hours, minutes),
        }
    }
}

/// Everything the player has told us for one event.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayerState {
    pub counts: BTreeMap<String, u64>,
    pub specials: BTreeMap<String, u64>,
    pub toggles: BTreeMap<String, bool>,
    pub troops: Option<TroopInput>,
}

impl PlayerState {
    pub fn count(&self, item: &str) -> u64 {
        self.counts.get(item).copied().unwrap_or(0)
    }

    pub fn special_count(&self, id: &str) -> u64 {
        self.specials.get(id).copied().unwrap_or(0)
    }

    pub fn set_count(&mut self, item: impl Into<String>, count: u64) -> &mut Self {
        self.counts.insert(item.into(), count);
        self
    }

    pub fn set_special(&mut self, id: impl Into<String>, count: u64) -> &mut Self {
        self.specials.insert(id.into(), count);
        self
    }

    pub fn set_toggle(&mut self, toggle: impl Into<String>, on: bool) -> &mut Self {
        self.toggles.insert(toggle.into(), on);
        self
    }

    /// Flip a toggle; an unset toggle flips from off.
    pub fn flip_toggle(&mut self, toggle: &str) -> bool {
        let on = !self.toggles.get(toggle).copied().unwrap_or(false);
        self.toggles.insert(toggle.to_string(), on);
        on
    }

    /// Record a typed count for `item`, normalized against the event's
    /// minimum amount. Returns the stored count.
    pub fn enter_count(&mut self, event: &EventDef, item: &str, raw: &str) -> u64 {
        let min_amount = match event.item(item) {
            Some(def) => def.unit(),
            None => {
                log::warn!("count entered for unknown item {item}");
                1
            }
        };
        let count = input::read_count(raw, min_amount);
        self.counts.insert(item.to_string(), count);
        count
    }
}

/// Items that count for this player, in catalog order.
pub fn available_items<'a>(
    event: &'a EventDef,
    state: &'a PlayerState,
) -> impl Iterator<Item = &'a ItemDef> + 'a {
    event.items.iter().filter(move |i| i.is_available(&state.toggles))
}
