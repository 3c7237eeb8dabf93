/*!
`event_points` — a small, pure point calculator for limited-time scoring events.

What it does
- Sums the event points a player's inventory is worth.
- Suggests which items to spend to close a target point gap ("sniping")
  with a deterministic two-pass greedy allocator:
  * pass 1 spends high-value items first, whole minimum units only;
  * pass 2 walks the same items from the cheapest up to fill what is left.
- Never overshoots the gap. A gap the inventory cannot cover exactly is left
  partially open.

How to use (call surface only)
- Build `CandidateItem`s for the items the player holds (or let
  `systems::sniping::candidates` build them from an event definition).
- Call `allocate(&candidates, gap) -> Vec<Allocation>` whenever inputs change.

What it does NOT do
- No search, no backtracking, no optimality guarantee. No state between calls.
*/

use std::cmp::Reverse;
use std::collections::HashMap;

use crate::mechanics::units;

/// One spendable item the player currently holds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandidateItem {
    pub name: String,
    pub point_value: i64,
    pub available_quantity: u64,
    /// Quantities are only ever spent in multiples of this. `0` reads as `1`.
    pub minimum_unit: u64,
}

impl CandidateItem {
    pub fn new(name: impl Into<String>, point_value: i64, available_quantity: u64) -> Self {
        Self {
            name: name.into(),
            point_value,
            available_quantity,
            minimum_unit: 1,
        }
    }

    pub fn with_minimum_unit(mut self, minimum_unit: u64) -> Self {
        self.minimum_unit = minimum_unit.max(1);
        self
    }

    #[inline]
    fn unit(&self) -> u64 {
        self.minimum_unit.max(1)
    }

    #[inline]
    fn is_usable(&self) -> bool {
        self.point_value > 0 && self.available_quantity > 0
    }
}

/// How much of one item to spend, and what it is worth.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Allocation {
    pub item_name: String,
    pub quantity: u64,
    pub points: i64,
}

/// Running result of one `allocate` call; one record per item name.
#[derive(Default)]
struct Ledger<'a> {
    allocations: Vec<Allocation>,
    index: HashMap<&'a str, usize>,
}

impl<'a> Ledger<'a> {
    fn used(&self, name: &str) -> u64 {
        self.index
            .get(name)
            .map(|&i| self.allocations[i].quantity)
            .unwrap_or(0)
    }

    /// Merge `quantity` of `item` into its record; returns the points added.
    fn record(&mut self, item: &'a CandidateItem, quantity: u64) -> i64 {
        let points = quantity as i64 * item.point_value;
        match self.index.get(item.name.as_str()) {
            Some(&i) => {
                let a = &mut self.allocations[i];
                a.quantity += quantity;
                a.points += points;
            }
            None => {
                self.index.insert(item.name.as_str(), self.allocations.len());
                self.allocations.push(Allocation {
                    item_name: item.name.clone(),
                    quantity,
                    points,
                });
            }
        }
        points
    }

    fn total(&self) -> i64 {
        self.allocations.iter().map(|a| a.points).sum()
    }
}

/// Greedy gap allocation: high-value pass, then a low-value remainder pass.
///
/// Equal point values keep their input order in both passes. The sum of the
/// returned points is never above `target_gap`; `target_gap <= 0` or an
/// inventory that cannot contribute yields an empty list.
pub fn allocate(candidates: &[CandidateItem], target_gap: i64) -> Vec<Allocation> {
    if target_gap <= 0 {
        return Vec::new();
    }

    let mut pool: Vec<&CandidateItem> = candidates.iter().filter(|c| c.is_usable()).collect();
    let mut ledger = Ledger::default();
    let mut remaining = target_gap;

    // Pass 1: biggest items first.
    pool.sort_by_key(|c| Reverse(c.point_value));
    for &item in &pool {
        if remaining <= 0 {
            break;
        }
        let qty = units::fill_quantity(remaining, item.point_value, item.available_quantity, item.unit());
        if qty > 0 {
            remaining -= ledger.record(item, qty);
        }
    }

    // Pass 2: top up with the cheapest items still in stock.
    if remaining > 0 {
        pool.sort_by_key(|c| c.point_value);
        for &item in &pool {
            if remaining <= 0 {
                break;
            }
            let unused = item.available_quantity.saturating_sub(ledger.used(&item.name));
            if item.point_value > remaining || unused == 0 {
                continue;
            }
            let qty = units::fill_quantity(remaining, item.point_value, unused, item.unit());
            if qty > 0 {
                remaining -= ledger.record(item, qty);
            }
        }
    }

    log::debug!(
        "allocate: gap={} spent={} left={} items={}",
        target_gap,
        ledger.total(),
        remaining,
        ledger.allocations.len()
    );
    ledger.allocations
}

pub mod mechanics;
pub mod catalog;
pub mod systems;
pub mod events;
