use crate::catalog::EventDef;
use crate::mechanics::{points, troops};
use crate::systems::sdk::{PlayerState, available_items};

/// Points breakdown for one event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScoreReport {
    pub item_points: i64,
    pub special_points: i64,
    pub troop_points: i64,
    /// Stamina the declared special actions cost.
    pub stamina: u64,
    pub total: i64,
}

/// Items, specials and troop training summed for the declared inventory.
/// Unavailable items and unknown levels score nothing.
pub fn score(event: &EventDef, state: &PlayerState) -> ScoreReport {
    let item_points = available_items(event, state)
        .map(|i| points::tally(state.count(&i.name), i.points))
        .fold(0i64, i64::saturating_add);

    let (special_points, stamina) = event.specials.iter().fold((0i64, 0u64), |(p, s), sp| {
        let n = state.special_count(&sp.id);
        (
            p.saturating_add(points::tally(n, sp.points)),
            s.saturating_add(points::stamina_cost(n, sp.stamina)),
        )
    });

    let troop_points = state
        .troops
        .and_then(|t| {
            event
                .troop_points(t.level)
                .map(|per| troops::troop_points(per, t.train_secs, t.speedup_secs))
        })
        .unwrap_or(0);

    let total = item_points
        .saturating_add(special_points)
        .saturating_add(troop_points);
    log::debug!("score: items={item_points} specials={special_points} troops={troop_points} total={total}");

    ScoreReport {
        item_points,
        special_points,
        troop_points,
        stamina,
        total,
    }
}
