// tests/systems.rs
#![cfg(feature = "event-calculator")]

use event_points::catalog::{Catalog, CatalogError};
use event_points::events::{calculate, gap_to_target};
use event_points::mechanics::{parse_count, read_count, speedup_seconds, tally, troop_points};
use event_points::systems::scoring::score;
use event_points::systems::sdk::{PlayerState, TroopInput};
use event_points::systems::sniping::{SnipeOutcome, candidates, snipe};
use event_points::{Allocation, CandidateItem};

fn koi_state() -> PlayerState {
    let mut st = PlayerState::default();
    st.set_count("Mithril", 1)
        .set_count("Hero Gear Essence Stone", 3)
        .set_count("Fire Crystals", 5)
        .set_count("1 Minute of Speedups", 100)
        .set_count("Mythic General Shards", 7);
    st
}

/* ──────────────────────────────────────────────────────────────────────────
1) Input mechanics
────────────────────────────────────────────────────────────────────────── */

#[test]
fn typed_counts_parse_leniently() {
    assert_eq!(parse_count("12"), 12);
    assert_eq!(parse_count("  7"), 7);
    assert_eq!(parse_count("+3"), 3);
    assert_eq!(parse_count("12abc"), 12);
    assert_eq!(parse_count("4.9"), 4);
    assert_eq!(parse_count("-5"), 0);
    assert_eq!(parse_count(""), 0);
    assert_eq!(parse_count("abc"), 0);
    assert_eq!(parse_count("99999999999999999999999"), u64::MAX);
}

#[test]
fn counts_below_the_minimum_amount_are_raised() {
    assert_eq!(read_count("2", 5), 5);
    assert_eq!(read_count("0", 5), 0);
    assert_eq!(read_count("12", 5), 12);
    assert_eq!(read_count("2", 1), 2);

    let cat = Catalog::builtin().unwrap();
    let koi = cat.event("koi").unwrap();
    let mut st = PlayerState::default();
    assert_eq!(st.enter_count(koi, "Mythic General Shards", "3"), 5);
    assert_eq!(st.count("Mythic General Shards"), 5);
    assert_eq!(st.enter_count(koi, "Mithril", "junk"), 0);
}

#[test]
fn troop_points_use_the_whole_speedup_budget() {
    assert_eq!(speedup_seconds(1, 2, 3), 93_780);
    assert_eq!(troop_points(12, 60, 3_600), 720);
    assert_eq!(troop_points(12, 0, 3_600), 0);
    assert_eq!(troop_points(12, 7_000, 3_600), 0);
}

#[test]
fn tally_is_a_signed_saturating_product() {
    assert_eq!(tally(3, 40), 120);
    assert_eq!(tally(3, -40), -120);
    assert_eq!(tally(0, -40), 0);
    assert_eq!(tally(u64::MAX, 2), i64::MAX);
    assert_eq!(tally(u64::MAX, -2), i64::MIN);
}

/* ──────────────────────────────────────────────────────────────────────────
2) Scoring
────────────────────────────────────────────────────────────────────────── */

#[test]
fn score_sums_items_specials_and_troops() {
    let cat = Catalog::builtin().unwrap();
    let koi = cat.event("koi").unwrap();

    let mut st = PlayerState::default();
    st.set_count("Fire Crystals", 10)
        .set_count("Mithril", 1)
        .set_count("Mythic General Shards", 5)
        .set_special("beasts", 3);
    st.troops = Some(TroopInput::with_speedups(5, 60, 0, 1, 0));

    let r = score(koi, &st);
    assert_eq!(r.item_points, 20_000 + 40_000 + 15_200);
    assert_eq!(r.special_points, 3_600);
    assert_eq!(r.stamina, 30);
    assert_eq!(r.troop_points, 720);
    assert_eq!(r.total, 75_200 + 3_600 + 720);
}

#[test]
fn toggled_off_items_do_not_score() {
    let cat = Catalog::builtin().unwrap();
    let koi = cat.event("koi").unwrap();
    let mut st = PlayerState::default();
    st.set_count("Fire Crystals", 10).set_count("Mithril", 1);
    assert_eq!(score(koi, &st).total, 60_000);

    // An unset toggle flips from off, so the first flip turns it on.
    assert!(st.flip_toggle("mithril"));
    assert_eq!(score(koi, &st).total, 60_000);
    assert!(!st.flip_toggle("mithril"));
    assert_eq!(score(koi, &st).total, 20_000);

    st.set_toggle("mithril", true);
    assert_eq!(score(koi, &st).total, 60_000);
    st.set_toggle("mithril", false);
    assert_eq!(score(koi, &st).total, 20_000);
}

#[test]
fn negative_points_count_against_the_total() {
    let src = r#"
        [events.penalty]
        title = "Penalty"

        [[events.penalty.items]]
        name = "Pen"
        points = -100

        [[events.penalty.items]]
        name = "Gem"
        points = 50

        [[events.penalty.specials]]
        id = "retreat"
        label = "Retreats"
        points = -30
    "#;
    let cat = Catalog::from_toml(src).unwrap();
    let ev = cat.event("penalty").unwrap();
    let mut st = PlayerState::default();
    st.set_count("Pen", 2).set_count("Gem", 4).set_special("retreat", 1);

    let r = score(ev, &st);
    assert_eq!(r.item_points, 0);
    assert_eq!(r.special_points, -30);
    assert_eq!(r.total, -30);

    // Only the positive item is ever suggested for sniping.
    let names: Vec<_> = candidates(ev, &st).into_iter().map(|c| c.name).collect();
    assert_eq!(names, vec!["Gem"]);
}

#[test]
fn unknown_troop_level_scores_nothing() {
    let cat = Catalog::builtin().unwrap();
    let tomes = cat.event("armament-tomes").unwrap();
    let mut st = PlayerState::default();
    st.troops = Some(TroopInput { level: 3, train_secs: 10, speedup_secs: 1_000 });
    assert_eq!(score(tomes, &st).troop_points, 0);
}

/* ──────────────────────────────────────────────────────────────────────────
3) Sniping
────────────────────────────────────────────────────────────────────────── */

#[test]
fn candidates_follow_catalog_order_and_filters() {
    let cat = Catalog::builtin().unwrap();
    let koi = cat.event("koi").unwrap();
    let mut st = koi_state();
    st.set_toggle("speedups", false);

    let names: Vec<_> = candidates(koi, &st).into_iter().map(|c| c.name).collect();
    assert_eq!(
        names,
        vec!["Fire Crystals", "Mythic General Shards", "Hero Gear Essence Stone", "Mithril"]
    );

    let shards = candidates(koi, &st)
        .into_iter()
        .find(|c| c.name == "Mythic General Shards")
        .unwrap();
    assert_eq!(shards, CandidateItem::new("Mythic General Shards", 3040, 7).with_minimum_unit(5));
}

#[test]
fn snipe_closes_a_coverable_gap() {
    let cat = Catalog::builtin().unwrap();
    let koi = cat.event("koi").unwrap();
    let out = snipe(koi, &koi_state(), 50_000);

    let got: Vec<(&str, u64)> = out
        .allocations
        .iter()
        .map(|a| (a.item_name.as_str(), a.quantity))
        .collect();
    assert_eq!(
        got,
        vec![("Mithril", 1), ("Hero Gear Essence Stone", 2), ("Fire Crystals", 1)]
    );
    assert_eq!(out.total_points, 50_000);
    assert_eq!(out.remaining, 0);
    assert!(out.closed);
}

#[test]
fn snipe_reports_what_stays_open() {
    let cat = Catalog::builtin().unwrap();
    let koi = cat.event("koi").unwrap();
    let mut st = PlayerState::default();
    st.set_count("1 Minute of Speedups", 10);

    let out = snipe(koi, &st, 1_000);
    assert_eq!(
        out.allocations,
        vec![Allocation { item_name: "1 Minute of Speedups".into(), quantity: 10, points: 300 }]
    );
    assert_eq!(out.remaining, 700);
    assert!(!out.closed);

    assert_eq!(snipe(koi, &st, 0), SnipeOutcome::default());
}

/* ──────────────────────────────────────────────────────────────────────────
4) Calculator
────────────────────────────────────────────────────────────────────────── */

#[test]
fn calculator_runs_scoring_and_optional_sniping() {
    let cat = Catalog::builtin().unwrap();
    let st = koi_state();

    let plain = calculate(&cat, "koi", &st, None).unwrap();
    assert_eq!(plain.title, "King of Icefield");
    assert!(plain.snipe.is_none());
    assert_eq!(
        plain.score.total,
        40_000 + 3 * 4_000 + 5 * 2_000 + 100 * 30 + 7 * 3_040
    );

    assert!(calculate(&cat, "koi", &st, Some(0)).unwrap().snipe.is_none());
    assert!(calculate(&cat, "koi", &st, Some(50_000)).unwrap().snipe.unwrap().closed);

    assert!(matches!(
        calculate(&cat, "nope", &st, None),
        Err(CatalogError::UnknownEvent { .. })
    ));
}

#[test]
fn calculator_works_on_custom_events() {
    let mut cat = Catalog::builtin().unwrap();
    cat.create_custom_event("mine").unwrap();
    cat.add_custom_item("mine", "Gem", 25).unwrap();
    cat.add_custom_item("mine", "Coin", 2).unwrap();

    let mut st = PlayerState::default();
    st.set_count("Gem", 4).set_count("Coin", 10);
    let out = calculate(&cat, "mine", &st, Some(121)).unwrap();
    assert_eq!(out.score.total, 120);
    let snipe = out.snipe.unwrap();
    assert_eq!(snipe.total_points, 120);
    assert_eq!(snipe.remaining, 1);
}

#[test]
fn gap_to_target_never_goes_negative() {
    let cat = Catalog::builtin().unwrap();
    let st = koi_state();
    let r = calculate(&cat, "koi", &st, None).unwrap().score;
    assert_eq!(gap_to_target(&r, r.total + 500), 500);
    assert_eq!(gap_to_target(&r, r.total - 500), 0);
}
