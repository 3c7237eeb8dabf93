// demos/snipe.rs
// Run with:
//   cargo run --example snipe

use event_points::catalog::Catalog;
use event_points::events::{calculate, gap_to_target};
use event_points::systems::sdk::{PlayerState, TroopInput};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::builtin()?;
    let koi = catalog.event("koi")?;

    // What the player typed into the calculator.
    let mut st = PlayerState::default();
    st.enter_count(koi, "Mithril", "2");
    st.enter_count(koi, "Hero Gear Essence Stone", "14");
    st.enter_count(koi, "Fire Crystals", "30");
    st.enter_count(koi, "Mythic General Shards", "3"); // raised to one bundle of 5
    st.enter_count(koi, "1 Minute of Speedups", "2400");
    st.set_special("beasts", 12);
    st.troops = Some(TroopInput::with_speedups(8, 45, 1, 6, 0));

    let scored = calculate(&catalog, "koi", &st, None)?;
    println!("== {} ==", scored.title);
    println!("Score  -> {:?}", scored.score);

    // Rival is 120k ahead of what we could bank with half the inventory.
    let gap = gap_to_target(&scored.score, scored.score.total / 2 + 120_000);
    let out = calculate(&catalog, "koi", &st, Some(gap))?;
    if let Some(snipe) = out.snipe {
        println!("Gap    -> {gap}");
        for a in &snipe.allocations {
            println!("  {:>6} x {:<28} {:>8} pts", a.quantity, a.item_name, a.points);
        }
        println!("Spent  -> {} (open: {}, closed: {})", snipe.total_points, snipe.remaining, snipe.closed);
    }
    Ok(())
}
