//! Toroid Sierpinski: rule 90 on a one-axis ring, printed row by row.
//!
//! Demonstrates:
//!   1. Building a rule table from an elementary rule number
//!   2. Creating a centered one-axis session
//!   3. Advancing it and printing each generation's slice rendering
//!   4. Running a bounded batch and tracking state entropy
//!
//! Run with:
//!   cargo run --example sierpinski

use std::time::Duration;

use toroid_core::{Dims, NeighborMode};
use toroid_engine::{EntropyTracker, RunConfig, Seeding, SessionStore, SimulationRunner};
use toroid_rule::eca::presets;
use toroid_rule::RuleTable;

// ─── Ring parameters ────────────────────────────────────────────

const WIDTH: usize = 31;
const GENERATIONS: usize = 16;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let rule = RuleTable::from_eca_number(presets::RULE_90);
    let store = SessionStore::default();
    let (id, mut lattice) = store.create_session(
        Dims::new(WIDTH, 1, 1),
        Seeding::Center,
        NeighborMode::OneAxis,
    )?;

    // ─── Step by hand ───────────────────────────────────────────

    for _ in 0..GENERATIONS {
        print!("{lattice}");
        lattice = store.advance(id, &rule)?.lattice;
    }

    // ─── Bounded run ────────────────────────────────────────────

    let config = RunConfig::new(1_000).with_timeout(Duration::from_millis(500));
    let mut tracker = EntropyTracker::new();
    let outcome = SimulationRunner::new(&store).run_tracked(id, &rule, &config, &mut tracker)?;
    println!(
        "ran {} more steps (timed out: {}), {} distinct states, entropy {:.3} bits",
        outcome.steps_completed,
        outcome.timed_out,
        tracker.distinct_states(),
        tracker.entropy()
    );
    Ok(())
}
