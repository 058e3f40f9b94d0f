//! Entropy survey: run every elementary rule on a ring and rank them by
//! how many distinct states they visit.
//!
//! Run with:
//!   cargo run --example entropy_survey

use std::time::Duration;

use toroid_core::{Dims, NeighborMode};
use toroid_engine::{EntropyTracker, RunConfig, Seeding, SessionStore, SimulationRunner};
use toroid_rule::RuleTable;

// ─── Survey parameters ──────────────────────────────────────────

const WIDTH: usize = 64;
const STEPS: u64 = 256;

fn main() {
    let store = SessionStore::default();
    let runner = SimulationRunner::new(&store);
    let config = RunConfig::new(STEPS).with_timeout(Duration::from_secs(1));

    let mut results = Vec::with_capacity(256);
    for n in 0..=255u8 {
        let rule = RuleTable::from_eca_number(n);
        let (id, _) = store
            .create_session(Dims::new(WIDTH, 1, 1), Seeding::Center, NeighborMode::OneAxis)
            .unwrap();
        let mut tracker = EntropyTracker::new();
        runner.run_tracked(id, &rule, &config, &mut tracker).unwrap();
        store.remove(id).unwrap();
        results.push((n, tracker.entropy(), tracker.distinct_states()));
    }

    results.sort_by(|a, b| b.1.total_cmp(&a.1));
    println!("rule  entropy  distinct");
    for (n, entropy, distinct) in results.iter().take(16) {
        println!("{n:>4}  {entropy:>7.3}  {distinct:>8}");
    }
}
