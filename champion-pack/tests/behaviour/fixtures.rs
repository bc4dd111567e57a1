//! Fixtures shared by the packing scenarios.

use champion_pack::PackSummary;
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use test_helpers::tree::ChampionTree;

/// Scenario state threaded through the packing steps.
#[derive(Debug, Default, ScenarioState)]
pub struct PackState {
    pub tree: Slot<ChampionTree>,
    pub summary: Slot<PackSummary>,
    pub module: Slot<String>,
    pub previous_module: Slot<String>,
}

/// Provides a clean state for each scenario.
#[fixture]
pub fn pack_state() -> PackState {
    PackState::default()
}
