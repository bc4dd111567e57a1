//! Binds the packing feature file to the step registry.

use super::fixtures::{PackState, pack_state};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/pack_champions.feature",
    fixtures = [pack_state: PackState]
);
