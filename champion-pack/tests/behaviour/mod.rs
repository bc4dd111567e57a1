//! `rstest-bdd` scaffolding for `champion-pack`.
//!
//! The modules provide the scenario state fixture, the step registrations, and
//! the bindings for the packing feature file.

mod fixtures;
mod scenarios;
mod steps;
