//! Test helpers shared across crates.
//!
//! [`tree`] builds throwaway champion directories; [`figment`] wraps
//! `figment::Jail` for configuration tests.

pub mod figment;
pub mod tree;
