//! Library interface for `champion-pack`.
//!
//! Walks a directory of champion sources and emits a TypeScript module that
//! exports them as a single name-to-source mapping:
//!
//! ```text
//! export const champions = {
//!   "imp": "MOV 0, 1\n"
//! }
//! ```

pub mod cli;
pub mod collect;
pub mod config;
pub mod error;
pub mod filter;
pub mod logging;
pub mod output;
pub mod pack;
pub mod render;

pub use collect::{ChampionEntry, Champions, collect_champions};
pub use config::{PackConfig, load_config};
pub use error::PackError;
pub use pack::{PackSummary, generate};
pub use render::{Escape, render_module};
