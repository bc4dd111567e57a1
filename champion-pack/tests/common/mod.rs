//! Shared helpers for `champion-pack` integration tests.

use camino::Utf8PathBuf;

/// Resolves the compiled `champion-pack` binary path from test environment
/// variables.
///
/// # Errors
///
/// Returns an error when none of the supported cargo/nextest binary
/// environment variables are present.
pub(crate) fn champion_pack_exe() -> anyhow::Result<Utf8PathBuf> {
    let env_vars = [
        "CARGO_BIN_EXE_champion-pack",
        "CARGO_BIN_EXE_champion_pack",
        "NEXTEST_BIN_EXE_champion-pack",
        "NEXTEST_BIN_EXE_champion_pack",
    ];
    for var in env_vars {
        if let Ok(path) = std::env::var(var) {
            return Ok(Utf8PathBuf::from(path));
        }
    }
    Err(anyhow::anyhow!(
        "champion-pack binary path not found in environment"
    ))
}
