//! Layered configuration for a packing run.
//!
//! Values are resolved from, in increasing precedence: built-in defaults, a
//! TOML file, `CHAMPION_PACK_*` environment variables, and CLI flags.

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::cli::CliOverrides;
use crate::error::{PackError, Result};
use crate::filter::line_pattern;
use crate::render::Escape;

/// Configuration file looked up when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "champion-pack.toml";

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "CHAMPION_PACK_";

/// Settings for a single packing run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackConfig {
    /// Directory scanned recursively for champion files.
    pub root_dir: Utf8PathBuf,
    /// Destination of the generated module.
    pub output_path: Utf8PathBuf,
    /// Case-sensitive file name suffix selecting champion files.
    pub suffix: String,
    /// Champions whose source contains this text are left out.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_pattern: Option<String>,
    /// Name of the exported constant.
    pub export_name: String,
    /// String escaping used in the JSON literal.
    #[serde(default)]
    pub escape: Escape,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            root_dir: Utf8PathBuf::from("../champs"),
            output_path: Utf8PathBuf::from("./src/champions.ts"),
            suffix: ".s".to_owned(),
            exclude_pattern: None,
            export_name: "champions".to_owned(),
            escape: Escape::Ascii,
        }
    }
}

/// The CLI layer; only values the user actually supplied are serialised.
#[derive(Debug, Default, Serialize)]
struct CliLayer {
    #[serde(skip_serializing_if = "Option::is_none")]
    root_dir: Option<Utf8PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    output_path: Option<Utf8PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    suffix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    exclude_pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    export_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    escape: Option<Escape>,
}

impl From<&CliOverrides> for CliLayer {
    fn from(cli: &CliOverrides) -> Self {
        let exclude_pattern = cli
            .exclude_pattern
            .clone()
            .or_else(|| cli.exclude_line.as_deref().map(line_pattern));
        Self {
            root_dir: cli.root_dir.clone(),
            output_path: cli.output_path.clone(),
            suffix: cli.suffix.clone(),
            exclude_pattern,
            export_name: cli.export_name.clone(),
            escape: cli.is_utf8.then_some(Escape::Utf8),
        }
    }
}

/// Resolves the configuration for this run.
///
/// `config_path` names a TOML file that must exist; when it is `None`,
/// [`DEFAULT_CONFIG_FILE`] is used if present in the working directory or one
/// of its ancestors.
///
/// # Errors
///
/// Returns [`PackError::ConfigNotFound`] when `config_path` does not exist and
/// [`PackError::Config`] when the merged layers cannot be extracted.
pub fn load_config(config_path: Option<&Utf8Path>, cli: &CliOverrides) -> Result<PackConfig> {
    let file = match config_path {
        Some(path) if !path.is_file() => {
            return Err(PackError::ConfigNotFound(path.to_path_buf()));
        }
        Some(path) => Toml::file(path),
        None => Toml::file(DEFAULT_CONFIG_FILE),
    };

    let config: PackConfig = Figment::from(Serialized::defaults(PackConfig::default()))
        .merge(file)
        .merge(Env::prefixed(ENV_PREFIX))
        .merge(Serialized::defaults(CliLayer::from(cli)))
        .extract()
        .map_err(Box::new)?;
    tracing::debug!(?config, "resolved configuration");
    Ok(config)
}
