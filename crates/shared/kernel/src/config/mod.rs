use config::{Config, Environment, File, Map};
use ignite_domain::config::BootstrapConfig;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

const DEFAULT_CONFIG_FILE: &str = "ignite";
const ENV_PREFIX: &str = "IGNITE";

/// Custom error type for config loading.
#[ignite_derive::ignite_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Layered configuration loader: an optional file plus `IGNITE__` environment overrides.
///
/// 1. **Base file**: `path`, or `ignite` in the working directory (any format the
///    `config` crate recognizes by extension, usually `ignite.toml`). A missing file is
///    not an error; every field has a default.
/// 2. **Environment**: variables prefixed with `IGNITE__`, nested with double
///    underscores (`IGNITE__INITIALIZER__INITIALIZATION_TIMEOUT=2500` maps to
///    `initializer.initialization_timeout`). Values are parsed into bools and numbers.
///
/// # Errors
/// Returns [`ConfigError::Config`] when the file is malformed or a value does not
/// match the shape of `T`.
///
/// # Example
/// ```rust
/// use ignite_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct ShellConfig {
///     #[serde(default)]
///     title: String,
/// }
///
/// let cfg: ShellConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_layered(path, None)
}

/// Loads the shell's [`BootstrapConfig`].
///
/// # Errors
/// See [`load_config`].
pub fn load_bootstrap_config(
    path: Option<impl AsRef<Path>>,
) -> Result<BootstrapConfig, ConfigError> {
    load_config(path)
}

/// Same as [`load_config`], reading overrides from `env` instead of the process
/// environment when given.
///
/// # Errors
/// See [`load_config`].
pub fn load_layered<T>(
    path: Option<impl AsRef<Path>>,
    env: Option<Map<String, String>>,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true)
                .source(env),
        );

    info!(path = %effective_path.display(), "Loading configuration");

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ignite_domain::options::OptimizationLevel;
    use ignite_domain::platform::PlatformKind;
    use std::io::Write;
    use std::time::Duration;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let cfg: BootstrapConfig =
            load_layered(Some(dir.path().join("absent.toml")), Some(Map::new())).expect("load");
        assert!(cfg.platform.is_none());
        assert_eq!(cfg.initializer.initialization_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_file_and_env_layers() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().expect("temp file");
        writeln!(
            file,
            "platform = \"web\"\n\n[initializer]\npreload_fonts = false\ninitialization_timeout = 250\n\n[logging]\nlevel = \"debug\""
        )
        .expect("write config");

        let env = Map::from([
            ("IGNITE__PLATFORM".to_owned(), "mobile".to_owned()),
            ("IGNITE__INITIALIZER__OPTIMIZATION_LEVEL".to_owned(), "aggressive".to_owned()),
        ]);
        let cfg: BootstrapConfig = load_layered(Some(file.path()), Some(env)).expect("load");

        assert_eq!(cfg.platform, Some(PlatformKind::Mobile));
        assert!(!cfg.initializer.preload_fonts);
        assert_eq!(cfg.initializer.initialization_timeout, Duration::from_millis(250));
        assert_eq!(cfg.initializer.optimization_level, OptimizationLevel::Aggressive);
        assert_eq!(cfg.logging.level, "debug");
    }

    #[test]
    fn test_malformed_value_is_reported() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().expect("temp file");
        writeln!(file, "[initializer]\ninitialization_timeout = \"soon\"").expect("write config");

        let err = load_layered::<BootstrapConfig>(Some(file.path()), Some(Map::new()))
            .expect_err("string timeout must fail");
        assert!(err.to_string().contains("Failed to deserialize config"));
    }
}
