//! Engine Configuration Module
//!
//! Loads the settings a host passes to the formula engine. Sources are layered, later
//! ones overriding earlier ones:
//!
//! 1. The base TOML file
//! 2. `<base dir>/environments/<env>.toml`, when an environment is named and the file exists
//! 3. `BANCOR_` environment variables, nested keys joined by `__`
//!    (`BANCOR_PROTECTION__MIN_PROTECTION_DELAY=86400`)
//!
//! Sections missing from every source take their defaults.

use crate::constants::loading::{
    DEFAULT_CONFIG_PATH, ENVIRONMENTS_DIR, ENV_PREFIX, ENV_SEPARATOR,
};
use crate::logging::LoggingConfig;
use anyhow::{Context, Result};
use bancor_amm::ProtectionSettings;
use config_crate::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Main engine configuration structure
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct EngineConfig {
    /// Subscriber settings for [`crate::init_logging`]
    pub logging: LoggingConfig,

    /// Delays and rate deviation bound for protected liquidity removal
    pub protection: ProtectionSettings,
}

impl EngineConfig {
    /// Load configuration from files with environment overrides
    pub fn load(base_path: Option<&Path>, environment: Option<&str>) -> Result<Self> {
        let base = base_path.unwrap_or(Path::new(DEFAULT_CONFIG_PATH));

        let mut builder = Config::builder().add_source(File::from(base).required(true));

        if let Some(env) = environment {
            let env_file = environment_file(base, env);

            if env_file.exists() {
                info!("Loading environment config: {:?}", env_file);
                builder = builder.add_source(File::from(env_file));
            } else {
                warn!("Environment config not found: {:?}", env_file);
            }
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator(ENV_SEPARATOR)
                .try_parsing(true),
        );

        let config = builder
            .build()
            .with_context(|| format!("Failed to build configuration from {:?}", base))?;

        let engine: EngineConfig = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        engine.validate()?;
        debug!(
            min_protection_delay = engine.protection.min_protection_delay,
            max_protection_delay = engine.protection.max_protection_delay,
            average_rate_max_deviation = engine.protection.average_rate_max_deviation,
            "Engine configuration loaded"
        );
        Ok(engine)
    }

    /// Reject settings the engine would misinterpret
    pub fn validate(&self) -> Result<()> {
        self.protection
            .validate()
            .context("Invalid protection settings")?;
        self.logging.env_filter()?;
        Ok(())
    }

    /// Render as TOML, e.g. to seed a base file with the defaults
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}

/// `<dir of base>/environments/<env>.toml`
fn environment_file(base: &Path, environment: &str) -> PathBuf {
    base.parent()
        .unwrap_or(Path::new(""))
        .join(ENVIRONMENTS_DIR)
        .join(format!("{}.toml", environment))
}

/// Convenience function: expand `~` and `$VAR` in `path`, then load it
pub fn load_config(path: &str, environment: Option<&str>) -> Result<EngineConfig> {
    let expanded = shellexpand::full(path).context("Failed to expand configuration path")?;
    EngineConfig::load(Some(Path::new(expanded.as_ref())), environment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_base_config() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("engine.toml");

        let config_content = r#"
[logging]
level = "debug"
json = true

[protection]
min_protection_delay = 86400
max_protection_delay = 864000
average_rate_max_deviation = 10000
"#;

        fs::write(&config_path, config_content).unwrap();

        let config = EngineConfig::load(Some(&config_path), None).unwrap();

        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);
        assert_eq!(config.protection.min_protection_delay, 86_400);
        assert_eq!(config.protection.max_protection_delay, 864_000);
        assert_eq!(config.protection.average_rate_max_deviation, 10_000);
    }

    #[test]
    fn test_missing_sections_take_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("engine.toml");
        fs::write(&config_path, "[logging]\nlevel = \"warn\"\n").unwrap();

        let config = EngineConfig::load(Some(&config_path), None).unwrap();

        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.protection, ProtectionSettings::default());
    }

    #[test]
    fn test_environment_override() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("engine.toml");
        fs::write(
            &config_path,
            "[protection]\nmin_protection_delay = 100\nmax_protection_delay = 1000\n",
        )
        .unwrap();

        let env_dir = dir.path().join("environments");
        fs::create_dir(&env_dir).unwrap();
        fs::write(
            env_dir.join("staging.toml"),
            "[protection]\nmax_protection_delay = 5000\n",
        )
        .unwrap();

        let staging = EngineConfig::load(Some(&config_path), Some("staging")).unwrap();
        assert_eq!(staging.protection.min_protection_delay, 100);
        assert_eq!(staging.protection.max_protection_delay, 5_000);

        // Unknown environments fall back to the base file
        let local = EngineConfig::load(Some(&config_path), Some("local")).unwrap();
        assert_eq!(local.protection.max_protection_delay, 1_000);
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("engine.toml");
        fs::write(
            &config_path,
            "[protection]\nmin_protection_delay = 2000\nmax_protection_delay = 1000\n",
        )
        .unwrap();

        assert!(EngineConfig::load(Some(&config_path), None).is_err());
    }

    #[test]
    fn test_missing_base_file_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(EngineConfig::load(Some(&dir.path().join("absent.toml")), None).is_err());
    }

    #[test]
    fn test_defaults_round_trip_through_toml() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("engine.toml");
        fs::write(&config_path, EngineConfig::default().to_toml().unwrap()).unwrap();

        let path = config_path.to_str().unwrap();
        assert_eq!(load_config(path, None).unwrap(), EngineConfig::default());
    }
}
