//! Layered configuration loading.
//!
//! Sources are merged in priority order (lowest to highest):
//! `default.toml`, `{environment}.toml`, `local.toml`, then `TRACKER_*`
//! environment variables. All files are optional; missing files fall back
//! to the defaults baked into the settings structures.

use std::path::{Path, PathBuf};

use config::{Config, File};

use crate::config::environment::Environment;
use crate::config::error::ConfigError;
use crate::config::settings::Settings;

/// Loads settings from a directory of TOML files plus environment overrides.
pub struct ConfigLoader {
    config_dir: PathBuf,
    environment: Environment,
}

impl ConfigLoader {
    /// Creates a loader rooted at `config_dir`, selecting the environment
    /// from `TRACKER_APP_ENV`.
    pub fn new(config_dir: impl AsRef<Path>) -> Self {
        Self {
            config_dir: config_dir.as_ref().to_path_buf(),
            environment: Environment::from_env(),
        }
    }

    /// Overrides the environment, mainly for tests.
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Loads, merges, deserializes, and validates the settings.
    ///
    /// Environment variables use `__` as the section separator, e.g.
    /// `TRACKER_SERVER__PORT=8080` overrides `server.port`.
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let file = |name: &str| {
            File::from(self.config_dir.join(format!("{name}.toml"))).required(false)
        };

        let merged = Config::builder()
            .add_source(file("default"))
            .add_source(file(self.environment.as_str()))
            .add_source(file("local"))
            .add_source(
                config::Environment::with_prefix("TRACKER")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = merged.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_defaults_when_directory_is_empty() {
        // No TOML files exist under this path; everything comes from the
        // serde defaults, so validation fails only on the missing DB URL.
        let loader = ConfigLoader::new("definitely/not/a/config/dir")
            .with_environment(Environment::Test);
        let result = loader.load();
        assert!(matches!(
            result,
            Err(ConfigError::ValidationError { .. })
        ));
    }

    #[test]
    fn loads_checked_in_default_file() {
        // The repository ships config/default.toml with a database URL.
        let loader = ConfigLoader::new("config").with_environment(Environment::Test);
        let settings = loader.load().expect("default config should load");
        assert_eq!(settings.application.name, "exercise-tracker");
        assert!(!settings.database.url.is_empty());
    }
}
