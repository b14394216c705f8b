/*
 * Copyright (c):
 * 2025 zephyrj
 * zephyrj@protonmail.com
 *
 * This file is part of disk-slope.
 *
 * disk-slope is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * disk-slope is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with disk-slope. If not, see <https://www.gnu.org/licenses/>.
 */

use std::fs;
use std::path::Path;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use config::builder::DefaultState;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::SettingsError;
use crate::physics::GRAVITY;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct PhysicsSettings {
    gravity: f64
}

impl Default for PhysicsSettings {
    fn default() -> Self {
        PhysicsSettings { gravity: GRAVITY }
    }
}

impl PhysicsSettings {
    const GRAVITY_KEY: &'static str = "gravity";
    pub const CONFIG_FILENAME: &'static str = "disk-slope-conf";
    pub const ENV_PREFIX: &'static str = "DISK_SLOPE";

    pub fn new(gravity: f64) -> Self {
        PhysicsSettings { gravity }
    }

    fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder().set_default(PhysicsSettings::GRAVITY_KEY, GRAVITY)
    }

    /// Loads settings from `disk-slope-conf.toml` in the working directory (if present)
    /// and `DISK_SLOPE_*` environment variables. Falls back to defaults if either
    /// source can't be read.
    pub fn load() -> Self {
        let settings = PhysicsSettings::builder_with_defaults().and_then(|builder| {
            builder
                .add_source(File::with_name(PhysicsSettings::CONFIG_FILENAME).required(false))
                .add_source(Environment::with_prefix(PhysicsSettings::ENV_PREFIX))
                .build()
        }).and_then(|settings| settings.try_deserialize());

        match settings {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Failed to load settings. Using defaults. {}", e.to_string());
                PhysicsSettings::default()
            }
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self, SettingsError> {
        let settings = PhysicsSettings::builder_with_defaults()?
            .add_source(File::from(path))
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    pub fn from_toml_str(toml_data: &str) -> Result<Self, SettingsError> {
        let settings = PhysicsSettings::builder_with_defaults()?
            .add_source(File::from_str(toml_data, FileFormat::Toml))
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    pub fn set_gravity(&mut self, gravity: f64) {
        self.gravity = gravity;
    }

    pub fn write(&self, path: &Path) -> Result<(), SettingsError> {
        fs::write(path, toml::to_string(&self)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::env;
    use std::fs;
    use std::path::Path;
    use crate::physics::GRAVITY;
    use crate::settings::PhysicsSettings;

    #[test]
    fn default_gravity() {
        assert_eq!(PhysicsSettings::default().gravity(), GRAVITY);
    }

    #[test]
    fn empty_toml_uses_defaults() {
        let settings = PhysicsSettings::from_toml_str("").unwrap();
        assert_eq!(settings, PhysicsSettings::default());
    }

    #[test]
    fn toml_overrides_gravity() {
        let settings = PhysicsSettings::from_toml_str("gravity = 1.62").unwrap();
        assert_eq!(settings.gravity(), 1.62);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(PhysicsSettings::from_toml_str("gravity = \"heavy\"").is_err());
    }

    #[test]
    fn load_without_sources_uses_defaults() {
        let env_var = format!("{}_GRAVITY", PhysicsSettings::ENV_PREFIX);
        let conf_file = format!("{}.toml", PhysicsSettings::CONFIG_FILENAME);
        if env::var(env_var).is_err() && !Path::new(&conf_file).exists() {
            assert_eq!(PhysicsSettings::load(), PhysicsSettings::default());
        }
    }

    #[test]
    fn write_then_load_from_path() -> Result<(), String> {
        let path = env::temp_dir().join(format!("{}-{}.toml",
                                                PhysicsSettings::CONFIG_FILENAME,
                                                std::process::id()));
        let mut settings = PhysicsSettings::default();
        settings.set_gravity(3.71);
        settings.write(&path).map_err(|e| e.to_string())?;
        let loaded = PhysicsSettings::load_from_path(&path).map_err(|e| e.to_string());
        let _ = fs::remove_file(&path);
        assert_eq!(loaded?, settings);
        Ok(())
    }
}
