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

use std::io;

/// Outcome of a checked speed evaluation that could not produce a real speed.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum RollError {
    #[error("friction work `{friction_work}` J exceeds potential energy `{potential_energy}` J")]
    InsufficientEnergy {
        potential_energy: f64,
        friction_work: f64
    },
    #[error("speed evaluated to non-finite value `{0}`")]
    NonFiniteSpeed(f64)
}

#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("io error")]
    IoError(#[from] io::Error),
    #[error("failed to load settings. `{0}`")]
    LoadError(#[from] config::ConfigError),
    #[error("failed to encode settings to toml. `{0}`")]
    EncodeError(#[from] toml::ser::Error)
}
