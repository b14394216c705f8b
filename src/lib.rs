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

pub mod error;
pub mod physics;
pub mod settings;

pub use error::{RollError, SettingsError};
pub use physics::{DiskOnIncline, EnergyBudget, GRAVITY};
pub use settings::PhysicsSettings;

/// Returns the speed of a uniform disk after it rolls from rest to the bottom of an inclined slope.
///
/// * `height` - vertical drop of the incline (m)
/// * `length` - distance travelled along the slope surface (m)
/// * `incline` - angle of the slope from horizontal (degrees)
/// * `mass` - mass of the disk (kg)
/// * `friction` - kinetic friction coefficient of the slope's surface (0.0 - 1.0)
/// * `radius` - radius of the disk (m)
///
/// Returns the speed in m/s, or NaN if friction along the slope dissipates more energy than
/// the drop provides. See [`try_final_disk_speed`] for a checked variant.
pub fn final_disk_speed(height: f64, length: f64, incline: f64, mass: f64, friction: f64, radius: f64) -> f64 {
    DiskOnIncline::new(height, length, incline, mass, friction, radius).final_speed()
}

/// Checked [`final_disk_speed`]: `RollError::InsufficientEnergy` when friction work exceeds
/// the potential energy of the drop, `RollError::NonFiniteSpeed` when the arithmetic yields
/// NaN or infinity for any other reason (e.g. zero mass).
pub fn try_final_disk_speed(height: f64,
                            length: f64,
                            incline: f64,
                            mass: f64,
                            friction: f64,
                            radius: f64) -> Result<f64, RollError> {
    DiskOnIncline::new(height, length, incline, mass, friction, radius).try_final_speed()
}
