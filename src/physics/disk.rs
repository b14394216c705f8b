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

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use utils::numeric::is_unit_fraction;
use utils::units::{mps_to_kph, mps_to_mph};

use crate::error::RollError;
use crate::physics::{GRAVITY, ROLLING_DISK_ENERGY_FACTOR};
use crate::settings::PhysicsSettings;

/// Energy balance of a disk between the top and the bottom of a slope. All values in joules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyBudget {
    pub potential_energy: f64,
    pub friction_work: f64,
    pub kinetic_energy: f64
}

/// A uniform solid disk released from rest at the top of an incline.
///
/// The disk rolls without slipping, so its kinetic energy at the bottom is split between
/// translation and rotation. Kinetic friction along the slope dissipates
/// `friction * mass * g * cos(incline) * length` on the way down.
///
/// Neither `mass` nor `radius` changes the final speed; both cancel out of the energy
/// balance. They are kept so the intermediate energies carry real units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiskOnIncline {
    height: f64,
    length: f64,
    incline: f64,
    mass: f64,
    friction: f64,
    radius: f64,
    gravity: f64
}

impl DiskOnIncline {
    pub fn new(height: f64,
               length: f64,
               incline: f64,
               mass: f64,
               friction: f64,
               radius: f64
    ) -> DiskOnIncline {
        DiskOnIncline { height, length, incline, mass, friction, radius, gravity: GRAVITY }
    }

    pub fn from_settings(height: f64,
                         length: f64,
                         incline: f64,
                         mass: f64,
                         friction: f64,
                         radius: f64,
                         settings: &PhysicsSettings
    ) -> DiskOnIncline {
        DiskOnIncline::new(height, length, incline, mass, friction, radius)
            .with_gravity(settings.gravity())
    }

    pub fn with_gravity(self, gravity: f64) -> DiskOnIncline {
        DiskOnIncline { gravity, ..self }
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    /// Slope angle from horizontal in degrees
    pub fn incline(&self) -> f64 {
        self.incline
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn friction(&self) -> f64 {
        self.friction
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    pub fn incline_radians(&self) -> f64 {
        self.incline.to_radians()
    }

    pub fn potential_energy(&self) -> f64 {
        self.mass * self.gravity * self.height
    }

    /// Kinetic friction acting along the slope (N)
    pub fn friction_force(&self) -> f64 {
        self.friction * self.mass * self.gravity * self.incline_radians().cos()
    }

    pub fn friction_work(&self) -> f64 {
        self.friction_force() * self.length
    }

    /// Energy left for motion at the bottom. Negative when friction dissipates more than
    /// the drop provides.
    pub fn kinetic_energy(&self) -> f64 {
        self.potential_energy() - self.friction_work()
    }

    pub fn energy_budget(&self) -> EnergyBudget {
        let potential_energy = self.potential_energy();
        let friction_work = self.friction_work();
        EnergyBudget { potential_energy, friction_work, kinetic_energy: potential_energy - friction_work }
    }

    /// Square of the final speed, `KE / (0.75 * m)`, along with the budget it came from.
    fn speed_squared(&self) -> (EnergyBudget, f64) {
        if !is_unit_fraction(self.friction) {
            warn!("Friction coefficient {} is outside [0, 1]", self.friction);
        }
        let budget = self.energy_budget();
        debug!("Disk energy budget: {:?}", budget);
        (budget, budget.kinetic_energy / (ROLLING_DISK_ENERGY_FACTOR * self.mass))
    }

    /// Linear speed at the bottom of the slope (m/s).
    ///
    /// Solves `KE = 0.75 * m * v^2` for `v`. When friction work exceeds the potential
    /// energy the square root has no real solution and NaN is returned.
    pub fn final_speed(&self) -> f64 {
        self.speed_squared().1.sqrt()
    }

    /// Same arithmetic as [`DiskOnIncline::final_speed`], with the failure cases classified.
    pub fn try_final_speed(&self) -> Result<f64, RollError> {
        let (budget, speed_squared) = self.speed_squared();
        if speed_squared < 0.0 {
            return Err(RollError::InsufficientEnergy {
                potential_energy: budget.potential_energy,
                friction_work: budget.friction_work
            });
        }
        let speed = speed_squared.sqrt();
        if !speed.is_finite() {
            return Err(RollError::NonFiniteSpeed(speed));
        }
        Ok(speed)
    }

    pub fn final_speed_kph(&self) -> f64 {
        mps_to_kph(self.final_speed())
    }

    pub fn final_speed_mph(&self) -> f64 {
        mps_to_mph(self.final_speed())
    }
}
