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

mod disk;

pub const GRAVITY: f64 = 9.81; // m/s^2

// Kinetic energy of a uniform disk rolling without slipping, as a multiple of m * v^2.
// Translational 1/2 plus rotational 1/2 * (1/2 * m * r^2) * (v / r)^2 = 1/4.
const ROLLING_DISK_ENERGY_FACTOR: f64 = 0.75;

pub use disk::{DiskOnIncline, EnergyBudget};
