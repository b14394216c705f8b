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

const KPH_PER_MPS: f64 = 3.6;
const METRES_PER_MILE: f64 = 1609.344;

pub fn mps_to_kph(speed_mps: f64) -> f64 {
    speed_mps * KPH_PER_MPS
}

pub fn mps_to_mph(speed_mps: f64) -> f64 {
    speed_mps * 3600.0 / METRES_PER_MILE
}

#[cfg(test)]
mod tests {
    use crate::numeric::round_float_to;
    use crate::units::{mps_to_kph, mps_to_mph};

    #[test]
    fn speed_conversions() {
        assert_eq!(mps_to_kph(0.0), 0.0);
        assert_eq!(mps_to_kph(10.0), 36.0);
        assert_eq!(round_float_to(mps_to_mph(10.0), 3), 22.369);
        assert_eq!(round_float_to(mps_to_mph(44.704), 3), 100.0);
    }
}
