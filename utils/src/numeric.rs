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

pub fn round_float_to(float: f64, decimal_places: u32) -> f64 {
    let precision_base: u64 = 10;
    let precision_factor = precision_base.pow(decimal_places) as f64;
    (float * precision_factor).round() / precision_factor
}

/// True when `val` lies in the closed interval [0, 1]. NaN is never in range.
pub fn is_unit_fraction(val: f64) -> bool {
    val >= 0.0 && val <= 1.0
}

#[cfg(test)]
mod tests {
    use crate::numeric::{is_unit_fraction, round_float_to};

    #[test]
    fn round_float_tests() {
        assert_eq!(round_float_to(10.399, 2), 10.40);
        assert_eq!(round_float_to(13.5884, 2), 13.59);
        assert_eq!(round_float_to(13.5884, 0), 14.0);
        assert_eq!(round_float_to(-2.345, 1), -2.3);
        assert!(round_float_to(f64::NAN, 2).is_nan());
    }

    #[test]
    fn unit_fraction_tests() {
        assert_eq!(is_unit_fraction(-0.01), false);
        assert_eq!(is_unit_fraction(0.0), true);
        assert_eq!(is_unit_fraction(0.5), true);
        assert_eq!(is_unit_fraction(1.0), true);
        assert_eq!(is_unit_fraction(1.01), false);
        assert_eq!(is_unit_fraction(f64::NAN), false);
        assert_eq!(is_unit_fraction(f64::INFINITY), false);
    }
}
