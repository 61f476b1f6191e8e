use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::config::TAU;

/// A single wave term `exp(2πi (n·u + m·v))` over lattice coordinates `u + v i`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct EisensteinTerm {
    pub power_n: i32,
    pub power_m: i32,
}

impl EisensteinTerm {
    pub fn new(power_n: i32, power_m: i32) -> Self {
        Self { power_n, power_m }
    }

    /// True when `n + m` is even. Sign does not matter and the sum never overflows.
    pub fn power_sum_is_even(&self) -> bool {
        (self.power_n.rem_euclid(2) + self.power_m.rem_euclid(2)) % 2 == 0
    }

    pub fn power_n_is_even(&self) -> bool {
        self.power_n.rem_euclid(2) == 0
    }

    /// Evaluate the term at a point already expressed in lattice coordinates.
    ///
    /// The result always has unit magnitude.
    pub fn calculate(&self, z_in_lattice_coordinates: Complex64) -> Complex64 {
        let phase = TAU
            * (self.power_n as f64 * z_in_lattice_coordinates.re
                + self.power_m as f64 * z_in_lattice_coordinates.im);
        Complex64::from_polar(1.0, phase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_power_sum_parity() {
        assert!(EisensteinTerm::new(1, 1).power_sum_is_even());
        assert!(EisensteinTerm::new(-3, 1).power_sum_is_even());
        assert!(!EisensteinTerm::new(-2, 1).power_sum_is_even());
        assert!(!EisensteinTerm::new(0, -1).power_sum_is_even());
    }

    #[test]
    fn test_power_sum_parity_at_integer_bounds() {
        assert!(EisensteinTerm::new(i32::MAX, 1).power_sum_is_even());
        assert!(EisensteinTerm::new(i32::MIN, i32::MIN).power_sum_is_even());
        assert!(!EisensteinTerm::new(i32::MAX, i32::MIN).power_sum_is_even());
        assert!(EisensteinTerm::new(i32::MIN, 0).power_n_is_even());
    }

    #[test]
    fn test_power_n_parity() {
        assert!(EisensteinTerm::new(0, 7).power_n_is_even());
        assert!(EisensteinTerm::new(-4, 1).power_n_is_even());
        assert!(!EisensteinTerm::new(-3, 2).power_n_is_even());
    }

    #[test]
    fn test_zero_term_is_constant_one() {
        let term = EisensteinTerm::new(0, 0);
        let value = term.calculate(Complex64::new(0.37, -12.5));
        assert_abs_diff_eq!(value.re, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(value.im, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_quarter_turn() {
        // n·u = 1 * 0.25 → exp(iπ/2) = i
        let value = EisensteinTerm::new(1, 0).calculate(Complex64::new(0.25, 0.9));
        assert_abs_diff_eq!(value.re, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(value.im, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_matches_closed_form() {
        let term = EisensteinTerm::new(1, -2);
        let value = term.calculate(Complex64::new(0.625, 0.875));
        let expected = Complex64::new(0.0, PI * -9.0 / 4.0).exp();
        assert_abs_diff_eq!(value.re, expected.re, epsilon = 1e-9);
        assert_abs_diff_eq!(value.im, expected.im, epsilon = 1e-9);
    }

    #[test]
    fn test_unit_magnitude() {
        let points = [
            Complex64::new(0.0, 0.0),
            Complex64::new(0.123, -4.56),
            Complex64::new(-7.89, 0.001),
            Complex64::new(1e3, -2e3),
        ];
        for power_n in -5..=5 {
            for power_m in -5..=5 {
                let term = EisensteinTerm::new(power_n, power_m);
                for z in points {
                    assert_abs_diff_eq!(term.calculate(z).norm(), 1.0, epsilon = 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_periodic_in_lattice_coordinates() {
        let term = EisensteinTerm::new(3, -2);
        let z = Complex64::new(0.31, 0.77);
        let shifted = z + Complex64::new(1.0, -2.0);
        let a = term.calculate(z);
        let b = term.calculate(shifted);
        assert_abs_diff_eq!(a.re, b.re, epsilon = 1e-9);
        assert_abs_diff_eq!(a.im, b.im, epsilon = 1e-9);
    }
}
