//! 2x2 unitary matrices for single-qubit gates.

use num_complex::Complex64;
use std::f64::consts::FRAC_1_SQRT_2;

/// A 2x2 unitary matrix in row-major order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Unitary2x2 {
    /// The matrix elements in row-major order: [[a, b], [c, d]].
    pub data: [Complex64; 4],
}

impl Unitary2x2 {
    /// Create a new 2x2 matrix.
    pub fn new(a: Complex64, b: Complex64, c: Complex64, d: Complex64) -> Self {
        Self { data: [a, b, c, d] }
    }

    /// The identity matrix.
    pub fn identity() -> Self {
        Self::new(
            Complex64::new(1.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(1.0, 0.0),
        )
    }

    /// The Hadamard matrix.
    pub fn h() -> Self {
        let s = Complex64::new(FRAC_1_SQRT_2, 0.0);
        Self::new(s, s, s, -s)
    }

    /// U1(λ) = diag(1, e^{iλ}).
    pub fn u1(lambda: f64) -> Self {
        Self::new(
            Complex64::new(1.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::from_polar(1.0, lambda),
        )
    }

    /// U2(φ, λ) = 1/√2 [[1, -e^{iλ}], [e^{iφ}, e^{i(φ+λ)}]].
    pub fn u2(phi: f64, lambda: f64) -> Self {
        Self::new(
            Complex64::new(FRAC_1_SQRT_2, 0.0),
            -Complex64::from_polar(FRAC_1_SQRT_2, lambda),
            Complex64::from_polar(FRAC_1_SQRT_2, phi),
            Complex64::from_polar(FRAC_1_SQRT_2, phi + lambda),
        )
    }

    /// Matrix product `self · other`.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        let [a, b, c, d] = self.data;
        let [e, f, g, h] = other.data;
        Self::new(a * e + b * g, a * f + b * h, c * e + d * g, c * f + d * h)
    }

    /// Conjugate transpose.
    #[must_use]
    pub fn adjoint(&self) -> Self {
        let [a, b, c, d] = self.data;
        Self::new(a.conj(), c.conj(), b.conj(), d.conj())
    }

    /// Element-wise comparison.
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(x, y)| (x - y).norm() <= tolerance)
    }

    /// Check whether the matrix is the identity.
    pub fn is_identity(&self, tolerance: f64) -> bool {
        self.approx_eq(&Self::identity(), tolerance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_u2_zero_pi_is_hadamard() {
        assert!(Unitary2x2::u2(0.0, PI).approx_eq(&Unitary2x2::h(), 1e-12));
    }

    #[test]
    fn test_unitarity() {
        let m = Unitary2x2::u2(0.3, -1.1);
        assert!(m.mul(&m.adjoint()).is_identity(1e-12));
    }

    #[test]
    fn test_u1_composes_additively() {
        let m = Unitary2x2::u1(0.4).mul(&Unitary2x2::u1(0.6));
        assert!(m.approx_eq(&Unitary2x2::u1(1.0), 1e-12));
    }
}
