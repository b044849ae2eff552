//! Durand–Kerner (Weierstrass) simultaneous root iteration.

use log::{debug, trace};
use polylib_core::{Complex, PolyError, PolyResult, NOISE_DIGITS};

use crate::polynomial::Polynomial;
use crate::solvers::{RootConfig, RootsResult, INNER_ITERATIONS};

/// Approximates all roots of `p` with the Durand–Kerner iteration.
///
/// The polynomial is cleaned and normalized to a monic `q` of degree `n`.
/// The guesses start at the `n`-th roots of unity, `z_k = e^(2πik/n)`, and
/// every correction pass replaces each guess with
///
/// `z_k - q(z_k) / Π_{j≠k} (z_k - z_j)`
///
/// where all corrections are computed from the same snapshot of guesses
/// before any guess is updated.
///
/// # Arguments
///
/// * `p` - The polynomial; its cleaned degree must be at least one
/// * `config` - Tolerance and outer round limit
///
/// # Returns
///
/// `n` roots rounded to 12 decimal digits, with iteration statistics.
/// Fails with [`PolyError::InvalidArgument`] for a constant polynomial and
/// with [`PolyError::DivisionByZero`] if two guesses ever coincide exactly.
///
/// # Example
///
/// ```rust
/// use polylib_math::solvers::{durand_kerner, RootConfig};
/// use polylib_math::Polynomial;
///
/// // x^3 - 1: the cube roots of unity
/// let p = Polynomial::from_real(&[-1.0, 0.0, 0.0, 1.0]);
/// let result = durand_kerner(&p, &RootConfig::default()).unwrap();
///
/// assert_eq!(result.roots.len(), 3);
/// assert!(result.roots.iter().all(|z| (z.abs() - 1.0).abs() < 1e-9));
/// ```
pub fn durand_kerner(p: &Polynomial, config: &RootConfig) -> PolyResult<RootsResult> {
    let cleaned = p.cleaned();
    if cleaned.degree() < 1 {
        return Err(PolyError::invalid_argument(format!(
            "root finding requires a polynomial of degree at least 1, got {cleaned}"
        )));
    }

    let q = cleaned.normalized()?;
    let n = q.degree();

    let mut z: Vec<Complex> = (0..n).map(|k| Complex::unit_root(k, n)).collect();
    let mut w = vec![Complex::ZERO; n];

    let mut rounds = 0;
    let mut residual = max_residual(&q, &z);

    while rounds < config.max_iterations && residual > config.tolerance {
        for _ in 0..INNER_ITERATIONS {
            correction_pass(&q, &mut z, &mut w)?;
        }

        rounds += 1;
        residual = max_residual(&q, &z);
        trace!("Durand-Kerner round {rounds}: residual {residual:.3e}");
    }

    let converged = residual.is_finite() && residual <= config.tolerance;
    if converged {
        debug!("Durand-Kerner converged for degree {n} after {rounds} rounds (residual {residual:.3e})");
    } else {
        debug!(
            "Durand-Kerner stopped for degree {n} after {rounds} rounds without meeting tolerance {:.1e} (residual {residual:.3e})",
            config.tolerance
        );
    }

    let roots = z.iter().map(|root| root.round(NOISE_DIGITS)).collect();

    Ok(RootsResult {
        roots,
        rounds,
        residual,
        converged,
    })
}

/// Performs one simultaneous Weierstrass correction of every guess.
///
/// `w` is scratch space of the same length as `z`.
fn correction_pass(q: &Polynomial, z: &mut [Complex], w: &mut [Complex]) -> PolyResult<()> {
    for k in 0..z.len() {
        w[k] = q.evaluate(z[k]).checked_div(weierstrass_denominator(z, k)?)?;
    }

    for (zk, &wk) in z.iter_mut().zip(w.iter()) {
        *zk -= wk;
    }

    Ok(())
}

/// Returns the largest residual `max_k |q(z_k)|`.
///
/// Returns zero for an empty set of points and NaN if any residual is NaN.
#[must_use]
pub fn max_residual(q: &Polynomial, z: &[Complex]) -> f64 {
    z.iter()
        .map(|&zk| q.evaluate(zk).abs())
        .fold(0.0, |max, r| if r.is_nan() || r > max { r } else { max })
}

/// Returns `Π_{j≠k} (z_k - z_j)`, the derivative at `z_k` of the monic
/// polynomial whose roots are the current guesses.
///
/// Fails with [`PolyError::InvalidArgument`] if `k` is not a valid index.
pub fn weierstrass_denominator(z: &[Complex], k: usize) -> PolyResult<Complex> {
    let zk = *z.get(k).ok_or_else(|| {
        PolyError::invalid_argument(format!(
            "root index {k} out of range for {} guesses",
            z.len()
        ))
    })?;

    Ok(z
        .iter()
        .enumerate()
        .filter(|&(j, _)| j != k)
        .map(|(_, &zj)| zk - zj)
        .product())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_1_SQRT_2;

    fn real(coeffs: &[f64]) -> Polynomial {
        Polynomial::from_real(coeffs)
    }

    /// Asserts that every expected root is matched by some computed root.
    fn assert_roots(actual: &[Complex], expected: &[Complex], epsilon: f64) {
        assert_eq!(actual.len(), expected.len());
        for e in expected {
            let closest = actual
                .iter()
                .map(|a| (*a - *e).abs())
                .fold(f64::INFINITY, f64::min);
            assert!(
                closest < epsilon,
                "expected root {e} not found in {actual:?} (closest distance {closest:.2e})"
            );
        }
    }

    #[test]
    fn test_square_roots_of_one() {
        let result = durand_kerner(&real(&[-1.0, 0.0, 1.0]), &RootConfig::default()).unwrap();
        assert_roots(&result.roots, &[Complex::ONE, Complex::from(-1.0)], 1e-9);
        assert!(result.converged);
        // Seeds are already the roots
        assert_eq!(result.rounds, 0);
    }

    #[test]
    fn test_cube_roots_of_unity() {
        let roots = real(&[-1.0, 0.0, 0.0, 1.0]).roots().unwrap();
        let h = 3f64.sqrt() / 2.0;
        assert_roots(
            &roots,
            &[
                Complex::ONE,
                Complex::new(-0.5, h),
                Complex::new(-0.5, -h),
            ],
            1e-9,
        );
    }

    #[test]
    fn test_complex_conjugate_roots() {
        // x^2 + 1
        let roots = real(&[1.0, 0.0, 1.0]).roots().unwrap();
        assert_roots(&roots, &[Complex::I, -Complex::I], 1e-9);

        // x^2 - 4x + 5 = (x - (2+i))(x - (2-i))
        let roots = real(&[5.0, -4.0, 1.0]).roots().unwrap();
        assert_roots(&roots, &[Complex::new(2.0, 1.0), Complex::new(2.0, -1.0)], 1e-9);
    }

    #[test]
    fn test_complex_coefficients() {
        // x^2 - i: roots ±(1+i)/√2
        let p = Polynomial::new(vec![-Complex::I, Complex::ZERO, Complex::ONE]);
        let roots = p.roots().unwrap();
        let r = Complex::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2);
        assert_roots(&roots, &[r, -r], 1e-9);
    }

    #[test]
    fn test_non_monic_input() {
        // 3(x - 1)(x - 2)
        let roots = real(&[6.0, -9.0, 3.0]).roots().unwrap();
        assert_roots(&roots, &[Complex::ONE, Complex::from(2.0)], 1e-9);
    }

    #[test]
    fn test_quartic_with_integer_roots() {
        // (x-1)(x-2)(x-3)(x-4)
        let result =
            durand_kerner(&real(&[24.0, -50.0, 35.0, -10.0, 1.0]), &RootConfig::default())
                .unwrap();
        let expected: Vec<Complex> = (1..=4).map(|r| Complex::from(f64::from(r))).collect();
        assert_roots(&result.roots, &expected, 1e-9);
        assert!(result.converged);
        assert!(result.rounds > 0);
    }

    #[test]
    fn test_fifth_roots_of_minus_one() {
        let roots = real(&[1.0, 0.0, 0.0, 0.0, 0.0, 1.0]).roots().unwrap();
        for root in &roots {
            assert_relative_eq!(root.abs(), 1.0, epsilon = 1e-9);
            let value = root.powi(5);
            assert_relative_eq!(value.re(), -1.0, epsilon = 1e-9);
            assert_relative_eq!(value.im(), 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_trailing_zeros_ignored() {
        let roots = real(&[-1.0, 0.0, 1.0, 0.0, 0.0]).roots().unwrap();
        assert_eq!(roots.len(), 2);
    }

    #[test]
    fn test_roots_are_rounded() {
        let roots = real(&[-2.0, 0.0, 1.0]).roots().unwrap();
        for root in roots {
            assert_eq!(root, root.round(12));
            assert_relative_eq!(root.re().abs(), 1.414_213_562_373, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_constant_polynomial_rejected() {
        for p in [real(&[5.0]), Polynomial::zero(), real(&[3.0, 0.0, 0.0])] {
            let err = p.roots().unwrap_err();
            assert!(matches!(err, PolyError::InvalidArgument { .. }));
        }
    }

    #[test]
    fn test_best_effort_without_convergence() {
        // No double squares to exactly 2, so a zero tolerance is never met.
        // The round budget runs out and the approximation is still returned.
        let config = RootConfig::default().with_tolerance(0.0);
        let result = durand_kerner(&real(&[-2.0, 0.0, 1.0]), &config).unwrap();

        assert_eq!(result.rounds, config.max_iterations);
        assert!(!result.converged);
        assert!(result.residual > 0.0 && result.residual < 1e-12);
        let s = 2f64.sqrt();
        assert_roots(&result.roots, &[Complex::from(s), Complex::from(-s)], 1e-9);
    }

    #[test]
    fn test_overflow_is_not_reported_as_converged() {
        for coeffs in [
            &[1e300, 1e300, 1.0][..],
            &[1e308, 0.0, 0.0, 1.0][..],
            &[-1e308, 1e308, 1.0][..],
        ] {
            let result = durand_kerner(&real(coeffs), &RootConfig::default()).unwrap();
            assert!(!result.converged, "{coeffs:?} reported as converged");
            assert!(!result.residual.is_finite() || result.residual > 1e-12);
        }
    }

    #[test]
    fn test_extreme_leading_coefficient() {
        // 1e160 x - 2e160
        let roots = real(&[-2e160, 1e160]).roots().unwrap();
        assert_roots(&roots, &[Complex::from(2.0)], 1e-12);

        // 1e160 x + 2: the root -2e-160 rounds to zero at 12 digits
        let result = durand_kerner(&real(&[2.0, 1e160]), &RootConfig::default()).unwrap();
        assert!(result.converged);
        assert_eq!(result.roots, vec![Complex::ZERO]);
    }

    #[test]
    fn test_round_budget_respected() {
        let p = real(&[1.0, 0.0, 1.0]);
        let result = durand_kerner(&p, &RootConfig::default().with_max_iterations(1)).unwrap();
        assert_eq!(result.rounds, 1);

        let none = durand_kerner(&p, &RootConfig::default().with_max_iterations(0)).unwrap();
        assert_eq!(none.rounds, 0);
        assert!(!none.converged);
        // Untouched seeds: 1 and -1
        assert_roots(&none.roots, &[Complex::ONE, Complex::from(-1.0)], 1e-12);
    }

    #[test]
    fn test_loose_tolerance_stops_early() {
        let p = real(&[24.0, -50.0, 35.0, -10.0, 1.0]);
        let loose = durand_kerner(&p, &RootConfig::default().with_tolerance(1e3)).unwrap();
        assert_eq!(loose.rounds, 0);
        assert!(loose.converged);
    }

    #[test]
    fn test_weierstrass_denominator() {
        let z = [Complex::ONE, Complex::from(-1.0), Complex::I];
        // (1 - (-1)) * (1 - i) = 2 - 2i
        assert_eq!(weierstrass_denominator(&z, 0).unwrap(), Complex::new(2.0, -2.0));

        let single = [Complex::from(3.0)];
        assert_eq!(weierstrass_denominator(&single, 0).unwrap(), Complex::ONE);
    }

    #[test]
    fn test_weierstrass_denominator_out_of_range() {
        let z = [Complex::ONE, Complex::I];
        let err = weierstrass_denominator(&z, 2).unwrap_err();
        assert!(matches!(err, PolyError::InvalidArgument { .. }));
    }

    #[test]
    fn test_coincident_guesses_fail() {
        let q = real(&[1.0, 0.0, 1.0]);
        let mut z = [Complex::ZERO, Complex::ZERO];
        let mut w = [Complex::ZERO; 2];
        let err = correction_pass(&q, &mut z, &mut w).unwrap_err();
        assert!(err.is_division_by_zero());
    }

    #[test]
    fn test_max_residual() {
        let q = real(&[-1.0, 0.0, 1.0]);
        assert_eq!(max_residual(&q, &[Complex::ONE, Complex::from(-1.0)]), 0.0);
        assert_eq!(max_residual(&q, &[Complex::ONE, Complex::from(2.0)]), 3.0);
        assert_eq!(max_residual(&q, &[]), 0.0);

        let nan = Complex::new(f64::NAN, 0.0);
        assert!(max_residual(&q, &[nan, Complex::from(2.0)]).is_nan());
        assert!(max_residual(&q, &[Complex::from(2.0), nan]).is_nan());
    }
}
