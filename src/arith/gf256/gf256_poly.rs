// ----------------------- Polynomial operations -----------------------

use crate::error::Result;

use super::FieldArith as _;

/// Evaluate the polynomial with coefficients `coeffs` (constant term first) at `x`.
pub fn gf256_evaluate_polynomial_horner(coeffs: &[u8], x: u8) -> u8 {
    x.field_eval_polynomial(coeffs)
}

/// Lagrange interpolation of the points `(x_k, y_k)` evaluated at `x = 0`.
///
/// `f(0) = Σ_k y_k * Π_{j != k} x_j / (x_k - x_j)`
///
/// Two points sharing an x-coordinate leave a zero denominator and fail with
/// [`crate::error::ShamirError::DivisionByZero`].
///
/// Single column reference for the weighted sum in [`crate::subroutines::shamir::combine`].
#[cfg(test)]
pub(crate) fn gf256_interpolate_at_zero(points: &[(u8, u8)]) -> Result<u8> {
    let x_points: Vec<u8> = points.iter().map(|(x, _)| *x).collect();
    let weights = gf256_lagrange_weights_at_zero(&x_points)?;

    Ok(points
        .iter()
        .zip(weights)
        .fold(0u8, |acc, ((_, y_k), w_k)| acc.field_add(y_k.field_mul(w_k))))
}

/// The Lagrange basis polynomials of `x_points` evaluated at zero, `l_k(0) = Π_{j != k} x_j / (x_k - x_j)`.
///
/// They depend on the x-coordinates only, so one set of weights interpolates any number of y vectors.
pub fn gf256_lagrange_weights_at_zero(x_points: &[u8]) -> Result<Vec<u8>> {
    let mut weights = Vec::with_capacity(x_points.len());
    for (k, x_k) in x_points.iter().enumerate() {
        let mut basis = 1u8;
        for (j, x_j) in x_points.iter().enumerate() {
            if j != k {
                basis.field_mul_mut(x_j.field_div(x_k.field_sub(*x_j))?);
            }
        }
        weights.push(basis);
    }

    Ok(weights)
}
