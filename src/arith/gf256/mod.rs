//! # Galois Field 256
//!
//! The field is an implementation of Rijndael's finite field with 256 elements,
//! reduction polynomial x^8 + x^4 + x^3 + x + 1 (0x11B).
//!
//! Multiplication and division are single lookups in power and log tables built at compile time,
//! see [`gf256_arith`]. Polynomial evaluation and interpolation live in [`gf256_poly`].

use crate::error::Result;

pub mod gf256_arith;
pub mod gf256_poly;

/// Arithmetic of a finite field element.
///
/// Division and inversion are the only fallible operations: both fail with
/// [`crate::error::ShamirError::DivisionByZero`] on a zero divisor.
pub trait FieldArith
where
    Self: Sized + Clone + Copy + PartialEq,
{
    fn field_one() -> Self;
    fn field_zero() -> Self {
        Self::field_sub(&Self::field_one(), Self::field_one())
    }
    fn field_add(&self, rhs: Self) -> Self;
    fn field_sub(&self, rhs: Self) -> Self;
    fn field_neg(&self) -> Self;
    fn field_mul(&self, rhs: Self) -> Self;
    fn field_mul_inverse(&self) -> Result<Self>;
    fn field_div(&self, rhs: Self) -> Result<Self> {
        Ok(self.field_mul(rhs.field_mul_inverse()?))
    }

    /// Evaluate a polynomial at the point `self` using Horner's method.
    ///
    /// `poly[0]` is the constant term. The empty polynomial evaluates to zero.
    fn field_eval_polynomial(&self, poly: &[Self]) -> Self {
        poly.iter()
            .rev()
            .fold(Self::field_zero(), |acc, coeff| acc.field_mul(*self).field_add(*coeff))
    }

    fn field_add_mut(&mut self, rhs: Self) {
        *self = self.field_add(rhs);
    }

    fn field_mul_mut(&mut self, rhs: Self) {
        *self = self.field_mul(rhs);
    }
}

/// A thorough test for the field axioms
#[cfg(test)]
pub(crate) fn test_field_definitions<T>(a: T, b: T, c: T)
where
    T: FieldArith + std::fmt::Debug,
{
    // Commutativity of addition and multiplication:
    assert_eq!(a.field_add(b), b.field_add(a));
    assert_eq!(a.field_mul(b), b.field_mul(a));

    // Associativity of addition and multiplication:
    assert_eq!(a.field_add(b.field_add(c)), a.field_add(b).field_add(c));
    assert_eq!(a.field_mul(b.field_mul(c)), a.field_mul(b).field_mul(c));

    // Identity of addition and multiplication:
    assert_eq!(a.field_add(T::field_zero()), a);
    assert_eq!(a.field_mul(T::field_one()), a);

    // Inverse of addition and multiplication:
    assert_eq!(a.field_sub(a), T::field_zero());
    if b != T::field_zero() {
        assert_eq!(a.field_mul(b).field_div(b), Ok(a));
    }
    assert!(a.field_div(T::field_zero()).is_err());

    // Distributivity of multiplication over addition:
    assert_eq!(
        a.field_mul(b.field_add(c)),
        a.field_mul(b).field_add(a.field_mul(c))
    );

    // Negation
    assert_eq!(b.field_add(a.field_neg()), b.field_sub(a));
}
