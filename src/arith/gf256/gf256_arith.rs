// Galois field 256 F_256 operations

use crate::{
    constants::params::{PARAM_FIELD_ORDER, PARAM_GENERATOR, PARAM_MODULUS},
    error::{Result, ShamirError},
};

use super::FieldArith;

/// Power and log tables for the generator {03} over the AES polynomial 0x11B.
///
/// `exp` holds g^i for i in 0..512. The second half repeats the first so that
/// `log(a) + log(b)` (at most 508) can index it without a modulo.
/// `log` holds log_g(a) for non-zero a. log_g(0) is undefined and stored as 0.
pub struct FieldTables {
    exp: [u8; 512],
    log: [u8; 256],
}

impl FieldTables {
    const fn build() -> Self {
        let mut exp = [0u8; 512];
        let mut log = [0u8; 256];

        let mut x: u16 = 1;
        let mut i = 0;
        while i < PARAM_FIELD_ORDER as usize {
            exp[i] = x as u8;
            log[x as usize] = i as u8;
            x = xtime(x) ^ x; // x * {03} = x * {02} + x
            i += 1;
        }
        while i < exp.len() {
            exp[i] = exp[i - PARAM_FIELD_ORDER as usize];
            i += 1;
        }

        FieldTables { exp, log }
    }
}

/// Multiply by {02} and reduce modulo the field polynomial
const fn xtime(x: u16) -> u16 {
    let doubled = x << 1;
    if doubled & 0x100 != 0 {
        doubled ^ PARAM_MODULUS
    } else {
        doubled
    }
}

// Evaluated at compile time, so there is no first-use initialisation to race on.
static FIELD_TABLES: FieldTables = FieldTables::build();

// The generator must be the element the tables are built from
const _: () = assert!(FieldTables::build().exp[1] == PARAM_GENERATOR);

#[inline]
fn power_lookup(a: u16) -> u8 {
    FIELD_TABLES.exp[a as usize]
}

#[inline]
fn log_lookup(a: u8) -> u16 {
    FIELD_TABLES.log[a as usize] as u16
}

#[inline]
pub fn gf256_add(a: u8, b: u8) -> u8 {
    a ^ b
}

/// Same as addition in characteristic 2
#[inline]
pub fn gf256_sub(a: u8, b: u8) -> u8 {
    gf256_add(a, b)
}

/// Multiplication using log table lookup a * b = g^(log_g(a) + log_g(b))
#[inline]
pub fn gf256_mul(a: u8, b: u8) -> u8 {
    if (a == 0) || (b == 0) {
        return 0;
    }
    power_lookup(log_lookup(a) + log_lookup(b))
}

/// Division using log table lookup a / b = g^((log_g(a) + |g| - log_g(b)) mod |g|)
pub fn gf256_div(a: u8, b: u8) -> Result<u8> {
    if b == 0 {
        return Err(ShamirError::DivisionByZero);
    }
    if a == 0 {
        return Ok(0);
    }
    Ok(power_lookup(
        (log_lookup(a) + PARAM_FIELD_ORDER - log_lookup(b)) % PARAM_FIELD_ORDER,
    ))
}

/// Inverse using log table lookup a^-1 = g^(|g| - log_g(a))
pub fn gf256_mul_inverse(a: u8) -> Result<u8> {
    if a == 0 {
        return Err(ShamirError::DivisionByZero);
    }
    Ok(power_lookup(PARAM_FIELD_ORDER - log_lookup(a)))
}

/// Carry-less shift and add multiplication with reduction. Table free reference for the lookups.
pub fn gf256_mul_shift_and_add(a: u8, b: u8) -> u8 {
    let mut r: u8 = 0;
    let mut a = a;
    let mut b = b;
    while a != 0 && b != 0 {
        if (b & 1) != 0 {
            r ^= a
        }
        a = xtime(a as u16) as u8;
        b >>= 1
    }

    r
}

impl FieldArith for u8 {
    fn field_one() -> Self {
        1u8
    }

    fn field_zero() -> Self {
        0u8
    }

    fn field_add(&self, rhs: Self) -> Self {
        gf256_add(*self, rhs)
    }

    fn field_sub(&self, rhs: Self) -> Self {
        gf256_sub(*self, rhs)
    }

    fn field_neg(&self) -> Self {
        *self
    }

    fn field_mul(&self, rhs: Self) -> Self {
        gf256_mul(*self, rhs)
    }

    fn field_mul_inverse(&self) -> Result<Self> {
        gf256_mul_inverse(*self)
    }

    fn field_div(&self, rhs: Self) -> Result<Self> {
        gf256_div(*self, rhs)
    }
}
