//! Coefficient-wise modular reduction to unsigned and balanced representatives.

use num_integer::Integer;

use crate::primitives::poly::{Coeff, Poly};

/// Reduces every coefficient to the unique representative in `[0, modulus)`.
pub fn mod_unsigned(poly: &mut Poly, modulus: u32) {
    let m = Coeff::from(modulus);

    for coeff in poly.iter_mut() {
        *coeff = coeff.mod_floor(&m);
    }
}

/// Reduces every coefficient to the centered representative in
/// `(-modulus/2, modulus/2]`.
///
/// Decryption shifts the ciphertext and key copies through this
/// representation before convolving, so that small negative coefficients
/// stay small instead of wrapping to `q - 1`.
pub fn mod_balanced(poly: &mut Poly, modulus: u32) {
    let m = Coeff::from(modulus);
    let half = Coeff::from(modulus / 2);

    for coeff in poly.iter_mut() {
        let mut centered = coeff.mod_floor(&m);
        if centered > half {
            centered -= &m;
        }
        *coeff = centered;
    }
}

/// Returns the multiplicative inverse of `value` modulo `modulus`, if one
/// exists.
///
/// Plain extended Euclid on machine integers; both arguments are small
/// scalar moduli.
pub fn invmod(value: u32, modulus: u32) -> Option<u32> {
    let (mut a, mut m) = (i64::from(value % modulus), i64::from(modulus));
    let (mut x, mut inv) = (0_i64, 1_i64);

    if m == 1 {
        return Some(0);
    }

    while a > 1 {
        if m == 0 {
            // gcd(value, modulus) > 1
            return None;
        }
        let (div, rem) = a.div_rem(&m);
        inv -= div * x;
        a = rem;
        std::mem::swap(&mut a, &mut m);
        std::mem::swap(&mut x, &mut inv);
    }

    if a != 1 {
        return None;
    }

    inv = inv.rem_euclid(i64::from(modulus));
    Some(inv as u32)
}
