//! Tests for coefficient reductions.

use num_integer::Integer;
use num_traits::Zero;

use crate::primitives::poly::{
    mod_balanced, mod_unsigned,
    modulus::invmod,
    test::gen::rand_signed_poly,
    Coeff, Poly, TestRes,
};

#[test]
fn mod_unsigned_reduces_into_range() {
    for modulus in [2_u32, 3, 32] {
        let original = rand_signed_poly::<TestRes>(1000);
        let mut reduced = original.clone();
        mod_unsigned(&mut reduced, modulus);

        let m = Coeff::from(modulus);
        for (reduced_coeff, original_coeff) in reduced.iter().zip(original.iter()) {
            assert!(*reduced_coeff >= Coeff::zero());
            assert!(*reduced_coeff < m);
            // The representative is congruent to the original coefficient.
            assert!((original_coeff - reduced_coeff).mod_floor(&m).is_zero());
        }
    }
}

#[test]
fn mod_balanced_reduces_into_centered_range() {
    for modulus in [3_u32, 32] {
        let original = rand_signed_poly::<TestRes>(1000);
        let mut reduced = original.clone();
        mod_balanced(&mut reduced, modulus);

        let m = Coeff::from(modulus);
        let half = Coeff::from(modulus / 2);
        for (reduced_coeff, original_coeff) in reduced.iter().zip(original.iter()) {
            assert!(*reduced_coeff > -&m + &half);
            assert!(*reduced_coeff <= half);
            assert!((original_coeff - reduced_coeff).mod_floor(&m).is_zero());
        }
    }
}

#[test]
fn mod_balanced_keeps_the_upper_half_positive() {
    // The centered range is (-m/2, m/2], so q/2 itself stays positive.
    let mut poly = Poly::from_signed(&[16, 17, 31, 0, 15, 32, 2, 1, 0, 0, 0]);
    mod_balanced(&mut poly, 32);
    assert_eq!(
        poly,
        Poly::from_signed(&[16, -15, -1, 0, 15, 0, 2, 1, 0, 0, 0])
    );

    let mut poly = Poly::from_signed(&[0, 1, 2, 0, 1, 2, 0, 1, 2, 0, 1]);
    mod_balanced(&mut poly, 3);
    assert_eq!(
        poly,
        Poly::from_signed(&[0, 1, -1, 0, 1, -1, 0, 1, -1, 0, 1])
    );
}

#[test]
fn invmod_inverts_units() {
    assert_eq!(invmod(1, 3), Some(1));
    assert_eq!(invmod(2, 3), Some(2));
    assert_eq!(invmod(3, 7), Some(5));
    assert_eq!(invmod(7, 32), Some(23));

    // Non-units have no inverse.
    assert_eq!(invmod(0, 3), None);
    assert_eq!(invmod(2, 32), None);
    assert_eq!(invmod(6, 3), None);
}
