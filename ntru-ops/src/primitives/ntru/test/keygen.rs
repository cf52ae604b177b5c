//! Tests for key generation.

use rand::Rng;

use crate::{
    error::Error,
    primitives::{
        ntru::{KeyPair, Ntru, NtruParams},
        poly::{star_multiply, Poly, PolyConf, TestRes},
    },
};

/// The context every fixture test runs under.
fn test_context() -> Ntru<TestRes> {
    Ntru::new(NtruParams::new(ntru_test::P, ntru_test::Q))
}

/// Builds the fixture key pair.
pub fn fixture_keypair() -> KeyPair {
    let f = Poly::from_signed(&ntru_test::F);
    let g = Poly::from_signed(&ntru_test::G);

    test_context()
        .create_keypair(&f, &g)
        .expect("the fixture f is invertible")
}

/// Samples ternary key material until key generation accepts it.
pub fn random_keypair<C: PolyConf, R: Rng>(ctx: &Ntru<C>, rng: &mut R) -> KeyPair {
    let weight = (C::RING_DEGREE / 3) as u32;

    loop {
        let f = ctx.sample_ternary(rng, weight, weight);
        let g = ctx.sample_ternary(rng, weight, weight);

        if let Ok(pair) = ctx.create_keypair(&f, &g) {
            return pair;
        }
    }
}

#[test]
fn keypair_matches_the_known_answer() {
    let pair = fixture_keypair();

    assert_eq!(pair.pub_key, Poly::from_signed(&ntru_test::PUB_KEY));
    assert_eq!(pair.priv_key_inv, Poly::from_signed(&ntru_test::PRIV_KEY_INV));
    assert_eq!(pair.priv_key, Poly::from_signed(&ntru_test::F));
}

#[test]
fn non_invertible_f_is_rejected() {
    let f = Poly::from_signed(&ntru_test::F_NON_INVERTIBLE);
    let g = Poly::from_signed(&ntru_test::G);

    assert!(matches!(
        test_context().create_keypair(&f, &g),
        Err(Error::NotInvertible)
    ));
}

#[test]
fn random_keypairs_satisfy_the_ring_identity() {
    let mut rng = rand::thread_rng();
    let ctx = test_context();

    for _ in 0..5 {
        let pair = random_keypair(&ctx, &mut rng);

        // f ⋆ F_p = 1 (mod p)
        let product = star_multiply::<TestRes>(&pair.priv_key, &pair.priv_key_inv, ntru_test::P);
        assert!(product.is_one(), "f ⋆ F_p = {product} instead of 1");
    }
}
