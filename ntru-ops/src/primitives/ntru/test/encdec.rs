//! Tests for encryption and decryption.

use num_traits::One;

use crate::{
    encoded,
    error::Error,
    primitives::{
        ntru::{test::keygen::fixture_keypair, Ntru, NtruParams},
        poly::{Poly, PolyConf, TestRes},
    },
};

fn test_context() -> Ntru<TestRes> {
    Ntru::new(NtruParams::new(ntru_test::P, ntru_test::Q))
}

#[test]
fn ciphertext_matches_the_known_answer() {
    let ctx = test_context();
    let pair = fixture_keypair();
    let rnd = Poly::from_signed(&ntru_test::RND);

    let ciphertext = ctx
        .encrypt_string(ntru_test::PLAINTEXT, &pair.pub_key, &rnd)
        .expect("plaintext is non-empty");

    assert_eq!(ciphertext, ntru_test::CIPHERTEXT_ARMOR);
}

#[test]
fn known_ciphertext_decrypts_to_the_plaintext() {
    let ctx = test_context();
    let pair = fixture_keypair();

    let plaintext = ctx
        .decrypt_string(
            ntru_test::CIPHERTEXT_ARMOR,
            &pair.priv_key,
            &pair.priv_key_inv,
        )
        .expect("ciphertext is well-formed");

    assert_eq!(plaintext, ntru_test::PLAINTEXT);
}

#[test]
fn string_round_trip() {
    let ctx = test_context();
    let pair = fixture_keypair();
    let rnd = Poly::from_signed(&ntru_test::RND);

    // Message lengths that are, and are not, a whole number of chunks.
    for msg in [
        b"hello world".as_slice(),
        b"To be or not to be, that is the question\n",
        b"x",
        b"a\x00b",
        b"BLAHFASEL\n",
    ] {
        let ciphertext = ctx
            .encrypt_string(msg, &pair.pub_key, &rnd)
            .expect("message is non-empty");
        let plaintext = ctx
            .decrypt_string(&ciphertext, &pair.priv_key, &pair.priv_key_inv)
            .expect("ciphertext is well-formed");

        assert_eq!(plaintext, msg);
    }
}

#[test]
fn poly_round_trip_preserves_the_bit_content() {
    let ctx = test_context();
    let pair = fixture_keypair();
    let rnd = Poly::from_signed(&ntru_test::RND);

    // Five bytes is 40 bits, so the last of the four chunks carries padding.
    let chunks = encoded::message_to_ternary::<TestRes>(b"hello");

    for chunk in &chunks {
        let encrypted = ctx.encrypt_poly(chunk, &pair.pub_key, &rnd);
        let decrypted = ctx.decrypt_poly(&encrypted, &pair.priv_key, &pair.priv_key_inv);

        // A +1 coefficient is a one bit; -1 and the padding sentinel are zero bits.
        for i in 0..TestRes::RING_DEGREE {
            assert_eq!(decrypted.coeff(i).is_one(), chunk.coeff(i).is_one());
        }
    }
}

#[test]
fn encryption_is_deterministic() {
    let ctx = test_context();
    let pair = fixture_keypair();
    let rnd = Poly::from_signed(&ntru_test::RND);

    let first = ctx
        .encrypt_string(b"hello world", &pair.pub_key, &rnd)
        .expect("message is non-empty");
    let second = ctx
        .encrypt_string(b"hello world", &pair.pub_key, &rnd)
        .expect("message is non-empty");

    assert_eq!(first, second);
}

#[test]
fn empty_message_is_rejected() {
    let ctx = test_context();
    let pair = fixture_keypair();
    let rnd = Poly::from_signed(&ntru_test::RND);

    assert!(matches!(
        ctx.encrypt_string(b"", &pair.pub_key, &rnd),
        Err(Error::EmptyMessage)
    ));
    assert!(matches!(
        ctx.decrypt_string("", &pair.priv_key, &pair.priv_key_inv),
        Err(Error::EmptyMessage)
    ));
}

#[test]
fn malformed_ciphertext_is_rejected() {
    let ctx = test_context();
    let pair = fixture_keypair();

    assert!(matches!(
        ctx.decrypt_string("not!valid!base64!", &pair.priv_key, &pair.priv_key_inv),
        Err(Error::Base64(_))
    ));
}
