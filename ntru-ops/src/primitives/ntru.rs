//! Implementation of the NTRUEncrypt cryptosystem
//! `<https://ntru.org/f/hps98.pdf>`

use std::marker::PhantomData;

use num_traits::{One, Zero};
use rand::Rng;

use crate::{
    encoded,
    error::{Error, Result},
    primitives::poly::{
        inverse_mod_p, inverse_mod_q, mod_balanced, mod_unsigned, star_multiply, Coeff, Poly,
        PolyConf,
    },
};


/// The runtime moduli of the cryptosystem.
///
/// Together with the ring dimension `N` from the [`PolyConf`], this is the
/// `(N, q, p)` triple that fixes the scheme. Immutable after construction.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct NtruParams {
    /// The small modulus, coprime to `q`.
    pub p: u32,
    /// The large modulus, a power of two.
    pub q: u32,
}

impl NtruParams {
    /// Creates the parameter pair, checking the scheme preconditions.
    ///
    /// Panics on an invalid pair: parameter misuse is a programmer error,
    /// not a recoverable one.
    pub fn new(p: u32, q: u32) -> Self {
        assert!(q.is_power_of_two(), "q must be a power of two");
        assert!(p >= 2 && p < q, "p must be a small modulus below q");
        assert!(p % 2 == 1, "p must be coprime to the power-of-two q");

        Self { p, q }
    }
}

/// NTRU scheme context.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Ntru<C: PolyConf> {
    /// The runtime moduli.
    params: NtruParams,

    /// A zero-sized marker, which binds the ring config to the context.
    _conf: PhantomData<C>,
}

/// A generated key pair.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct KeyPair {
    /// The sampled small ternary polynomial `f`.
    pub priv_key: Poly,
    /// `F_p = f^-1 mod p`, kept alongside `f` because decryption needs both.
    pub priv_key_inv: Poly,
    /// The public key `h = p * F_q ⋆ g (mod q)`.
    pub pub_key: Poly,
}

impl<C: PolyConf> Ntru<C> {
    /// NTRU constructor.
    pub fn new(params: NtruParams) -> Self {
        Self {
            params,
            _conf: PhantomData,
        }
    }

    /// The runtime moduli of this context.
    pub fn params(&self) -> &NtruParams {
        &self.params
    }

    /// Builds a key pair from the sampled ternary polynomials `f` and `g`.
    ///
    /// Fails with [`Error::NotInvertible`] when `f` has no inverse mod 2 or
    /// mod p; the caller resamples `f` and retries.
    pub fn create_keypair(&self, f: &Poly, g: &Poly) -> Result<KeyPair> {
        let f_q = inverse_mod_q::<C>(f, self.params.q)?;
        let f_p = inverse_mod_p::<C>(f, self.params.p)?;

        let mut pub_key = star_multiply::<C>(&f_q, g, self.params.q);
        pub_key *= Coeff::from(self.params.p);
        mod_unsigned(&mut pub_key, self.params.q);

        Ok(KeyPair {
            priv_key: f.clone(),
            priv_key_inv: f_p,
            pub_key,
        })
    }

    /// Encrypts one message polynomial: `e = h ⋆ r + m (mod q)`.
    ///
    /// `msg_bin` carries the bit-encoded message chunk, `rnd` the blinding
    /// polynomial. The output has coefficients in `[0, q)` and may be
    /// assigned over any of the inputs.
    pub fn encrypt_poly(&self, msg_bin: &Poly, pub_key: &Poly, rnd: &Poly) -> Poly {
        let mut out = star_multiply::<C>(pub_key, rnd, self.params.q);
        out += msg_bin;
        mod_unsigned(&mut out, self.params.q);
        out
    }

    /// Decrypts one ciphertext polynomial:
    /// `m = ((f ⋆ e) mod-balanced q) ⋆ F_p (mod-balanced p)`.
    ///
    /// All three inputs are first shifted into the centered range so the
    /// small-coefficient structure survives the convolutions. The output
    /// coefficients lie in `{-1, 0, 1}`.
    pub fn decrypt_poly(&self, encr_msg: &Poly, priv_key: &Poly, priv_key_inv: &Poly) -> Poly {
        let mut priv_key = priv_key.clone();
        let mut priv_key_inv = priv_key_inv.clone();
        let mut encr_msg = encr_msg.clone();
        mod_balanced(&mut priv_key, self.params.q);
        mod_balanced(&mut priv_key_inv, self.params.q);
        mod_balanced(&mut encr_msg, self.params.q);

        let mut a = star_multiply::<C>(&priv_key, &encr_msg, self.params.q);
        mod_balanced(&mut a, self.params.q);

        let mut out = star_multiply::<C>(&a, &priv_key_inv, self.params.p);
        mod_balanced(&mut out, self.params.p);
        out
    }

    /// Encrypts a byte-string into a Base64 ciphertext.
    ///
    /// The message is expanded to bit-encoded ternary chunks, each chunk is
    /// encrypted in place, and the coefficient stream is armored.
    pub fn encrypt_string(&self, msg: &[u8], pub_key: &Poly, rnd: &Poly) -> Result<String> {
        if msg.is_empty() {
            return Err(Error::EmptyMessage);
        }

        let mut chunks = encoded::message_to_ternary::<C>(msg);
        for chunk in &mut chunks {
            *chunk = self.encrypt_poly(chunk, pub_key, rnd);
        }

        Ok(encoded::poly_array_to_base64::<C>(&chunks, self.params.q))
    }

    /// Decrypts a Base64 ciphertext back into the message byte-string.
    ///
    /// Trailing null bytes produced by chunk padding are stripped, so a
    /// plaintext that legitimately ends in null bytes comes back truncated.
    pub fn decrypt_string(
        &self,
        encr_msg: &str,
        priv_key: &Poly,
        priv_key_inv: &Poly,
    ) -> Result<Vec<u8>> {
        if encr_msg.is_empty() {
            return Err(Error::EmptyMessage);
        }

        let mut chunks = encoded::base64_to_poly_array::<C>(encr_msg, self.params.q)?;
        for chunk in &mut chunks {
            *chunk = self.decrypt_poly(chunk, priv_key, priv_key_inv);
        }

        Ok(encoded::ternary_to_message::<C>(&chunks))
    }

    /// Samples a ternary polynomial with exactly `num_ones` coefficients set
    /// to `1` and `num_neg_ones` set to `-1`.
    ///
    /// Positions are drawn uniformly and rejected until the counts are met.
    pub fn sample_ternary<R: Rng>(&self, rng: &mut R, num_ones: u32, num_neg_ones: u32) -> Poly {
        assert!(
            (num_ones + num_neg_ones) as usize <= C::RING_DEGREE,
            "more non-zero coefficients requested than ring positions"
        );

        let mut poly = Poly::zeroed(C::RING_DEGREE);
        let mut num_ones = num_ones;
        let mut num_neg_ones = num_neg_ones;

        while num_ones > 0 || num_neg_ones > 0 {
            let pos = rng.gen_range(0..C::RING_DEGREE);
            if !poly[pos].is_zero() {
                continue;
            }

            if num_ones > 0 {
                poly[pos] = Coeff::one();
                num_ones -= 1;
            } else {
                poly[pos] = -Coeff::one();
                num_neg_ones -= 1;
            }
        }

        poly
    }
}
