//! The message codec between byte-strings and polynomial chunks.
//!
//! Encryption expands bytes MSB-first into bits and packs them `N` to a
//! chunk as ternary coefficients (`1` bit -> `+1`, `0` bit -> `-1`), padding
//! the short final chunk with the synthetic [`PAD_COEFF`] that decodes back
//! to a zero bit. Ciphertext chunks serialize as one byte per coefficient and
//! are Base64-armored in a single pass each way.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use bitvec::{order::Msb0, vec::BitVec};
use num_traits::{One, ToPrimitive};

use crate::{
    error::Result,
    primitives::poly::{Coeff, Poly, PolyConf},
};


/// The coefficient marking a chunk position past the end of the message
/// bits. It carries no information and decodes to a zero bit.
pub const PAD_COEFF: i64 = 2;

/// Expands a byte-string into bit-encoded ternary chunks of width `N`.
///
/// Every `1` bit becomes coefficient `+1` and every `0` bit `-1`, MSB first
/// within each byte; positions of the final chunk past the message bits are
/// set to [`PAD_COEFF`].
pub fn message_to_ternary<C: PolyConf>(msg: &[u8]) -> Vec<Poly> {
    let bits = BitVec::<u8, Msb0>::from_slice(msg);

    bits.chunks(C::RING_DEGREE)
        .map(|chunk| {
            let mut poly = Poly::zeroed(C::RING_DEGREE);

            for (i, bit) in chunk.iter().by_vals().enumerate() {
                poly[i] = if bit { Coeff::one() } else { -Coeff::one() };
            }
            for i in chunk.len()..C::RING_DEGREE {
                poly[i] = Coeff::from(PAD_COEFF);
            }

            poly
        })
        .collect()
}

/// Collapses decrypted ternary chunks back into the message byte-string.
///
/// Coefficient `+1` reads as a `1` bit and anything else as a `0` bit, so
/// both `-1` and the padding sentinel collapse to zero bits. The bits are
/// repacked MSB-first into bytes, and the trailing null bytes produced by
/// all-padding groups are stripped.
pub fn ternary_to_message<C: PolyConf>(polys: &[Poly]) -> Vec<u8> {
    let mut bits = BitVec::<u8, Msb0>::with_capacity(polys.len() * C::RING_DEGREE);

    for poly in polys {
        for i in 0..C::RING_DEGREE {
            bits.push(poly.coeff(i).is_one());
        }
    }

    let mut bytes = bits.into_vec();
    while bytes.last() == Some(&0) {
        bytes.pop();
    }

    bytes
}

/// Serializes coefficient chunks to bytes and applies the Base64 armor.
///
/// Each chunk contributes exactly `N` bytes, one per coefficient. The
/// out-of-range sentinel value `q` marks "no coefficient here" and
/// serializes as a null byte.
pub fn poly_array_to_base64<C: PolyConf>(polys: &[Poly], q: u32) -> String {
    let sentinel = Coeff::from(q);
    let mut bytes = Vec::with_capacity(polys.len() * C::RING_DEGREE);

    for poly in polys {
        for i in 0..C::RING_DEGREE {
            let coeff = poly.coeff(i);
            if *coeff == sentinel {
                bytes.push(0);
            } else {
                bytes.push(
                    coeff
                        .to_u8()
                        .expect("coefficients were reduced below q, which fits in a byte"),
                );
            }
        }
    }

    STANDARD.encode(bytes)
}

/// Strips the Base64 armor and reads the bytes back into coefficient chunks
/// of width `N`.
///
/// A short final chunk is filled up with the sentinel value `q`, which the
/// decryption path centers to zero.
pub fn base64_to_poly_array<C: PolyConf>(armor: impl AsRef<[u8]>, q: u32) -> Result<Vec<Poly>> {
    let bytes = STANDARD.decode(armor)?;

    let polys = bytes
        .chunks(C::RING_DEGREE)
        .map(|chunk| {
            let mut poly = Poly::zeroed(C::RING_DEGREE);

            for (i, byte) in chunk.iter().enumerate() {
                poly[i] = Coeff::from(*byte);
            }
            for i in chunk.len()..C::RING_DEGREE {
                poly[i] = Coeff::from(q);
            }

            poly
        })
        .collect();

    Ok(polys)
}
