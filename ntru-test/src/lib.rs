//! Known-answer vectors for the NTRU cryptosystem.
//!
//! All fixtures use the toy `(N, p, q) = (11, 3, 32)` triple, which is small
//! enough to check by hand. The expected values were produced by an
//! independent implementation of the same scheme.

use static_assertions::const_assert_eq;

/// The ring dimension the fixtures were generated for.
pub const RING_DEGREE: usize = 11;

/// The small modulus.
pub const P: u32 = 3;

/// The large modulus.
pub const Q: u32 = 32;

/// The sampled ternary private key polynomial `f`.
pub const F: [i64; 11] = [-1, 1, 1, 0, -1, 0, 1, 0, 0, 1, -1];

/// The sampled ternary polynomial `g`.
pub const G: [i64; 11] = [-1, 0, 1, 1, 0, 1, 0, 0, -1, 0, -1];

/// A ternary polynomial with no inverse mod 2: its constant and linear
/// coefficients vanish, so key generation must reject it.
pub const F_NON_INVERTIBLE: [i64; 11] = [0, 0, 1, 0, -1, 0, 0, 0, 0, 1, -1];

/// The blinding polynomial `r` used by the encryption vectors.
pub const RND: [i64; 11] = [-1, 0, 1, 1, 1, -1, 0, -1, 0, 0, 0];

/// The expected public key `h = p * F_q ⋆ g (mod q)` for [`F`] and [`G`].
pub const PUB_KEY: [i64; 11] = [8, 25, 22, 20, 12, 24, 15, 19, 12, 19, 16];

/// The expected `F_p = f^-1 (mod p)` for [`F`], in unsigned representatives.
pub const PRIV_KEY_INV: [i64; 11] = [1, 2, 0, 2, 2, 1, 0, 2, 1, 2, 0];

/// The expected `F_q = f^-1 (mod q)` for [`F`], after Hensel lifting.
pub const F_Q: [i64; 11] = [5, 9, 6, 16, 4, 15, 16, 22, 20, 18, 30];

/// The exported form of [`PUB_KEY`]: its 11 coefficient bytes, Base64.
pub const PUB_KEY_ARMOR: &str = "CBkWFAwYDxMMExA=";

/// The small-modulus export of [`PUB_KEY`], i.e. `h mod p` framed the way
/// private keys are stored.
pub const PUB_KEY_SMALL_MOD_ARMOR: &str = "AgEBAgAAAAEAAQE=";

/// The small-modulus export of the private key [`F`] itself.
pub const PRIV_KEY_ARMOR: &str = "AgEBAAIAAQAAAQI=";

/// The plaintext behind the encryption vector: 11 bytes, which is exactly
/// 88 bits and therefore exactly 8 chunks at `N = 11`.
pub const PLAINTEXT: &[u8] = b"\xa0BLAHFASEL\n";

/// The ciphertext of [`PLAINTEXT`] under [`PUB_KEY`] with blinding [`RND`].
pub const CIPHERTEXT_ARMOR: &str = "EAobFg4PHQYZBhEOChkYDg8fBhkGEw4KGRgODx0GGQYREAoZGA4PHQYbBBEODBsWDhEdBhkEERAKGxYQDx0IGwQTDgoZGA4RHQgZBBMQChkWDg8dCBkGEQ==";

const_assert_eq!(F.len(), RING_DEGREE);
const_assert_eq!(G.len(), RING_DEGREE);
const_assert_eq!(F_NON_INVERTIBLE.len(), RING_DEGREE);
const_assert_eq!(RND.len(), RING_DEGREE);
const_assert_eq!(PUB_KEY.len(), RING_DEGREE);
const_assert_eq!(PRIV_KEY_INV.len(), RING_DEGREE);
const_assert_eq!(F_Q.len(), RING_DEGREE);
