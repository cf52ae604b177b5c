//! Basic operations used to implement the cryptosystem.

/// Truncated-ring polynomial operations on big-integer coefficients.
pub mod poly;

/// The NTRU cryptosystem: key generation, encryption, decryption.
pub mod ntru;
