//! Error kinds surfaced by the cryptographic core.

use thiserror::Error;

/// The errors a ring operation, codec, or key store call can surface.
///
/// The primitives never retry on their own: [`Error::NotInvertible`] is
/// propagated to key generation, whose callers resample `f` and try again.
#[derive(Debug, Error)]
pub enum Error {
    /// The polynomial has no inverse modulo the requested modulus.
    #[error("polynomial is not invertible")]
    NotInvertible,

    /// A zero-length message or ciphertext was passed to the string API.
    #[error("message is empty")]
    EmptyMessage,

    /// The Base64 armor of a ciphertext or key file failed to decode.
    #[error("malformed base64 armor: {0}")]
    Base64(#[from] base64::DecodeError),

    /// A key file decoded to the wrong number of polynomials.
    #[error("key file holds {polys} polynomials, expected exactly one")]
    KeyFormat {
        /// The number of polynomials the file decoded to.
        polys: usize,
    },

    /// A file store failure, propagated unchanged.
    #[error("file store error: {0}")]
    Io(#[from] std::io::Error),
}

/// The result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
