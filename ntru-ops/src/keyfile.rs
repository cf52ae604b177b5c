//! Key export and import through the file store.
//!
//! Key files hold a single Base64-armored polynomial. The public key is
//! stored with its coefficients in `[0, q)`; the private key is stored
//! reduced to `[0, p)` and is centered back to its ternary form on import,
//! which also regenerates `F_p`.

use std::{fs, path::Path};

use crate::{
    encoded,
    error::{Error, Result},
    primitives::{
        ntru::Ntru,
        poly::{inverse_mod_p, mod_balanced, mod_unsigned, Poly, PolyConf},
    },
};

/// Reads a whole file into a byte-string.
///
/// Fails for missing or non-regular files; the error is propagated unchanged.
pub fn read_file(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    Ok(fs::read(path)?)
}

/// Writes a byte-string to a file, creating or truncating it.
pub fn write_file(path: impl AsRef<Path>, contents: &[u8]) -> Result<()> {
    Ok(fs::write(path, contents)?)
}

impl<C: PolyConf> Ntru<C> {
    /// Writes the public key polynomial to `path` as Base64.
    pub fn export_public_key(&self, path: impl AsRef<Path>, pub_key: &Poly) -> Result<()> {
        let armor = encoded::poly_array_to_base64::<C>(std::slice::from_ref(pub_key), self.params().q);
        write_file(path, armor.as_bytes())
    }

    /// Writes the private key polynomial to `path` as Base64, reduced to its
    /// small-modulus representative in `[0, p)`.
    pub fn export_priv_key(&self, path: impl AsRef<Path>, priv_key: &Poly) -> Result<()> {
        let mut reduced = priv_key.clone();
        mod_unsigned(&mut reduced, self.params().p);

        let armor = encoded::poly_array_to_base64::<C>(std::slice::from_ref(&reduced), self.params().q);
        write_file(path, armor.as_bytes())
    }

    /// Reads a public key polynomial back from `path`.
    pub fn import_public_key(&self, path: impl AsRef<Path>) -> Result<Poly> {
        let armor = read_file(path)?;
        single_poly(encoded::base64_to_poly_array::<C>(&armor, self.params().q)?)
    }

    /// Reads a private key back from `path`, returning `(f, F_p)`.
    ///
    /// The stored `[0, p)` representative is centered to recover the ternary
    /// `f`, and `F_p = f^-1 mod p` is recomputed from it.
    pub fn import_priv_key(&self, path: impl AsRef<Path>) -> Result<(Poly, Poly)> {
        let armor = read_file(path)?;
        let mut priv_key = single_poly(encoded::base64_to_poly_array::<C>(&armor, self.params().q)?)?;
        mod_balanced(&mut priv_key, self.params().p);

        let mut priv_key_inv = inverse_mod_p::<C>(&priv_key, self.params().p)?;
        mod_balanced(&mut priv_key_inv, self.params().p);

        Ok((priv_key, priv_key_inv))
    }
}

/// Unwraps a decoded key file payload, which must hold exactly one
/// polynomial.
fn single_poly(mut polys: Vec<Poly>) -> Result<Poly> {
    if polys.len() != 1 {
        return Err(Error::KeyFormat { polys: polys.len() });
    }

    Ok(polys.remove(0))
}
