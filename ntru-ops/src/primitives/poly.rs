//! Dense polynomials over arbitrary-precision integer coefficients.
//!
//! The element `c0 + c1*X + ... + c{N-1}*X^{N-1}` of the convolution ring
//! `Z[X]/(X^N - 1)` is stored as a coefficient vector of width `N`. The
//! inversion routines temporarily work on width `N + 1` polynomials, so the
//! width of a [`Poly`] is not fixed by the type; positions past the stored
//! width read as zero.

use std::{
    fmt,
    ops::{AddAssign, MulAssign, SubAssign},
};

use derive_more::{AsRef, Deref, DerefMut, From, Index, IndexMut, Into};
use itertools::Itertools;
use lazy_static::lazy_static;
use num_traits::{One, Zero};

pub use conf::PolyConf;

#[cfg(any(test, feature = "benchmark"))]
pub use conf::TestRes;

pub use inv::{inverse_mod_p, inverse_mod_q};
pub use modulus::{mod_balanced, mod_unsigned};
pub use mul::star_multiply;

pub mod conf;
pub mod inv;
pub mod modulus;
pub mod mul;


/// The coefficient integer type.
///
/// Coefficients may go negative during arithmetic, and intermediate
/// convolution sums may exceed any fixed-width integer, so they are
/// arbitrary-precision.
pub type Coeff = num_bigint::BigInt;

lazy_static! {
    /// The zero coefficient as a static constant value.
    ///
    /// Used when a coefficient accessor must return a long-lived reference
    /// for a position past the stored width.
    static ref COEFF_ZERO: Coeff = Coeff::zero();
}

/// A dense polynomial with [`Coeff`] coefficients.
///
/// Ring operations take the dimension `N` from a [`PolyConf`] type parameter;
/// the polynomial itself just owns its coefficient vector.
#[derive(
    Clone, Debug, Default, PartialEq, Eq, Hash, AsRef, Deref, DerefMut, From, Into, Index, IndexMut,
)]
pub struct Poly(Vec<Coeff>);

impl Poly {
    /// Converts `coeffs` into a dense polynomial.
    pub fn from_coefficients_vec(coeffs: Vec<Coeff>) -> Self {
        Self(coeffs)
    }

    /// Builds a polynomial from small signed coefficients.
    pub fn from_signed(coeffs: &[i64]) -> Self {
        Self(coeffs.iter().map(|&c| Coeff::from(c)).collect())
    }

    /// Returns the zero polynomial stored with width `len`.
    pub fn zeroed(len: usize) -> Self {
        Self(vec![Coeff::zero(); len])
    }

    /// Returns the coefficient of `X^i`, which is zero past the stored width.
    pub fn coeff(&self, i: usize) -> &Coeff {
        self.0.get(i).unwrap_or(&COEFF_ZERO)
    }

    /// Returns the degree of the highest non-zero coefficient,
    /// or `None` for the zero polynomial.
    pub fn degree(&self) -> Option<usize> {
        self.0.iter().rposition(|c| !c.is_zero())
    }

    /// Returns true if every coefficient is zero.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(Zero::is_zero)
    }

    /// Returns true if this is the constant polynomial `1`.
    pub fn is_one(&self) -> bool {
        self.0.first().map_or(false, One::is_one) && self.0.iter().skip(1).all(Zero::is_zero)
    }
}

impl AddAssign<&Poly> for Poly {
    fn add_assign(&mut self, rhs: &Poly) {
        if rhs.0.len() > self.0.len() {
            self.0.resize(rhs.0.len(), Coeff::zero());
        }
        for (coeff, rhs_coeff) in self.0.iter_mut().zip(rhs.0.iter()) {
            *coeff += rhs_coeff;
        }
    }
}

impl SubAssign<&Poly> for Poly {
    fn sub_assign(&mut self, rhs: &Poly) {
        if rhs.0.len() > self.0.len() {
            self.0.resize(rhs.0.len(), Coeff::zero());
        }
        for (coeff, rhs_coeff) in self.0.iter_mut().zip(rhs.0.iter()) {
            *coeff -= rhs_coeff;
        }
    }
}

impl MulAssign<Coeff> for Poly {
    fn mul_assign(&mut self, rhs: Coeff) {
        for coeff in &mut self.0 {
            *coeff *= &rhs;
        }
    }
}

impl fmt::Display for Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.iter().join(", "))
    }
}
