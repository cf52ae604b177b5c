//! Fixed parameters for ring polynomial types.

use std::fmt::Debug;

/// The ring configuration used in tests: the (N, p, q) = (11, 3, 32) triple
/// keeps failing tests small enough to diagnose by hand.
#[cfg(any(test, feature = "benchmark"))]
pub type TestRes = Toy;

/// Fixed ring dimension.
///
/// Polynomials convolved under different configurations are incompatible.
pub trait PolyConf: Copy + Clone + Debug + Eq + PartialEq {
    /// The dimension `N` of the ring `Z[X]/(X^N - 1)`: every ring element has
    /// degree below `N`.
    const RING_DEGREE: usize;
}

/// Toy dimension, for tests and diagnostics only. Pairs with p = 3, q = 32.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Toy;

impl PolyConf for Toy {
    const RING_DEGREE: usize = 11;
}

/// Moderate security dimension. Pairs with p = 3, q = 128.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Moderate;

impl PolyConf for Moderate {
    const RING_DEGREE: usize = 167;
}

/// Standard security dimension. Pairs with p = 3, q = 128.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Standard;

impl PolyConf for Standard {
    const RING_DEGREE: usize = 251;
}

/// Highest security dimension. Pairs with p = 3, q = 256.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Highest;

impl PolyConf for Highest {
    const RING_DEGREE: usize = 503;
}
