//! Fixed ring configurations.

pub use crate::primitives::poly::conf::{Highest, Moderate, PolyConf, Standard, Toy};

#[cfg(any(test, feature = "benchmark"))]
pub use crate::primitives::poly::conf::TestRes;
