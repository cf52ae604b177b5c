//! Star-multiplication: cyclic convolution in `Z[X]/(X^N - 1)`.

use num_integer::Integer;
use num_traits::Zero;

use crate::primitives::poly::{Coeff, Poly, PolyConf};

/// Returns `a ⋆ b` with every coefficient reduced to `[0, modulus)`.
///
/// For each output index `k` in `[0, N)`, the coefficient is the sum of
/// `a[i] * b[j]` over all `i + j ≡ k (mod N)`. Intermediate sums are
/// arbitrary-precision, so they may exceed the modulus freely; each output
/// coefficient is reduced once after its summation.
///
/// The output is a freshly allocated polynomial of width `N`, so callers may
/// assign it over either input.
///
/// Complexity is `O(N^2)` big-integer operations.
pub fn star_multiply<C: PolyConf>(a: &Poly, b: &Poly, modulus: u32) -> Poly {
    let n = C::RING_DEGREE;
    let m = Coeff::from(modulus);

    let mut out = Poly::zeroed(n);

    for k in 0..n {
        let mut acc = Coeff::zero();

        for i in 0..n {
            let a_coeff = a.coeff(i);
            if a_coeff.is_zero() {
                continue;
            }

            // X^N wraps to 1, so b contributes its coefficient at (k - i) mod N.
            acc += a_coeff * b.coeff((n + k - i) % n);
        }

        out[k] = acc.mod_floor(&m);
    }

    out
}
