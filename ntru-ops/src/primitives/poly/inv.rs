//! Polynomial inversion in `(Z/2Z)[X]/(X^N - 1)` and `(Z/pZ)[X]/(X^N - 1)`.
//!
//! Both routines run the almost-inverse algorithm: a GCD-like loop against
//! `X^N - 1` that divides out powers of `X` whenever the constant term of the
//! working remainder vanishes, and undoes the accumulated shift at the end.
//! The mod-2 result is then Hensel-lifted to the power-of-two modulus `q`.

use num_traits::{One, Zero};

use crate::{
    error::{Error, Result},
    primitives::poly::{
        modulus::{invmod, mod_unsigned},
        mul::star_multiply,
        Coeff, Poly, PolyConf,
    },
};

/// Returns `a^-1` in `(Z/qZ)[X]/(X^N - 1)` for `q` a power of two, or
/// [`Error::NotInvertible`].
///
/// Computes the inverse mod 2 with the almost-inverse loop, then lifts it to
/// mod `q` by repeated modulus doubling with `F <- F * (2 - a*F)`.
pub fn inverse_mod_q<C: PolyConf>(a: &Poly, q: u32) -> Result<Poly> {
    let n = C::RING_DEGREE;

    let mut b = Poly::zeroed(n + 1);
    b[0] = Coeff::one();
    let mut c = Poly::zeroed(n + 1);

    let mut f = working_copy(a, n, 2);
    // g(X) = X^N - 1, which is X^N + 1 mod 2
    let mut g = Poly::zeroed(n + 1);
    g[0] = Coeff::one();
    g[n] = Coeff::one();

    let mut k = 0;

    loop {
        while f[0].is_zero() {
            divide_out_x(&mut f, &mut c);
            k += 1;

            if f.is_zero() {
                return Err(Error::NotInvertible);
            }
        }

        let deg_f = f.degree().expect("f has a non-zero constant term");
        if deg_f == 0 {
            break;
        }

        if deg_f < g.degree().expect("g is never zero") {
            std::mem::swap(&mut f, &mut g);
            std::mem::swap(&mut b, &mut c);
        }

        f += &g;
        mod_unsigned(&mut f, 2);
        b += &c;
        mod_unsigned(&mut b, 2);
    }

    let mut f_q = undo_shift(&b, n, k)?;

    // Hensel lift: double the modulus until it reaches q.
    let two = Coeff::from(2_u32);
    let mut v = 2;
    while v < q {
        v *= 2;

        let mut correction = star_multiply::<C>(a, &f_q, v);
        for (i, coeff) in correction.iter_mut().enumerate() {
            let negated = -std::mem::take(coeff);
            *coeff = if i == 0 { &two + negated } else { negated };
        }
        mod_unsigned(&mut correction, v);

        f_q = star_multiply::<C>(&f_q, &correction, v);
    }

    if star_multiply::<C>(a, &f_q, q).is_one() {
        Ok(f_q)
    } else {
        Err(Error::NotInvertible)
    }
}

/// Returns `a^-1` in `(Z/pZ)[X]/(X^N - 1)`, or [`Error::NotInvertible`].
///
/// Same skeleton as the mod-2 loop, except the elimination step scales `g` by
/// `u = f[0] * g[0]^-1` before subtracting, and the extracted inverse is
/// normalised by `f[0]^-1` at the end.
pub fn inverse_mod_p<C: PolyConf>(a: &Poly, p: u32) -> Result<Poly> {
    let n = C::RING_DEGREE;

    let mut b = Poly::zeroed(n + 1);
    b[0] = Coeff::one();
    let mut c = Poly::zeroed(n + 1);

    let mut f = working_copy(a, n, p);
    // g(X) = X^N - 1
    let mut g = Poly::zeroed(n + 1);
    g[0] = Coeff::from(p - 1);
    g[n] = Coeff::one();

    let mut k = 0;

    loop {
        while f[0].is_zero() {
            divide_out_x(&mut f, &mut c);
            k += 1;

            if f.is_zero() {
                return Err(Error::NotInvertible);
            }
        }

        let deg_f = f.degree().expect("f has a non-zero constant term");
        if deg_f == 0 {
            break;
        }

        if deg_f < g.degree().expect("g is never zero") {
            std::mem::swap(&mut f, &mut g);
            std::mem::swap(&mut b, &mut c);
        }

        // u = f[0] * g[0]^-1 (mod p), which zeroes the constant term of f.
        let u = Coeff::from(scaled_unit(&f[0], &g[0], p)?);
        for i in 0..=n {
            f[i] -= &u * &g[i];
            b[i] -= &u * &c[i];
        }
        mod_unsigned(&mut f, p);
        mod_unsigned(&mut b, p);
    }

    // b(X) = f[0]^-1 * b(X) (mod p)
    let f_0 = scalar(&f[0]);
    let f_0_inv = Coeff::from(invmod(f_0, p).ok_or(Error::NotInvertible)?);
    for coeff in b.iter_mut() {
        *coeff *= &f_0_inv;
    }
    mod_unsigned(&mut b, p);

    let f_p = undo_shift(&b, n, k)?;

    if star_multiply::<C>(a, &f_p, p).is_one() {
        Ok(f_p)
    } else {
        Err(Error::NotInvertible)
    }
}

/// Returns a width `n + 1` copy of `a` with coefficients reduced to
/// `[0, modulus)`.
fn working_copy(a: &Poly, n: usize, modulus: u32) -> Poly {
    let mut f = Poly::zeroed(n + 1);
    for i in 0..n {
        f[i] = a.coeff(i).clone();
    }
    mod_unsigned(&mut f, modulus);
    f
}

/// Replaces `f` with `f / X` and `c` with `c * X`.
///
/// The constant term of `f` is zero when this is called, so rotating it to
/// the top keeps the leading coefficient zero. The leading coefficient of `c`
/// falls off the width `n + 1` window, matching the truncated shift of the
/// almost-inverse algorithm.
fn divide_out_x(f: &mut Poly, c: &mut Poly) {
    f.rotate_left(1);
    c.rotate_right(1);
    c[0] = Coeff::zero();
}

/// Extracts the inverse from `b` as `X^{N-k} * b(X)` truncated to `N`
/// coefficients: `b[i]` maps to position `(i - k) mod N`.
///
/// Fails when `b` still has a degree-`N` term, which the shift cannot absorb.
fn undo_shift(b: &Poly, n: usize, k: usize) -> Result<Poly> {
    if !b[n].is_zero() {
        return Err(Error::NotInvertible);
    }

    let k = k % n;
    let mut out = Poly::zeroed(n);
    for i in 0..n {
        out[(n + i - k) % n] = b[i].clone();
    }

    Ok(out)
}

/// Returns `f_0 * g_0^-1 (mod p)` as a scalar.
fn scaled_unit(f_0: &Coeff, g_0: &Coeff, p: u32) -> Result<u32> {
    let g_0_inv = invmod(scalar(g_0), p).ok_or(Error::NotInvertible)?;
    Ok((scalar(f_0) * g_0_inv) % p)
}

/// Converts a coefficient already reduced to `[0, p)` into a machine scalar.
fn scalar(coeff: &Coeff) -> u32 {
    use num_traits::ToPrimitive;
    coeff
        .to_u32()
        .expect("coefficient was reduced to the scalar modulus range")
}
