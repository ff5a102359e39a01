//! reduce.rs - Montgomery and Barrett reduction for q = 3329
//!
//! All field multiplications go through Montgomery form with R = 2^16;
//! Barrett reduction brings accumulated sums back into a centered range.

use super::Q;

/// q^-1 mod 2^16 (that is 62209), as a signed 16-bit value
pub const QINV: i16 = -3327;

/// 2^16 mod q, the Montgomery residue of one (signed representative)
pub const MONT: i16 = -1044;

/// (2^16)^2 mod q, multiplied in to enter Montgomery form
pub const MONT_R2: i16 = 1353;

/// Montgomery reduction: computes `a * R^-1 mod q` where R = 2^16.
///
/// Input must satisfy `a` in `[-q*2^15, q*2^15)`; the result `r` satisfies
/// `|r| < q` and `r == a * R^-1 (mod q)`.
#[inline(always)]
pub fn montgomery_reduce(a: i32) -> i16 {
    let u = (a as i16).wrapping_mul(QINV);
    ((a - (u as i32) * (Q as i32)) >> 16) as i16
}

/// Barrett reduction: centered reduction modulo q.
///
/// For any 16-bit input the result `r` satisfies `r == a (mod q)` and
/// lies in `(-q/2, q/2]`.
#[inline(always)]
pub fn barrett_reduce(a: i16) -> i16 {
    const V: i32 = ((1 << 26) + (Q as i32) / 2) / (Q as i32); // 20159
    let t = ((V * (a as i32) + (1 << 25)) >> 26) as i16;
    a.wrapping_sub(t.wrapping_mul(Q))
}

/// Field multiplication with Montgomery reduction: `a * b * R^-1 mod q`.
#[inline(always)]
pub fn fqmul(a: i16, b: i16) -> i16 {
    montgomery_reduce((a as i32) * (b as i32))
}

/// Canonical representative in `[0, q)` of a coefficient with `|a| < q`.
#[inline(always)]
pub fn to_canonical(a: i16) -> u16 {
    (a + ((a >> 15) & Q)) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn montgomery_reduce_of_zero() {
        assert_eq!(montgomery_reduce(0), 0);
    }

    #[test]
    fn montgomery_reduce_undoes_radix() {
        // montgomery_reduce(x * R) == x (mod q); x * 2^16 must stay inside
        // the valid input window, so x ranges over (-q/2, q/2).
        for x in -1664i32..=1664 {
            let r = montgomery_reduce(x << 16);
            let got = r.rem_euclid(Q);
            let want = (x as i16).rem_euclid(Q);
            assert_eq!(got, want, "x = {x}");
        }
    }

    #[test]
    fn montgomery_reduce_congruence_and_bound() {
        // Products of two field elements cover the interesting input range.
        for a in (-3328i32..=3328).step_by(17) {
            for b in (-3328i32..=3328).step_by(23) {
                let r = montgomery_reduce(a * b) as i64;
                assert!(r.abs() < Q as i64, "a = {a}, b = {b}, r = {r}");
                // r * R == a * b (mod q)
                let lhs = (r * 65536).rem_euclid(Q as i64);
                let rhs = ((a * b) as i64).rem_euclid(Q as i64);
                assert_eq!(lhs, rhs, "a = {a}, b = {b}");
            }
        }
    }

    #[test]
    fn barrett_reduce_every_input() {
        for a in i16::MIN..=i16::MAX {
            let r = barrett_reduce(a);
            assert!(r.abs() <= Q, "a = {a}, r = {r}");
            assert!(r > -(Q / 2) - 1 && r <= Q / 2 + 1, "a = {a}, r = {r}");
            assert_eq!(
                (r as i32).rem_euclid(Q as i32),
                (a as i32).rem_euclid(Q as i32),
                "a = {a}"
            );
        }
    }

    #[test]
    fn barrett_reduce_fixed_points() {
        assert_eq!(barrett_reduce(0), 0);
        assert_eq!(barrett_reduce(42), 42);
        assert_eq!(barrett_reduce(Q), 0);
        assert_eq!(barrett_reduce(-Q), 0);
    }

    #[test]
    fn fqmul_mont_is_identity_factor() {
        // fqmul(a, MONT) = a * R * R^-1 = a (mod q)
        for a in [1i16, 2, 1664, 3328, -1, -1664] {
            let r = fqmul(a, MONT);
            assert_eq!(
                (r as i32).rem_euclid(Q as i32),
                (a as i32).rem_euclid(Q as i32)
            );
        }
    }

    #[test]
    fn canonical_range() {
        for a in -3328i16..=3328 {
            let c = to_canonical(barrett_reduce(a));
            assert!(c < Q as u16);
            assert_eq!(
                c as i32 % Q as i32,
                (a as i32).rem_euclid(Q as i32)
            );
        }
    }
}
