//! ntt.rs - Number Theoretic Transform in Z_q[X]/(X^256 + 1)
//!
//! Seven layers of Cooley-Tukey butterflies over precomputed twiddle
//! factors. Twiddles are powers of the primitive 512-th root of unity
//! zeta = 17, stored in bit-reversed order and Montgomery form.
//!
//! The forward transform leaves coefficients unreduced; callers reduce
//! before serializing. The inverse transform folds the 128^-1 scaling and
//! the Montgomery exit factor into a single multiplication by 1441.

use super::polynomial::Poly;
use super::reduce::{barrett_reduce, fqmul, MONT_R2};
use super::N;

/// Twiddle factors in Montgomery form: zeta^br(i) for the 7-bit
/// bit-reversal br, signed representatives.
pub static ZETAS: [i16; 128] = [
    -1044, -758, -359, -1517, 1493, 1422, 287, 202, -171, 622, 1577, 182, 962, -1202, -1474,
    1468, 573, -1325, 264, 383, -829, 1458, -1602, -130, -681, 1017, 732, 608, -1542, 411, -205,
    -1571, 1223, 652, -552, 1015, -1293, 1491, -282, -1544, 516, -8, -320, -666, -1618, -1162,
    126, 1469, -853, -90, -271, 830, 107, -1421, -247, -951, -398, 961, -1508, -725, 448, -1065,
    677, -1275, -1103, 430, 555, 843, -1251, 871, 1550, 105, 422, 587, 177, -235, -291, -460,
    1574, 1653, -246, 778, 1159, -147, -777, 1483, -602, 1119, -1590, 644, -872, 349, 418, 329,
    -156, -75, 817, 1097, 603, 610, 1322, -1285, -1465, 384, -1215, -136, 1218, -1335, -874, 220,
    -1187, -1659, -1185, -1530, -1278, 794, -1510, -854, -870, 478, -108, -308, 996, 991, 958,
    -1460, 1522, 1628,
];

/// Forward NTT, in place.
///
/// Input in standard coefficient order, output in bit-reversed order.
/// No final reduction is applied.
pub fn ntt(r: &mut [i16; N]) {
    let mut k = 1usize;
    let mut len = 128;
    while len >= 2 {
        let mut start = 0;
        while start < N {
            let zeta = ZETAS[k];
            k += 1;
            for j in start..start + len {
                let t = fqmul(zeta, r[j + len]);
                r[j + len] = r[j] - t;
                r[j] += t;
            }
            start += 2 * len;
        }
        len >>= 1;
    }
}

/// Inverse NTT, in place.
///
/// Input in bit-reversed order, output in standard order. Every output
/// coefficient carries an extra Montgomery factor R; the combined scaling
/// constant f = 128^-1 * R^2 mod q removes the transform's growth.
pub fn invntt(r: &mut [i16; N]) {
    const F: i16 = 1441; // 128^-1 * R^2 mod q

    let mut k = 127usize;
    let mut len = 2;
    while len <= 128 {
        let mut start = 0;
        while start < N {
            let zeta = ZETAS[k];
            k = k.wrapping_sub(1);
            for j in start..start + len {
                let t = r[j];
                r[j] = barrett_reduce(t + r[j + len]);
                r[j + len] = fqmul(zeta, r[j + len] - t);
            }
            start += 2 * len;
        }
        len <<= 1;
    }
    for coeff in r.iter_mut() {
        *coeff = fqmul(*coeff, F);
    }
}

/// Multiplication of two degree-1 polynomials in Z_q[X]/(X^2 - zeta).
///
/// `r`, `a`, `b` are coefficient pairs in the NTT domain; products pass
/// through Montgomery reduction.
#[inline]
pub fn basemul(r: &mut [i16], a: &[i16], b: &[i16], zeta: i16) {
    r[0] = fqmul(a[1], b[1]);
    r[0] = fqmul(r[0], zeta);
    r[0] += fqmul(a[0], b[0]);
    r[1] = fqmul(a[0], b[1]);
    r[1] += fqmul(a[1], b[0]);
}

impl Poly {
    /// Forward NTT in place; output is in bit-reversed NTT order, unreduced.
    pub fn ntt(&mut self) {
        ntt(&mut self.coeffs);
    }

    /// Inverse NTT in place; output is in standard order with coefficients
    /// bounded by q in absolute value.
    pub fn invntt(&mut self) {
        invntt(&mut self.coeffs);
    }

    /// Pointwise product in the NTT domain.
    ///
    /// The 256 coefficients are 128 degree-1 residues; pairs of residues
    /// multiply modulo (X^2 - zeta^(2*br(i)+1)) with alternating signs on
    /// the twiddle. The result carries a factor R^-1.
    pub fn basemul_montgomery(&self, other: &Self) -> Self {
        let mut r = Self::zero();
        for i in 0..N / 4 {
            let zeta = ZETAS[64 + i];
            basemul(
                &mut r.coeffs[4 * i..],
                &self.coeffs[4 * i..],
                &other.coeffs[4 * i..],
                zeta,
            );
            basemul(
                &mut r.coeffs[4 * i + 2..],
                &self.coeffs[4 * i + 2..],
                &other.coeffs[4 * i + 2..],
                -zeta,
            );
        }
        r
    }

    /// Multiply every coefficient by R^2, entering Montgomery form.
    pub fn to_mont(&mut self) {
        for c in self.coeffs.iter_mut() {
            *c = fqmul(*c, MONT_R2);
        }
    }
}
