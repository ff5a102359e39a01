//! sampling.rs - Uniform rejection sampling and centered binomial noise
//!
//! Rejection sampling turns an XOF byte stream into uniform coefficients
//! modulo q; the centered binomial samplers turn PRF output into small
//! noise polynomials. Both consume bytes produced elsewhere, so the
//! caller controls how much stream to squeeze.

use byteorder::{ByteOrder, LittleEndian};

use super::polynomial::Poly;
use super::{N, Q};
use crate::error::{Error, Result};

/// Fill `r` with uniform coefficients in `[0, q)` parsed from `buf`.
///
/// Bytes are consumed in groups of three, yielding two 12-bit candidates
/// each; candidates `>= q` are rejected. Returns how many coefficients
/// were accepted, which is less than `r.len()` when the buffer runs out.
/// Acceptance depends only on public XOF output.
pub fn rej_uniform(r: &mut [i16], buf: &[u8]) -> usize {
    let need = r.len();
    let mut ctr = 0;
    let mut pos = 0;

    while ctr < need && pos + 3 <= buf.len() {
        let d1 = (buf[pos] as u16) | ((buf[pos + 1] as u16 & 0x0F) << 8);
        let d2 = ((buf[pos + 1] as u16) >> 4) | ((buf[pos + 2] as u16) << 4);
        pos += 3;

        if d1 < Q as u16 {
            r[ctr] = d1 as i16;
            ctr += 1;
        }
        if d2 < Q as u16 && ctr < need {
            r[ctr] = d2 as i16;
            ctr += 1;
        }
    }

    ctr
}

/// Sample a polynomial from the centered binomial distribution with eta = 2.
///
/// Consumes 2*N/4 = 128 bytes. Each 32-bit word yields eight coefficients
/// in `{-2, ..., 2}` via the two-bit partial popcounts of its halves.
pub fn cbd_eta2(buf: &[u8]) -> Result<Poly> {
    Error::expect_len("cbd_eta2", buf.len(), 2 * N / 4)?;

    let mut p = Poly::zero();
    for i in 0..N / 8 {
        let t = LittleEndian::read_u32(&buf[4 * i..]);
        let d = (t & 0x5555_5555) + ((t >> 1) & 0x5555_5555);

        for j in 0..8 {
            let a = ((d >> (4 * j)) & 0x3) as i16;
            let b = ((d >> (4 * j + 2)) & 0x3) as i16;
            p.coeffs[8 * i + j] = a - b;
        }
    }
    Ok(p)
}

/// Sample a polynomial from the centered binomial distribution with eta = 3.
///
/// Consumes 3*N/4 = 192 bytes. Each 24-bit word yields four coefficients
/// in `{-3, ..., 3}`.
pub fn cbd_eta3(buf: &[u8]) -> Result<Poly> {
    Error::expect_len("cbd_eta3", buf.len(), 3 * N / 4)?;

    let mut p = Poly::zero();
    for i in 0..N / 4 {
        let t = LittleEndian::read_u24(&buf[3 * i..]);
        let d = (t & 0x0024_9249) + ((t >> 1) & 0x0024_9249) + ((t >> 2) & 0x0024_9249);

        for j in 0..4 {
            let a = ((d >> (6 * j)) & 0x7) as i16;
            let b = ((d >> (6 * j + 3)) & 0x7) as i16;
            p.coeffs[4 * i + j] = a - b;
        }
    }
    Ok(p)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Small deterministic byte stream for distribution tests.
    fn pseudorandom_bytes(len: usize, mut state: u32) -> Vec<u8> {
        let mut out = Vec::with_capacity(len);
        for _ in 0..len {
            state = state.wrapping_mul(1664525).wrapping_add(1013904223);
            out.push((state >> 24) as u8);
        }
        out
    }

    #[test]
    fn rej_uniform_accepts_values_below_q() {
        let buf = pseudorandom_bytes(504, 1);
        let mut r = [0i16; N];
        let n = rej_uniform(&mut r, &buf);
        assert!(n <= N);
        for &c in &r[..n] {
            assert!((0..Q).contains(&c));
        }
    }

    #[test]
    fn rej_uniform_parses_expected_lanes() {
        // 0x01 0x20 0x03 encodes d1 = 0x001, d2 = 0x032.
        let buf = [0x01, 0x20, 0x03];
        let mut r = [0i16; 2];
        let n = rej_uniform(&mut r, &buf);
        assert_eq!(n, 2);
        assert_eq!(r[0], 0x001);
        assert_eq!(r[1], 0x032);
    }

    #[test]
    fn rej_uniform_rejects_out_of_range_lanes() {
        // 0xFF 0xFF 0xFF encodes d1 = d2 = 0xFFF, both >= q.
        let buf = [0xFF, 0xFF, 0xFF, 0x01, 0x00, 0x00];
        let mut r = [0i16; 4];
        let n = rej_uniform(&mut r, &buf);
        assert_eq!(n, 2);
        assert_eq!(r[0], 1);
        assert_eq!(r[1], 0);
    }

    #[test]
    fn rej_uniform_stops_at_need() {
        // A buffer of zero bytes accepts every lane; exactly `need`
        // coefficients are taken and the rest of the buffer is ignored.
        let buf = [0u8; 9];
        let mut r = [0i16; 3];
        let n = rej_uniform(&mut r, &buf);
        assert_eq!(n, 3);
    }

    #[test]
    fn rej_uniform_exhausts_short_buffer() {
        let buf = [0u8; 5]; // one full 3-byte group, two leftover bytes
        let mut r = [0i16; N];
        let n = rej_uniform(&mut r, &buf);
        assert_eq!(n, 2);
    }

    #[test]
    fn cbd_eta2_support() {
        let buf = pseudorandom_bytes(128, 7);
        let p = cbd_eta2(&buf).unwrap();
        for &c in &p.coeffs {
            assert!((-2..=2).contains(&c));
        }
    }

    #[test]
    fn cbd_eta3_support() {
        let buf = pseudorandom_bytes(192, 9);
        let p = cbd_eta3(&buf).unwrap();
        for &c in &p.coeffs {
            assert!((-3..=3).contains(&c));
        }
    }

    #[test]
    fn cbd_rejects_wrong_buffer_length() {
        assert!(cbd_eta2(&[0u8; 64]).is_err());
        assert!(cbd_eta3(&[0u8; 128]).is_err());
    }

    #[test]
    fn cbd_eta2_all_zero_and_all_one_bytes() {
        let p = cbd_eta2(&[0u8; 128]).unwrap();
        assert!(p.coeffs.iter().all(|&c| c == 0));
        // All-ones bytes give a = b = 2 in every lane.
        let p = cbd_eta2(&[0xFFu8; 128]).unwrap();
        assert!(p.coeffs.iter().all(|&c| c == 0));
    }

    #[test]
    fn cbd_eta2_distribution() {
        // Chi-squared test against the binomial weights 1,4,6,4,1 over 16.
        let samples = 40_000usize;
        let buf = pseudorandom_bytes(samples / 2, 42);
        let mut histogram = [0u32; 5];
        for chunk in buf.chunks_exact(128) {
            let p = cbd_eta2(chunk).unwrap();
            for &c in &p.coeffs {
                histogram[(c + 2) as usize] += 1;
            }
        }
        let total: u32 = histogram.iter().sum();
        let expected = [
            total as f64 / 16.0,
            total as f64 * 4.0 / 16.0,
            total as f64 * 6.0 / 16.0,
            total as f64 * 4.0 / 16.0,
            total as f64 / 16.0,
        ];
        let mut chi_squared = 0.0;
        for (i, &observed) in histogram.iter().enumerate() {
            let diff = observed as f64 - expected[i];
            chi_squared += diff * diff / expected[i];
        }
        // Four degrees of freedom; 15.0 is far beyond the 0.95 quantile.
        assert!(chi_squared < 15.0, "chi-squared = {chi_squared}");
    }
}
