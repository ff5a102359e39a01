// pke/src/kyber/polyvec.rs

//! Polynomial vector operations.

use core::marker::PhantomData;

use algorithms::poly::serialize::{
    compress_poly, compressed_poly_bytes, decompress_poly, poly_from_bytes, poly_to_bytes,
};
use algorithms::poly::{Poly, POLY_BYTES};
use algorithms::{Error as AlgoError, Result as AlgoResult};
use zeroize::Zeroize;

use super::params::KyberParams;

/// A vector of K polynomials.
#[derive(Debug, PartialEq, Eq)]
pub struct PolyVec<P: KyberParams> {
    /// The polynomials in this vector.
    pub(crate) polys: Vec<Poly>,
    _params: PhantomData<P>,
}

impl<P: KyberParams> Zeroize for PolyVec<P> {
    fn zeroize(&mut self) {
        self.polys.zeroize();
    }
}

impl<P: KyberParams> Clone for PolyVec<P> {
    fn clone(&self) -> Self {
        Self {
            polys: self.polys.clone(),
            _params: PhantomData,
        }
    }
}

impl<P: KyberParams> PolyVec<P> {
    /// Creates the zero vector of dimension K.
    pub fn zero() -> Self {
        Self {
            polys: vec![Poly::zero(); P::K],
            _params: PhantomData,
        }
    }

    /// Applies the forward NTT to each polynomial.
    pub fn ntt(&mut self) {
        for p in self.polys.iter_mut() {
            p.ntt();
        }
    }

    /// Applies the inverse NTT to each polynomial.
    pub fn invntt(&mut self) {
        for p in self.polys.iter_mut() {
            p.invntt();
        }
    }

    /// Barrett-reduces every coefficient of every polynomial.
    pub fn reduce(&mut self) {
        for p in self.polys.iter_mut() {
            p.reduce();
        }
    }

    /// NTT-domain inner product with Montgomery accumulation.
    ///
    /// Computes sum(self[i] o other[i]) where o is the pairwise basemul;
    /// the result carries one factor of R^-1 and is reduced.
    pub fn basemul_acc(&self, other: &Self) -> Poly {
        let mut acc = self.polys[0].basemul_montgomery(&other.polys[0]);
        for (a, b) in self.polys.iter().zip(other.polys.iter()).skip(1) {
            let t = a.basemul_montgomery(b);
            acc = acc.add(&t);
        }
        acc.reduce();
        acc
    }

    /// Adds another vector to this one, coefficient-wise, without reduction.
    pub fn add_assign(&mut self, other: &Self) {
        for (a, b) in self.polys.iter_mut().zip(other.polys.iter()) {
            *a = a.add(b);
        }
    }

    /// Packs the vector, 12 bits per coefficient.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(P::POLYVEC_BYTES);
        for p in &self.polys {
            bytes.extend_from_slice(&poly_to_bytes(p));
        }
        bytes
    }

    /// Unpacks a vector from `P::POLYVEC_BYTES` bytes.
    pub fn from_bytes(bytes: &[u8]) -> AlgoResult<Self> {
        AlgoError::expect_len("polyvec_from_bytes", bytes.len(), P::POLYVEC_BYTES)?;
        let mut pv = Self::zero();
        for (i, chunk) in bytes.chunks_exact(POLY_BYTES).enumerate() {
            pv.polys[i] = poly_from_bytes(chunk)?;
        }
        Ok(pv)
    }

    /// Compresses every polynomial to `d` bits per coefficient.
    pub fn compress(&self, d: usize) -> AlgoResult<Vec<u8>> {
        let mut out = Vec::with_capacity(P::K * compressed_poly_bytes(d));
        for p in &self.polys {
            out.extend(compress_poly(p, d)?);
        }
        Ok(out)
    }

    /// Decompresses a vector from `d`-bit coefficients.
    pub fn decompress(data: &[u8], d: usize) -> AlgoResult<Self> {
        let per_poly = compressed_poly_bytes(d);
        AlgoError::expect_len("polyvec_decompress", data.len(), P::K * per_poly)?;
        let mut pv = Self::zero();
        for (i, chunk) in data.chunks_exact(per_poly).enumerate() {
            pv.polys[i] = decompress_poly(chunk, d)?;
        }
        Ok(pv)
    }
}
