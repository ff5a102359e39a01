// pke/src/kyber/matrix.rs

//! Deterministic expansion of the public matrix A.

use algorithms::poly::sampling::rej_uniform;
use algorithms::poly::N;

use super::hash::{MatrixXof, XOF_BLOCK_BYTES};
use super::params::{KyberParams, KYBER_SYM_BYTES};
use super::polyvec::PolyVec;

/// Expand the k x k matrix A (or its transpose) from the public seed.
///
/// Entry (i, j) is sampled from SHAKE-128(seed || x || y) where the
/// coordinate suffix is (j, i) for A and (i, j) for A^T, so that the two
/// orientations read each other's entries. The accepted 12-bit lanes are
/// the NTT-domain representation by definition; no transform follows.
pub(crate) fn gen_matrix<P: KyberParams>(
    seed: &[u8; KYBER_SYM_BYTES],
    transposed: bool,
) -> Vec<PolyVec<P>> {
    let mut a = Vec::with_capacity(P::K);

    for i in 0..P::K {
        let mut row = PolyVec::<P>::zero();

        for j in 0..P::K {
            let (x, y) = if transposed { (i, j) } else { (j, i) };
            let mut xof = MatrixXof::new(seed, x as u8, y as u8);

            // Three rate blocks cover 256 coefficients with high
            // probability; squeeze one more block whenever rejection
            // sampling left the polynomial short.
            let mut buf = [0u8; 3 * XOF_BLOCK_BYTES];
            xof.squeeze(&mut buf);
            let mut ctr = rej_uniform(&mut row.polys[j].coeffs, &buf);

            while ctr < N {
                let mut block = [0u8; XOF_BLOCK_BYTES];
                xof.squeeze(&mut block);
                ctr += rej_uniform(&mut row.polys[j].coeffs[ctr..], &block);
            }
        }

        a.push(row);
    }

    a
}
