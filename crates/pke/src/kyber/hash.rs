// pke/src/kyber/hash.rs

//! Hash and XOF primitives consumed by the scheme.
//!
//! The scheme treats SHA3-512, SHAKE-128 and SHAKE-256 as external
//! byte-in/byte-out collaborators; this module is the single seam to the
//! `sha3` crate. Domain separation follows the standard conventions:
//! single-octet coordinate suffixes for matrix expansion and a single-octet
//! nonce for the noise PRF.

use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::{Digest, Sha3_512, Shake128, Shake128Reader, Shake256};

use super::params::KYBER_SYM_BYTES;

/// SHAKE-128 rate in bytes; matrix expansion squeezes whole rate blocks.
pub(crate) const XOF_BLOCK_BYTES: usize = params::kyber::KYBER_XOF_BLOCK_BYTES;

/// Hash a keygen seed into the public seed and the noise seed.
pub(crate) fn g(d: &[u8; KYBER_SYM_BYTES]) -> ([u8; KYBER_SYM_BYTES], [u8; KYBER_SYM_BYTES]) {
    let digest = Sha3_512::digest(d);
    let mut public_seed = [0u8; KYBER_SYM_BYTES];
    let mut noise_seed = [0u8; KYBER_SYM_BYTES];
    public_seed.copy_from_slice(&digest[..KYBER_SYM_BYTES]);
    noise_seed.copy_from_slice(&digest[KYBER_SYM_BYTES..]);
    (public_seed, noise_seed)
}

/// SHAKE-256(seed || nonce) squeezed into `out`, the noise PRF.
pub(crate) fn prf(seed: &[u8; KYBER_SYM_BYTES], nonce: u8, out: &mut [u8]) {
    let mut xof = Shake256::default();
    xof.update(seed);
    xof.update(&[nonce]);
    xof.finalize_xof().read(out);
}

/// Incremental SHAKE-128 stream over seed || x || y for matrix expansion.
pub(crate) struct MatrixXof {
    reader: Shake128Reader,
}

impl MatrixXof {
    /// Absorb the public seed and the two coordinate octets.
    pub(crate) fn new(seed: &[u8; KYBER_SYM_BYTES], x: u8, y: u8) -> Self {
        let mut xof = Shake128::default();
        xof.update(seed);
        xof.update(&[x, y]);
        Self {
            reader: xof.finalize_xof(),
        }
    }

    /// Squeeze the next `out.len()` bytes of the stream.
    pub(crate) fn squeeze(&mut self, out: &mut [u8]) {
        self.reader.read(out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn g_splits_the_digest() {
        let d = [7u8; KYBER_SYM_BYTES];
        let (rho, sigma) = g(&d);
        let full = Sha3_512::digest(d);
        assert_eq!(&rho[..], &full[..32]);
        assert_eq!(&sigma[..], &full[32..]);
        assert_ne!(rho, sigma);
    }

    #[test]
    fn prf_is_deterministic_and_nonce_separated() {
        let seed = [3u8; KYBER_SYM_BYTES];
        let mut a = [0u8; 128];
        let mut b = [0u8; 128];
        prf(&seed, 0, &mut a);
        prf(&seed, 0, &mut b);
        assert_eq!(a, b);
        prf(&seed, 1, &mut b);
        assert_ne!(a, b);
    }

    #[test]
    fn matrix_xof_stream_is_position_independent() {
        // Squeezing 504 bytes at once equals squeezing three rate blocks.
        let seed = [0u8; KYBER_SYM_BYTES];
        let mut all = [0u8; 3 * XOF_BLOCK_BYTES];
        MatrixXof::new(&seed, 1, 2).squeeze(&mut all);

        let mut xof = MatrixXof::new(&seed, 1, 2);
        let mut blocks = [0u8; 3 * XOF_BLOCK_BYTES];
        for chunk in blocks.chunks_exact_mut(XOF_BLOCK_BYTES) {
            xof.squeeze(chunk);
        }
        assert_eq!(all, blocks);
    }

    #[test]
    fn matrix_xof_coordinates_separate_streams() {
        let seed = [0u8; KYBER_SYM_BYTES];
        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        MatrixXof::new(&seed, 0, 1).squeeze(&mut a);
        MatrixXof::new(&seed, 1, 0).squeeze(&mut b);
        assert_ne!(a, b);
    }
}
