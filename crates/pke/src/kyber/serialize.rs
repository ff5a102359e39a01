// pke/src/kyber/serialize.rs

//! Serialization of keys and ciphertexts.
//!
//! Byte layouts are bit-exact for interoperability:
//! public key  = t[0] || ... || t[k-1] || publicSeed (12-bit packing),
//! secret key  = s[0] || ... || s[k-1] (12-bit packing),
//! ciphertext  = compress_du(u) || compress_dv(v).
//! Lengths are validated before any unpacking arithmetic runs.

use algorithms::poly::serialize::{compress_poly, decompress_poly};
use algorithms::poly::Poly;

use super::params::{KyberParams, KYBER_SYM_BYTES};
use super::polyvec::PolyVec;
use crate::error::{check_length, Result};

/// Pack the public key: packed vector t followed by the public seed.
pub(crate) fn pack_pk<P: KyberParams>(t: &PolyVec<P>, seed: &[u8; KYBER_SYM_BYTES]) -> Vec<u8> {
    let mut packed = t.to_bytes();
    packed.extend_from_slice(seed);
    packed
}

/// Unpack a public key into the vector t and the public seed.
pub(crate) fn unpack_pk<P: KyberParams>(
    bytes: &[u8],
) -> Result<(PolyVec<P>, [u8; KYBER_SYM_BYTES])> {
    check_length("public key", bytes.len(), P::PUBLIC_KEY_BYTES)?;

    let t = PolyVec::<P>::from_bytes(&bytes[..P::POLYVEC_BYTES])?;
    let mut seed = [0u8; KYBER_SYM_BYTES];
    seed.copy_from_slice(&bytes[P::POLYVEC_BYTES..]);

    Ok((t, seed))
}

/// Pack the secret key vector s.
pub(crate) fn pack_sk<P: KyberParams>(s: &PolyVec<P>) -> Vec<u8> {
    s.to_bytes()
}

/// Unpack a secret key.
pub(crate) fn unpack_sk<P: KyberParams>(bytes: &[u8]) -> Result<PolyVec<P>> {
    check_length("secret key", bytes.len(), P::SECRET_KEY_BYTES)?;
    Ok(PolyVec::<P>::from_bytes(bytes)?)
}

/// Pack a ciphertext: compressed vector u followed by compressed v.
pub(crate) fn pack_ciphertext<P: KyberParams>(u: &PolyVec<P>, v: &Poly) -> Result<Vec<u8>> {
    let mut packed = u.compress(P::DU)?;
    packed.extend(compress_poly(v, P::DV)?);
    Ok(packed)
}

/// Unpack a ciphertext into the decompressed pair (u, v).
pub(crate) fn unpack_ciphertext<P: KyberParams>(bytes: &[u8]) -> Result<(PolyVec<P>, Poly)> {
    check_length("ciphertext", bytes.len(), P::CIPHERTEXT_BYTES)?;

    let u = PolyVec::<P>::decompress(&bytes[..P::POLYVEC_COMPRESSED_BYTES], P::DU)?;
    let v = decompress_poly(&bytes[P::POLYVEC_COMPRESSED_BYTES..], P::DV)?;

    Ok((u, v))
}
