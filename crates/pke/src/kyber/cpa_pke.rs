// pke/src/kyber/cpa_pke.rs

//! CPA-secure public key encryption operations.
//!
//! KeyGen, Encrypt and Decrypt over the NTT-domain module algebra. Secret
//! intermediates (noise seed, secret vectors, message polynomial) are
//! zeroized before the functions return; the arithmetic itself is
//! branch-free on secret data.

use algorithms::poly::sampling::{cbd_eta2, cbd_eta3};
use algorithms::poly::{Poly, N};
use algorithms::{Error as AlgoError, Result as AlgoResult};
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, Zeroizing};

use super::hash;
use super::matrix::gen_matrix;
use super::params::{KyberParams, KYBER_SYM_BYTES};
use super::polyvec::PolyVec;
use super::serialize;
use crate::error::{Error, Result};

/// Largest PRF output any supported eta needs.
const PRF_MAX_BYTES: usize = 3 * N / 4;

/// Sample one noise polynomial from SHAKE-256(seed || nonce).
fn sample_noise(seed: &[u8; KYBER_SYM_BYTES], nonce: u8, eta: u8) -> AlgoResult<Poly> {
    let mut buf = Zeroizing::new([0u8; PRF_MAX_BYTES]);
    let len = eta as usize * N / 4;
    hash::prf(seed, nonce, &mut buf[..len]);
    match eta {
        2 => cbd_eta2(&buf[..len]),
        3 => cbd_eta3(&buf[..len]),
        _ => Err(AlgoError::Parameter {
            name: "eta",
            reason: "unsupported noise parameter",
        }),
    }
}

/// Key generation.
///
/// Draws a 32-byte seed from the RNG, derives the public and noise seeds
/// with SHA3-512, expands A, samples s and e, and returns the packed
/// public key `t || publicSeed` and secret key `s`.
pub(crate) fn keypair_cpa<P: KyberParams, R: RngCore + CryptoRng>(
    rng: &mut R,
) -> Result<(Vec<u8>, Vec<u8>)> {
    let mut d = Zeroizing::new([0u8; KYBER_SYM_BYTES]);
    rng.try_fill_bytes(d.as_mut()).map_err(|_| Error::Random {
        context: "keypair seed",
    })?;

    let (public_seed, noise_seed) = hash::g(&d);
    let noise_seed = Zeroizing::new(noise_seed);

    let a = gen_matrix::<P>(&public_seed, false);

    let mut s = PolyVec::<P>::zero();
    let mut e = PolyVec::<P>::zero();
    for i in 0..P::K {
        s.polys[i] = sample_noise(&noise_seed, i as u8, P::ETA1)?;
        e.polys[i] = sample_noise(&noise_seed, (i + P::K) as u8, P::ETA1)?;
    }

    s.ntt();
    s.reduce();
    e.ntt();

    // t = A*s + e, kept in the NTT domain. basemul_acc leaves a factor
    // R^-1, which the Montgomery multiplication by R^2 cancels.
    let mut t = PolyVec::<P>::zero();
    for i in 0..P::K {
        let mut acc = a[i].basemul_acc(&s);
        acc.to_mont();
        t.polys[i] = acc.add(&e.polys[i]);
    }
    t.reduce();

    let pk = serialize::pack_pk::<P>(&t, &public_seed);
    let sk = serialize::pack_sk::<P>(&s);

    s.zeroize();
    e.zeroize();

    Ok((pk, sk))
}

/// Encryption of a 32-byte message under explicit coins.
///
/// Deterministic in `(public_key, msg, coins)`; the CCA wrapper relies on
/// that to re-encrypt during decapsulation.
pub(crate) fn encrypt_cpa<P: KyberParams>(
    public_key: &[u8],
    msg: &[u8; KYBER_SYM_BYTES],
    coins: &[u8; KYBER_SYM_BYTES],
) -> Result<Vec<u8>> {
    let (t, public_seed) = serialize::unpack_pk::<P>(public_key)?;

    let mut m_poly = Poly::from_msg(msg);
    let at = gen_matrix::<P>(&public_seed, true);

    let mut sp = PolyVec::<P>::zero();
    let mut ep = PolyVec::<P>::zero();
    for i in 0..P::K {
        sp.polys[i] = sample_noise(coins, i as u8, P::ETA1)?;
        ep.polys[i] = sample_noise(coins, (i + P::K) as u8, P::ETA2)?;
    }
    let mut epp = sample_noise(coins, (2 * P::K) as u8, P::ETA2)?;

    sp.ntt();
    sp.reduce();

    // u = invNTT(A^T * sp) + ep
    let mut u = PolyVec::<P>::zero();
    for i in 0..P::K {
        u.polys[i] = at[i].basemul_acc(&sp);
    }
    u.invntt();
    u.add_assign(&ep);
    u.reduce();

    // v = invNTT(t . sp) + epp + msg
    let mut v = t.basemul_acc(&sp);
    v.invntt();
    v = v.add(&epp).add(&m_poly);
    v.reduce();

    let ct = serialize::pack_ciphertext::<P>(&u, &v)?;

    sp.zeroize();
    ep.zeroize();
    epp.zeroize();
    m_poly.zeroize();
    v.zeroize();

    Ok(ct)
}

/// Decryption; always produces 32 bytes.
///
/// A tampered ciphertext decrypts to a different message rather than an
/// error; rejection belongs to the CCA wrapper.
pub(crate) fn decrypt_cpa<P: KyberParams>(
    secret_key: &[u8],
    ciphertext: &[u8],
) -> Result<Zeroizing<[u8; KYBER_SYM_BYTES]>> {
    let (mut u, v) = serialize::unpack_ciphertext::<P>(ciphertext)?;
    let mut s = serialize::unpack_sk::<P>(secret_key)?;

    u.ntt();
    let mut su = s.basemul_acc(&u);
    su.invntt();

    let mut mp = v.sub(&su);
    mp.reduce();

    let msg = Zeroizing::new(mp.to_msg());

    mp.zeroize();
    su.zeroize();
    s.zeroize();

    Ok(msg)
}
