//! Trait definition for CPA-secure public key encryption.

use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, Zeroizing};

use crate::error::Result;
use params::kyber::KYBER_SYM_BYTES;

/// Trait for the IND-CPA encryption core of a lattice KEM.
///
/// Encryption is deterministic in `(pk, msg, coins)`: the coins are an
/// explicit argument because the CCA wrapper derives them from the message
/// and re-runs encryption during decapsulation. Decryption never rejects;
/// detecting tampering is the wrapper's job.
pub trait CpaPke {
    /// Public key type.
    type PublicKey: AsRef<[u8]> + Clone;

    /// Secret key type; zeroized on drop.
    type SecretKey: Zeroize + AsRef<[u8]> + Clone;

    /// Ciphertext type.
    type Ciphertext: AsRef<[u8]> + Clone;

    /// Returns the scheme name.
    fn name() -> &'static str;

    /// Generates a new key pair, drawing one 32-byte seed from `rng`.
    fn keypair<R: RngCore + CryptoRng>(rng: &mut R) -> Result<(Self::PublicKey, Self::SecretKey)>;

    /// Encrypts a 32-byte message under `pk` with explicit 32-byte coins.
    fn encrypt(
        pk: &Self::PublicKey,
        msg: &[u8; KYBER_SYM_BYTES],
        coins: &[u8; KYBER_SYM_BYTES],
    ) -> Result<Self::Ciphertext>;

    /// Decrypts a ciphertext, always producing 32 bytes.
    fn decrypt(
        sk: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> Result<Zeroizing<[u8; KYBER_SYM_BYTES]>>;
}
