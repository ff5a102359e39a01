// pke/src/kyber/pke.rs

//! Typed public surface of the CPA core.

use core::marker::PhantomData;

use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::cpa_pke::{decrypt_cpa, encrypt_cpa, keypair_cpa};
use super::params::{KyberParams, KYBER_SYM_BYTES};
use crate::error::{check_length, Result};
use crate::traits::CpaPke;

/// Public key (byte representation).
#[derive(Clone, Debug)]
pub struct KyberPublicKey(Vec<u8>);

impl KyberPublicKey {
    /// Creates a public key from a byte vector.
    pub fn new(data: Vec<u8>) -> Self {
        Self(data)
    }

    /// Returns a reference to the inner bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consumes the key and returns the inner byte vector.
    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }
}

impl AsRef<[u8]> for KyberPublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Secret key (byte representation).
///
/// Zeroized on drop; equality comparison is constant-time.
#[derive(Clone, Debug, Zeroize, ZeroizeOnDrop)]
pub struct KyberSecretKey(Vec<u8>);

impl KyberSecretKey {
    /// Creates a secret key from a byte vector.
    ///
    /// The input bytes should be zeroized by the caller after use.
    pub fn new(data: Vec<u8>) -> Self {
        Self(data)
    }

    /// Returns the length of the secret key.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Checks whether the secret key is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Exports the secret key with automatic zeroization of the copy.
    pub fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.0.clone())
    }
}

impl AsRef<[u8]> for KyberSecretKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl PartialEq for KyberSecretKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.ct_eq(&other.0).into()
    }
}

impl Eq for KyberSecretKey {}

/// Ciphertext (byte representation).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KyberCiphertext(Vec<u8>);

impl KyberCiphertext {
    /// Creates a ciphertext from a byte vector.
    pub fn new(data: Vec<u8>) -> Self {
        Self(data)
    }

    /// Returns a reference to the inner bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the length of the ciphertext.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Checks whether the ciphertext is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the ciphertext and returns the inner byte vector.
    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }
}

impl AsRef<[u8]> for KyberCiphertext {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl AsMut<[u8]> for KyberCiphertext {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.0
    }
}

/// Generic CPA encryption core parameterized by a Kyber variant.
pub struct KyberCpa<P: KyberParams> {
    _params: PhantomData<P>,
}

impl<P: KyberParams> CpaPke for KyberCpa<P> {
    type PublicKey = KyberPublicKey;
    type SecretKey = KyberSecretKey;
    type Ciphertext = KyberCiphertext;

    fn name() -> &'static str {
        P::NAME
    }

    fn keypair<R: RngCore + CryptoRng>(rng: &mut R) -> Result<(Self::PublicKey, Self::SecretKey)> {
        let (pk_bytes, sk_bytes) = keypair_cpa::<P, R>(rng)?;
        Ok((KyberPublicKey::new(pk_bytes), KyberSecretKey::new(sk_bytes)))
    }

    fn encrypt(
        pk: &Self::PublicKey,
        msg: &[u8; KYBER_SYM_BYTES],
        coins: &[u8; KYBER_SYM_BYTES],
    ) -> Result<Self::Ciphertext> {
        check_length("public key", pk.as_bytes().len(), P::PUBLIC_KEY_BYTES)?;
        let ct_bytes = encrypt_cpa::<P>(pk.as_bytes(), msg, coins)?;
        Ok(KyberCiphertext::new(ct_bytes))
    }

    fn decrypt(
        sk: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> Result<Zeroizing<[u8; KYBER_SYM_BYTES]>> {
        check_length("secret key", sk.as_ref().len(), P::SECRET_KEY_BYTES)?;
        check_length("ciphertext", ciphertext.len(), P::CIPHERTEXT_BYTES)?;
        decrypt_cpa::<P>(sk.as_ref(), ciphertext.as_bytes())
    }
}
