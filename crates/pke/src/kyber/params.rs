// pke/src/kyber/params.rs

//! Kyber parameter definitions.

use params::kyber as global_params;

/// Common polynomial degree.
pub const KYBER_N: usize = global_params::KYBER_N;
/// Common coefficient modulus.
pub const KYBER_Q: u16 = global_params::KYBER_Q;
/// Seed, message and coin size shared by all variants.
pub const KYBER_SYM_BYTES: usize = global_params::KYBER_SYM_BYTES;
/// Bytes per fully serialized polynomial.
pub const KYBER_POLY_BYTES: usize = global_params::KYBER_POLY_BYTES;

/// Trait defining parameters for a specific Kyber variant.
pub trait KyberParams: Send + Sync + 'static {
    /// Module dimension k (number of polynomials per vector).
    const K: usize;
    /// Noise parameter for the secret vector and keygen errors.
    const ETA1: u8;
    /// Noise parameter for the encryption error terms.
    const ETA2: u8;
    /// Compression bits per coefficient of the ciphertext vector u.
    const DU: usize;
    /// Compression bits per coefficient of the ciphertext polynomial v.
    const DV: usize;

    /// Algorithm name string.
    const NAME: &'static str;
    /// Size of the public key in bytes.
    const PUBLIC_KEY_BYTES: usize;
    /// Size of the secret key in bytes.
    const SECRET_KEY_BYTES: usize;
    /// Size of the ciphertext in bytes.
    const CIPHERTEXT_BYTES: usize;

    /// Bytes of a packed polynomial vector.
    const POLYVEC_BYTES: usize = Self::K * KYBER_POLY_BYTES;
    /// Bytes of the compressed ciphertext vector u.
    const POLYVEC_COMPRESSED_BYTES: usize = Self::K * KYBER_N * Self::DU / 8;
    /// Bytes of the compressed ciphertext polynomial v.
    const POLY_COMPRESSED_BYTES: usize = KYBER_N * Self::DV / 8;
}

/// Kyber-512 parameters (NIST security category 1).
pub struct Kyber512ParamsImpl;
impl KyberParams for Kyber512ParamsImpl {
    const K: usize = global_params::KYBER512.k;
    const ETA1: u8 = global_params::KYBER512.eta1;
    const ETA2: u8 = global_params::KYBER512.eta2;
    const DU: usize = global_params::KYBER512.du;
    const DV: usize = global_params::KYBER512.dv;
    const NAME: &'static str = "Kyber-512-CPA";
    const PUBLIC_KEY_BYTES: usize = global_params::KYBER512.public_key_size;
    const SECRET_KEY_BYTES: usize = global_params::KYBER512.secret_key_size;
    const CIPHERTEXT_BYTES: usize = global_params::KYBER512.ciphertext_size;
}

/// Kyber-768 parameters (NIST security category 3).
pub struct Kyber768ParamsImpl;
impl KyberParams for Kyber768ParamsImpl {
    const K: usize = global_params::KYBER768.k;
    const ETA1: u8 = global_params::KYBER768.eta1;
    const ETA2: u8 = global_params::KYBER768.eta2;
    const DU: usize = global_params::KYBER768.du;
    const DV: usize = global_params::KYBER768.dv;
    const NAME: &'static str = "Kyber-768-CPA";
    const PUBLIC_KEY_BYTES: usize = global_params::KYBER768.public_key_size;
    const SECRET_KEY_BYTES: usize = global_params::KYBER768.secret_key_size;
    const CIPHERTEXT_BYTES: usize = global_params::KYBER768.ciphertext_size;
}

/// Kyber-1024 parameters (NIST security category 5).
pub struct Kyber1024ParamsImpl;
impl KyberParams for Kyber1024ParamsImpl {
    const K: usize = global_params::KYBER1024.k;
    const ETA1: u8 = global_params::KYBER1024.eta1;
    const ETA2: u8 = global_params::KYBER1024.eta2;
    const DU: usize = global_params::KYBER1024.du;
    const DV: usize = global_params::KYBER1024.dv;
    const NAME: &'static str = "Kyber-1024-CPA";
    const PUBLIC_KEY_BYTES: usize = global_params::KYBER1024.public_key_size;
    const SECRET_KEY_BYTES: usize = global_params::KYBER1024.secret_key_size;
    const CIPHERTEXT_BYTES: usize = global_params::KYBER1024.ciphertext_size;
}
