// pke/src/kyber/mod.rs

//! Kyber-style IND-CPA public key encryption.
//!
//! The modules below layer the scheme leaves-first: parameters, hashing,
//! polynomial vectors, matrix expansion, the CPA operations themselves,
//! and finally byte-level packing and the typed public surface.

mod params;
mod hash; // SHA3/SHAKE primitives consumed as byte-in/byte-out functions
mod polyvec; // Vectors of k polynomials and their NTT-domain algebra
mod matrix; // Deterministic expansion of the public matrix A
mod cpa_pke; // KeyGen / Encrypt / Decrypt
mod serialize; // Packing of keys and ciphertexts
mod pke; // Typed wrappers and the CpaPke implementation

// Concrete variants
mod kyber1024;
mod kyber512;
mod kyber768;

pub use self::kyber1024::Kyber1024Cpa;
pub use self::kyber512::Kyber512Cpa;
pub use self::kyber768::Kyber768Cpa;

pub use self::params::{KyberParams, Kyber1024ParamsImpl, Kyber512ParamsImpl, Kyber768ParamsImpl};
pub use self::pke::{KyberCiphertext, KyberCpa, KyberPublicKey, KyberSecretKey};
