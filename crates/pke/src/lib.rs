//! IND-CPA public-key encryption core
//!
//! This crate implements the CPA-secure encryption heart of a Kyber-style
//! module-lattice scheme: key generation, encryption of a 32-byte message
//! under explicit coins, and decryption. The CCA wrapper (Fujisaki-Okamoto
//! transform, shared-secret derivation, implicit rejection) lives outside
//! this crate and consumes these operations through the [`CpaPke`] trait.

#![forbid(unsafe_code)]

pub mod error;
pub mod kyber;
pub mod traits;

// Re-export key items
pub use error::{Error, Result};
pub use kyber::{Kyber1024Cpa, Kyber512Cpa, Kyber768Cpa};
pub use traits::CpaPke;
