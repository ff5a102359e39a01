// pke/src/kyber/kyber768.rs

//! Kyber-768 CPA core (NIST PQC security category 3).

use super::params::Kyber768ParamsImpl;
use super::pke::KyberCpa;

/// Kyber-768 IND-CPA encryption core, implementing [`crate::CpaPke`].
pub type Kyber768Cpa = KyberCpa<Kyber768ParamsImpl>;
