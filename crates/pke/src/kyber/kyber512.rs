// pke/src/kyber/kyber512.rs

//! Kyber-512 CPA core (NIST PQC security category 1).

use super::params::Kyber512ParamsImpl;
use super::pke::KyberCpa;

/// Kyber-512 IND-CPA encryption core, implementing [`crate::CpaPke`].
pub type Kyber512Cpa = KyberCpa<Kyber512ParamsImpl>;
