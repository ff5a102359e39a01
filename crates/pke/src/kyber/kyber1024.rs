// pke/src/kyber/kyber1024.rs

//! Kyber-1024 CPA core (NIST PQC security category 5).

use super::params::Kyber1024ParamsImpl;
use super::pke::KyberCpa;

/// Kyber-1024 IND-CPA encryption core, implementing [`crate::CpaPke`].
pub type Kyber1024Cpa = KyberCpa<Kyber1024ParamsImpl>;
