//! Polynomial Ring Engine
//!
//! Arithmetic in R_q = Z_q[X]/(X^256 + 1) with q = 3329 on signed 16-bit
//! coefficients, plus the byte-level encodings and samplers built on it.
//! Reduction discipline follows the Montgomery/Barrett conventions of the
//! reference NTT: operations accumulate in wide intermediates and reduce
//! at well-defined points, never per-step.

use params::kyber::{KYBER_N, KYBER_POLY_BYTES, KYBER_Q};

pub mod ntt;
pub mod polynomial;
pub mod reduce;
pub mod sampling;
pub mod serialize;

pub use polynomial::Poly;

/// Polynomial degree N
pub const N: usize = KYBER_N;

/// Coefficient modulus q as a signed 16-bit value
pub const Q: i16 = KYBER_Q as i16;

/// Bytes in one fully serialized polynomial (12 bits per coefficient)
pub const POLY_BYTES: usize = KYBER_POLY_BYTES;

/// Bytes in one serialized message or seed
pub const MSG_BYTES: usize = params::kyber::KYBER_SYM_BYTES;
