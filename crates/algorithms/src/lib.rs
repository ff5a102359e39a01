//! Polynomial arithmetic for module-lattice encryption
//!
//! This crate implements the ring R_q = Z_q[X]/(X^256 + 1) with q = 3329 on
//! signed 16-bit coefficients: Barrett and Montgomery reduction, the
//! negacyclic NTT with precomputed twiddle factors, coefficient packing and
//! compression, and the samplers (rejection sampling from XOF output and the
//! centered binomial distribution) that lattice schemes draw noise from.
//!
//! Everything here is value-typed and allocation-free on the hot paths; the
//! higher-level encryption core composes these pieces into key generation,
//! encryption and decryption.

#![forbid(unsafe_code)]

// Error module and re-exports
pub mod error;
pub use error::{Error, Result};

// Polynomial ring implementation
pub mod poly;
pub use poly::Poly;
