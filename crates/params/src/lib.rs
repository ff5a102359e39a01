//! Scheme parameters for the mlpke workspace
//!
//! This crate holds nothing but constants: the ring parameters shared by
//! every variant, and one record per parameter set with its derived byte
//! sizes. Keeping them in a leaf crate lets both the polynomial engine and
//! the encryption core agree on a single source of truth.

pub mod pqc;

pub use pqc::kyber;
