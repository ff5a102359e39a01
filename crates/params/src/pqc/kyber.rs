//! Constants for the Kyber-style IND-CPA encryption core

/// Polynomial degree of the ring Z_q[X]/(X^256 + 1)
pub const KYBER_N: usize = 256;

/// Coefficient modulus
pub const KYBER_Q: u16 = 3329;

/// Size in bytes of seeds, messages and encryption coins
pub const KYBER_SYM_BYTES: usize = 32;

/// Size in bytes of one serialized polynomial (12 bits per coefficient)
pub const KYBER_POLY_BYTES: usize = 384;

/// SHAKE-128 rate in bytes, the natural squeeze granularity for matrix expansion
pub const KYBER_XOF_BLOCK_BYTES: usize = 168;

/// Parameters of one Kyber variant together with its derived byte sizes
pub struct KyberParamSet {
    /// Polynomial degree
    pub n: usize,

    /// Modulus
    pub q: u16,

    /// Number of polynomials per vector (module dimension)
    pub k: usize,

    /// Noise parameter for the secret and keygen error vectors
    pub eta1: u8,

    /// Noise parameter for the encryption error terms
    pub eta2: u8,

    /// Compression bits per coefficient for the ciphertext vector u
    pub du: usize,

    /// Compression bits per coefficient for the ciphertext polynomial v
    pub dv: usize,

    /// Size of the public key in bytes (packed vector plus public seed)
    pub public_key_size: usize,

    /// Size of the secret key in bytes (packed vector)
    pub secret_key_size: usize,

    /// Size of the ciphertext in bytes
    pub ciphertext_size: usize,
}

/// Kyber-512 parameters (k = 2)
pub const KYBER512: KyberParamSet = KyberParamSet {
    n: KYBER_N,
    q: KYBER_Q,
    k: 2,
    eta1: 3,
    eta2: 2,
    du: 10,
    dv: 4,
    public_key_size: 800,
    secret_key_size: 768,
    ciphertext_size: 768,
};

/// Kyber-768 parameters (k = 3)
pub const KYBER768: KyberParamSet = KyberParamSet {
    n: KYBER_N,
    q: KYBER_Q,
    k: 3,
    eta1: 2,
    eta2: 2,
    du: 10,
    dv: 4,
    public_key_size: 1184,
    secret_key_size: 1152,
    ciphertext_size: 1088,
};

/// Kyber-1024 parameters (k = 4)
pub const KYBER1024: KyberParamSet = KyberParamSet {
    n: KYBER_N,
    q: KYBER_Q,
    k: 4,
    eta1: 2,
    eta2: 2,
    du: 11,
    dv: 5,
    public_key_size: 1568,
    secret_key_size: 1536,
    ciphertext_size: 1568,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_sizes_are_consistent() {
        for set in [&KYBER512, &KYBER768, &KYBER1024] {
            assert_eq!(set.n, KYBER_N);
            assert_eq!(set.q, KYBER_Q);
            assert_eq!(set.public_key_size, set.k * KYBER_POLY_BYTES + KYBER_SYM_BYTES);
            assert_eq!(set.secret_key_size, set.k * KYBER_POLY_BYTES);
            let u_bytes = set.k * KYBER_N * set.du / 8;
            let v_bytes = KYBER_N * set.dv / 8;
            assert_eq!(set.ciphertext_size, u_bytes + v_bytes);
        }
    }
}
