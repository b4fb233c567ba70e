use ark_ff::{BigInteger, PrimeField};

/// One run of the sum-check sub-protocol: the claimed sum, one coefficient vector
/// (big-endian) per round, and the Fiat-Shamir challenge derived for each round.
#[derive(Debug, Clone)]
pub struct SumCheckProof<T: PrimeField> {
    pub claim: T,
    pub round_polys: Vec<Vec<T>>,
    pub challenges: Vec<T>,
}

/// Canonical byte encoding of a round's coefficient vector, fed to the transcript by both
/// the prover and the verifier so they derive identical challenges.
pub(crate) fn coeffs_to_bytes<T: PrimeField>(coeffs: &[T]) -> Vec<u8> {
    coeffs
        .iter()
        .flat_map(|c| c.into_bigint().to_bytes_le())
        .collect()
}
