use crate::sumcheck_protocol::{coeffs_to_bytes, SumCheckProof};

use fiat_shamir::transcript::Transcript;
use polynomials::univariate::eval_univariate;

use ark_ff::PrimeField;
use std::marker::PhantomData;

pub struct SumcheckVerifier<T: PrimeField> {
    _marker: PhantomData<T>,
}

impl<T: PrimeField> SumcheckVerifier<T> {
    /// Verifies one run of sum-check. On success returns the final expected value
    /// `g(r)` (needed by the GKR layer reduction to cross-check against its oracle);
    /// on any mismatch returns `None`.
    pub fn verify_sumcheck(
        claim: T,
        rounds: &[Vec<T>],
        r: &[T],
        v: usize,
        transcript: &mut Transcript<T>,
    ) -> Option<T> {
        log::debug!("verify_sumcheck: v={v}");

        if rounds.len() != v || r.len() != v {
            log::debug!("verify_sumcheck: expected {v} rounds, got {}", rounds.len());
            return None;
        }

        let mut expected = claim;
        for i in 0..v {
            let at_zero = eval_univariate(&rounds[i], T::from(0u64));
            let at_one = eval_univariate(&rounds[i], T::from(1u64));

            if at_zero + at_one != expected {
                log::debug!("verify_sumcheck: round {i} fails the sum check");
                return None;
            }

            transcript.append(&coeffs_to_bytes(&rounds[i]));
            let expected_challenge = transcript.sample_challenge();
            if expected_challenge != r[i] {
                log::debug!("verify_sumcheck: round {i} challenge does not bind the transcript");
                return None;
            }

            log::trace!("round {i}: challenge accepted");
            expected = eval_univariate(&rounds[i], r[i]);
        }

        Some(expected)
    }

    /// Convenience wrapper over [`Self::verify_sumcheck`] for callers that only need the
    /// accept/reject signal.
    pub fn verify_proof(
        proof: &SumCheckProof<T>,
        v: usize,
        transcript: &mut Transcript<T>,
    ) -> bool {
        Self::verify_sumcheck(
            proof.claim,
            &proof.round_polys,
            &proof.challenges,
            v,
            transcript,
        )
        .is_some()
    }
}
