use crate::sumcheck_protocol::{coeffs_to_bytes, SumCheckProof};

use fiat_shamir::transcript::Transcript;
use polynomials::mle::generate_binary;
use polynomials::symbolic::polynomial::Polynomial;

use ark_ff::PrimeField;
use std::marker::PhantomData;

pub struct SumcheckProver<T: PrimeField> {
    _marker: PhantomData<T>,
}

impl<T: PrimeField> SumcheckProver<T> {
    /// Sum `poly` over the boolean hypercube of `remaining_vars`, leaving every other
    /// variable (in particular the round's free variable) untouched.
    fn sum_over_remaining(poly: &Polynomial<T>, remaining_vars: &[usize]) -> Polynomial<T> {
        if remaining_vars.is_empty() {
            return poly.clone().apply_all();
        }

        let assignments = generate_binary::<T>(remaining_vars.len());
        let mut total = Polynomial::zero();
        for assignment in &assignments {
            let mut sub = poly.clone();
            for (&var, &value) in remaining_vars.iter().zip(assignment.iter()) {
                sub = sub.eval_i(value, var);
            }
            total = total.add(&sub.apply_all());
        }
        total.apply_all()
    }

    /// Proves `sum_{x in {0,1}^v} g(x) = claim` where `g`'s free variables are
    /// `start..start+v-1`. Returns the per-round big-endian coefficient vectors and the
    /// challenge derived for each.
    pub fn prove_sumcheck(
        g: &Polynomial<T>,
        v: usize,
        start: usize,
        transcript: &mut Transcript<T>,
    ) -> (Vec<Vec<T>>, Vec<T>) {
        log::debug!("prove_sumcheck: v={v}, start={start}");

        let mut rounds: Vec<Vec<T>> = Vec::with_capacity(v);
        let mut r: Vec<T> = Vec::with_capacity(v);

        for j in 0..v {
            let free_var = start + j;
            let remaining_vars: Vec<usize> = ((free_var + 1)..(start + v)).collect();

            let mut fixed = g.clone();
            for (i, &challenge) in r.iter().enumerate() {
                fixed = fixed.eval_i(challenge, start + i);
            }

            let g_j = Self::sum_over_remaining(&fixed, &remaining_vars);
            let coeffs = g_j.get_all_coefficients();
            log::trace!(
                "round {j}: free_var=x_{free_var}, degree={}",
                coeffs.len().saturating_sub(1)
            );

            transcript.append(&coeffs_to_bytes(&coeffs));
            let challenge = transcript.sample_challenge();

            rounds.push(coeffs);
            r.push(challenge);
        }

        (rounds, r)
    }

    pub fn generate_sum_check_proof(
        g: &Polynomial<T>,
        claim: T,
        v: usize,
        start: usize,
        transcript: &mut Transcript<T>,
    ) -> SumCheckProof<T> {
        let (round_polys, challenges) = Self::prove_sumcheck(g, v, start, transcript);
        SumCheckProof {
            claim,
            round_polys,
            challenges,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::verifier::SumcheckVerifier;
    use ark_bn254::Fq;
    use polynomials::mle::get_ext;

    fn and_table(w: &[Fq]) -> Fq {
        if w.iter().all(|&b| b == Fq::from(1)) {
            Fq::from(1)
        } else {
            Fq::from(0)
        }
    }

    #[test]
    fn test_prove_then_verify_roundtrip() {
        let g = get_ext(and_table, 3);
        let claim = Fq::from(1); // only the all-ones point of {0,1}^3 is nonzero

        let mut prover_transcript = Transcript::new();
        let (rounds, r) = SumcheckProver::prove_sumcheck(&g, 3, 1, &mut prover_transcript);

        let mut verifier_transcript = Transcript::new();
        let result =
            SumcheckVerifier::verify_sumcheck(claim, &rounds, &r, 3, &mut verifier_transcript);
        assert!(result.is_some());
    }

    #[test]
    fn test_prove_sumcheck_round_count() {
        let g = get_ext(and_table, 3);
        let mut transcript = Transcript::new();
        let (rounds, r) = SumcheckProver::prove_sumcheck(&g, 3, 1, &mut transcript);
        assert_eq!(rounds.len(), 3);
        assert_eq!(r.len(), 3);
    }
}
