use fiat_shamir::transcript::Transcript;
use polynomials::mle::eval_expansion;
use polynomials::univariate::eval_univariate;

use crate::gkr_protocol::Proof;
use crate::utils::{coeffs_to_bytes, ell, expansion_to_bytes, field_to_bytes, usize_to_bytes};
use sumcheck::verifier::SumcheckVerifier;

use ark_ff::PrimeField;
use std::marker::PhantomData;

pub struct GKRVerifier<T: PrimeField> {
    _marker: PhantomData<T>,
}

impl<T: PrimeField> GKRVerifier<T> {
    /// Walks the per-layer sum-check reductions a [`Proof`] records and checks every
    /// cross-layer consistency condition. Total: never panics, only returns `true`/`false`.
    pub fn verify(proof: &Proof<T>, transcript: &mut Transcript<T>) -> bool {
        let d = proof.d;
        if proof.k.len() != d
            || proof.z.len() != d
            || proof.sumcheck_proofs.len() != d - 1
            || proof.sumcheck_r.len() != d - 1
            || proof.q.len() != d - 1
            || proof.f.len() != d - 1
            || proof.r.len() != d - 1
            || proof.add.len() != d - 1
            || proof.mult.len() != d - 1
        {
            log::debug!("gkr verify: proof shape does not match its own declared depth");
            return false;
        }

        transcript.append(&expansion_to_bytes(&proof.output));
        transcript.append(&usize_to_bytes(d));
        for &k in &proof.k {
            transcript.append(&usize_to_bytes(k));
        }
        let z0 = transcript.sample_n_challenges(proof.k[0]);
        if z0 != proof.z[0] {
            log::debug!("gkr verify: z_0 does not bind the transcript");
            return false;
        }

        let mut m = eval_expansion(&proof.output, &z0);

        for i in 0..d - 1 {
            let k_i = proof.k[i];
            let k_next = proof.k[i + 1];
            let v = 2 * k_next;
            log::info!("gkr verify: layer {i}, k_i={k_i}, k_{{i+1}}={k_next}");

            if proof.sumcheck_r[i].len() != v {
                return false;
            }

            let expected = match SumcheckVerifier::verify_sumcheck(
                m,
                &proof.sumcheck_proofs[i],
                &proof.sumcheck_r[i],
                v,
                transcript,
            ) {
                Some(val) => val,
                None => {
                    log::debug!("gkr verify: sum-check failed at layer {i}");
                    return false;
                }
            };
            if expected != proof.f[i] {
                log::debug!("gkr verify: sum-check final value disagrees with proof.f[{i}]");
                return false;
            }

            let r = &proof.sumcheck_r[i];
            let b_star = r[0..k_next].to_vec();
            let c_star = r[k_next..].to_vec();

            let q = &proof.q[i];
            let q0 = eval_univariate(q, T::from(0u64));
            let q1 = eval_univariate(q, T::from(1u64));

            let mut point = proof.z[i].clone();
            point.extend_from_slice(&b_star);
            point.extend_from_slice(&c_star);

            let add_val = eval_expansion(&proof.add[i], &point);
            let mult_val = eval_expansion(&proof.mult[i], &point);
            let expected_f = add_val * (q0 + q1) + mult_val * (q0 * q1);

            if proof.f[i] != expected_f {
                log::debug!("gkr verify: f_{i} does not match the wiring/oracle reconstruction");
                return false;
            }

            transcript.append(&coeffs_to_bytes(q));
            transcript.append(&field_to_bytes(proof.f[i]));
            let expected_r_star = transcript.sample_challenge();
            if expected_r_star != proof.r[i] {
                log::debug!("gkr verify: r*_{i} does not bind the transcript");
                return false;
            }

            let z_next = ell(&b_star, &c_star, proof.r[i]);
            if z_next != proof.z[i + 1] {
                log::debug!("gkr verify: z_{} does not match ell(b*, c*, r*_{i})", i + 1);
                return false;
            }

            m = eval_univariate(q, proof.r[i]);
        }

        m == eval_expansion(&proof.input_func, &proof.z[d - 1])
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::prover::GKRProver;
    use arithmetic_circuit::circuit::Circuit;
    use arithmetic_circuit::gate::{Gate, Operation};
    use ark_bn254::Fq;

    fn three_layer_circuit() -> (Circuit<Fq>, Vec<Fq>) {
        let circuit = Circuit::new(
            vec![
                vec![
                    Gate::new(0, 0, Operation::Mul),
                    Gate::new(1, 1, Operation::Mul),
                    Gate::new(1, 2, Operation::Mul),
                    Gate::new(3, 3, Operation::Mul),
                ],
                vec![Gate::new(0, 1, Operation::Mul), Gate::new(2, 3, Operation::Mul)],
            ],
            vec![4, 4, 2],
        );
        let inputs = vec![Fq::from(3), Fq::from(2), Fq::from(3), Fq::from(1)];
        (circuit, inputs)
    }

    #[test]
    fn test_verify_rejects_tampered_output() {
        let (circuit, inputs) = three_layer_circuit();
        let mut transcript = Transcript::new();
        let mut proof = GKRProver::prove(&circuit, &inputs, &mut transcript);

        proof.output = proof.output.add(&polynomials::symbolic::multivariate_expansion::MultivariateExpansion::constant(Fq::from(1)));

        let mut verifier_transcript = Transcript::new();
        assert!(!GKRVerifier::verify(&proof, &mut verifier_transcript));
    }

    #[test]
    fn test_verify_rejects_tampered_round_coefficient() {
        let (circuit, inputs) = three_layer_circuit();
        let mut transcript = Transcript::new();
        let mut proof = GKRProver::prove(&circuit, &inputs, &mut transcript);

        proof.sumcheck_proofs[0][0][0] += Fq::from(1);

        let mut verifier_transcript = Transcript::new();
        assert!(!GKRVerifier::verify(&proof, &mut verifier_transcript));
    }

    #[test]
    fn test_trivial_one_layer_circuit() {
        // d = 1: no wiring transitions at all, the "proof" is just the input itself as output.
        let circuit: Circuit<Fq> = Circuit::new(vec![], vec![2]);
        let inputs = vec![Fq::from(3), Fq::from(5)];
        let mut transcript = Transcript::new();
        let proof = GKRProver::prove(&circuit, &inputs, &mut transcript);

        assert_eq!(proof.d, 1);
        assert!(proof.sumcheck_proofs.is_empty());

        let mut verifier_transcript = Transcript::new();
        assert!(GKRVerifier::verify(&proof, &mut verifier_transcript));
    }
}
