use arithmetic_circuit::circuit::Circuit;
use fiat_shamir::transcript::Transcript;
use polynomials::mle::{get_ext_from_k, get_multi_ext};
use polynomials::symbolic::polynomial::Polynomial;

use crate::gkr_protocol::Proof;
use crate::utils::{
    bits_to_index, coeffs_to_bytes, ell, expansion_to_bytes, field_to_bytes,
    reduce_multiple_polynomial, usize_to_bytes,
};
use sumcheck::prover::SumcheckProver;

use ark_ff::PrimeField;
use std::marker::PhantomData;

pub struct GKRProver<T: PrimeField> {
    _marker: PhantomData<T>,
}

/// Evaluate a symbolic polynomial at a point occupying variables `start..start+values.len()`.
fn eval_poly_at<T: PrimeField>(poly: &Polynomial<T>, start: usize, values: &[T]) -> T {
    let mut fixed = poly.clone();
    for (i, &v) in values.iter().enumerate() {
        fixed = fixed.eval_i(v, start + i);
    }
    fixed.apply_all().constant
}

impl<T: PrimeField> GKRProver<T> {
    /// Runs the full GKR layer reduction over `circuit`'s evaluation on `inputs`, producing an
    /// unpadded [`Proof`]. Every Fiat-Shamir challenge, including `z_0`, is derived from
    /// `transcript`; nothing is sampled uniformly at random.
    pub fn prove(circuit: &Circuit<T>, inputs: &[T], transcript: &mut Transcript<T>) -> Proof<T> {
        let d = circuit.depth();
        let ks = circuit.ks();
        let layer_evaluations = circuit.evaluate_at_input(inputs.to_vec());

        let w0 = circuit.get_w_i(0, &layer_evaluations);
        let w0_points = w0.get_evaluation_points().clone();
        let output = get_multi_ext(move |w: &[T]| w0_points[bits_to_index(w)], ks[0]);

        log::info!("gkr prove: d={d}, k={:?}", ks);

        transcript.append(&expansion_to_bytes(&output));
        transcript.append(&usize_to_bytes(d));
        for &k in &ks {
            transcript.append(&usize_to_bytes(k));
        }
        let z0 = transcript.sample_n_challenges(ks[0]);

        let mut z_layers = vec![z0];
        let mut sumcheck_proofs = Vec::with_capacity(d - 1);
        let mut sumcheck_r = Vec::with_capacity(d - 1);
        let mut qs = Vec::with_capacity(d - 1);
        let mut fs = Vec::with_capacity(d - 1);
        let mut rs = Vec::with_capacity(d - 1);
        let mut add_expansions = Vec::with_capacity(d - 1);
        let mut mult_expansions = Vec::with_capacity(d - 1);

        for i in 0..d - 1 {
            let k_i = ks[i];
            let k_next = ks[i + 1];
            let z_i = z_layers[i].clone();
            log::info!("gkr prove: layer {i}, k_i={k_i}, k_{{i+1}}={k_next}");

            add_expansions.push(circuit.get_add_i(i));
            mult_expansions.push(circuit.get_mult_i(i));

            let mut add_z = circuit.get_add_i_symbolic(i);
            let mut mult_z = circuit.get_mult_i_symbolic(i);
            for (idx, &z_val) in z_i.iter().enumerate() {
                add_z = add_z.eval_i(z_val, idx + 1);
                mult_z = mult_z.eval_i(z_val, idx + 1);
            }
            add_z = add_z.apply_all();
            mult_z = mult_z.apply_all();
            log::debug!("layer {i}: add_i, mult_i partially evaluated at z_i");

            let w_next = circuit.get_w_i(i + 1, &layer_evaluations);
            let w_points = w_next.get_evaluation_points().clone();

            let points_b = w_points.clone();
            let w_b = get_ext_from_k(move |bits: &[T]| points_b[bits_to_index(bits)], k_next, k_i + 1);
            let points_c = w_points.clone();
            let w_c = get_ext_from_k(
                move |bits: &[T]| points_c[bits_to_index(bits)],
                k_next,
                k_i + k_next + 1,
            );
            let points_plain = w_points;
            let w_plain = get_ext_from_k(move |bits: &[T]| points_plain[bits_to_index(bits)], k_next, 1);
            log::debug!("layer {i}: W_{{i+1}} lifted to b and c regions");

            let sum_w = w_b.add(&w_c);
            let prod_w = w_b.mul(&w_c);
            let f_i = add_z.mul(&sum_w).add(&mult_z.mul(&prod_w)).apply_all();

            let (rounds, r) =
                SumcheckProver::prove_sumcheck(&f_i, 2 * k_next, k_i + 1, transcript);
            let (b_star, c_star) = (r[0..k_next].to_vec(), r[k_next..].to_vec());

            let q = reduce_multiple_polynomial(&b_star, &c_star, &w_plain);
            let f_val = eval_poly_at(&f_i, k_i + 1, &r);

            transcript.append(&coeffs_to_bytes(&q));
            transcript.append(&field_to_bytes(f_val));
            let r_star = transcript.sample_challenge();

            let z_next = ell(&b_star, &c_star, r_star);

            sumcheck_proofs.push(rounds);
            sumcheck_r.push(r);
            qs.push(q);
            fs.push(f_val);
            rs.push(r_star);
            z_layers.push(z_next);
        }

        let w_last = circuit.get_w_i(d - 1, &layer_evaluations);
        let w_last_points = w_last.get_evaluation_points().clone();
        let input_func = get_multi_ext(
            move |w: &[T]| w_last_points[bits_to_index(w)],
            ks[d - 1],
        );

        Proof {
            d,
            k: ks,
            output,
            z: z_layers,
            sumcheck_proofs,
            sumcheck_r,
            q: qs,
            f: fs,
            r: rs,
            input_func,
            add: add_expansions,
            mult: mult_expansions,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::verifier::GKRVerifier;
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
    fn test_prove_then_verify_three_layer_circuit() {
        let (circuit, inputs) = three_layer_circuit();
        let mut transcript = Transcript::new();
        let proof = GKRProver::prove(&circuit, &inputs, &mut transcript);

        assert_eq!(proof.d, 3);
        assert_eq!(proof.sumcheck_proofs.len(), 2);

        let mut verifier_transcript = Transcript::new();
        assert!(GKRVerifier::verify(&proof, &mut verifier_transcript));
    }
}
