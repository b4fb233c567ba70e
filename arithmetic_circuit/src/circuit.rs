use crate::gate::{Gate, Operation};

use polynomials::mle::{get_ext_from_k, get_multi_ext};
use polynomials::multilinear_polynomial::evaluation_form::MultiLinearPolynomial;
use polynomials::symbolic::multivariate_expansion::MultivariateExpansion;
use polynomials::symbolic::polynomial::Polynomial;

use ark_ff::PrimeField;
use std::collections::HashSet;
use std::marker::PhantomData;

/// The wiring of a single transition between two value-layers, as the boolean-indicator
/// triples `(z, b, c)` for which `add(z, b, c) = 1` (respectively `mult`). Built once from
/// the transition's `Gate` list at `Circuit` construction time; the `Gate` list itself is
/// kept only as a construction convenience and is not consulted again.
#[derive(Debug, Clone)]
struct Wiring {
    add: HashSet<(usize, usize, usize)>,
    mult: HashSet<(usize, usize, usize)>,
}

impl Wiring {
    fn from_gates(gates: &[Gate]) -> Self {
        let mut add = HashSet::new();
        let mut mult = HashSet::new();

        for (z, gate) in gates.iter().enumerate() {
            match gate.operation {
                Operation::Add => {
                    add.insert((z, gate.left, gate.right));
                }
                Operation::Mul => {
                    mult.insert((z, gate.left, gate.right));
                }
            }
        }

        Self { add, mult }
    }
}

fn bits_to_index<T: PrimeField>(bits: &[T]) -> usize {
    let one = T::from(1u64);
    bits.iter()
        .fold(0usize, |acc, &b| (acc << 1) | usize::from(b == one))
}

/// A layered arithmetic circuit: a sequence of value-layers connected by ADD/MUL gates.
/// Layer 0 is the output layer, layer `depth() - 1` is the user-supplied input, matching
/// the numbering every GKR layer-reduction step is indexed by.
pub struct Circuit<T: PrimeField> {
    /// `layers[j]` is the gate list that produces value-layer `j + 1` from value-layer `j`,
    /// input-to-output order (`layers[0]` sits just above the raw input).
    layers: Vec<Vec<Gate>>,
    /// `widths[j]` is the width (a power of two) of value-layer `j`, input-to-output order.
    /// `widths.len() == layers.len() + 1`.
    widths: Vec<usize>,
    /// `wirings[j]` mirrors `layers[j]`.
    wirings: Vec<Wiring>,
    _marker: PhantomData<T>,
}

impl<T: PrimeField> Circuit<T> {
    /// `widths` is given input-to-output: `widths[0]` is the raw input width,
    /// `widths[widths.len() - 1]` is the circuit's output width.
    pub fn new(layers: Vec<Vec<Gate>>, widths: Vec<usize>) -> Self {
        if widths.len() != layers.len() + 1 {
            panic!("Invalid circuit: widths must have one more entry than wiring layers");
        }
        for w in &widths {
            if !w.is_power_of_two() {
                panic!("Invalid circuit: layer width {w} is not a power of two");
            }
        }

        let wirings = layers.iter().map(|gates| Wiring::from_gates(gates)).collect();

        log::info!(
            "circuit built: depth={}, widths={:?}",
            layers.len() + 1,
            widths
        );

        Self {
            layers,
            widths,
            wirings,
            _marker: PhantomData,
        }
    }

    /// Number of value-layers, `d`.
    pub fn depth(&self) -> usize {
        self.layers.len() + 1
    }

    /// `k_0..k_{d-1}`, output-to-input order.
    pub fn ks(&self) -> Vec<usize> {
        self.widths
            .iter()
            .rev()
            .map(|w| w.trailing_zeros() as usize)
            .collect()
    }

    /// `k_i` for a single layer, `layer_idx` in output-to-input (0 = output) numbering.
    pub fn k_at(&self, layer_idx: usize) -> usize {
        let internal_idx = self.layers.len() - layer_idx;
        self.widths[internal_idx].trailing_zeros() as usize
    }

    // Evaluate the circuit on a concrete input assignment, returning every value-layer
    // (input-to-output order) as a power-of-two-checked evaluation table.
    pub fn evaluate_at_input(&self, inputs: Vec<T>) -> Vec<MultiLinearPolynomial<T>> {
        if inputs.len() != self.widths[0] {
            panic!(
                "Invalid input: expected {} values, got {}",
                self.widths[0],
                inputs.len()
            );
        }

        let mut evaluation_layers = vec![MultiLinearPolynomial::new(&inputs)];
        let mut running_inputs = inputs;

        for (j, gates) in self.layers.iter().enumerate() {
            let width = self.widths[j + 1];
            let mut next_inputs = vec![T::from(0u64); width];

            for (idx, gate) in gates.iter().enumerate() {
                next_inputs[idx] = match gate.operation {
                    Operation::Add => running_inputs[gate.left] + running_inputs[gate.right],
                    Operation::Mul => running_inputs[gate.left] * running_inputs[gate.right],
                };
            }

            evaluation_layers.push(MultiLinearPolynomial::new(&next_inputs));
            running_inputs = next_inputs;
        }

        evaluation_layers
    }

    /// `W_i`, `layer_idx` in output-to-input numbering, read out of a previously computed
    /// `evaluate_at_input` result.
    pub fn get_w_i(
        &self,
        layer_idx: usize,
        layer_evaluations: &[MultiLinearPolynomial<T>],
    ) -> MultiLinearPolynomial<T> {
        if layer_idx >= layer_evaluations.len() {
            panic!("layer index out of bounds");
        }

        layer_evaluations[layer_evaluations.len() - layer_idx - 1].clone()
    }

    fn wiring_at(&self, layer_idx: usize) -> (&Wiring, usize, usize) {
        if layer_idx >= self.layers.len() {
            panic!("layer index out of bounds: circuit has no wiring for the input layer");
        }

        let internal_idx = self.layers.len() - layer_idx - 1;
        let k_z = self.widths[internal_idx + 1].trailing_zeros() as usize;
        let k_in = self.widths[internal_idx].trailing_zeros() as usize;
        (&self.wirings[internal_idx], k_z, k_in)
    }

    /// The multilinear extension of `add_i`, fully expanded, for Fiat-Shamir-transcript
    /// commitment and for the GKR layer-reduction sum-check.
    pub fn get_add_i(&self, layer_idx: usize) -> MultivariateExpansion<T> {
        let (wiring, k_z, k_in) = self.wiring_at(layer_idx);
        log::debug!(
            "add_{layer_idx}: expanding wiring extension over {} variables",
            k_z + 2 * k_in
        );

        let f = |w: &[T]| -> T {
            let z = bits_to_index(&w[0..k_z]);
            let b = bits_to_index(&w[k_z..k_z + k_in]);
            let c = bits_to_index(&w[k_z + k_in..]);
            if wiring.add.contains(&(z, b, c)) {
                T::from(1u64)
            } else {
                T::from(0u64)
            }
        };

        get_multi_ext(f, k_z + 2 * k_in)
    }

    /// The multilinear extension of `mult_i`, fully expanded.
    pub fn get_mult_i(&self, layer_idx: usize) -> MultivariateExpansion<T> {
        let (wiring, k_z, k_in) = self.wiring_at(layer_idx);
        log::debug!(
            "mult_{layer_idx}: expanding wiring extension over {} variables",
            k_z + 2 * k_in
        );

        let f = |w: &[T]| -> T {
            let z = bits_to_index(&w[0..k_z]);
            let b = bits_to_index(&w[k_z..k_z + k_in]);
            let c = bits_to_index(&w[k_z + k_in..]);
            if wiring.mult.contains(&(z, b, c)) {
                T::from(1u64)
            } else {
                T::from(0u64)
            }
        };

        get_multi_ext(f, k_z + 2 * k_in)
    }

    /// Symbolic multilinear extension of `add_i`, over the full `z, b, c` variable space
    /// (`1..=k_i+2*k_{i+1}`, `z` first) the GKR layer reduction indexes against directly:
    /// `z` at `1..=k_i`, `b` at `k_i+1..=k_i+k_{i+1}`, `c` at the remaining positions. Used by
    /// the prover, which partially evaluates `z` away via `eval_i` and keeps `b, c` symbolic
    /// for sum-check; [`Self::get_add_i`] produces the same extension already fully expanded,
    /// for the proof's wire format.
    pub fn get_add_i_symbolic(&self, layer_idx: usize) -> Polynomial<T> {
        let (wiring, k_z, k_in) = self.wiring_at(layer_idx);
        let f = |w: &[T]| -> T {
            let z = bits_to_index(&w[0..k_z]);
            let b = bits_to_index(&w[k_z..k_z + k_in]);
            let c = bits_to_index(&w[k_z + k_in..]);
            if wiring.add.contains(&(z, b, c)) {
                T::from(1u64)
            } else {
                T::from(0u64)
            }
        };
        get_ext_from_k(f, k_z + 2 * k_in, 1)
    }

    /// Symbolic multilinear extension of `mult_i`, same variable layout as
    /// [`Self::get_add_i_symbolic`].
    pub fn get_mult_i_symbolic(&self, layer_idx: usize) -> Polynomial<T> {
        let (wiring, k_z, k_in) = self.wiring_at(layer_idx);
        let f = |w: &[T]| -> T {
            let z = bits_to_index(&w[0..k_z]);
            let b = bits_to_index(&w[k_z..k_z + k_in]);
            let c = bits_to_index(&w[k_z + k_in..]);
            if wiring.mult.contains(&(z, b, c)) {
                T::from(1u64)
            } else {
                T::from(0u64)
            }
        };
        get_ext_from_k(f, k_z + 2 * k_in, 1)
    }

    /// Number of wiring transitions, `d - 1`.
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bn254::Fq;

    fn init_circuit_and_evaluate() -> (Vec<MultiLinearPolynomial<Fq>>, Circuit<Fq>) {
        let circuit = Circuit::new(
            vec![
                vec![
                    Gate::new(0, 1, Operation::Add),
                    Gate::new(2, 3, Operation::Mul),
                ],
                vec![Gate::new(0, 1, Operation::Add)],
            ],
            vec![4, 2, 2],
        );

        (
            circuit.evaluate_at_input(vec![Fq::from(1), Fq::from(2), Fq::from(3), Fq::from(4)]),
            circuit,
        )
    }

    #[test]
    fn test_evaluate_at_input() {
        let (circuit_evaluations, _) = init_circuit_and_evaluate();

        assert_eq!(
            *circuit_evaluations.last().unwrap().get_evaluation_points(),
            vec![Fq::from(15), Fq::from(0)]
        );
    }

    #[test]
    fn test_get_add_i_and_get_mult_i_agree_with_wiring() {
        let (_, circuit) = init_circuit_and_evaluate();

        // layer_idx 0 is the output layer, wired from layer_idx 1 (width 2) below it.
        let add_0 = circuit.get_add_i(0);
        let mult_0 = circuit.get_mult_i(0);

        // k_z = 1 (output width 2), k_in = 1 (input-to-this-transition width 2):
        // gate z=0 is Add(b=0, c=1), so add_0(0,0,1) = 1 and every other point is 0.
        let one = Fq::from(1);
        let zero = Fq::from(0);
        assert_eq!(
            polynomials::mle::eval_expansion(&add_0, &[zero, zero, one]),
            one
        );
        assert_eq!(
            polynomials::mle::eval_expansion(&add_0, &[zero, one, zero]),
            zero
        );
        assert_eq!(
            polynomials::mle::eval_expansion(&mult_0, &[zero, zero, one]),
            zero
        );
    }

    #[test]
    fn test_ks_output_to_input_order() {
        let (_, circuit) = init_circuit_and_evaluate();
        assert_eq!(circuit.ks(), vec![1, 1, 2]);
        assert_eq!(circuit.k_at(0), 1);
        assert_eq!(circuit.k_at(2), 2);
    }

    #[test]
    #[should_panic(expected = "not a power of two")]
    fn test_rejects_non_power_of_two_width() {
        let _ = Circuit::<Fq>::new(vec![vec![Gate::new(0, 1, Operation::Add)]], vec![3, 1]);
    }
}
