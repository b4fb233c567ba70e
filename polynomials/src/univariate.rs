//! The single `eval_univariate` entry point every sum-check/GKR round-polynomial evaluation
//! goes through, enforcing one coefficient-ordering convention: big-endian, `coeffs[0]` is the
//! highest-degree coefficient.
use ark_ff::PrimeField;

/// Horner's method over a big-endian coefficient vector (`coeffs[0]` highest degree,
/// `coeffs[last]` the constant term).
pub fn eval_univariate<T: PrimeField>(coeffs: &[T], x: T) -> T {
    if coeffs.is_empty() {
        return T::from(0u64);
    }

    let mut result = coeffs[0];
    for c in &coeffs[1..] {
        result = result * x + *c;
    }
    result
}
