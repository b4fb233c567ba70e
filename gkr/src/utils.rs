use polynomials::symbolic::monomial::Monomial;
use polynomials::symbolic::multivariate_expansion::MultivariateExpansion;
use polynomials::symbolic::polynomial::Polynomial;
use polynomials::symbolic::term::Term;

use ark_ff::{BigInteger, PrimeField};

/// Decode a boolean vector (each entry `0` or `1`) into the integer it spells out,
/// most-significant bit first. Used to look up a multilinear polynomial's evaluation table by
/// the same hypercube point a symbolic reconstruction walks.
pub fn bits_to_index<T: PrimeField>(bits: &[T]) -> usize {
    let one = T::from(1u64);
    bits.iter()
        .fold(0usize, |acc, &b| (acc << 1) | usize::from(b == one))
}

/// Canonical little-endian byte encoding of a field element, for feeding scalars (not just
/// coefficient vectors) to the transcript.
pub fn field_to_bytes<T: PrimeField>(x: T) -> Vec<u8> {
    x.into_bigint().to_bytes_le()
}

pub fn coeffs_to_bytes<T: PrimeField>(coeffs: &[T]) -> Vec<u8> {
    coeffs.iter().flat_map(|&c| field_to_bytes(c)).collect()
}

/// Commit a `usize` (a circuit structural parameter, not a field element) to the transcript.
pub fn usize_to_bytes(n: usize) -> Vec<u8> {
    (n as u64).to_le_bytes().to_vec()
}

pub fn expansion_to_bytes<T: PrimeField>(e: &MultivariateExpansion<T>) -> Vec<u8> {
    let mut out = Vec::new();
    for row in &e.rows {
        out.extend(field_to_bytes(row.coeff));
        for &exp in &row.exponents {
            out.extend(usize_to_bytes(exp));
        }
    }
    out
}

/// The unique line through `p1` at `t = 0` and `p2` at `t = 1`, evaluated elementwise at `t`.
pub fn ell<T: PrimeField>(p1: &[T], p2: &[T], t: T) -> Vec<T> {
    assert_eq!(p1.len(), p2.len(), "ell: point dimension mismatch");
    p1.iter()
        .zip(p2.iter())
        .map(|(&a, &b)| a + t * (b - a))
        .collect()
}

/// `q(t) = w(ell(b, c, t))`: substitute every variable `x_j` of `w` with the affine term
/// `(c_j - b_j)*t + b_j`, collapse to a single variable, and return `q`'s big-endian
/// coefficient vector.
pub fn reduce_multiple_polynomial<T: PrimeField>(b: &[T], c: &[T], w: &Polynomial<T>) -> Vec<T> {
    assert_eq!(
        b.len(),
        c.len(),
        "reduce_multiple_polynomial: b/c length mismatch"
    );

    let lines: Vec<Term<T>> = b
        .iter()
        .zip(c.iter())
        .map(|(&b_i, &c_i)| Term::new(c_i - b_i, 1, b_i))
        .collect();

    let new_terms: Vec<Monomial<T>> = w
        .terms
        .iter()
        .map(|mono| {
            let terms = mono
                .terms
                .iter()
                .map(|t| {
                    let line = &lines[t.var_index - 1];
                    Term::new(
                        line.coeff * t.coeff,
                        1,
                        line.const_term * t.coeff + t.const_term,
                    )
                })
                .collect();
            Monomial::new(mono.coeff, terms)
        })
        .collect();

    Polynomial::with_constant(new_terms, w.constant)
        .apply_all()
        .get_all_coefficients()
}

#[cfg(test)]
mod test {
    use super::*;
    use ark_bn254::Fq;
    use polynomials::mle::get_ext;
    use polynomials::univariate::eval_univariate;

    #[test]
    fn test_ell_endpoints() {
        let p1 = vec![Fq::from(3), Fq::from(5)];
        let p2 = vec![Fq::from(7), Fq::from(11)];

        assert_eq!(ell(&p1, &p2, Fq::from(0)), p1);
        assert_eq!(ell(&p1, &p2, Fq::from(1)), p2);
    }

    #[test]
    fn test_reduce_multiple_polynomial_endpoints() {
        let values = [Fq::from(2), Fq::from(9), Fq::from(4), Fq::from(7)];
        let w = |x: &[Fq]| -> Fq {
            let idx =
                (if x[0] == Fq::from(1) { 2 } else { 0 }) + (if x[1] == Fq::from(1) { 1 } else { 0 });
            values[idx]
        };
        let poly = get_ext(w, 2);

        let b = vec![Fq::from(0), Fq::from(1)];
        let c = vec![Fq::from(1), Fq::from(0)];

        let q = reduce_multiple_polynomial(&b, &c, &poly);

        assert_eq!(eval_univariate(&q, Fq::from(0)), w(&b));
        assert_eq!(eval_univariate(&q, Fq::from(1)), w(&c));
    }
}
