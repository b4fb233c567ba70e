//! Multilinear extension utilities: enumerating the boolean hypercube, the Lagrange basis χ,
//! and the two ways of turning a function `{0,1}^v -> Fp` into a polynomial, symbolic
//! (`get_ext`) or fully expanded (`get_multi_ext`).

use crate::symbolic::monomial::Monomial;
use crate::symbolic::multivariate_expansion::MultivariateExpansion;
use crate::symbolic::polynomial::Polynomial;
use crate::symbolic::term::Term;
use ark_ff::PrimeField;

/// Lexicographic enumeration of every point in `{0,1}^v`, most-significant bit first. Order is
/// load-bearing: the prover and verifier must walk the same enumeration to agree on sums.
pub fn generate_binary<T: PrimeField>(bit_count: usize) -> Vec<Vec<T>> {
    let mut out = Vec::with_capacity(1 << bit_count);
    for mask in 0..(1usize << bit_count) {
        let mut point = Vec::with_capacity(bit_count);
        for bit in (0..bit_count).rev() {
            if (mask >> bit) & 1 == 1 {
                point.push(T::from(1u64));
            } else {
                point.push(T::from(0u64));
            }
        }
        out.push(point);
    }
    out
}

/// The multilinear Lagrange basis: `prod_i (x_i*w_i + (1-x_i)*(1-w_i))`.
pub fn chi<T: PrimeField>(w: &[T], x: &[T]) -> T {
    let one = T::from(1u64);
    let mut prod = one;
    for i in 0..x.len() {
        prod *= x[i] * w[i] + (one - x[i]) * (one - w[i]);
    }
    prod
}

/// `chi(w, .)` as a `Monomial`, variable indices starting at 1: `w_i = 0` contributes the term
/// `(-1)*x_i + 1`, `w_i = 1` contributes `x_i`.
pub fn chi_w<T: PrimeField>(w: &[T]) -> Monomial<T> {
    chi_w_from_k(w, 1)
}

/// Same as [`chi_w`] but variable indices start at `k` instead of 1, used to place a claim
/// about `W_{i+1}` at the "b" or "c" region of a GKR layer's combined variable list.
pub fn chi_w_from_k<T: PrimeField>(w: &[T], k: usize) -> Monomial<T> {
    let zero = T::from(0u64);
    let one = T::from(1u64);

    let terms: Vec<Term<T>> = w
        .iter()
        .enumerate()
        .map(|(i, &w_i)| {
            if w_i == zero {
                Term::new(-one, i + k, one)
            } else {
                Term::new(one, i + k, zero)
            }
        })
        .collect();

    Monomial::new(one, terms)
}

/// `sum_{w in {0,1}^|r|} f(w) * chi(w, r)`: the unique multilinear extension of `f`, evaluated
/// directly at `r` without ever materializing a symbolic or expanded polynomial.
pub fn eval_ext<T: PrimeField>(f: impl Fn(&[T]) -> T, r: &[T]) -> T {
    let points = generate_binary::<T>(r.len());
    let mut acc = T::from(0u64);
    for w in &points {
        acc += f(w) * chi(w, r);
    }
    acc
}

/// `sum_w f(w) * chi_w(w)`, variable indices `1..v`, as a symbolic `Polynomial`. Zero summands
/// are skipped so a sparse `f` produces a sparse polynomial.
pub fn get_ext<T: PrimeField>(f: impl Fn(&[T]) -> T, v: usize) -> Polynomial<T> {
    get_ext_from_k(f, v, 1)
}

/// Same as [`get_ext`] but variable indices start at `k`.
pub fn get_ext_from_k<T: PrimeField>(f: impl Fn(&[T]) -> T, v: usize, k: usize) -> Polynomial<T> {
    let points = generate_binary::<T>(v);
    let mut terms = Vec::new();

    for w in &points {
        let value = f(w);
        if value.is_zero() {
            continue;
        }
        let mut mono = chi_w_from_k(w, k);
        mono.scale(value);
        terms.push(mono);
    }

    Polynomial::new(terms)
}

/// Fully expand a symbolic polynomial with `num_vars` variables into a `MultivariateExpansion`
/// with compaction, by multiplying in one `Term` at a time starting from a constant-1 row.
pub fn polynomial_to_multivariate_expansion<T: PrimeField>(
    poly: &Polynomial<T>,
    num_vars: usize,
) -> MultivariateExpansion<T> {
    let mut total = MultivariateExpansion::constant(poly.constant);

    for mono in &poly.terms {
        let mut expansion = MultivariateExpansion::constant(mono.coeff);
        for term in &mono.terms {
            expansion = expansion.mul_term(term, num_vars);
        }
        total = total.add(&expansion);
    }

    total
}

/// `get_ext` followed directly by expansion: the multivariate extension of `f` in fully
/// expanded form.
pub fn get_multi_ext<T: PrimeField>(f: impl Fn(&[T]) -> T, v: usize) -> MultivariateExpansion<T> {
    let symbolic = get_ext(f, v);
    polynomial_to_multivariate_expansion(&symbolic, v)
}

/// Evaluate an expansion at a point: `sum_row coeff * prod_i r[i]^exponents[i]`, named so
/// callers in `gkr`/`sumcheck` don't need to know about `ExpansionRow` layout.
pub fn eval_expansion<T: PrimeField>(f: &MultivariateExpansion<T>, r: &[T]) -> T {
    f.eval(r)
}
