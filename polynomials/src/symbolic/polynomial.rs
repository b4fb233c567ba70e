use super::monomial::{Applied, Monomial};
use super::univariate_expansion::UnivariateExpansion;
use ark_ff::PrimeField;
use field_tracker::{end_tscope, start_tscope};

/// A symbolic sparse multivariate polynomial: a sum of `Monomial`s plus a scalar constant.
/// Closed under addition, multiplication, and per-variable substitution, and cheap to
/// partially evaluate one variable at a time without ever materializing the full
/// `2^variables` evaluation table that an expansion form would need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polynomial<T: PrimeField> {
    pub terms: Vec<Monomial<T>>,
    pub constant: T,
}

impl<T: PrimeField> Polynomial<T> {
    pub fn new(terms: Vec<Monomial<T>>) -> Self {
        Self {
            terms,
            constant: T::from(0u64),
        }
    }

    pub fn with_constant(terms: Vec<Monomial<T>>, constant: T) -> Self {
        Self { terms, constant }
    }

    pub fn zero() -> Self {
        Self::with_constant(vec![], T::from(0u64))
    }

    pub fn add(&self, other: &Self) -> Self {
        start_tscope!("Polynomial Add");
        let mut terms = self.terms.clone();
        terms.extend(other.terms.iter().cloned());
        let res = Self {
            terms,
            constant: self.constant + other.constant,
        };
        end_tscope!();
        res
    }

    pub fn mul(&self, other: &Self) -> Self {
        start_tscope!("Polynomial Mul");
        log::trace!(
            "multiplying polynomials: {} x {} monomials",
            self.terms.len(),
            other.terms.len()
        );

        let mut new_terms = Vec::with_capacity(self.terms.len() * other.terms.len());
        for a in &self.terms {
            for b in &other.terms {
                new_terms.push(a.mul(b));
            }
        }
        if !other.constant.is_zero() {
            for a in &self.terms {
                new_terms.push(Monomial::new(a.coeff * other.constant, a.terms.clone()));
            }
        }
        if !self.constant.is_zero() {
            for b in &other.terms {
                new_terms.push(Monomial::new(b.coeff * self.constant, b.terms.clone()));
            }
        }

        let res = Self {
            terms: new_terms,
            constant: self.constant * other.constant,
        };
        end_tscope!();
        res
    }

    /// Substitute `x_j = x` everywhere. Monomials that have no term in `x_j` pass through
    /// unchanged; a zero substitution drops the whole monomial into the running constant
    /// instead of leaving behind a monomial with a zero factor.
    pub fn eval_i(&self, x: T, j: usize) -> Self {
        start_tscope!("Polynomial Eval_i");
        log::trace!("substituting x_{} = {:?}", j, x);

        let mut new_terms = Vec::with_capacity(self.terms.len());
        let mut new_constant = self.constant;

        for mono in &self.terms {
            let mut kept = Vec::with_capacity(mono.terms.len());
            let mut result = mono.coeff;
            let mut vanished = false;

            for term in &mono.terms {
                if term.var_index == j {
                    let sub = term.eval(x);
                    if sub.is_zero() {
                        vanished = true;
                        break;
                    }
                    result *= sub;
                } else {
                    kept.push(*term);
                }
            }

            if vanished {
                continue;
            }

            if kept.is_empty() {
                new_constant += result;
            } else {
                new_terms.push(Monomial::new(result, kept));
            }
        }

        let res = Self {
            terms: new_terms,
            constant: new_constant,
        };
        end_tscope!();
        res
    }

    /// True once every remaining `Term` across every `Monomial` shares a single variable index.
    pub fn is_univariate(&self) -> bool {
        let mut seen: Option<usize> = None;
        for mono in &self.terms {
            for t in &mono.terms {
                match seen {
                    None => seen = Some(t.var_index),
                    Some(v) => {
                        if v != t.var_index {
                            return false;
                        }
                    }
                }
            }
        }
        true
    }

    /// Absorb every purely-constant `Monomial` into the scalar constant.
    pub fn apply_all(&self) -> Self {
        start_tscope!("Polynomial Apply_all");
        let mut new_terms = Vec::with_capacity(self.terms.len());
        let mut new_constant = self.constant;

        for mono in &self.terms {
            match mono.apply() {
                Applied::Constant(c) => new_constant += c,
                Applied::Monomial(m) => new_terms.push(m),
            }
        }

        let res = Self {
            terms: new_terms,
            constant: new_constant,
        };
        end_tscope!();
        res
    }

    /// Evaluate, assuming the polynomial is already univariate (every term shares a variable).
    pub fn eval_univariate(&self, x: T) -> T {
        let mut res = T::from(0u64);
        for mono in &self.terms {
            res += mono.eval_univariate(x);
        }
        res + self.constant
    }

    pub fn get_highest_degree(&self) -> usize {
        self.terms.iter().map(|m| m.terms.len()).max().unwrap_or(0)
    }

    /// Sum each monomial's own expansion plus the scalar constant. Requires `apply_all` to have
    /// already been called and the result to be univariate.
    pub fn get_expansion(&self) -> UnivariateExpansion<T> {
        debug_assert!(
            self.is_univariate(),
            "get_expansion called on a non-univariate polynomial"
        );

        let mut res = UnivariateExpansion::constant(self.constant);
        for mono in &self.terms {
            res = res.add(&mono.get_expansion());
        }
        res
    }

    /// Big-endian (highest-degree-first) coefficient vector, the shape sum-check round
    /// polynomials travel in.
    pub fn get_all_coefficients(&self) -> Vec<T> {
        let applied = self.apply_all();
        applied.get_expansion().to_big_endian()
    }
}

#[cfg(test)]
mod test {
    use super::super::term::Term;
    use super::*;
    use ark_bn254::Fq;

    fn x1(coeff: i64, constant: i64) -> Monomial<Fq> {
        let c = if coeff >= 0 {
            Fq::from(coeff as u64)
        } else {
            -Fq::from((-coeff) as u64)
        };
        let b = if constant >= 0 {
            Fq::from(constant as u64)
        } else {
            -Fq::from((-constant) as u64)
        };
        Monomial::new(Fq::from(1), vec![Term::new(c, 1, b)])
    }

    #[test]
    fn test_add_concatenates_and_sums_constants() {
        let p1 = Polynomial::with_constant(vec![x1(2, 0)], Fq::from(1));
        let p2 = Polynomial::with_constant(vec![x1(3, 0)], Fq::from(4));

        let sum = p1.add(&p2);
        assert_eq!(sum.terms.len(), 2);
        assert_eq!(sum.constant, Fq::from(5));
    }

    #[test]
    fn test_eval_i_removes_variable_and_collapses_constants() {
        // p = 3*x_1 + 2 (as a monomial with a single term plus a constant 2)
        let p = Polynomial::with_constant(
            vec![Monomial::new(Fq::from(1), vec![Term::new(Fq::from(3), 1, Fq::from(0))])],
            Fq::from(2),
        );

        let evaluated = p.eval_i(Fq::from(5), 1);
        assert!(evaluated.terms.is_empty());
        assert_eq!(evaluated.constant, Fq::from(17));
    }

    #[test]
    fn test_eval_i_idempotent() {
        let p = Polynomial::with_constant(
            vec![Monomial::new(Fq::from(1), vec![Term::new(Fq::from(3), 1, Fq::from(0))])],
            Fq::from(2),
        );
        let once = p.eval_i(Fq::from(5), 1);
        let twice = once.eval_i(Fq::from(9), 1);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_mul_cross_product() {
        // (x1 + 1) * (x1 + 2) evaluated at x1=3 should equal 4 * 5 = 20
        let a = Polynomial::with_constant(vec![], Fq::from(0)).add(&Polynomial::new(vec![
            Monomial::new(Fq::from(1), vec![Term::new(Fq::from(1), 1, Fq::from(1))]),
        ]));
        let b = Polynomial::new(vec![Monomial::new(
            Fq::from(1),
            vec![Term::new(Fq::from(1), 1, Fq::from(2))],
        )]);

        let prod = a.mul(&b);
        let evaluated = prod.eval_i(Fq::from(3), 1);
        assert_eq!(evaluated.constant, Fq::from(20));
    }

    #[test]
    fn test_get_all_coefficients_big_endian() {
        // p = 2x^2 + 3x + 5, built as the monomial 2*(x+a)*(x+b) isn't quite it; build directly
        // via two monomials and a constant: 2*x1*x1 (needs two terms on same var) + 3*x1 + 5
        let p = Polynomial::with_constant(
            vec![
                Monomial::new(
                    Fq::from(2),
                    vec![
                        Term::new(Fq::from(1), 1, Fq::from(0)),
                        Term::new(Fq::from(1), 1, Fq::from(0)),
                    ],
                ),
                Monomial::new(Fq::from(3), vec![Term::new(Fq::from(1), 1, Fq::from(0))]),
            ],
            Fq::from(5),
        );

        assert_eq!(
            p.get_all_coefficients(),
            vec![Fq::from(2), Fq::from(3), Fq::from(5)]
        );
    }

    #[test]
    fn test_empty_polynomial_evaluates_to_zero() {
        let p: Polynomial<Fq> = Polynomial::zero();
        assert_eq!(p.eval_univariate(Fq::from(9)), Fq::from(0));
    }

    #[test]
    fn test_associativity_and_commutativity() {
        let a = Polynomial::with_constant(vec![x1(2, 0)], Fq::from(1));
        let b = Polynomial::with_constant(vec![x1(3, 0)], Fq::from(4));
        let c = Polynomial::with_constant(vec![x1(5, 0)], Fq::from(7));

        let lhs = a.add(&b).add(&c);
        let rhs = a.add(&b.add(&c));
        assert_eq!(lhs.eval_i(Fq::from(2), 1), rhs.eval_i(Fq::from(2), 1));

        let comm_lhs = a.add(&b);
        let comm_rhs = b.add(&a);
        assert_eq!(
            comm_lhs.eval_i(Fq::from(2), 1),
            comm_rhs.eval_i(Fq::from(2), 1)
        );
    }
}
