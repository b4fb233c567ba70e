use super::term::Term;
use super::univariate_expansion::UnivariateExpansion;
use ark_ff::PrimeField;

/// The result of [`Monomial::apply`]: a monomial that still has at least one non-constant
/// `Term` collapses the constant ones into its scalar and keeps going; a monomial whose terms
/// are *all* constant (or zero) collapses entirely into a field element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied<T: PrimeField> {
    Constant(T),
    Monomial(Monomial<T>),
}

/// `coeff * term_0 * term_1 * ... * term_n`, each term an affine univariate in some variable.
/// The same variable index may repeat (raising its degree in that variable).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Monomial<T: PrimeField> {
    pub coeff: T,
    pub terms: Vec<Term<T>>,
}

impl<T: PrimeField> Monomial<T> {
    pub fn new(coeff: T, terms: Vec<Term<T>>) -> Self {
        Self { coeff, terms }
    }

    pub fn scale(&mut self, n: T) {
        self.coeff *= n;
    }

    /// Concatenate the two monomials' term lists, multiplying their scalars.
    pub fn mul(&self, other: &Self) -> Self {
        let mut terms = self.terms.clone();
        terms.extend(other.terms.iter().cloned());
        Self {
            coeff: self.coeff * other.coeff,
            terms,
        }
    }

    /// Fold away every constant `Term` into the scalar; bail out to `Constant(0)` the moment a
    /// term evaluates to zero, since the whole product vanishes.
    pub fn apply(&self) -> Applied<T> {
        let mut scalar = T::from(1u64);
        let mut kept = Vec::with_capacity(self.terms.len());

        for t in &self.terms {
            if t.is_constant() {
                if t.const_term.is_zero() {
                    return Applied::Constant(T::from(0u64));
                }
                scalar *= t.const_term;
            } else {
                kept.push(*t);
            }
        }

        if kept.is_empty() {
            Applied::Constant(scalar * self.coeff)
        } else {
            Applied::Monomial(Self {
                coeff: scalar * self.coeff,
                terms: kept,
            })
        }
    }

    /// Evaluate assuming every term shares the same variable; short-circuits on a zero factor.
    pub fn eval_univariate(&self, x: T) -> T {
        let mut res = self.coeff;
        for t in &self.terms {
            let factor = t.eval(x);
            if factor.is_zero() {
                return T::from(0u64);
            }
            res *= factor;
        }
        res
    }

    /// Multiply the terms into a univariate expansion, scaled by `coeff`. Requires every term
    /// to share the same variable index (the caller is responsible for that, same as the
    /// polynomial being univariate after `apply_all`).
    pub fn get_expansion(&self) -> UnivariateExpansion<T> {
        if self.terms.is_empty() {
            return UnivariateExpansion::constant(self.coeff);
        }

        let first = &self.terms[0];
        let mut res = UnivariateExpansion::new(first.as_expansion_coeffs().to_vec(), 1)
            .scalar_mul(self.coeff);

        for t in &self.terms[1..] {
            res = res.mul_term(t);
        }

        res
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use ark_bn254::Fq;

    #[test]
    fn test_apply_drops_constant_terms() {
        // coeff=2, terms = [(0, x1, 3), (5, x1, 0)] -> constant term is (0*x+3)=3, kept term is 5x
        let m = Monomial::new(
            Fq::from(2),
            vec![Term::new(Fq::from(0), 1, Fq::from(3)), Term::new(Fq::from(5), 1, Fq::from(0))],
        );

        match m.apply() {
            Applied::Monomial(applied) => {
                assert_eq!(applied.coeff, Fq::from(6));
                assert_eq!(applied.terms, vec![Term::new(Fq::from(5), 1, Fq::from(0))]);
            }
            Applied::Constant(_) => panic!("expected a monomial"),
        }
    }

    #[test]
    fn test_apply_collapses_to_zero() {
        let m = Monomial::new(
            Fq::from(9),
            vec![Term::new(Fq::from(0), 1, Fq::from(0))],
        );
        assert_eq!(m.apply(), Applied::Constant(Fq::from(0)));
    }

    #[test]
    fn test_apply_collapses_to_constant() {
        let m = Monomial::new(
            Fq::from(2),
            vec![Term::new(Fq::from(0), 1, Fq::from(3)), Term::new(Fq::from(0), 2, Fq::from(4))],
        );
        assert_eq!(m.apply(), Applied::Constant(Fq::from(24)));
    }

    #[test]
    fn test_eval_univariate() {
        // 2 * (x+1) * (2x+3), at x=2: 2 * 3 * 7 = 42
        let m = Monomial::new(
            Fq::from(2),
            vec![Term::new(Fq::from(1), 1, Fq::from(1)), Term::new(Fq::from(2), 1, Fq::from(3))],
        );
        assert_eq!(m.eval_univariate(Fq::from(2)), Fq::from(42));
    }

    #[test]
    fn test_get_expansion() {
        // 2 * (x+1) * (2x+3) = 2 * (2x^2 + 5x + 3) = 4x^2 + 10x + 6
        let m = Monomial::new(
            Fq::from(2),
            vec![Term::new(Fq::from(1), 1, Fq::from(1)), Term::new(Fq::from(2), 1, Fq::from(3))],
        );
        let exp = m.get_expansion();
        assert_eq!(exp.coeffs, vec![Fq::from(6), Fq::from(10), Fq::from(4)]);
    }
}
