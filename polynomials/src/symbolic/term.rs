use ark_ff::PrimeField;

/// An affine univariate term `coeff * x_var_index + const_term` in a single named variable.
/// `var_index` is 1-based: variable `x_1` is the first variable the sum-check/GKR reduction
/// ever introduces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Term<T: PrimeField> {
    pub coeff: T,
    pub var_index: usize,
    pub const_term: T,
}

impl<T: PrimeField> Term<T> {
    pub fn new(coeff: T, var_index: usize, const_term: T) -> Self {
        Self {
            coeff,
            var_index,
            const_term,
        }
    }

    /// `coeff * x + const_term`.
    pub fn eval(&self, x: T) -> T {
        self.coeff * x + self.const_term
    }

    pub fn is_constant(&self) -> bool {
        self.coeff.is_zero()
    }

    /// View this term as a degree-1 little-endian expansion `[const_term, coeff]`.
    pub fn as_expansion_coeffs(&self) -> [T; 2] {
        [self.const_term, self.coeff]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use ark_bn254::Fq;

    #[test]
    fn test_eval() {
        let t = Term::new(Fq::from(3), 1, Fq::from(2));
        assert_eq!(t.eval(Fq::from(5)), Fq::from(17));
    }

    #[test]
    fn test_is_constant() {
        assert!(Term::new(Fq::from(0), 1, Fq::from(9)).is_constant());
        assert!(!Term::new(Fq::from(1), 1, Fq::from(9)).is_constant());
    }
}
