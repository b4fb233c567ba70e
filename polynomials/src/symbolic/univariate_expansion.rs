use super::term::Term;
use ark_ff::PrimeField;

/// A dense univariate expansion `sum(coeffs[k] * x^k)`, little-endian: `coeffs[0]` is the
/// constant term. This is the natural shape produced by repeatedly multiplying in one `Term`
/// at a time (each multiplication only ever shifts coefficients up by one slot), so the
/// symbolic polynomial algebra builds expansions in this order and only flips to big-endian
/// (highest degree first) at the `Polynomial::get_all_coefficients` wire boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnivariateExpansion<T: PrimeField> {
    pub coeffs: Vec<T>,
    pub deg: usize,
}

impl<T: PrimeField> UnivariateExpansion<T> {
    pub fn new(coeffs: Vec<T>, deg: usize) -> Self {
        Self { coeffs, deg }
    }

    pub fn zero() -> Self {
        Self {
            coeffs: vec![],
            deg: 0,
        }
    }

    pub fn constant(c: T) -> Self {
        Self {
            coeffs: vec![c],
            deg: 0,
        }
    }

    fn length_expansion(coeffs: &[T], len: usize) -> Vec<T> {
        if coeffs.len() == len {
            coeffs.to_vec()
        } else if coeffs.len() < len {
            let mut v = coeffs.to_vec();
            v.resize(len, T::from(0u64));
            v
        } else {
            panic!("cannot shrink an expansion's coefficient vector");
        }
    }

    pub fn add(&self, other: &Self) -> Self {
        let highest_deg = self.deg.max(other.deg);
        let a = Self::length_expansion(&self.coeffs, highest_deg + 1);
        let b = Self::length_expansion(&other.coeffs, highest_deg + 1);

        let coeffs = a.iter().zip(b.iter()).map(|(x, y)| *x + *y).collect();
        Self {
            coeffs,
            deg: highest_deg,
        }
    }

    pub fn scalar_mul(&self, s: T) -> Self {
        Self {
            coeffs: self.coeffs.iter().map(|c| *c * s).collect(),
            deg: self.deg,
        }
    }

    /// `(sum c_k x^k) * (a*x + b)`: shift-and-scale by `a`, plus the original scaled by `b`.
    pub fn mul_term(&self, term: &Term<T>) -> Self {
        let mut shifted = vec![T::from(0u64)];
        shifted.extend(self.coeffs.iter().map(|c| *c * term.coeff));
        let shifted_exp = Self {
            coeffs: shifted,
            deg: self.deg + 1,
        };

        let scaled_exp = Self {
            coeffs: self.coeffs.iter().map(|c| *c * term.const_term).collect(),
            deg: self.deg,
        };

        shifted_exp.add(&scaled_exp)
    }

    /// Big-endian (highest degree first) coefficient vector, the shape the sum-check wire
    /// format and `eval_univariate` expect.
    pub fn to_big_endian(&self) -> Vec<T> {
        let mut v = self.coeffs.clone();
        v.reverse();
        v
    }
}
