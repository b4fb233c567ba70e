use super::term::Term;
use ark_ff::PrimeField;
use std::collections::HashMap;

/// One row of a `MultivariateExpansion`: `coeff * x_1^exponents[0] * ... * x_v^exponents[v-1]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpansionRow<T: PrimeField> {
    pub coeff: T,
    pub exponents: Vec<usize>,
}

/// A multivariate polynomial in fully-expanded (monomial-list) form: every row is a distinct
/// exponent tuple after compaction, and no row has a zero coefficient. Cheaper than the
/// symbolic `Polynomial` to evaluate at a random point or serialize; more expensive to build
/// and to partially evaluate one variable at a time (it has already paid that cost).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultivariateExpansion<T: PrimeField> {
    pub rows: Vec<ExpansionRow<T>>,
}

impl<T: PrimeField> MultivariateExpansion<T> {
    pub fn new(rows: Vec<ExpansionRow<T>>) -> Self {
        Self { rows }
    }

    pub fn zero() -> Self {
        Self { rows: vec![] }
    }

    /// A single constant row with no variables.
    pub fn constant(c: T) -> Self {
        if c.is_zero() {
            Self::zero()
        } else {
            Self {
                rows: vec![ExpansionRow {
                    coeff: c,
                    exponents: vec![],
                }],
            }
        }
    }

    pub fn add(&self, other: &Self) -> Self {
        let mut rows = self.rows.clone();
        rows.extend(other.rows.iter().cloned());
        Self { rows }.compact()
    }

    /// Multiply every row by the affine term `a*x_j + b`: each row splits into a `e_j += 1,
    /// c *= a` copy and a `c *= b` copy, then compaction merges rows that land on the same
    /// exponent tuple.
    pub fn mul_term(&self, term: &Term<T>, num_vars: usize) -> Self {
        let mut rows = Vec::with_capacity(self.rows.len() * 2);

        if !term.coeff.is_zero() {
            for row in &self.rows {
                let mut exponents = row.exponents.clone();
                if exponents.len() < num_vars {
                    exponents.resize(num_vars, 0);
                }
                exponents[term.var_index - 1] += 1;
                rows.push(ExpansionRow {
                    coeff: row.coeff * term.coeff,
                    exponents,
                });
            }
        }

        if !term.const_term.is_zero() {
            for row in &self.rows {
                let mut exponents = row.exponents.clone();
                if exponents.len() < num_vars {
                    exponents.resize(num_vars, 0);
                }
                rows.push(ExpansionRow {
                    coeff: row.coeff * term.const_term,
                    exponents,
                });
            }
        }

        Self { rows }.compact()
    }

    /// Merge rows with identical exponent tuples by summing coefficients, and drop any row
    /// whose coefficient lands on zero.
    pub fn compact(&self) -> Self {
        let mut merged: HashMap<Vec<usize>, T> = HashMap::new();
        let mut order: Vec<Vec<usize>> = Vec::new();

        for row in &self.rows {
            match merged.get_mut(&row.exponents) {
                Some(c) => *c += row.coeff,
                None => {
                    order.push(row.exponents.clone());
                    merged.insert(row.exponents.clone(), row.coeff);
                }
            }
        }

        let rows = order
            .into_iter()
            .filter_map(|exponents| {
                let coeff = merged[&exponents];
                if coeff.is_zero() {
                    None
                } else {
                    Some(ExpansionRow { coeff, exponents })
                }
            })
            .collect();

        Self { rows }
    }

    /// `sum_row coeff * prod_i r[i]^exponents[i]`.
    pub fn eval(&self, r: &[T]) -> T {
        let mut total = T::from(0u64);
        for row in &self.rows {
            let mut term = row.coeff;
            for (i, &e) in row.exponents.iter().enumerate() {
                if e > 0 {
                    term *= r[i].pow([e as u64]);
                }
            }
            total += term;
        }
        total
    }
}
