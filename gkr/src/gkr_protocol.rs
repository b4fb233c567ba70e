//! The transport shape of a GKR proof: every artifact the prover emits across the per-layer
//! sum-check reductions, plus the circuit's structural parameters the verifier needs to walk
//! the same layers independently.

use polynomials::symbolic::multivariate_expansion::{ExpansionRow, MultivariateExpansion};

use ark_ff::PrimeField;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One run of GKR: unpadded, exactly as the prover produced it. Fiat-Shamir challenges are
/// always derived over this shape; padding is applied only to a copy, right before JSON
/// serialization (see [`Proof::pad`]).
#[derive(Debug, Clone)]
pub struct Proof<T: PrimeField> {
    pub d: usize,
    pub k: Vec<usize>,
    pub output: MultivariateExpansion<T>,
    pub z: Vec<Vec<T>>,
    pub sumcheck_proofs: Vec<Vec<Vec<T>>>,
    pub sumcheck_r: Vec<Vec<T>>,
    pub q: Vec<Vec<T>>,
    pub f: Vec<T>,
    pub r: Vec<T>,
    pub input_func: MultivariateExpansion<T>,
    pub add: Vec<MultivariateExpansion<T>>,
    pub mult: Vec<MultivariateExpansion<T>>,
}

fn pad_front<T: PrimeField>(v: &[T], len: usize) -> Vec<T> {
    let mut out = vec![T::from(0u64); len.saturating_sub(v.len())];
    out.extend_from_slice(v);
    out
}

fn pad_back<T: PrimeField>(v: &[T], len: usize) -> Vec<T> {
    let mut out = v.to_vec();
    out.resize(len, T::from(0u64));
    out
}

fn pad_expansion<T: PrimeField>(
    e: &MultivariateExpansion<T>,
    num_vars: usize,
) -> MultivariateExpansion<T> {
    MultivariateExpansion::new(
        e.rows
            .iter()
            .cloned()
            .map(|mut row| {
                row.exponents.resize(num_vars, 0);
                row
            })
            .collect(),
    )
}

impl<T: PrimeField> Proof<T> {
    /// Zero-pads every variable-width field to the maximum width observed anywhere in the
    /// proof, so downstream consumers can treat every layer uniformly. Never call this before
    /// the transcript-bound challenges have already been derived: padding changes vector
    /// lengths and would desynchronize a hash computed over the padded form.
    pub fn pad(&self) -> Self {
        let max_round_len = self
            .sumcheck_proofs
            .iter()
            .flatten()
            .map(|round| round.len())
            .max()
            .unwrap_or(0);
        let max_z_len = self.z.iter().map(|v| v.len()).max().unwrap_or(0);
        let max_r_len = self.sumcheck_r.iter().map(|v| v.len()).max().unwrap_or(0);
        let max_q_len = self.q.iter().map(|v| v.len()).max().unwrap_or(0);
        let max_expansion_vars = self
            .add
            .iter()
            .chain(self.mult.iter())
            .chain(std::iter::once(&self.output))
            .chain(std::iter::once(&self.input_func))
            .flat_map(|e| e.rows.iter())
            .map(|row| row.exponents.len())
            .max()
            .unwrap_or(0);

        Self {
            d: self.d,
            k: self.k.clone(),
            output: pad_expansion(&self.output, max_expansion_vars),
            z: self.z.iter().map(|v| pad_back(v, max_z_len)).collect(),
            sumcheck_proofs: self
                .sumcheck_proofs
                .iter()
                .map(|layer| layer.iter().map(|r| pad_front(r, max_round_len)).collect())
                .collect(),
            sumcheck_r: self
                .sumcheck_r
                .iter()
                .map(|v| pad_back(v, max_r_len))
                .collect(),
            q: self.q.iter().map(|v| pad_back(v, max_q_len)).collect(),
            f: self.f.clone(),
            r: self.r.clone(),
            input_func: pad_expansion(&self.input_func, max_expansion_vars),
            add: self
                .add
                .iter()
                .map(|e| pad_expansion(e, max_expansion_vars))
                .collect(),
            mult: self
                .mult
                .iter()
                .map(|e| pad_expansion(e, max_expansion_vars))
                .collect(),
        }
    }
}

/// A field element on the JSON boundary: the canonical decimal string of its residue in
/// `[0, p)`, matching `ark_ff`'s own `Display`. Used only here; every in-memory computation
/// works directly with `T`.
fn field_to_string<T: PrimeField>(x: T) -> String {
    x.to_string()
}

fn field_from_string<T: PrimeField + FromStr>(s: &str) -> T {
    T::from_str(s).unwrap_or_else(|_| panic!("proof JSON: {s:?} is not a valid field element"))
}

/// Mirrors [`polynomials::symbolic::multivariate_expansion::ExpansionRow`]: coefficient
/// first, then exponents.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RowJson {
    coeff: String,
    exponents: Vec<usize>,
}

fn expansion_to_json<T: PrimeField>(e: &MultivariateExpansion<T>) -> Vec<RowJson> {
    e.rows
        .iter()
        .map(|row| RowJson {
            coeff: field_to_string(row.coeff),
            exponents: row.exponents.clone(),
        })
        .collect()
}

fn expansion_from_json<T: PrimeField + FromStr>(rows: &[RowJson]) -> MultivariateExpansion<T> {
    MultivariateExpansion::new(
        rows.iter()
            .map(|row| ExpansionRow {
                coeff: field_from_string(&row.coeff),
                exponents: row.exponents.clone(),
            })
            .collect(),
    )
}

fn vec_to_json<T: PrimeField>(v: &[T]) -> Vec<String> {
    v.iter().map(|&x| field_to_string(x)).collect()
}

fn vec_from_json<T: PrimeField + FromStr>(v: &[String]) -> Vec<T> {
    v.iter().map(|s| field_from_string(s)).collect()
}

/// The JSON-serializable mirror of [`Proof`]: every field element is a decimal string rather
/// than `T` directly, since `T` itself carries no `serde` impl. Produced by [`Proof::to_json`]
/// and consumed by [`Proof::from_json`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProofJson {
    d: usize,
    k: Vec<usize>,
    #[serde(rename = "D")]
    output: Vec<RowJson>,
    z: Vec<Vec<String>>,
    sumcheck_proofs: Vec<Vec<Vec<String>>>,
    sumcheck_r: Vec<Vec<String>>,
    q: Vec<Vec<String>>,
    f: Vec<String>,
    r: Vec<String>,
    input_func: Vec<RowJson>,
    add: Vec<Vec<RowJson>>,
    mult: Vec<Vec<RowJson>>,
}

impl<T: PrimeField> Proof<T> {
    pub fn to_json(&self) -> ProofJson {
        ProofJson {
            d: self.d,
            k: self.k.clone(),
            output: expansion_to_json(&self.output),
            z: self.z.iter().map(|v| vec_to_json(v)).collect(),
            sumcheck_proofs: self
                .sumcheck_proofs
                .iter()
                .map(|layer| layer.iter().map(|r| vec_to_json(r)).collect())
                .collect(),
            sumcheck_r: self.sumcheck_r.iter().map(|v| vec_to_json(v)).collect(),
            q: self.q.iter().map(|v| vec_to_json(v)).collect(),
            f: vec_to_json(&self.f),
            r: vec_to_json(&self.r),
            input_func: expansion_to_json(&self.input_func),
            add: self.add.iter().map(|e| expansion_to_json(e)).collect(),
            mult: self.mult.iter().map(|e| expansion_to_json(e)).collect(),
        }
    }

    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.to_json())
    }
}

impl<T: PrimeField + FromStr> Proof<T> {
    pub fn from_json(json: &ProofJson) -> Self {
        Self {
            d: json.d,
            k: json.k.clone(),
            output: expansion_from_json(&json.output),
            z: json.z.iter().map(|v| vec_from_json(v)).collect(),
            sumcheck_proofs: json
                .sumcheck_proofs
                .iter()
                .map(|layer| layer.iter().map(|r| vec_from_json(r)).collect())
                .collect(),
            sumcheck_r: json.sumcheck_r.iter().map(|v| vec_from_json(v)).collect(),
            q: json.q.iter().map(|v| vec_from_json(v)).collect(),
            f: vec_from_json(&json.f),
            r: vec_from_json(&json.r),
            input_func: expansion_from_json(&json.input_func),
            add: json.add.iter().map(|e| expansion_from_json(e)).collect(),
            mult: json.mult.iter().map(|e| expansion_from_json(e)).collect(),
        }
    }

    pub fn from_json_string(s: &str) -> serde_json::Result<Self> {
        let json: ProofJson = serde_json::from_str(s)?;
        Ok(Self::from_json(&json))
    }
}
