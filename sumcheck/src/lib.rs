pub mod prover;
pub mod sumcheck_protocol;
pub mod verifier;
