pub mod gkr_protocol;
pub mod prover;
pub mod utils;
pub mod verifier;
