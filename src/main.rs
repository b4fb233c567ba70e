use arithmetic_circuit::circuit::Circuit;
use arithmetic_circuit::gate::{Gate, Operation};
use clap::Parser;
use fiat_shamir::transcript::Transcript;
use gkr::prover::GKRProver;

use ark_bn254::Fq;
use std::fs;
use std::path::PathBuf;

/// Build the circuit, run the GKR prover over it, and write the resulting proof as JSON.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Where to write the JSON proof.
    #[arg(short, long, default_value = "proof.json")]
    out: PathBuf,
}

/// The depth-3 demo circuit: a 4-wide input squared/cross-multiplied into a 4-wide middle
/// layer, then paired down into a 2-wide output. Input [3, 2, 3, 1] produces output [36, 6].
fn demo_circuit() -> (Circuit<Fq>, Vec<Fq>) {
    let circuit = Circuit::new(
        vec![
            vec![
                Gate::new(0, 0, Operation::Mul),
                Gate::new(1, 1, Operation::Mul),
                Gate::new(1, 2, Operation::Mul),
                Gate::new(3, 3, Operation::Mul),
            ],
            vec![Gate::new(0, 1, Operation::Mul), Gate::new(2, 3, Operation::Mul)],
        ],
        vec![4, 4, 2],
    );
    let inputs = vec![Fq::from(3), Fq::from(2), Fq::from(3), Fq::from(1)];
    (circuit, inputs)
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let (circuit, inputs) = demo_circuit();
    let mut transcript = Transcript::new();
    let proof = GKRProver::prove(&circuit, &inputs, &mut transcript);

    let json = proof
        .pad()
        .to_json_string()
        .expect("proof serializes to JSON");
    fs::write(&args.out, json).unwrap_or_else(|e| panic!("writing {:?}: {e}", args.out));

    log::info!("proof written to {:?}", args.out);
}
