use ark_ff::PrimeField;
use sha3::digest::Update;
use sha3::{Digest, Keccak256};
use std::marker::PhantomData;

pub struct Transcript<T: PrimeField> {
    _marker: PhantomData<T>,
    hasher: Keccak256,
}

impl<T: PrimeField> Transcript<T> {
    pub fn new() -> Self {
        Transcript {
            _marker: Default::default(),
            hasher: Keccak256::new(),
        }
    }

    // update current hasher state with new data
    pub fn append(&mut self, data: &[u8]) {
        Update::update(&mut self.hasher, data);
    }

    pub fn append_n(&mut self, data: &[&[u8]]) {
        data.iter().for_each(|f| self.append(*f));
    }

    pub fn sample_challenge(&mut self) -> T {
        // uses the current hasher and generates a field value from it
        let hash_result = self.hasher.clone().finalize();

        // we append this result back into the hasher to always generate a separate random value subsequently even without calling updating externally
        self.append(&hash_result);

        T::from_le_bytes_mod_order(&hash_result)
    }

    // squeeze multiple number of challenges
    pub fn sample_n_challenges(&mut self, n: usize) -> Vec<T> {
        (0..n).map(|_| self.sample_challenge()).collect()
    }
}
