use crate::Generator;
use coupon_core::{CouponCode, Result};
use rand::rngs::ThreadRng;
use rand::Rng;

/// Symbols a simple coupon code is built from.
pub const ALPHABET: &[u8; 30] = b"0123456789abcdefghijklmnopqrst";

/// Builds codes by sampling every position independently and uniformly from
/// [`ALPHABET`].
///
/// The random source is not required to be cryptographically secure. Pass a
/// seeded RNG to get a reproducible sequence of codes.
#[derive(Debug, Clone)]
pub struct AlphabetGenerator<R> {
    rng: R,
}

impl AlphabetGenerator<ThreadRng> {
    /// Creates a generator backed by the thread-local RNG.
    pub fn thread_local() -> Self {
        Self::new(rand::rng())
    }
}

impl<R: Rng> AlphabetGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Generator for AlphabetGenerator<R> {
    fn generate(&mut self, length: usize) -> Result<CouponCode> {
        let code: String = (0..length)
            .map(|_| {
                let idx = self.rng.random_range(0..ALPHABET.len());
                ALPHABET[idx] as char
            })
            .collect();
        Ok(CouponCode::from(code))
    }

    fn code_space(&self, length: usize) -> Option<u128> {
        crate::code_space(ALPHABET.len() as u128, length)
    }
}
