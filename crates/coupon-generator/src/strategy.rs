use crate::{AlphabetGenerator, SecureGenerator, UniqueCollector};
use coupon_core::{Algorithm, CouponSet, GenerationConfig, Result};
use rand::rngs::{OsRng, ThreadRng};
use rand::{Rng, TryCryptoRng};
use tracing::info;

/// The generation strategy of a run.
///
/// `R` feeds the alphabet strategy and `S` the secure one; only the variant's
/// own source is ever read.
#[derive(Debug, Clone)]
pub enum Strategy<R = ThreadRng, S = OsRng> {
    Alphabet(AlphabetGenerator<R>),
    Secure(SecureGenerator<S>),
}

impl Strategy<ThreadRng, OsRng> {
    /// Selects a strategy backed by the thread-local RNG and the operating
    /// system entropy source.
    pub fn system(algorithm: Algorithm) -> Self {
        Self::from_algorithm(algorithm, rand::rng(), OsRng)
    }
}

impl<R: Rng, S: TryCryptoRng> Strategy<R, S> {
    pub fn from_algorithm(algorithm: Algorithm, rng: R, secure_rng: S) -> Self {
        match algorithm {
            Algorithm::Simple => Strategy::Alphabet(AlphabetGenerator::new(rng)),
            Algorithm::Secure => Strategy::Secure(SecureGenerator::new(secure_rng)),
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        match self {
            Strategy::Alphabet(_) => Algorithm::Simple,
            Strategy::Secure(_) => Algorithm::Secure,
        }
    }

    /// Generates `quantity` distinct codes with the default [`UniqueCollector`].
    pub fn generate(&mut self, quantity: usize, length: usize) -> Result<CouponSet> {
        self.generate_with(&UniqueCollector::default(), quantity, length)
    }

    pub fn generate_with(
        &mut self,
        collector: &UniqueCollector,
        quantity: usize,
        length: usize,
    ) -> Result<CouponSet> {
        match self {
            Strategy::Alphabet(generator) => collector.collect(generator, quantity, length),
            Strategy::Secure(generator) => collector.collect(generator, quantity, length),
        }
    }
}

/// Runs the strategy selected by `config` on the system random sources.
pub fn generate(config: &GenerationConfig) -> Result<CouponSet> {
    info!(
        algorithm = %config.algorithm(),
        quantity = config.quantity(),
        length = config.length(),
        "generating coupon codes"
    );

    Strategy::system(config.algorithm()).generate(config.quantity(), config.length())
}
