use crate::Generator;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use coupon_core::{CouponCode, GeneratorError, Result};
use rand::rngs::OsRng;
use rand::{TryCryptoRng, TryRngCore};

/// Builds tokens from cryptographically strong random bytes, encoded as
/// padded standard base64.
///
/// The `length` handed to [`Generator::generate`] is a byte count. The token
/// itself is `ceil(length / 3) * 4` characters long, see
/// [`SecureGenerator::encoded_len`].
#[derive(Debug, Clone)]
pub struct SecureGenerator<R> {
    rng: R,
}

impl SecureGenerator<OsRng> {
    /// Creates a generator reading from the operating system entropy source.
    pub fn os() -> Self {
        Self::new(OsRng)
    }
}

impl<R: TryCryptoRng> SecureGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Number of characters in a token built from `length` random bytes.
    pub fn encoded_len(length: usize) -> usize {
        length.div_ceil(3) * 4
    }
}

impl<R: TryCryptoRng> Generator for SecureGenerator<R> {
    fn generate(&mut self, length: usize) -> Result<CouponCode> {
        let mut bytes = vec![0_u8; length];
        self.rng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| GeneratorError::Entropy(e.to_string()))?;
        Ok(CouponCode::from(STANDARD.encode(&bytes)))
    }

    fn code_space(&self, length: usize) -> Option<u128> {
        crate::code_space(256, length)
    }
}
