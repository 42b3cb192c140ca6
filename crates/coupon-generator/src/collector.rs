use crate::Generator;
use coupon_core::{CouponSet, GeneratorError, Result, MAX_LENGTH};
use tracing::{debug, trace};
use typed_builder::TypedBuilder;

/// Default cap on generator calls per requested code.
pub const DEFAULT_MAX_ATTEMPTS_PER_CODE: usize = 64;

// Upper bound for the up-front allocation; larger sets grow on demand.
const MAX_PREALLOCATED: usize = 1 << 16;

/// Drives a [`Generator`] until it has produced the requested number of
/// distinct codes.
///
/// Duplicates are rejected as they appear, the set is never generated in bulk
/// and deduplicated afterwards. A request that cannot fit into the generator's
/// code space fails before the first attempt; a generator that keeps repeating
/// itself fails once `quantity * max_attempts_per_code` attempts are spent.
/// Lengths above [`MAX_LENGTH`] are refused before anything is allocated.
#[derive(Debug, Clone, Copy, TypedBuilder)]
pub struct UniqueCollector {
    #[builder(default = DEFAULT_MAX_ATTEMPTS_PER_CODE)]
    max_attempts_per_code: usize,
}

impl Default for UniqueCollector {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl UniqueCollector {
    pub fn max_attempts_per_code(&self) -> usize {
        self.max_attempts_per_code
    }

    /// Collects `quantity` distinct codes of `length` in generation order.
    pub fn collect<G: Generator + ?Sized>(
        &self,
        generator: &mut G,
        quantity: usize,
        length: usize,
    ) -> Result<CouponSet> {
        let mut codes = CouponSet::with_capacity(quantity.min(MAX_PREALLOCATED));
        if quantity == 0 {
            return Ok(codes);
        }
        if length > MAX_LENGTH {
            return Err(GeneratorError::LengthTooLarge {
                length,
                max: MAX_LENGTH,
            });
        }

        let capacity = generator.code_space(length);
        if capacity.is_some_and(|capacity| capacity < quantity as u128) {
            return Err(GeneratorError::CodeSpaceExhausted {
                quantity,
                length,
                capacity,
                attempts: 0,
            });
        }

        let max_attempts = quantity.saturating_mul(self.max_attempts_per_code);
        let mut attempts = 0_usize;
        while codes.len() < quantity {
            if attempts >= max_attempts {
                return Err(GeneratorError::CodeSpaceExhausted {
                    quantity,
                    length,
                    capacity,
                    attempts,
                });
            }
            attempts += 1;

            let code = generator.generate(length)?;
            if !codes.insert(code) {
                trace!(attempts, collected = codes.len(), "rejected duplicate code");
            }
        }

        debug!(quantity, length, attempts, "collected unique coupon codes");
        Ok(codes)
    }
}
