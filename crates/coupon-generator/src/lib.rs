//! Coupon code generation strategies.
//!
//! A [`Generator`] produces one candidate code at a time. The
//! [`UniqueCollector`] drives a generator until it has the requested number of
//! distinct codes, and [`Strategy`] selects the generator for an
//! [`Algorithm`](coupon_core::Algorithm).

pub mod alphabet;
pub mod collector;
pub mod secure;
pub mod strategy;

pub use alphabet::{AlphabetGenerator, ALPHABET};
pub use collector::{UniqueCollector, DEFAULT_MAX_ATTEMPTS_PER_CODE};
pub use secure::SecureGenerator;
pub use strategy::{generate, Strategy};

use coupon_core::{CouponCode, Result};

/// Trait for generating single coupon code candidates.
///
/// Implementations are pure generators: they make no uniqueness promise,
/// that is the job of [`UniqueCollector`].
pub trait Generator {
    /// Produces one candidate code for the requested `length`.
    fn generate(&mut self, length: usize) -> Result<CouponCode>;

    /// Number of distinct codes this generator can produce for `length`.
    ///
    /// Returns `None` when the count does not fit in a `u128`.
    fn code_space(&self, length: usize) -> Option<u128>;
}

pub(crate) fn code_space(radix: u128, length: usize) -> Option<u128> {
    u32::try_from(length)
        .ok()
        .and_then(|exponent| radix.checked_pow(exponent))
}
