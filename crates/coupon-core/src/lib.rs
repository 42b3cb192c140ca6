//! Core types for the coupon generator.
//!
//! This crate provides the coupon code and set types, the generation
//! configuration with its INI loader, and the shared error types.

pub mod code;
pub mod config;
pub mod error;

pub use crate::code::{CouponCode, CouponSet};
pub use crate::config::{Algorithm, GenerationConfig, DEFAULT_CONFIG_FILE, MAX_LENGTH};
pub use crate::error::{ConfigError, GeneratorError, Result};
