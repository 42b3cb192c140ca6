//! Command line front end of the coupon generator.
//!
//! Loads a [`GenerationConfig`] from an INI file, runs the selected strategy
//! and writes one code per line. Core types are re-exported from
//! `coupon_core`.

use anyhow::Context;
use std::io::Write;
use std::path::Path;
use tracing::info;

pub use coupon_core::{Algorithm, CouponCode, CouponSet, GenerationConfig, DEFAULT_CONFIG_FILE};

/// Generates the coupons described by the configuration at `config_path` and
/// writes them to `out`.
///
/// The configuration is fully validated before any code is generated.
/// Returns the number of codes written.
pub fn run<W: Write>(config_path: impl AsRef<Path>, out: W) -> anyhow::Result<usize> {
    let config_path = config_path.as_ref();
    let config = GenerationConfig::load(config_path)
        .with_context(|| format!("failed to load {}", config_path.display()))?;

    let codes = coupon_generator::generate(&config).context("failed to generate coupon codes")?;
    write_codes(&codes, out).context("failed to write coupon codes")?;

    info!(count = codes.len(), "wrote coupon codes");
    Ok(codes.len())
}

/// Writes `codes` newline separated, in insertion order.
pub fn write_codes<W: Write>(codes: &CouponSet, mut out: W) -> std::io::Result<()> {
    for code in codes {
        writeln!(out, "{code}")?;
    }
    out.flush()
}
