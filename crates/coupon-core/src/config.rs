use crate::error::ConfigError;
use ::config::{Config, File, FileFormat, Map, Source, Value, ValueKind};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Display;
use std::path::Path;
use tracing::warn;

/// File name read when no other configuration path is given.
pub const DEFAULT_CONFIG_FILE: &str = "config.ini";

/// Largest accepted `length`: characters for simple codes, bytes for secure
/// tokens.
pub const MAX_LENGTH: usize = 1024;

pub const ALGORITHM_KEY: &str = "algorithm";
pub const QUANTITY_KEY: &str = "quantity";
pub const LENGTH_KEY: &str = "length";

/// Generation strategy selected by name in the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Characters sampled uniformly from a fixed 30-symbol alphabet.
    Simple,
    /// Bytes from a cryptographic source, base64 encoded.
    Secure,
}

impl Algorithm {
    /// Resolves an algorithm name.
    ///
    /// Only the exact name `simple` selects [`Algorithm::Simple`]. Every
    /// other value, including unknown names, selects [`Algorithm::Secure`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "simple" => Self::Simple,
            "secure" => Self::Secure,
            other => {
                warn!(algorithm = other, "unrecognized algorithm, using secure");
                Self::Secure
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Simple => "simple",
            Algorithm::Secure => "secure",
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated parameters of one generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationConfig {
    algorithm: Algorithm,
    quantity: usize,
    length: usize,
}

impl GenerationConfig {
    /// Creates a configuration, rejecting a `length` outside `1..=MAX_LENGTH`.
    pub fn new(
        algorithm: Algorithm,
        quantity: usize,
        length: usize,
    ) -> Result<Self, ConfigError> {
        if length == 0 {
            return Err(ConfigError::ValueInvalid {
                key: LENGTH_KEY,
                value: length.to_string(),
                reason: "length must be at least 1".to_string(),
            });
        }
        if length > MAX_LENGTH {
            return Err(ConfigError::ValueInvalid {
                key: LENGTH_KEY,
                value: length.to_string(),
                reason: format!("length must be at most {MAX_LENGTH}"),
            });
        }

        Ok(Self {
            algorithm,
            quantity,
            length,
        })
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn quantity(&self) -> usize {
        self.quantity
    }

    /// Characters per code for [`Algorithm::Simple`], raw bytes per token for
    /// [`Algorithm::Secure`].
    pub fn length(&self) -> usize {
        self.length
    }

    /// Reads and validates an INI configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| match source.kind() {
            std::io::ErrorKind::NotFound => ConfigError::NotFound {
                path: path.to_path_buf(),
            },
            _ => ConfigError::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;

        Self::from_ini_str(&contents)
    }

    /// Parses INI text.
    ///
    /// Keys of every section are merged into one namespace, so the section
    /// names themselves are irrelevant. When a key appears in several
    /// sections the last one in the file wins. All keys are checked here, before any
    /// code is generated.
    pub fn from_ini_str(contents: &str) -> Result<Self, ConfigError> {
        let raw = Config::builder()
            .add_source(File::from_str(contents, FileFormat::Ini))
            .build()?;
        let entries = flatten(Source::collect(&raw)?)?;

        let algorithm = Algorithm::from_name(require(&entries, ALGORITHM_KEY)?);
        let quantity = parse_count(&entries, QUANTITY_KEY)?;
        let length = parse_count(&entries, LENGTH_KEY)?;

        Self::new(algorithm, quantity, length)
    }
}

// Walks sections in file order; a key repeated in a later section wins.
fn flatten(entries: Map<String, Value>) -> Result<HashMap<String, String>, ConfigError> {
    let mut flat = HashMap::new();
    for (name, value) in entries {
        match value.kind {
            ValueKind::Table(table) => {
                for (key, value) in table {
                    flat.insert(key.to_lowercase(), value.into_string()?);
                }
            }
            _ => {
                flat.insert(name.to_lowercase(), value.into_string()?);
            }
        }
    }

    Ok(flat)
}

fn require<'a>(
    entries: &'a HashMap<String, String>,
    key: &'static str,
) -> Result<&'a str, ConfigError> {
    entries
        .get(key)
        .map(String::as_str)
        .ok_or(ConfigError::KeyMissing(key))
}

fn parse_count(
    entries: &HashMap<String, String>,
    key: &'static str,
) -> Result<usize, ConfigError> {
    let value = require(entries, key)?;
    value
        .trim()
        .parse::<usize>()
        .map_err(|e| ConfigError::ValueInvalid {
            key,
            value: value.to_string(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_simple_config() {
        let config = GenerationConfig::from_ini_str(
            "[coupons]\nalgorithm = simple\nquantity = 5\nlength = 4\n",
        )
        .unwrap();

        assert_eq!(config.algorithm(), Algorithm::Simple);
        assert_eq!(config.quantity(), 5);
        assert_eq!(config.length(), 4);
    }

    #[test]
    fn merges_keys_across_sections() {
        let config = GenerationConfig::from_ini_str(
            "[strategy]\nalgorithm = secure\n\n[size]\nquantity = 3\nlength = 8\n",
        )
        .unwrap();

        assert_eq!(config.algorithm(), Algorithm::Secure);
        assert_eq!(config.quantity(), 3);
        assert_eq!(config.length(), 8);
    }

    #[test]
    fn unknown_algorithm_falls_back_to_secure() {
        let config =
            GenerationConfig::from_ini_str("[c]\nalgorithm = md5\nquantity = 1\nlength = 1\n")
                .unwrap();
        assert_eq!(config.algorithm(), Algorithm::Secure);
    }

    #[test]
    fn algorithm_name_is_case_sensitive() {
        assert_eq!(Algorithm::from_name("simple"), Algorithm::Simple);
        assert_eq!(Algorithm::from_name("Simple"), Algorithm::Secure);
        assert_eq!(Algorithm::from_name(""), Algorithm::Secure);
    }

    #[test]
    fn zero_quantity_is_valid() {
        let config =
            GenerationConfig::from_ini_str("[c]\nalgorithm = simple\nquantity = 0\nlength = 4\n")
                .unwrap();
        assert_eq!(config.quantity(), 0);
    }

    #[test]
    fn missing_key_is_reported() {
        let err = GenerationConfig::from_ini_str("[c]\nalgorithm = simple\nlength = 4\n")
            .unwrap_err();
        assert!(matches!(err, ConfigError::KeyMissing(QUANTITY_KEY)));

        let err = GenerationConfig::from_ini_str("[c]\nquantity = 1\nlength = 4\n").unwrap_err();
        assert!(matches!(err, ConfigError::KeyMissing(ALGORITHM_KEY)));

        let err = GenerationConfig::from_ini_str("[c]\nalgorithm = simple\nquantity = 1\n")
            .unwrap_err();
        assert!(matches!(err, ConfigError::KeyMissing(LENGTH_KEY)));
    }

    #[test]
    fn non_numeric_value_is_invalid() {
        let err = GenerationConfig::from_ini_str(
            "[c]\nalgorithm = simple\nquantity = five\nlength = 4\n",
        )
        .unwrap_err();

        match err {
            ConfigError::ValueInvalid { key, value, .. } => {
                assert_eq!(key, QUANTITY_KEY);
                assert_eq!(value, "five");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn negative_value_is_invalid() {
        let err = GenerationConfig::from_ini_str(
            "[c]\nalgorithm = simple\nquantity = 2\nlength = -4\n",
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::ValueInvalid { key: LENGTH_KEY, .. }));
    }

    #[test]
    fn zero_length_is_invalid() {
        let err = GenerationConfig::from_ini_str(
            "[c]\nalgorithm = simple\nquantity = 2\nlength = 0\n",
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::ValueInvalid { key: LENGTH_KEY, .. }));

        assert!(GenerationConfig::new(Algorithm::Secure, 1, 0).is_err());
    }

    #[test]
    fn oversized_length_is_invalid() {
        let err = GenerationConfig::from_ini_str(
            "[c]\nalgorithm = secure\nquantity = 1\nlength = 1000000000000000\n",
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::ValueInvalid { key: LENGTH_KEY, .. }));

        assert!(GenerationConfig::new(Algorithm::Simple, 1, MAX_LENGTH).is_ok());
        assert!(GenerationConfig::new(Algorithm::Simple, 1, MAX_LENGTH + 1).is_err());
    }

    #[test]
    fn later_section_overrides_earlier() {
        let config = GenerationConfig::from_ini_str(
            "[defaults]\nalgorithm = simple\nquantity = 2\nlength = 4\n[override]\nquantity = 3\n",
        )
        .unwrap();
        assert_eq!(config.quantity(), 3);
        assert_eq!(config.length(), 4);

        // Section names are not sorted: "a" comes after "z" in the file.
        let config = GenerationConfig::from_ini_str(
            "[z]\nalgorithm = simple\nquantity = 7\nlength = 2\n[a]\nalgorithm = secure\n",
        )
        .unwrap();
        assert_eq!(config.algorithm(), Algorithm::Secure);
        assert_eq!(config.quantity(), 7);
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);

        let err = GenerationConfig::load(&path).unwrap_err();
        match err {
            ConfigError::NotFound { path: reported } => assert_eq!(reported, path),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[coupons]").unwrap();
        writeln!(file, "algorithm = secure").unwrap();
        writeln!(file, "quantity = 3").unwrap();
        writeln!(file, "length = 8").unwrap();

        let config = GenerationConfig::load(file.path()).unwrap();
        assert_eq!(
            config,
            GenerationConfig::new(Algorithm::Secure, 3, 8).unwrap()
        );
    }

    #[test]
    fn algorithm_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Algorithm::Simple).unwrap(),
            "\"simple\""
        );
        assert_eq!(Algorithm::Secure.to_string(), "secure");
    }
}
