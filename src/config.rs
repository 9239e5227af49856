//! Harness configuration.
//!
//! Defaults are the compiled-in values the binaries run with; a JSON file can
//! override any subset of fields and CLI flags override the file.

use crate::error::HarnessError;
use crate::primitive::Category;
use clap::Args;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_ITERATIONS: u64 = 10_000_000;
pub const DEFAULT_ARRAY_SIZE: usize = 1000;
pub const DEFAULT_SEED: u64 = 12345;
pub const DEFAULT_GENERATED_VECTORS: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HarnessConfig {
    /// Base repetition count, divided per category.
    pub iterations: u64,
    /// Length of the arrays the array specimens are profiled on.
    pub array_size: usize,
    /// Seed for generated vectors and the random benchmark array.
    pub seed: u64,
    /// Generated vectors appended to each specimen's curated ones.
    pub generated_vectors: usize,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            array_size: DEFAULT_ARRAY_SIZE,
            seed: DEFAULT_SEED,
            generated_vectors: DEFAULT_GENERATED_VECTORS,
        }
    }
}

impl HarnessConfig {
    pub fn load(path: &Path) -> Result<Self, HarnessError> {
        let raw = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), HarnessError> {
        if i32::try_from(self.array_size).is_err() {
            return Err(HarnessError::Config(format!(
                "array_size {} does not fit the i32 element range",
                self.array_size
            )));
        }
        Ok(())
    }

    /// Iterations for one specimen: cheaper categories run more.
    pub fn iterations_for(&self, category: Category) -> u64 {
        self.iterations / category.iteration_divisor()
    }
}

/// Flags shared by the binaries.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// JSON file overriding the compiled-in defaults
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Base iteration count (divided per category)
    #[arg(long)]
    pub iterations: Option<u64>,

    /// Length of the benchmark arrays
    #[arg(long)]
    pub array_size: Option<usize>,

    /// Seed for generated vectors
    #[arg(long)]
    pub seed: Option<u64>,

    /// Generated vectors per specimen
    #[arg(long)]
    pub generated: Option<usize>,
}

impl ConfigArgs {
    /// Defaults, then the config file, then individual flags.
    pub fn resolve(&self) -> Result<HarnessConfig, HarnessError> {
        let mut config = match &self.config {
            Some(path) => HarnessConfig::load(path)?,
            None => HarnessConfig::default(),
        };
        if let Some(iterations) = self.iterations {
            config.iterations = iterations;
        }
        if let Some(array_size) = self.array_size {
            config.array_size = array_size;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(generated) = self.generated {
            config.generated_vectors = generated;
        }
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_compiled_in_constants() {
        let config = HarnessConfig::default();
        assert_eq!(config.iterations, 10_000_000);
        assert_eq!(config.array_size, 1000);
        assert_eq!(config.iterations_for(Category::NumberReversal), 10_000_000);
        assert_eq!(config.iterations_for(Category::StringReversal), 1_000_000);
        assert_eq!(config.iterations_for(Category::ArrayReversal), 100_000);
        assert_eq!(config.iterations_for(Category::SecondLargest), 1_000_000);
    }

    #[test]
    fn partial_json_keeps_remaining_defaults() {
        let config: HarnessConfig =
            serde_json::from_str(r#"{"iterations": 500, "seed": 7}"#).unwrap();
        assert_eq!(config.iterations, 500);
        assert_eq!(config.seed, 7);
        assert_eq!(config.array_size, DEFAULT_ARRAY_SIZE);
        assert_eq!(config.iterations_for(Category::ArrayReversal), 5);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let parsed = serde_json::from_str::<HarnessConfig>(r#"{"iteratons": 5}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn flags_override_defaults() {
        let args = ConfigArgs {
            iterations: Some(1000),
            generated: Some(0),
            ..ConfigArgs::default()
        };
        let config = args.resolve().unwrap();
        assert_eq!(config.iterations, 1000);
        assert_eq!(config.generated_vectors, 0);
        assert_eq!(config.seed, DEFAULT_SEED);
    }

    #[test]
    fn missing_config_file_is_an_io_error() {
        let args = ConfigArgs {
            config: Some(PathBuf::from("/nonexistent/harness.json")),
            ..ConfigArgs::default()
        };
        assert!(matches!(args.resolve(), Err(HarnessError::Io(_))));
    }

    #[test]
    fn oversized_arrays_fail_validation() {
        let config = HarnessConfig {
            array_size: usize::MAX,
            ..HarnessConfig::default()
        };
        assert!(matches!(config.validate(), Err(HarnessError::Config(_))));
    }
}
