use crate::error::{BioscopeError, Result};
use crate::walker::DecodePolicy;
use std::path::PathBuf;

pub const ENV_DECODE_POLICY: &str = "BIOSCOPE_DECODE_POLICY";
pub const ENV_FILTERS: &str = "BIOSCOPE_FILTERS";
pub const ENV_BALANCE_SEED: &str = "BIOSCOPE_BALANCE_SEED";
pub const ENV_LOG_DIR: &str = "BIOSCOPE_LOG_DIR";

/// Per-run settings. The command line only carries the input path, so
/// everything else comes from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub decode_policy: DecodePolicy,
    /// JSON filter file; enables the labeled dataset artifact.
    pub filters: Option<PathBuf>,
    /// Enables balancing of the labeled dataset.
    pub balance_seed: Option<u64>,
    pub log_dir: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            decode_policy: DecodePolicy::Lossy,
            filters: None,
            balance_seed: None,
            log_dir: crate::logging::default_log_dir(),
        }
    }
}

impl PipelineConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(policy) = get(ENV_DECODE_POLICY) {
            config.decode_policy = match policy.trim().to_ascii_lowercase().as_str() {
                "lossy" => DecodePolicy::Lossy,
                "fatal" => DecodePolicy::Fatal,
                other => {
                    return Err(BioscopeError::Config(format!(
                        "{} must be 'lossy' or 'fatal', got '{}'",
                        ENV_DECODE_POLICY, other
                    )));
                }
            };
        }

        config.filters = get(ENV_FILTERS).map(PathBuf::from);

        if let Some(seed) = get(ENV_BALANCE_SEED) {
            let seed = seed.trim().parse::<u64>().map_err(|e| {
                BioscopeError::Config(format!("{} is not a valid u64: {}", ENV_BALANCE_SEED, e))
            })?;
            config.balance_seed = Some(seed);
        }

        if let Some(dir) = get(ENV_LOG_DIR) {
            config.log_dir = PathBuf::from(dir);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = PipelineConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.decode_policy, DecodePolicy::Lossy);
        assert_eq!(config.filters, None);
        assert_eq!(config.balance_seed, None);
    }

    #[test]
    fn reads_all_keys() {
        let config = PipelineConfig::from_lookup(lookup(&[
            (ENV_DECODE_POLICY, "FATAL"),
            (ENV_FILTERS, "filters.json"),
            (ENV_BALANCE_SEED, "17"),
            (ENV_LOG_DIR, "/tmp/bioscope-logs"),
        ]))
        .unwrap();
        assert_eq!(config.decode_policy, DecodePolicy::Fatal);
        assert_eq!(config.filters, Some(PathBuf::from("filters.json")));
        assert_eq!(config.balance_seed, Some(17));
        assert_eq!(config.log_dir, PathBuf::from("/tmp/bioscope-logs"));
    }

    #[test]
    fn invalid_values_are_config_errors() {
        let bad_policy = PipelineConfig::from_lookup(lookup(&[(ENV_DECODE_POLICY, "skip")]));
        assert!(matches!(bad_policy, Err(BioscopeError::Config(_))));

        let bad_seed = PipelineConfig::from_lookup(lookup(&[(ENV_BALANCE_SEED, "-1")]));
        assert!(matches!(bad_seed, Err(BioscopeError::Config(_))));
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = PipelineConfig::from_lookup(lookup(&[(ENV_FILTERS, "  ")])).unwrap();
        assert_eq!(config.filters, None);
    }
}
