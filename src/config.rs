use std::env;
use std::path::PathBuf;

use anyhow::Result;

use crate::analysis::market::AnalysisConfig;

/// Central configuration loaded from environment variables.
///
/// Every value has a default, so an empty environment is valid. The .env
/// file is loaded at startup via dotenvy.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Market classification thresholds
    pub analysis: AnalysisConfig,
    /// Where CSV exports go when `--out` is not given (SEOKING_OUTPUT_DIR)
    pub output_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup.
    ///
    /// Tests pass a closure over a map instead of mutating the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = AnalysisConfig::default();
        let number = |key: &str, default: usize| -> Result<usize> {
            match lookup(key) {
                Some(raw) if !raw.trim().is_empty() => raw.trim().parse::<usize>().map_err(|_| {
                    anyhow::anyhow!("{key} must be a non-negative whole number, got '{raw}'")
                }),
                _ => Ok(default),
            }
        };

        let analysis = AnalysisConfig {
            common_threshold_high: number("SEOKING_THRESHOLD_HIGH", defaults.common_threshold_high)?,
            common_threshold_low: number("SEOKING_THRESHOLD_LOW", defaults.common_threshold_low)?,
            big_data_limit: number("SEOKING_BIG_DATA_LIMIT", defaults.big_data_limit)?,
        };

        let config = Self {
            analysis,
            output_dir: lookup("SEOKING_OUTPUT_DIR")
                .filter(|dir| !dir.trim().is_empty())
                .map(PathBuf::from),
        };
        config.validate()?;
        Ok(config)
    }

    /// Thresholds below 2 would make single-brand keywords "market" keywords.
    fn validate(&self) -> Result<()> {
        let a = &self.analysis;
        if a.common_threshold_low < 2 {
            anyhow::bail!(
                "SEOKING_THRESHOLD_LOW must be at least 2, got {}",
                a.common_threshold_low
            );
        }
        if a.common_threshold_high < a.common_threshold_low {
            anyhow::bail!(
                "SEOKING_THRESHOLD_HIGH ({}) must not be below SEOKING_THRESHOLD_LOW ({})",
                a.common_threshold_high,
                a.common_threshold_low
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = load_from(&[]).unwrap();
        assert_eq!(config.analysis, AnalysisConfig::default());
        assert_eq!(config.output_dir, None);
    }

    #[test]
    fn test_overrides() {
        let config = load_from(&[
            ("SEOKING_THRESHOLD_HIGH", "5"),
            ("SEOKING_THRESHOLD_LOW", "3"),
            ("SEOKING_BIG_DATA_LIMIT", " 1000 "),
            ("SEOKING_OUTPUT_DIR", "/tmp/exports"),
        ])
        .unwrap();
        assert_eq!(config.analysis.common_threshold_high, 5);
        assert_eq!(config.analysis.common_threshold_low, 3);
        assert_eq!(config.analysis.big_data_limit, 1000);
        assert_eq!(config.output_dir, Some(PathBuf::from("/tmp/exports")));
    }

    #[test]
    fn test_rejects_unparsable_number() {
        let err = load_from(&[("SEOKING_BIG_DATA_LIMIT", "lots")]).unwrap_err();
        assert!(err.to_string().contains("SEOKING_BIG_DATA_LIMIT"));
    }

    #[test]
    fn test_rejects_inverted_thresholds() {
        assert!(load_from(&[("SEOKING_THRESHOLD_HIGH", "2"), ("SEOKING_THRESHOLD_LOW", "3")]).is_err());
        assert!(load_from(&[("SEOKING_THRESHOLD_LOW", "1")]).is_err());
    }
}
