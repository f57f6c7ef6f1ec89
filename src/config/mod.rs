//! Configuration with YAML schema and validation.
//!
//! Mistakes are caught in three layers:
//! - serde rejects unknown keys and wrong types
//! - `validator` enforces per-field ranges
//! - [`VizConfig::validate_semantic`] checks cross-field constraints
//!
//! ```yaml
//! schema_version: "1.0"
//! playback:
//!   interval_ms: 300
//!   autoplay: true
//! output:
//!   format: json
//! limits:
//!   bubble:
//!     min_len: 2
//!     max_len: 10
//!     min_value: 1
//!     max_value: 50
//! ```

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::algorithms::Algorithm;
use crate::error::{VizError, VizResult};
use crate::input::InputLimits;

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct VizConfig {
    /// Schema version for forward compatibility.
    #[validate(length(min = 1))]
    #[serde(default = "default_schema_version")]
    pub schema_version: String,

    /// Animation settings.
    #[validate(nested)]
    #[serde(default)]
    pub playback: PlaybackConfig,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,

    /// Per-algorithm input limit overrides.
    #[serde(default)]
    pub limits: BTreeMap<Algorithm, InputLimits>,
}

fn default_schema_version() -> String {
    "1.0".to_string()
}

impl Default for VizConfig {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            playback: PlaybackConfig::default(),
            output: OutputConfig::default(),
            limits: BTreeMap::new(),
        }
    }
}

impl VizConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be read
    /// - YAML parsing fails
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> VizResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml(&content)?;
        tracing::info!(path = %path.display(), overrides = config.limits.len(), "loaded configuration");
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> VizResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        config.validate_semantic()?;
        Ok(config)
    }

    /// Serialize to YAML.
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails.
    pub fn to_yaml(&self) -> VizResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Create a builder.
    #[must_use]
    pub fn builder() -> VizConfigBuilder {
        VizConfigBuilder::default()
    }

    /// Constraints that span fields or live inside the limits map.
    fn validate_semantic(&self) -> VizResult<()> {
        if self.schema_version.split('.').next() != Some("1") {
            return Err(VizError::config(format!(
                "unsupported schema_version {}",
                self.schema_version
            )));
        }
        for (algorithm, limits) in &self.limits {
            limits.validate()?;
            limits
                .check_consistent()
                .map_err(|e| VizError::config(format!("limits.{algorithm}: {e}")))?;
        }
        Ok(())
    }

    /// Effective input limits for `algorithm`.
    #[must_use]
    pub fn limits_for(&self, algorithm: Algorithm) -> InputLimits {
        self.limits
            .get(&algorithm)
            .copied()
            .unwrap_or_else(|| InputLimits::for_algorithm(algorithm))
    }
}

/// Builder for programmatic construction.
#[derive(Debug, Default)]
pub struct VizConfigBuilder {
    interval_ms: Option<u64>,
    autoplay: Option<bool>,
    format: Option<OutputFormat>,
    limits: BTreeMap<Algorithm, InputLimits>,
}

impl VizConfigBuilder {
    /// Set the animation interval in milliseconds.
    #[must_use]
    pub const fn interval_ms(mut self, interval_ms: u64) -> Self {
        self.interval_ms = Some(interval_ms);
        self
    }

    /// Start playing as soon as steps are generated.
    #[must_use]
    pub const fn autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = Some(autoplay);
        self
    }

    /// Set the output format.
    #[must_use]
    pub const fn format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Override input limits for one algorithm.
    #[must_use]
    pub fn limits(mut self, algorithm: Algorithm, limits: InputLimits) -> Self {
        self.limits.insert(algorithm, limits);
        self
    }

    /// Build the configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the result fails validation.
    pub fn build(self) -> VizResult<VizConfig> {
        let mut config = VizConfig::default();
        if let Some(interval_ms) = self.interval_ms {
            config.playback.interval_ms = interval_ms;
        }
        if let Some(autoplay) = self.autoplay {
            config.playback.autoplay = autoplay;
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
        config.limits = self.limits;

        config.validate()?;
        config.validate_semantic()?;
        Ok(config)
    }
}

/// Animation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct PlaybackConfig {
    /// Time between frames while playing.
    #[validate(range(min = 50, max = 5000))]
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
    /// Start playing immediately. `run` then prints frames live at
    /// `interval_ms` instead of all at once.
    #[serde(default)]
    pub autoplay: bool,
}

const fn default_interval_ms() -> u64 {
    500
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            autoplay: false,
        }
    }
}

impl PlaybackConfig {
    /// Interval as a `Duration`.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable frames.
    #[default]
    Text,
    /// The step sequence as JSON.
    Json,
}

/// Output settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Default format when the command line does not choose one.
    #[serde(default)]
    pub format: OutputFormat,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_defaults() {
        let config = VizConfig::default();

        assert_eq!(config.schema_version, "1.0");
        assert_eq!(config.playback.interval_ms, 500);
        assert!(!config.playback.autoplay);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.limits.is_empty());
    }

    #[test]
    fn test_config_builder() {
        let config = VizConfig::builder()
            .interval_ms(250)
            .autoplay(true)
            .format(OutputFormat::Json)
            .limits(Algorithm::Bubble, InputLimits::new(2, 8, 1, 50))
            .build()
            .expect("valid");

        assert_eq!(config.playback.interval(), Duration::from_millis(250));
        assert!(config.playback.autoplay);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.limits_for(Algorithm::Bubble).max_len, 8);
    }

    #[test]
    fn test_config_builder_rejects_bad_interval() {
        assert!(VizConfig::builder().interval_ms(10).build().is_err());
    }

    #[test]
    fn test_config_yaml_parse() {
        let yaml = r"
playback:
  interval_ms: 300
  autoplay: true
output:
  format: json
limits:
  radix:
    min_len: 2
    max_len: 10
    min_value: 100
    max_value: 999
";
        let config = VizConfig::from_yaml(yaml).expect("valid yaml");
        assert_eq!(config.playback.interval_ms, 300);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.limits_for(Algorithm::Radix).min_value, 100);
        assert_eq!(
            config.limits_for(Algorithm::Merge),
            InputLimits::for_algorithm(Algorithm::Merge)
        );
    }

    #[test]
    fn test_config_empty_yaml_uses_defaults() {
        let config = VizConfig::from_yaml("{}").expect("valid yaml");
        assert_eq!(config, VizConfig::default());
    }

    #[test]
    fn test_config_rejects_unknown_fields() {
        let yaml = r"
playback:
  interval_ms: 300
  speed: fast
";
        assert!(matches!(VizConfig::from_yaml(yaml), Err(VizError::YamlParse(_))));
    }

    #[test]
    fn test_config_rejects_unknown_algorithm() {
        let yaml = r"
limits:
  bogo:
    min_len: 2
    max_len: 10
    min_value: 1
    max_value: 9
";
        assert!(VizConfig::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_config_validation_interval_range() {
        let yaml = r"
playback:
  interval_ms: 9000
";
        assert!(matches!(VizConfig::from_yaml(yaml), Err(VizError::Validation(_))));
    }

    #[test]
    fn test_config_validation_inverted_limits() {
        let yaml = r"
limits:
  merge:
    min_len: 10
    max_len: 2
    min_value: 1
    max_value: 100
";
        let err = VizConfig::from_yaml(yaml).expect_err("inverted limits");
        assert!(err.to_string().contains("limits.merge"));
    }

    #[test]
    fn test_config_validation_limit_ranges() {
        let yaml = r"
limits:
  quick:
    min_len: 2
    max_len: 500
    min_value: 1
    max_value: 100
";
        assert!(matches!(VizConfig::from_yaml(yaml), Err(VizError::Validation(_))));
    }

    #[test]
    fn test_config_rejects_unbounded_values() {
        let yaml = r"
limits:
  bucket:
    min_len: 2
    max_len: 20
    min_value: -9223372036854775808
    max_value: 9223372036854775807
";
        assert!(matches!(VizConfig::from_yaml(yaml), Err(VizError::Validation(_))));
    }

    #[test]
    fn test_config_accepts_widest_bounds() {
        let yaml = r"
limits:
  bucket:
    min_len: 2
    max_len: 20
    min_value: -1000000
    max_value: 1000000
";
        let config = VizConfig::from_yaml(yaml).expect("widest bounds");
        let limits = config.limits_for(Algorithm::Bucket);
        let values = [1_000_000, -1_000_000, 0, 17, -999_999];
        assert!(limits.check(&values).is_ok());
        let steps = Algorithm::Bucket
            .steps(&crate::input::elements_from_values(&values), None)
            .expect("bucket steps");
        assert_eq!(
            steps.last().expect("steps").values(),
            vec![-1_000_000, -999_999, 0, 17, 1_000_000]
        );
    }

    #[test]
    fn test_config_rejects_future_schema() {
        let yaml = "schema_version: \"2.0\"\n";
        assert!(matches!(VizConfig::from_yaml(yaml), Err(VizError::Config { .. })));
    }

    #[test]
    fn test_config_yaml_roundtrip() {
        let config = VizConfig::builder()
            .interval_ms(800)
            .limits(Algorithm::Heap, InputLimits::new(3, 12, 5, 60))
            .build()
            .expect("valid");
        let yaml = config.to_yaml().expect("serialize");
        let back = VizConfig::from_yaml(&yaml).expect("parse");
        assert_eq!(back, config);
    }

    #[test]
    fn test_config_load_file() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        writeln!(file, "playback:\n  interval_ms: 120").expect("write");

        let config = VizConfig::load(file.path()).expect("load");
        assert_eq!(config.playback.interval_ms, 120);
    }

    #[test]
    fn test_config_load_missing_file() {
        let result = VizConfig::load("/nonexistent/algoviz.yaml");
        assert!(matches!(result, Err(VizError::Io(_))));
    }
}
