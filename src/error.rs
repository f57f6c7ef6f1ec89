//! Error types for algoviz.
//!
//! Step generators are total: they never fail on well-formed elements. The
//! only fallible paths are input validation, configuration loading, graph
//! construction and playback seeks, and all of them return
//! `Result<T, VizError>` instead of panicking.

use thiserror::Error;

/// Result type alias for algoviz operations.
pub type VizResult<T> = Result<T, VizError>;

/// Unified error type for all algoviz operations.
#[derive(Debug, Error)]
pub enum VizError {
    // ===== Input Errors =====
    /// A token in the comma-separated input is not an integer.
    #[error("Invalid number '{token}' at position {position}")]
    Parse {
        /// The offending token, trimmed.
        token: String,
        /// Zero-based position of the token in the input list.
        position: usize,
    },

    /// Fewer elements than the algorithm accepts.
    #[error("Please enter at least {min} numbers (got {got})")]
    TooFewElements {
        /// Minimum accepted count.
        min: usize,
        /// Count supplied.
        got: usize,
    },

    /// More elements than the algorithm accepts.
    #[error("Please enter at most {max} numbers (got {got})")]
    TooManyElements {
        /// Maximum accepted count.
        max: usize,
        /// Count supplied.
        got: usize,
    },

    /// A value outside the accepted range.
    #[error("Value {value} is out of range: numbers must be between {min} and {max}")]
    ValueOutOfRange {
        /// The offending value.
        value: i64,
        /// Lowest accepted value.
        min: i64,
        /// Highest accepted value.
        max: i64,
    },

    /// Binary search input must be sorted ascending.
    #[error("Binary search requires sorted input: {previous} appears before {next}")]
    UnsortedInput {
        /// Earlier, larger value.
        previous: i64,
        /// Later, smaller value.
        next: i64,
    },

    /// A search was requested without a target value.
    #[error("Search algorithm '{0}' requires a target value")]
    MissingTarget(String),

    /// Algorithm name could not be resolved.
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    // ===== Graph Errors =====
    /// Graph construction or traversal error.
    #[error("Graph error: {0}")]
    Graph(String),

    // ===== Playback Errors =====
    /// Seek outside the generated sequence.
    #[error("Frame {frame} is out of range (sequence has {len} steps)")]
    FrameOutOfRange {
        /// Requested frame.
        frame: usize,
        /// Number of steps available.
        len: usize,
    },

    // ===== Configuration Errors =====
    /// Invalid configuration parameter.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    // ===== I/O Errors =====
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl VizError {
    /// Create a configuration error with a message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }

    /// Create a graph error.
    #[must_use]
    pub fn graph(message: impl Into<String>) -> Self {
        Self::Graph(message.into())
    }

    /// Check if this error was caused by user-supplied input.
    ///
    /// Input errors are shown to the user as-is; everything else is an
    /// environment or configuration problem.
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::Parse { .. }
                | Self::TooFewElements { .. }
                | Self::TooManyElements { .. }
                | Self::ValueOutOfRange { .. }
                | Self::UnsortedInput { .. }
                | Self::MissingTarget(_)
                | Self::UnknownAlgorithm(_)
                | Self::Graph(_)
        )
    }
}

impl From<serde_json::Error> for VizError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}
