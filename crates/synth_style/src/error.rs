//! Style engine error types

use thiserror::Error;

/// Errors raised while building a rule set or a session's region table
#[derive(Error, Debug)]
pub enum StyleError {
    /// A rule pattern is not a valid regular expression
    #[error("malformed style pattern `{pattern}`: {source}")]
    MalformedPattern {
        pattern: String,
        source: regex::Error,
    },

    /// Subregions have no widget type of their own
    #[error("cannot bind type identifier `{type_id}` to subregion `{region}`")]
    SubregionBinding { region: String, type_id: String },

    /// Engine configuration could not be read
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Configuration (de)serialization errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid synth config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize synth config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Result type for style engine operations
pub type Result<T> = std::result::Result<T, StyleError>;
