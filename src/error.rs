use std::path::PathBuf;

/// Failures while building a pattern set or loading configuration.
///
/// Evaluation itself never fails; these only surface when an engine is
/// constructed from user-supplied rules or an explicit config path.
#[derive(Debug, thiserror::Error)]
pub enum GateError {
    #[error("rule `{name}` has an invalid expression: {source}")]
    InvalidPattern {
        name: String,
        #[source]
        source: regex::Error,
    },

    #[error("rule `{0}` has an empty expression")]
    EmptyExpression(String),

    #[error("a rule named `{0}` is already registered")]
    DuplicateRule(String),

    #[error("failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
