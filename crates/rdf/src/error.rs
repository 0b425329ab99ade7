use std::fmt;

#[derive(Debug)]
pub enum GraphError {
    /// A minted identifier is not a valid IRI (bad namespace base or
    /// unusable catalog identifier). Fatal: silently skipping a node
    /// would break cross-document references.
    InvalidIri(String),
    /// Config validation error.
    ConfigValidation(String),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidIri(msg) => write!(f, "invalid IRI: {msg}"),
            Self::ConfigValidation(msg) => write!(f, "config validation error: {msg}"),
        }
    }
}

impl std::error::Error for GraphError {}
