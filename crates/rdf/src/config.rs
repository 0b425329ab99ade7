use serde::Deserialize;

use crate::error::GraphError;
use crate::select::SelectionPolicy;

/// Options for one projection run. The two namespace bases are the
/// published locations of the documents themselves; node identifiers
/// hang off them as fragments, so the bases are part of the identity
/// contract and have no defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectionConfig {
    /// Base IRI of the catalog document.
    pub base_uri: String,
    /// Base IRI of the director document (used for director references
    /// even when the director document itself is not emitted).
    pub directors_base_uri: String,
    #[serde(default)]
    pub selection: SelectionPolicy,
    /// Also build the director document.
    #[serde(default = "default_true")]
    pub emit_directors: bool,
    /// Year window for the director document, independent of the movie
    /// selection policy.
    #[serde(default = "default_director_window")]
    pub director_window_years: i32,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_dataset_label")]
    pub dataset_label: String,
    #[serde(default = "default_description")]
    pub description: String,
}

fn default_true() -> bool {
    true
}

fn default_director_window() -> i32 {
    30
}

fn default_title() -> String {
    "Streaming & IMDb Movies dataset".into()
}

fn default_dataset_label() -> String {
    "Streaming & IMDb Movies".into()
}

fn default_description() -> String {
    "Dataset linking streaming catalog titles with IMDb identifiers and ratings.".into()
}

impl ProjectionConfig {
    pub fn validate(&self) -> Result<(), GraphError> {
        if self.base_uri.trim().is_empty() {
            return Err(GraphError::ConfigValidation("base_uri must be set".into()));
        }
        if self.directors_base_uri.trim().is_empty() {
            return Err(GraphError::ConfigValidation(
                "directors_base_uri must be set".into(),
            ));
        }
        if self.director_window_years < 0 {
            return Err(GraphError::ConfigValidation(
                "director_window_years must be >= 0".into(),
            ));
        }
        if let SelectionPolicy::YearWindow { years } = self.selection {
            // A negative window puts start past end and selects nothing.
            if years < 0 {
                return Err(GraphError::ConfigValidation(
                    "selection.years must be >= 0".into(),
                ));
            }
        }
        Ok(())
    }
}
