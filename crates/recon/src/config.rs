use serde::{Deserialize, Serialize};

use crate::error::ReconError;

/// Join key set for matching streaming titles to metadata rows.
///
/// Title matching is ambiguous (remakes share titles across years);
/// which policy is authoritative is a configuration decision, never a
/// guess. `Title` reproduces the original production dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JoinMode {
    #[default]
    Title,
    TitleYear,
}

impl std::fmt::Display for JoinMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Title => write!(f, "title"),
            Self::TitleYear => write!(f, "title_year"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReconConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub join: JoinMode,
}

fn default_name() -> String {
    "reconciliation".into()
}

impl Default for ReconConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            join: JoinMode::default(),
        }
    }
}

impl ReconConfig {
    pub fn from_toml(input: &str) -> Result<Self, ReconError> {
        toml::from_str(input).map_err(|e| ReconError::ConfigParse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_title_join() {
        let config = ReconConfig::default();
        assert_eq!(config.join, JoinMode::Title);
    }

    #[test]
    fn parse_title_year_join() {
        let config = ReconConfig::from_toml("join = \"title_year\"").unwrap();
        assert_eq!(config.join, JoinMode::TitleYear);
        assert_eq!(config.name, "reconciliation");
    }

    #[test]
    fn reject_unknown_join_mode() {
        assert!(ReconConfig::from_toml("join = \"fuzzy\"").is_err());
    }
}
