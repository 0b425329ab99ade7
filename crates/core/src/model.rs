use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Reconciled row
// ---------------------------------------------------------------------------

/// One real-world film after reconciliation.
///
/// Field names mirror the cleaned-table CSV header, which keeps the
/// streaming source's column names (minus `description`) plus the two
/// metadata columns. `show_id`, `title`, `tconst` and `average_rating`
/// are guaranteed non-empty by the reconciliation engine; everything
/// else is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilmRow {
    pub show_id: String,
    /// Source category tag; always "Movie" after filtering.
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    /// Comma-delimited director list.
    pub director: Option<String>,
    /// Comma-delimited country list.
    pub country: Option<String>,
    pub date_added: Option<String>,
    pub release_year: Option<i32>,
    /// Content rating ("PG-13" etc.), not the numeric score.
    #[serde(rename = "rating")]
    pub content_rating: Option<String>,
    /// Free-form duration, typically "<minutes> min".
    pub duration: Option<String>,
    /// Comma-delimited genre labels.
    #[serde(rename = "listed_in")]
    pub genres: Option<String>,
    /// External metadata identifier (join key into the ratings table).
    pub tconst: String,
    /// Average numeric rating, kept in its exact source string form so
    /// decimal output never drifts through a binary float.
    #[serde(rename = "averageRating")]
    pub average_rating: String,
}

impl FilmRow {
    /// Rating parsed for comparisons (selection policies). The string
    /// form stays authoritative for output.
    pub fn rating_value(&self) -> Option<f64> {
        self.average_rating.trim().parse().ok()
    }
}

// ---------------------------------------------------------------------------
// Diagnostics
// ---------------------------------------------------------------------------

/// A per-row, per-field diagnostic for a value that was silently
/// dropped or skipped. Collected alongside results so lossy steps stay
/// observable without becoming errors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Warning {
    /// Identifier of the affected record (usually `show_id`).
    pub record: String,
    pub field: String,
    pub message: String,
}

impl Warning {
    pub fn new(
        record: impl Into<String>,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            record: record.into(),
            field: field.into(),
            message: message.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Multi-valued fields
// ---------------------------------------------------------------------------

/// Split a comma-delimited field into trimmed, non-empty segments,
/// preserving order. `"Alice, Bob , ,Carol"` → `["Alice", "Bob", "Carol"]`.
pub fn split_list(value: &str) -> Vec<&str> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_list_drops_empty_segments() {
        assert_eq!(split_list("Alice, Bob , ,Carol"), vec!["Alice", "Bob", "Carol"]);
    }

    #[test]
    fn split_list_empty_input() {
        assert!(split_list("").is_empty());
        assert!(split_list(" , ,").is_empty());
    }

    #[test]
    fn split_list_single_value() {
        assert_eq!(split_list("United States"), vec!["United States"]);
    }

    #[test]
    fn rating_value_parses_source_string() {
        let row = sample_row();
        assert_eq!(row.rating_value(), Some(7.4));
    }

    #[test]
    fn rating_value_none_on_garbage() {
        let mut row = sample_row();
        row.average_rating = "n/a".into();
        assert_eq!(row.rating_value(), None);
    }

    fn sample_row() -> FilmRow {
        FilmRow {
            show_id: "s1".into(),
            kind: "Movie".into(),
            title: "Example".into(),
            director: None,
            country: None,
            date_added: None,
            release_year: Some(2020),
            content_rating: None,
            duration: None,
            genres: None,
            tconst: "tt0000001".into(),
            average_rating: "7.4".into(),
        }
    }
}
