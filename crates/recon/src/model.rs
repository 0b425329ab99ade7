use serde::Serialize;

use cinegraph_core::Warning;

use crate::config::JoinMode;

// ---------------------------------------------------------------------------
// Input rows
// ---------------------------------------------------------------------------

/// One normalized row from the streaming-catalog CSV. Every field has
/// already had blank/whitespace values mapped to `None`; required-field
/// enforcement happens after the join, not here.
#[derive(Debug, Clone)]
pub struct StreamingRow {
    pub show_id: Option<String>,
    /// Category tag ("Movie", "TV Show", ...).
    pub kind: Option<String>,
    pub title: Option<String>,
    pub director: Option<String>,
    pub country: Option<String>,
    pub date_added: Option<String>,
    /// Coerced to numeric at parse time; non-numeric values are null.
    pub release_year: Option<i32>,
    pub content_rating: Option<String>,
    pub duration: Option<String>,
    pub genres: Option<String>,
}

/// One normalized row from the metadata-basics TSV (`\N` → null).
#[derive(Debug, Clone)]
pub struct BasicsRow {
    pub tconst: Option<String>,
    pub title_type: Option<String>,
    pub primary_title: Option<String>,
    pub start_year: Option<i32>,
}

/// One normalized row from the metadata-ratings TSV (`\N` → null).
#[derive(Debug, Clone)]
pub struct RatingRow {
    pub tconst: Option<String>,
    pub average_rating: Option<String>,
}

/// Pre-parsed sources, in original file order. Order matters: the
/// first-seen dedupe below makes join multiplicities deterministic only
/// because row order is preserved end-to-end.
pub struct ReconInput {
    pub streaming: Vec<StreamingRow>,
    pub basics: Vec<BasicsRow>,
    pub ratings: Vec<RatingRow>,
}

// ---------------------------------------------------------------------------
// Result
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct ReconMeta {
    pub config_name: String,
    pub join: JoinMode,
    pub engine_version: String,
    pub run_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReconSummary {
    /// Rows in the streaming source.
    pub streaming_rows: usize,
    /// Streaming rows surviving the category filter.
    pub movie_rows: usize,
    /// Movie rows with no metadata match (dropped by the inner join).
    pub unmatched: usize,
    /// Candidate rows produced by the join (multiplicities included).
    pub joined: usize,
    /// Candidates collapsed by the first-seen catalog-id dedupe.
    pub duplicate_dropped: usize,
    /// Candidates dropped for missing required fields.
    pub incomplete_dropped: usize,
    /// Rows in the cleaned table.
    pub retained: usize,
    pub warnings: Vec<Warning>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReconResult {
    pub meta: ReconMeta,
    pub summary: ReconSummary,
    pub rows: Vec<cinegraph_core::FilmRow>,
}
