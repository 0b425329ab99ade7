use std::collections::{HashMap, HashSet};

use cinegraph_core::{FilmRow, Warning};

use crate::config::{JoinMode, ReconConfig};
use crate::model::{ReconInput, ReconMeta, ReconResult, ReconSummary, StreamingRow};

#[derive(PartialEq, Eq, Hash)]
enum JoinKey<'a> {
    Title(&'a str),
    TitleYear(&'a str, i32),
}

/// Run the full reconciliation pass: category filters, the configured
/// join, the ratings left-join, first-seen dedupe, and the
/// completeness prune. Returns the cleaned table plus counts and
/// structured warnings for every silently dropped row.
///
/// Iteration follows source file order throughout, which is what makes
/// the "first occurrence wins" steps deterministic.
pub fn reconcile(config: &ReconConfig, input: &ReconInput) -> ReconResult {
    // Join index over movie-typed metadata rows, keyed per config.
    // Values keep file order so ambiguous matches stay deterministic.
    let mut index: HashMap<JoinKey<'_>, Vec<usize>> = HashMap::new();
    for (i, basics) in input.basics.iter().enumerate() {
        if basics.title_type.as_deref() != Some("movie") {
            continue;
        }
        let Some(title) = basics.primary_title.as_deref() else {
            continue;
        };
        let key = match config.join {
            JoinMode::Title => JoinKey::Title(title),
            JoinMode::TitleYear => match basics.start_year {
                Some(year) => JoinKey::TitleYear(title, year),
                // Null year never joins on year.
                None => continue,
            },
        };
        index.entry(key).or_default().push(i);
    }

    // Ratings lookup: first occurrence per tconst, nulls included, so a
    // duplicated identifier resolves the same way the row order says.
    let mut ratings: HashMap<&str, Option<&str>> = HashMap::new();
    for rating in &input.ratings {
        if let Some(tconst) = rating.tconst.as_deref() {
            ratings
                .entry(tconst)
                .or_insert(rating.average_rating.as_deref());
        }
    }

    let mut warnings: Vec<Warning> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut rows: Vec<FilmRow> = Vec::new();
    let mut movie_rows = 0usize;
    let mut unmatched = 0usize;
    let mut joined = 0usize;
    let mut duplicate_dropped = 0usize;
    let mut incomplete_dropped = 0usize;

    for streaming in &input.streaming {
        if streaming.kind.as_deref() != Some("Movie") {
            continue;
        }
        movie_rows += 1;

        let key = match (config.join, streaming.title.as_deref()) {
            (_, None) => None,
            (JoinMode::Title, Some(title)) => Some(JoinKey::Title(title)),
            (JoinMode::TitleYear, Some(title)) => streaming
                .release_year
                .map(|year| JoinKey::TitleYear(title, year)),
        };
        let Some(candidates) = key.and_then(|k| index.get(&k)) else {
            // Inner join: no metadata match drops the row, by design.
            unmatched += 1;
            continue;
        };

        for &bi in candidates {
            joined += 1;
            let basics = &input.basics[bi];

            // First-seen dedupe by catalog id runs before the
            // completeness prune: a pruned first occurrence still
            // consumes the slot for its id.
            let dedupe_key = streaming.show_id.clone().unwrap_or_default();
            if !seen.insert(dedupe_key) {
                duplicate_dropped += 1;
                continue;
            }

            let average_rating = basics
                .tconst
                .as_deref()
                .and_then(|t| ratings.get(t).copied())
                .flatten();

            match build_row(streaming, basics.tconst.as_deref(), average_rating) {
                Ok(row) => rows.push(row),
                Err(field) => {
                    incomplete_dropped += 1;
                    warnings.push(Warning::new(
                        streaming.show_id.clone().unwrap_or_default(),
                        field,
                        format!("missing required {field} after join; row dropped"),
                    ));
                }
            }
        }
    }

    let retained = rows.len();
    ReconResult {
        meta: ReconMeta {
            config_name: config.name.clone(),
            join: config.join,
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            run_at: chrono::Utc::now().to_rfc3339(),
        },
        summary: ReconSummary {
            streaming_rows: input.streaming.len(),
            movie_rows,
            unmatched,
            joined,
            duplicate_dropped,
            incomplete_dropped,
            retained,
            warnings,
        },
        rows,
    }
}

/// Project a joined candidate to the cleaned-table row, enforcing the
/// post-reconciliation invariant. Returns the name of the first missing
/// required field when the row must be dropped.
fn build_row(
    streaming: &StreamingRow,
    tconst: Option<&str>,
    average_rating: Option<&str>,
) -> Result<FilmRow, &'static str> {
    let show_id = streaming.show_id.as_deref().ok_or("show_id")?;
    let title = streaming.title.as_deref().ok_or("title")?;
    let tconst = tconst.ok_or("tconst")?;
    let average_rating = average_rating.ok_or("averageRating")?;

    Ok(FilmRow {
        show_id: show_id.to_string(),
        kind: streaming.kind.clone().unwrap_or_else(|| "Movie".into()),
        title: title.to_string(),
        director: streaming.director.clone(),
        country: streaming.country.clone(),
        date_added: streaming.date_added.clone(),
        release_year: streaming.release_year,
        content_rating: streaming.content_rating.clone(),
        duration: streaming.duration.clone(),
        genres: streaming.genres.clone(),
        tconst: tconst.to_string(),
        average_rating: average_rating.to_string(),
    })
}
