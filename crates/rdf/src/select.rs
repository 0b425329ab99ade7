//! Selection policies: which reconciled rows become movie nodes.

use std::cmp::Ordering;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use cinegraph_core::FilmRow;

/// Mutually exclusive row filters applied before emission. The
/// wall-clock date only ever feeds the `year_window` boundary (and the
/// provenance stamp elsewhere), never ordering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum SelectionPolicy {
    /// No filtering.
    #[default]
    All,
    /// Highest-rated row per release year, most recent `years` years,
    /// emitted year-descending.
    BestPerYear {
        #[serde(default = "default_years")]
        years: usize,
    },
    /// One release year, rating-descending, top `count`.
    TopByRating {
        year: i32,
        #[serde(default = "default_count")]
        count: usize,
    },
    /// Rolling window of `years` years ending today, inclusive on both
    /// ends.
    YearWindow {
        #[serde(default = "default_years")]
        years: i32,
    },
}

fn default_years<T: From<u8>>() -> T {
    T::from(30)
}

fn default_count() -> usize {
    10
}

impl SelectionPolicy {
    pub fn apply<'a>(&self, rows: &'a [FilmRow], today: NaiveDate) -> Vec<&'a FilmRow> {
        match *self {
            Self::All => rows.iter().collect(),
            Self::BestPerYear { years } => best_per_year(rows, years),
            Self::TopByRating { year, count } => top_by_rating(rows, year, count),
            Self::YearWindow { years } => {
                let end = today.year();
                let start = end - years;
                rows.iter()
                    .filter(|r| r.release_year.is_some_and(|y| y >= start && y <= end))
                    .collect()
            }
        }
    }
}

fn best_per_year(rows: &[FilmRow], years: usize) -> Vec<&FilmRow> {
    let mut best: BTreeMap<i32, &FilmRow> = BTreeMap::new();
    for row in rows {
        let (Some(year), Some(rating)) = (row.release_year, row.rating_value()) else {
            // Unrankable rows cannot win a year.
            continue;
        };
        match best.entry(year) {
            Entry::Vacant(slot) => {
                slot.insert(row);
            }
            Entry::Occupied(mut slot) => {
                // Strictly greater: ties keep the first-seen row.
                if slot.get().rating_value().map_or(true, |held| rating > held) {
                    slot.insert(row);
                }
            }
        }
    }
    best.into_values().rev().take(years).collect()
}

fn top_by_rating(rows: &[FilmRow], year: i32, count: usize) -> Vec<&FilmRow> {
    let mut selected: Vec<&FilmRow> = rows
        .iter()
        .filter(|r| r.release_year == Some(year) && r.rating_value().is_some())
        .collect();
    // Stable sort: equal ratings keep table order.
    selected.sort_by(|a, b| {
        b.rating_value()
            .partial_cmp(&a.rating_value())
            .unwrap_or(Ordering::Equal)
    });
    selected.truncate(count);
    selected
}
