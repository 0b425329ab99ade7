//! Projection of cleaned rows into the catalog and director documents.
//!
//! The two builders never share state; they agree only on the
//! identifier-minting function in `cinegraph_core::ident`, which is
//! what lets the catalog reference director nodes it has never seen.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use oxrdf::vocab::{rdf, rdfs, xsd};
use oxrdf::{Literal, NamedNode};
use serde::Serialize;

use cinegraph_core::{director_fragment, split_list, FilmRow, Warning};

use crate::config::ProjectionConfig;
use crate::error::GraphError;
use crate::graph::GraphDoc;
use crate::namespace::NamespaceManager;
use crate::vocab::{dcterms, foaf, schema};

#[derive(Debug, Clone, Serialize)]
pub struct ProjectionSummary {
    /// Rows surviving the selection policy.
    pub selected: usize,
    pub catalog_triples: usize,
    /// Unique director names in the director document, when emitted.
    pub unique_directors: Option<usize>,
    pub warnings: Vec<Warning>,
}

pub struct ProjectionResult {
    pub catalog: GraphDoc,
    pub directors: Option<GraphDoc>,
    pub summary: ProjectionSummary,
}

/// Director document plus its name count (the user-visible signal).
pub struct DirectorGraph {
    pub doc: GraphDoc,
    pub unique_names: usize,
}

/// Build the catalog document (and, unless disabled, the director
/// document) from the cleaned table. Pure in everything but `today`,
/// which feeds the provenance stamp and the year-window boundaries.
pub fn project(
    rows: &[FilmRow],
    config: &ProjectionConfig,
    today: NaiveDate,
) -> Result<ProjectionResult, GraphError> {
    config.validate()?;

    let selection = config.selection.apply(rows, today);
    let selected = selection.len();
    let (catalog, warnings) = build_catalog(&selection, config, today)?;

    let directors = if config.emit_directors {
        Some(build_director_graph(rows, config, today)?)
    } else {
        None
    };

    let summary = ProjectionSummary {
        selected,
        catalog_triples: catalog.len(),
        unique_directors: directors.as_ref().map(|d| d.unique_names),
        warnings,
    };
    Ok(ProjectionResult {
        catalog,
        directors: directors.map(|d| d.doc),
        summary,
    })
}

fn build_catalog(
    selection: &[&FilmRow],
    config: &ProjectionConfig,
    today: NaiveDate,
) -> Result<(GraphDoc, Vec<Warning>), GraphError> {
    let mut ns = NamespaceManager::common();
    ns.add_prefix("movies", format!("{}#", config.base_uri));
    ns.add_prefix("directors", format!("{}#", config.directors_base_uri));
    let mut doc = GraphDoc::new(&config.base_uri, ns);
    let mut warnings: Vec<Warning> = Vec::new();

    let document = named(&config.base_uri)?;
    let catalog = mint(&config.base_uri, "catalog")?;

    doc.add(document.clone(), rdf::TYPE.into_owned(), foaf::DOCUMENT.into_owned());
    doc.add(document.clone(), dcterms::DATE.into_owned(), date_literal(today));
    doc.add(document.clone(), dcterms::TITLE.into_owned(), english(&config.title));
    doc.add(document.clone(), foaf::PRIMARY_TOPIC.into_owned(), catalog.clone());
    doc.add(document, dcterms::CREATOR.into_owned(), catalog.clone());
    doc.add(catalog.clone(), rdf::TYPE.into_owned(), schema::DATASET.into_owned());
    doc.add(catalog.clone(), rdfs::LABEL.into_owned(), english(&config.dataset_label));
    doc.add(catalog.clone(), dcterms::DESCRIPTION.into_owned(), english(&config.description));

    for row in selection {
        let movie = mint(&config.base_uri, &row.show_id)?;
        doc.add(catalog.clone(), schema::HAS_PART.into_owned(), movie.clone());
        doc.add(movie.clone(), rdf::TYPE.into_owned(), schema::MOVIE.into_owned());
        doc.add(movie.clone(), rdfs::LABEL.into_owned(), simple(&row.title));
        doc.add(movie.clone(), dcterms::TITLE.into_owned(), simple(&row.title));

        if let Some(directors) = &row.director {
            for name in split_list(directors) {
                let target = mint(&config.directors_base_uri, &director_fragment(name))?;
                doc.add(movie.clone(), schema::DIRECTOR.into_owned(), target);
            }
        }

        if let Some(countries) = &row.country {
            for country in split_list(countries) {
                doc.add(movie.clone(), dcterms::COVERAGE.into_owned(), simple(country));
                doc.add(
                    movie.clone(),
                    schema::COUNTRY_OF_ORIGIN.into_owned(),
                    simple(country),
                );
            }
        }

        if let Some(genres) = &row.genres {
            for genre in split_list(genres) {
                doc.add(movie.clone(), dcterms::SUBJECT.into_owned(), simple(genre));
                doc.add(movie.clone(), schema::GENRE.into_owned(), simple(genre));
            }
        }

        if let Some(date_added) = &row.date_added {
            doc.add(movie.clone(), dcterms::DATE.into_owned(), simple(date_added));
        }

        if let Some(year) = row.release_year {
            let literal = Literal::new_typed_literal(year.to_string(), xsd::G_YEAR);
            doc.add(movie.clone(), dcterms::ISSUED.into_owned(), literal.clone());
            doc.add(movie.clone(), schema::DATE_PUBLISHED.into_owned(), literal);
        }

        if let Some(content_rating) = &row.content_rating {
            doc.add(
                movie.clone(),
                schema::CONTENT_RATING.into_owned(),
                simple(content_rating),
            );
        }

        if let Some(duration) = &row.duration {
            match duration_literal(duration) {
                Some(value) => doc.add(
                    movie.clone(),
                    schema::DURATION.into_owned(),
                    Literal::new_typed_literal(value, xsd::DURATION),
                ),
                None => warnings.push(Warning::new(
                    row.show_id.as_str(),
                    "duration",
                    format!("unparsable duration {duration:?}; property skipped"),
                )),
            }
        }

        match decimal_value(&row.average_rating) {
            Some(value) => doc.add(
                movie.clone(),
                schema::RATING_VALUE.into_owned(),
                Literal::new_typed_literal(value, xsd::DECIMAL),
            ),
            None => warnings.push(Warning::new(
                row.show_id.as_str(),
                "averageRating",
                format!(
                    "unparsable rating {:?}; property skipped",
                    row.average_rating
                ),
            )),
        }

        let reference = named(&format!("https://www.imdb.com/title/{}/", row.tconst))?;
        doc.add(movie.clone(), rdfs::SEE_ALSO.into_owned(), reference.clone());
        doc.add(movie, schema::SAME_AS.into_owned(), reference);
    }

    Ok((doc, warnings))
}

/// Separate entry point for the director document. Filters the cleaned
/// table by the year window only, deliberately wider than any movie
/// selection policy, so directors referenced by movies the catalog
/// excluded still get a node.
pub fn build_director_graph(
    rows: &[FilmRow],
    config: &ProjectionConfig,
    today: NaiveDate,
) -> Result<DirectorGraph, GraphError> {
    config.validate()?;
    let end = today.year();
    let start = end - config.director_window_years;

    let mut names: BTreeSet<&str> = BTreeSet::new();
    for row in rows {
        if !row.release_year.is_some_and(|y| y >= start && y <= end) {
            continue;
        }
        if let Some(directors) = &row.director {
            for name in split_list(directors) {
                names.insert(name);
            }
        }
    }

    let mut ns = NamespaceManager::common();
    ns.add_prefix("directors", format!("{}#", config.directors_base_uri));
    let mut doc = GraphDoc::new(&config.directors_base_uri, ns);

    let document = named(&config.directors_base_uri)?;
    doc.add(document.clone(), rdf::TYPE.into_owned(), foaf::DOCUMENT.into_owned());
    doc.add(document.clone(), dcterms::DATE.into_owned(), date_literal(today));
    doc.add(
        document.clone(),
        dcterms::TITLE.into_owned(),
        english(&format!("Movie directors, {start}-{end}")),
    );
    doc.add(
        document,
        dcterms::DESCRIPTION.into_owned(),
        english(&format!(
            "Directors of catalog movies released between {start} and {end}."
        )),
    );

    for name in &names {
        let node = mint(&config.directors_base_uri, &director_fragment(name))?;
        doc.add(node.clone(), rdf::TYPE.into_owned(), foaf::PERSON.into_owned());
        doc.add(node.clone(), foaf::NAME.into_owned(), simple(name));
        doc.add(node, rdfs::LABEL.into_owned(), simple(name));
    }

    Ok(DirectorGraph {
        doc,
        unique_names: names.len(),
    })
}

fn named(iri: &str) -> Result<NamedNode, GraphError> {
    NamedNode::new(iri).map_err(|e| GraphError::InvalidIri(e.to_string()))
}

fn mint(base: &str, fragment: &str) -> Result<NamedNode, GraphError> {
    named(&format!("{base}#{fragment}"))
}

fn simple(value: &str) -> Literal {
    Literal::new_simple_literal(value)
}

fn english(value: &str) -> Literal {
    Literal::new_language_tagged_literal_unchecked(value, "en")
}

fn date_literal(today: NaiveDate) -> Literal {
    Literal::new_typed_literal(today.format("%Y-%m-%d").to_string(), xsd::DATE)
}

/// `"<digits> min"` → `PT<digits>M`; anything else is unparsable.
fn duration_literal(value: &str) -> Option<String> {
    let minutes = value.strip_suffix(" min")?;
    if !minutes.is_empty() && minutes.bytes().all(|b| b.is_ascii_digit()) {
        Some(format!("PT{minutes}M"))
    } else {
        None
    }
}

/// Validate the rating's string form as an exact decimal and return it
/// trimmed. The binary float is never consulted, so the emitted lexical
/// form cannot drift between runs or platforms.
fn decimal_value(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if all_digits(int_part) && frac_part.map_or(true, all_digits) {
        Some(trimmed)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_parse_table() {
        assert_eq!(duration_literal("90 min").as_deref(), Some("PT90M"));
        assert_eq!(duration_literal("137 min").as_deref(), Some("PT137M"));
        assert_eq!(duration_literal("90"), None);
        assert_eq!(duration_literal(""), None);
        assert_eq!(duration_literal("ninety min"), None);
        assert_eq!(duration_literal("2 Seasons"), None);
    }

    #[test]
    fn decimal_validation() {
        assert_eq!(decimal_value("7.4"), Some("7.4"));
        assert_eq!(decimal_value(" 8 "), Some("8"));
        assert_eq!(decimal_value("-0.5"), Some("-0.5"));
        assert_eq!(decimal_value("7."), None);
        assert_eq!(decimal_value(".4"), None);
        assert_eq!(decimal_value("7,4"), None);
        assert_eq!(decimal_value("NaN"), None);
    }
}
