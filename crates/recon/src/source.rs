//! Source parsers: in-memory CSV/TSV data → normalized rows.
//!
//! The column contract is checked once, here, by explicit header
//! lookup; a missing required column is fatal. Value normalization
//! (blank → null, `\N` sentinel → null, year coercion) also happens
//! here so the engine never compares raw strings.

use crate::error::ReconError;
use crate::model::{BasicsRow, RatingRow, StreamingRow};

/// Null marker used by the metadata TSV dumps.
const NULL_SENTINEL: &str = "\\N";

pub fn parse_streaming(data: &str) -> Result<Vec<StreamingRow>, ReconError> {
    const SOURCE: &str = "streaming";

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(data.as_bytes());
    let headers = read_headers(&mut reader, SOURCE)?;

    let show_id = column_index(&headers, SOURCE, "show_id")?;
    let kind = column_index(&headers, SOURCE, "type")?;
    let title = column_index(&headers, SOURCE, "title")?;
    let director = column_index(&headers, SOURCE, "director")?;
    let country = column_index(&headers, SOURCE, "country")?;
    let date_added = column_index(&headers, SOURCE, "date_added")?;
    let release_year = column_index(&headers, SOURCE, "release_year")?;
    let rating = column_index(&headers, SOURCE, "rating")?;
    let duration = column_index(&headers, SOURCE, "duration")?;
    let listed_in = column_index(&headers, SOURCE, "listed_in")?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| csv_error(SOURCE, e))?;
        let field = |i: usize| normalize(record.get(i).unwrap_or(""));
        rows.push(StreamingRow {
            show_id: field(show_id),
            kind: field(kind),
            title: field(title),
            director: field(director),
            country: field(country),
            date_added: field(date_added),
            release_year: parse_year(field(release_year).as_deref()),
            content_rating: field(rating),
            duration: field(duration),
            genres: field(listed_in),
        });
    }
    Ok(rows)
}

pub fn parse_basics(data: &str) -> Result<Vec<BasicsRow>, ReconError> {
    const SOURCE: &str = "basics";

    let mut reader = tsv_reader(data);
    let headers = read_headers(&mut reader, SOURCE)?;

    let tconst = column_index(&headers, SOURCE, "tconst")?;
    let title_type = column_index(&headers, SOURCE, "titleType")?;
    let primary_title = column_index(&headers, SOURCE, "primaryTitle")?;
    let start_year = column_index(&headers, SOURCE, "startYear")?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| csv_error(SOURCE, e))?;
        let field = |i: usize| normalize_sentinel(record.get(i).unwrap_or(""));
        rows.push(BasicsRow {
            tconst: field(tconst),
            title_type: field(title_type),
            primary_title: field(primary_title),
            start_year: parse_year(field(start_year).as_deref()),
        });
    }
    Ok(rows)
}

pub fn parse_ratings(data: &str) -> Result<Vec<RatingRow>, ReconError> {
    const SOURCE: &str = "ratings";

    let mut reader = tsv_reader(data);
    let headers = read_headers(&mut reader, SOURCE)?;

    let tconst = column_index(&headers, SOURCE, "tconst")?;
    let average_rating = column_index(&headers, SOURCE, "averageRating")?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| csv_error(SOURCE, e))?;
        let field = |i: usize| normalize_sentinel(record.get(i).unwrap_or(""));
        rows.push(RatingRow {
            tconst: field(tconst),
            average_rating: field(average_rating),
        });
    }
    Ok(rows)
}

/// The metadata dumps are tab-delimited and unquoted; a stray `"` in a
/// title is data, not quoting.
fn tsv_reader(data: &str) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(b'\t')
        .quoting(false)
        .from_reader(data.as_bytes())
}

fn read_headers(
    reader: &mut csv::Reader<&[u8]>,
    source: &str,
) -> Result<Vec<String>, ReconError> {
    Ok(reader
        .headers()
        .map_err(|e| csv_error(source, e))?
        .iter()
        .map(str::to_string)
        .collect())
}

fn column_index(headers: &[String], source: &str, name: &str) -> Result<usize, ReconError> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| ReconError::MissingColumn {
            source: source.into(),
            column: name.into(),
        })
}

fn csv_error(source: &str, e: csv::Error) -> ReconError {
    ReconError::Csv {
        source: source.into(),
        message: e.to_string(),
    }
}

/// Blank or all-whitespace → null. Non-blank values pass verbatim so
/// join keys compare exactly as authored.
fn normalize(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Sentinel-aware variant for the metadata sources.
fn normalize_sentinel(value: &str) -> Option<String> {
    if value == NULL_SENTINEL {
        None
    } else {
        normalize(value)
    }
}

/// Numeric coercion for year fields: non-numeric maps to null rather
/// than erroring, on both sides of the join.
fn parse_year(value: Option<&str>) -> Option<i32> {
    value?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const STREAMING: &str = "\
show_id,type,title,director,country,date_added,release_year,rating,duration,listed_in,description
s1,Movie,Heat,Michael Mann,United States,\"June 1, 2020\",1995,R,170 min,\"Dramas, Thrillers\",Two obsessives.
s2,TV Show,Dark,,Germany,,2017,TV-MA,3 Seasons,\"TV Dramas\",Time travel.
s3,Movie,Blank Fields,, ,  ,abcd,,,,
";

    #[test]
    fn streaming_parses_and_normalizes() {
        let rows = parse_streaming(STREAMING).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].show_id.as_deref(), Some("s1"));
        assert_eq!(rows[0].release_year, Some(1995));
        assert_eq!(rows[0].genres.as_deref(), Some("Dramas, Thrillers"));

        // Blank and whitespace-only fields become null; bad year coerces to null.
        let blank = &rows[2];
        assert_eq!(blank.director, None);
        assert_eq!(blank.country, None);
        assert_eq!(blank.date_added, None);
        assert_eq!(blank.release_year, None);
    }

    #[test]
    fn streaming_missing_column_is_fatal() {
        let err = parse_streaming("show_id,type,title\ns1,Movie,Heat\n").unwrap_err();
        assert!(err.to_string().contains("missing column 'director'"), "{err}");
    }

    #[test]
    fn basics_sentinel_becomes_null() {
        let data = "tconst\ttitleType\tprimaryTitle\tstartYear\n\
                    tt1\tmovie\tHeat\t1995\n\
                    tt2\tmovie\t\\N\t\\N\n";
        let rows = parse_basics(data).unwrap();
        assert_eq!(rows[0].start_year, Some(1995));
        assert_eq!(rows[1].primary_title, None);
        assert_eq!(rows[1].start_year, None);
    }

    #[test]
    fn basics_unquoted_quote_is_data() {
        let data = "tconst\ttitleType\tprimaryTitle\tstartYear\n\
                    tt3\tmovie\t\"Crocodile\" Dundee\t1986\n";
        let rows = parse_basics(data).unwrap();
        assert_eq!(rows[0].primary_title.as_deref(), Some("\"Crocodile\" Dundee"));
    }

    #[test]
    fn ratings_parse() {
        let data = "tconst\taverageRating\tnumVotes\ntt1\t8.3\t700000\ntt2\t\\N\t10\n";
        let rows = parse_ratings(data).unwrap();
        assert_eq!(rows[0].average_rating.as_deref(), Some("8.3"));
        assert_eq!(rows[1].average_rating, None);
    }

    #[test]
    fn ratings_missing_column_is_fatal() {
        let err = parse_ratings("tconst\tnumVotes\ntt1\t3\n").unwrap_err();
        match err {
            ReconError::MissingColumn { source, column } => {
                assert_eq!(source, "ratings");
                assert_eq!(column, "averageRating");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
