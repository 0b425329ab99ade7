//! End-to-end reconciliation: raw source text through parse + engine,
//! config loaded from TOML the way the CLI drives it.

use cinegraph_recon::source::{parse_basics, parse_ratings, parse_streaming};
use cinegraph_recon::{reconcile, JoinMode, ReconConfig, ReconInput};

const STREAMING: &str = "\
show_id,type,title,director,country,date_added,release_year,rating,duration,listed_in,description
s1,Movie,The Long Night,Ana Torres,Spain,\"January 5, 2021\",2019,TV-MA,102 min,\"Dramas, International Movies\",desc
s2,Movie,The Long Night,Pieter Vos,Netherlands,\"March 2, 2021\",1987,R,95 min,Thrillers,desc
s3,TV Show,The Long Night,,,\"May 9, 2021\",2020,TV-14,2 Seasons,TV Dramas,desc
s4,Movie,Harbor Lights,\"Mei Lin, Jonas Falk\",\"Taiwan, Sweden\",\"July 4, 2020\",2015,PG-13,118 min,Dramas,desc
s5,Movie,Ghost Reel,,,,2011,,84 min,Horror Movies,desc
s6,Movie,Missing Metadata,Someone,Somewhere,\"June 6, 2020\",2018,PG,90 min,Comedies,desc
";

const BASICS: &str = "\
tconst\ttitleType\tprimaryTitle\tstartYear
tt0000001\tmovie\tThe Long Night\t2019
tt0000002\tmovie\tThe Long Night\t1987
tt0000003\ttvSeries\tThe Long Night\t2020
tt0000004\tmovie\tHarbor Lights\t2015
tt0000005\tmovie\tGhost Reel\t\\N
";

const RATINGS: &str = "\
tconst\taverageRating\tnumVotes
tt0000001\t7.1\t5401
tt0000002\t6.4\t1200
tt0000004\t7.9\t20000
tt0000005\t5.5\t300
";

fn input() -> ReconInput {
    ReconInput {
        streaming: parse_streaming(STREAMING).unwrap(),
        basics: parse_basics(BASICS).unwrap(),
        ratings: parse_ratings(RATINGS).unwrap(),
    }
}

#[test]
fn title_join_from_toml_config() {
    let config = ReconConfig::from_toml("name = \"catalog merge\"\njoin = \"title\"\n").unwrap();
    assert_eq!(config.join, JoinMode::Title);

    let result = reconcile(&config, &input());

    // Title-only join: both Long Night movies each match both metadata
    // rows; first-seen keeps the 2019 tconst for s1 AND for s2 (the
    // documented lossy step). Ghost Reel joins fine without a year.
    let pairs: Vec<(&str, &str)> = result
        .rows
        .iter()
        .map(|r| (r.show_id.as_str(), r.tconst.as_str()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("s1", "tt0000001"),
            ("s2", "tt0000001"),
            ("s4", "tt0000004"),
            ("s5", "tt0000005"),
        ]
    );

    assert_eq!(result.summary.unmatched, 1, "s6 has no metadata row");
    assert_eq!(result.summary.retained, 4);
    assert_eq!(result.meta.config_name, "catalog merge");
}

#[test]
fn title_year_join_separates_remakes() {
    let config = ReconConfig::from_toml("join = \"title_year\"").unwrap();
    let result = reconcile(&config, &input());

    let pairs: Vec<(&str, &str)> = result
        .rows
        .iter()
        .map(|r| (r.show_id.as_str(), r.tconst.as_str()))
        .collect();
    // The two remakes now land on their own years; Ghost Reel's null
    // metadata year can no longer join.
    assert_eq!(pairs, vec![("s1", "tt0000001"), ("s2", "tt0000002"), ("s4", "tt0000004")]);
}

#[test]
fn cleaned_table_invariant_holds_for_both_modes() {
    for join in ["title", "title_year"] {
        let config = ReconConfig::from_toml(&format!("join = \"{join}\"")).unwrap();
        let result = reconcile(&config, &input());
        for row in &result.rows {
            assert!(!row.show_id.is_empty());
            assert!(!row.title.is_empty());
            assert!(!row.tconst.is_empty());
            assert!(row.rating_value().is_some(), "rating must parse: {row:?}");
        }
    }
}

#[test]
fn reruns_are_identical_except_timestamp() {
    let config = ReconConfig::default();
    let a = reconcile(&config, &input());
    let b = reconcile(&config, &input());
    assert_eq!(a.rows, b.rows);
    assert_eq!(a.summary.retained, b.summary.retained);
    assert_eq!(a.summary.warnings, b.summary.warnings);
}
