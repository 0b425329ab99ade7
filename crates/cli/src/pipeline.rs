//! `cinegraph <cmd>`: config-driven pipeline commands.
//!
//! Commands read one TOML config naming the three sources, the output
//! paths, and the two engine sections. Paths are resolved relative to
//! the config file's directory, so a config checked in next to its data
//! works from any working directory.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use cinegraph_recon::model::ReconInput;
use cinegraph_recon::source::{parse_basics, parse_ratings, parse_streaming};
use cinegraph_recon::{reconcile, ReconConfig, ReconResult};
use cinegraph_rdf::{
    build_director_graph, project, turtle, GraphError, ProjectionConfig, ProjectionSummary,
};

use crate::exit_codes::{EXIT_INPUT, EXIT_INVALID_CONFIG, EXIT_OUTPUT, EXIT_USAGE};
use crate::CliError;

#[derive(Debug, Deserialize)]
pub struct PipelineConfig {
    pub sources: SourcesConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub recon: ReconConfig,
    /// Absent when the config only drives `merge`.
    pub graph: Option<ProjectionConfig>,
}

#[derive(Debug, Deserialize)]
pub struct SourcesConfig {
    pub streaming: PathBuf,
    pub basics: PathBuf,
    pub ratings: PathBuf,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub table: PathBuf,
    pub catalog: PathBuf,
    pub directors: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            table: "merged.csv".into(),
            catalog: "movies.ttl".into(),
            directors: "directors.ttl".into(),
        }
    }
}

pub fn cmd_run(config_path: &Path, json: bool, report: Option<&Path>) -> Result<(), CliError> {
    let (base, config) = load_config(config_path)?;
    let graph = graph_config(&config)?;

    let merge = run_merge(&base, &config)?;
    let table_path = base.join(&config.output.table);
    cinegraph_io::write_table(&table_path, &merge.rows)
        .map_err(|e| CliError::new(EXIT_OUTPUT, e))?;
    report_merge(&merge);
    eprintln!("wrote {}", table_path.display());

    // The graph stage reads the written table back, never the rows
    // still in memory: `run` is exactly `merge` followed by `graph`,
    // so the two invocation styles cannot drift apart.
    let rows = cinegraph_io::read_table(&table_path)
        .map_err(|e| CliError::new(EXIT_INPUT, e))?;
    let projection = project(&rows, graph, today()).map_err(graph_err)?;
    write_documents(&base, &config, &projection.catalog, projection.directors.as_ref())?;
    report_projection(&projection.summary);

    emit_report(
        &RunReport {
            meta: &merge.meta,
            merge: &merge.summary,
            graph: &projection.summary,
        },
        json,
        report,
    )
}

pub fn cmd_merge(config_path: &Path, json: bool, report: Option<&Path>) -> Result<(), CliError> {
    let (base, config) = load_config(config_path)?;
    let result = run_merge(&base, &config)?;

    let table_path = base.join(&config.output.table);
    cinegraph_io::write_table(&table_path, &result.rows)
        .map_err(|e| CliError::new(EXIT_OUTPUT, e))?;
    report_merge(&result);
    eprintln!("wrote {}", table_path.display());

    emit_report(
        &MergeReport {
            meta: &result.meta,
            summary: &result.summary,
        },
        json,
        report,
    )
}

pub fn cmd_graph(config_path: &Path, json: bool, report: Option<&Path>) -> Result<(), CliError> {
    let (base, config) = load_config(config_path)?;
    let graph = graph_config(&config)?;

    let rows = cinegraph_io::read_table(&base.join(&config.output.table))
        .map_err(|e| CliError::new(EXIT_INPUT, e))?;
    let projection = project(&rows, graph, today()).map_err(graph_err)?;
    write_documents(&base, &config, &projection.catalog, projection.directors.as_ref())?;
    report_projection(&projection.summary);

    emit_report(&projection.summary, json, report)
}

pub fn cmd_directors(config_path: &Path, json: bool, report: Option<&Path>) -> Result<(), CliError> {
    let (base, config) = load_config(config_path)?;
    let graph = graph_config(&config)?;

    let rows = cinegraph_io::read_table(&base.join(&config.output.table))
        .map_err(|e| CliError::new(EXIT_INPUT, e))?;
    let directors = build_director_graph(&rows, graph, today()).map_err(graph_err)?;

    let path = base.join(&config.output.directors);
    cinegraph_io::write_atomic(&path, turtle::serialize(&directors.doc).as_bytes())
        .map_err(|e| CliError::new(EXIT_OUTPUT, e))?;
    eprintln!(
        "directors: {} unique names, {} triples",
        directors.unique_names,
        directors.doc.len()
    );
    eprintln!("wrote {}", path.display());

    emit_report(
        &DirectorReport {
            unique_directors: directors.unique_names,
            triples: directors.doc.len(),
        },
        json,
        report,
    )
}

pub fn cmd_validate(config_path: &Path) -> Result<(), CliError> {
    let (_, config) = load_config(config_path)?;
    if let Some(graph) = &config.graph {
        graph.validate().map_err(graph_err)?;
    }
    eprintln!(
        "config ok: join = {}, graph section {}",
        config.recon.join,
        if config.graph.is_some() { "present" } else { "absent" }
    );
    Ok(())
}

#[derive(Serialize)]
struct MergeReport<'a> {
    meta: &'a cinegraph_recon::model::ReconMeta,
    summary: &'a cinegraph_recon::ReconSummary,
}

#[derive(Serialize)]
struct RunReport<'a> {
    meta: &'a cinegraph_recon::model::ReconMeta,
    merge: &'a cinegraph_recon::ReconSummary,
    graph: &'a ProjectionSummary,
}

#[derive(Serialize)]
struct DirectorReport {
    unique_directors: usize,
    triples: usize,
}

fn load_config(path: &Path) -> Result<(PathBuf, PipelineConfig), CliError> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        CliError::new(EXIT_USAGE, format!("cannot read config {}: {e}", path.display()))
    })?;
    let config: PipelineConfig = toml::from_str(&raw)
        .map_err(|e| CliError::new(EXIT_INVALID_CONFIG, format!("invalid config: {e}")))?;
    let base = path.parent().unwrap_or_else(|| Path::new(".")).to_path_buf();
    Ok((base, config))
}

fn graph_config(config: &PipelineConfig) -> Result<&ProjectionConfig, CliError> {
    config.graph.as_ref().ok_or_else(|| {
        CliError::with_hint(
            EXIT_INVALID_CONFIG,
            "config has no [graph] table",
            "add [graph] with base_uri and directors_base_uri",
        )
    })
}

fn run_merge(base: &Path, config: &PipelineConfig) -> Result<ReconResult, CliError> {
    let input = ReconInput {
        streaming: parse_streaming(&read_source(base, &config.sources.streaming)?)
            .map_err(|e| CliError::new(EXIT_INPUT, e.to_string()))?,
        basics: parse_basics(&read_source(base, &config.sources.basics)?)
            .map_err(|e| CliError::new(EXIT_INPUT, e.to_string()))?,
        ratings: parse_ratings(&read_source(base, &config.sources.ratings)?)
            .map_err(|e| CliError::new(EXIT_INPUT, e.to_string()))?,
    };
    Ok(reconcile(&config.recon, &input))
}

fn read_source(base: &Path, relative: &Path) -> Result<String, CliError> {
    cinegraph_io::read_file_as_utf8(&base.join(relative))
        .map_err(|e| CliError::new(EXIT_INPUT, e))
}

fn write_documents(
    base: &Path,
    config: &PipelineConfig,
    catalog: &cinegraph_rdf::GraphDoc,
    directors: Option<&cinegraph_rdf::GraphDoc>,
) -> Result<(), CliError> {
    let catalog_path = base.join(&config.output.catalog);
    cinegraph_io::write_atomic(&catalog_path, turtle::serialize(catalog).as_bytes())
        .map_err(|e| CliError::new(EXIT_OUTPUT, e))?;
    eprintln!("wrote {}", catalog_path.display());

    if let Some(doc) = directors {
        let directors_path = base.join(&config.output.directors);
        cinegraph_io::write_atomic(&directors_path, turtle::serialize(doc).as_bytes())
            .map_err(|e| CliError::new(EXIT_OUTPUT, e))?;
        eprintln!("wrote {}", directors_path.display());
    }
    Ok(())
}

fn report_merge(result: &ReconResult) {
    let s = &result.summary;
    for w in &s.warnings {
        eprintln!("warning: {} {}: {}", w.record, w.field, w.message);
    }
    eprintln!(
        "merge ({} join): {} streaming rows, {} movie titles indexed",
        result.meta.join, s.streaming_rows, s.movie_rows
    );
    eprintln!(
        "matched {}, unmatched {}, duplicates dropped {}, incomplete dropped {}, retained {}",
        s.joined, s.unmatched, s.duplicate_dropped, s.incomplete_dropped, s.retained
    );
}

fn report_projection(summary: &ProjectionSummary) {
    for w in &summary.warnings {
        eprintln!("warning: {} {}: {}", w.record, w.field, w.message);
    }
    eprintln!(
        "graph: {} rows selected, {} catalog triples",
        summary.selected, summary.catalog_triples
    );
    if let Some(count) = summary.unique_directors {
        eprintln!("directors: {} unique names", count);
    }
}

fn graph_err(e: GraphError) -> CliError {
    let code = match e {
        GraphError::ConfigValidation(_) => EXIT_INVALID_CONFIG,
        GraphError::InvalidIri(_) => EXIT_INPUT,
    };
    CliError::new(code, e.to_string())
}

/// Machine-readable report: `--json` prints to stdout, `--output`
/// writes the same document to a file. Both may be combined.
fn emit_report<T: Serialize>(value: &T, json: bool, output: Option<&Path>) -> Result<(), CliError> {
    if !json && output.is_none() {
        return Ok(());
    }
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::new(EXIT_OUTPUT, format!("JSON serialization error: {e}")))?;
    if let Some(path) = output {
        std::fs::write(path, &rendered)
            .map_err(|e| CliError::new(EXIT_OUTPUT, format!("cannot write report: {e}")))?;
        eprintln!("wrote {}", path.display());
    }
    if json {
        println!("{rendered}");
    }
    Ok(())
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(path: &Path, content: &str) {
        std::fs::write(path, content).unwrap();
    }

    fn seed_sources(dir: &Path) {
        write(
            &dir.join("streaming.csv"),
            "show_id,type,title,director,country,date_added,release_year,rating,duration,listed_in\n\
             s1,Movie,Heat,Michael Mann,United States,\"September 9, 2019\",2015,R,170 min,\"Dramas, Thrillers\"\n\
             s2,TV Show,Friends,,United States,,1994,TV-14,,Comedies\n",
        );
        write(
            &dir.join("basics.tsv"),
            "tconst\ttitleType\tprimaryTitle\tstartYear\n\
             tt0113277\tmovie\tHeat\t2015\n\
             tt0108778\ttvSeries\tFriends\t1994\n",
        );
        write(
            &dir.join("ratings.tsv"),
            "tconst\taverageRating\tnumVotes\ntt0113277\t8.3\t700000\n",
        );
    }

    fn seed_config(dir: &Path, graph_section: &str) -> PathBuf {
        let path = dir.join("cinegraph.toml");
        write(
            &path,
            &format!(
                "[sources]\n\
                 streaming = \"streaming.csv\"\n\
                 basics = \"basics.tsv\"\n\
                 ratings = \"ratings.tsv\"\n\
                 {graph_section}"
            ),
        );
        path
    }

    const GRAPH_SECTION: &str = "[graph]\n\
        base_uri = \"http://example.org/movies.ttl\"\n\
        directors_base_uri = \"http://example.org/directors.ttl\"\n";

    #[test]
    fn full_pipeline_produces_table_and_documents() {
        let dir = tempfile::tempdir().unwrap();
        seed_sources(dir.path());
        let config = seed_config(dir.path(), GRAPH_SECTION);

        cmd_run(&config, false, None).unwrap();

        let table = std::fs::read_to_string(dir.path().join("merged.csv")).unwrap();
        assert!(table.contains("s1,Movie,Heat,Michael Mann"));
        assert!(!table.contains("Friends"));

        let catalog = std::fs::read_to_string(dir.path().join("movies.ttl")).unwrap();
        assert!(catalog.contains("movies:s1"));
        assert!(catalog.contains("\"PT170M\"^^xsd:duration"));
        assert!(catalog.contains("\"8.3\"^^xsd:decimal"));

        let directors = std::fs::read_to_string(dir.path().join("directors.ttl")).unwrap();
        assert!(directors.contains("directors:director_Michael_Mann"));
    }

    #[test]
    fn graph_without_graph_table_is_invalid_config() {
        let dir = tempfile::tempdir().unwrap();
        seed_sources(dir.path());
        let config = seed_config(dir.path(), "");

        let err = cmd_graph(&config, false, None).unwrap_err();
        assert_eq!(err.code, EXIT_INVALID_CONFIG);
    }

    #[test]
    fn merge_then_graph_reuses_the_written_table() {
        let dir = tempfile::tempdir().unwrap();
        seed_sources(dir.path());
        let config = seed_config(dir.path(), GRAPH_SECTION);

        cmd_merge(&config, false, None).unwrap();
        cmd_graph(&config, false, None).unwrap();
        assert!(dir.path().join("movies.ttl").exists());
    }

    #[test]
    fn run_matches_separate_merge_then_graph() {
        // `run` must project from the table it just wrote, not from
        // the rows still in memory, so both invocation styles produce
        // the same bytes even if the table round-trip ever changes.
        let combined = tempfile::tempdir().unwrap();
        seed_sources(combined.path());
        cmd_run(&seed_config(combined.path(), GRAPH_SECTION), false, None).unwrap();

        let staged = tempfile::tempdir().unwrap();
        seed_sources(staged.path());
        let config = seed_config(staged.path(), GRAPH_SECTION);
        cmd_merge(&config, false, None).unwrap();
        cmd_graph(&config, false, None).unwrap();

        for name in ["merged.csv", "movies.ttl", "directors.ttl"] {
            assert_eq!(
                std::fs::read(combined.path().join(name)).unwrap(),
                std::fs::read(staged.path().join(name)).unwrap(),
                "{name} differs between run and merge+graph"
            );
        }
    }

    #[test]
    fn merge_writes_report_file_via_output_flag() {
        let dir = tempfile::tempdir().unwrap();
        seed_sources(dir.path());
        let config = seed_config(dir.path(), GRAPH_SECTION);
        let report = dir.path().join("report.json");

        cmd_merge(&config, false, Some(&report)).unwrap();

        let parsed: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&report).unwrap()).unwrap();
        assert_eq!(parsed["summary"]["retained"], 1);
        assert_eq!(parsed["meta"]["join"], "title");
    }

    #[test]
    fn validate_reports_ok_without_touching_sources() {
        let dir = tempfile::tempdir().unwrap();
        // No source files on disk; validate must not read them.
        let config = seed_config(dir.path(), GRAPH_SECTION);
        cmd_validate(&config).unwrap();
    }

    #[test]
    fn missing_source_file_maps_to_input_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = seed_config(dir.path(), GRAPH_SECTION);
        let err = cmd_merge(&config, false, None).unwrap_err();
        assert_eq!(err.code, EXIT_INPUT);
    }
}
