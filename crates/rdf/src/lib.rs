//! `cinegraph-rdf`: projection of the cleaned film table into Turtle
//! documents.
//!
//! Two documents come out of here: the movie catalog and the director
//! registry. They are generated independently and reference each other
//! only through identifiers minted by `cinegraph_core::ident`, so
//! either can be rebuilt or served on its own.

pub mod config;
pub mod error;
pub mod graph;
pub mod namespace;
pub mod project;
pub mod select;
pub mod turtle;
pub mod vocab;

pub use config::ProjectionConfig;
pub use error::GraphError;
pub use graph::GraphDoc;
pub use namespace::NamespaceManager;
pub use project::{build_director_graph, project, DirectorGraph, ProjectionResult, ProjectionSummary};
pub use select::SelectionPolicy;
