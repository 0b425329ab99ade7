//! `cinegraph-recon`: reconciliation engine for the two film catalogs.
//!
//! Pure engine crate: receives pre-read source data, returns a cleaned
//! table plus a summary. No CLI or file-path dependencies.

pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod source;

pub use config::{JoinMode, ReconConfig};
pub use engine::reconcile;
pub use error::ReconError;
pub use model::{ReconInput, ReconResult, ReconSummary};
