//! `cinegraph-core`: shared types for the reconciliation and
//! projection engines.
//!
//! Pure types crate: no file I/O, no engine logic.

pub mod ident;
pub mod model;

pub use ident::{director_fragment, sanitize_name};
pub use model::{split_list, FilmRow, Warning};
