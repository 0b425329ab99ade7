// File I/O operations

pub mod atomic;
pub mod csv;

pub use atomic::write_atomic;
pub use csv::{read_file_as_utf8, read_table, write_table};
