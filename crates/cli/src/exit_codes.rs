//! CLI Exit Code Registry
//!
//! This is the single source of truth for all CLI exit codes.
//! Exit codes are part of the shell contract; scripts rely on them.
//!
//! # Exit Code Ranges
//!
//! | Code | Domain    | Description                              |
//! |------|-----------|------------------------------------------|
//! | 0    | Universal | Success                                  |
//! | 1    | Universal | General error (unspecified)              |
//! | 2    | Universal | CLI usage error (bad args, missing file) |
//! | 3    | Pipeline  | Invalid configuration                    |
//! | 4    | Pipeline  | Input read or parse failure              |
//! | 5    | Pipeline  | Output write failure                     |
//!
//! # Adding New Exit Codes
//!
//! 1. Add the constant below
//! 2. Document what triggers it
//! 3. Update the table above
//! 4. Wire it into the relevant command's error handling

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure.
/// Avoid using this; prefer a specific error code.
#[allow(dead_code)]
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments, missing required options.
pub const EXIT_USAGE: u8 = 2;

/// Configuration parsed but failed validation, or did not parse at all.
pub const EXIT_INVALID_CONFIG: u8 = 3;

/// A source file could not be read or its header was malformed.
pub const EXIT_INPUT: u8 = 4;

/// An output document could not be written.
pub const EXIT_OUTPUT: u8 = 5;
