//! CLI exit code registry.
//!
//! Single source of truth for all CLI exit codes. Exit codes are part of the
//! shell contract — scripts rely on them.
//!
//! | Code | Meaning                                         |
//! |------|-------------------------------------------------|
//! | 0    | Success, nothing to correct                     |
//! | 1    | Differences or unreviewed items found (diff(1)) |
//! | 2    | CLI usage error (bad args)                      |
//! | 3    | Schema error (required column absent)           |
//! | 4    | Missing input at reconcile time                 |
//! | 5    | Runtime/IO error                                |

/// Success - the stores agree with the marked-up base prices.
pub const EXIT_SUCCESS: u8 = 0;

/// Differences or unreviewed items found.
/// Like `diff(1)`, exit 1 means "the sources disagree."
pub const EXIT_FINDINGS: u8 = 1;

/// Usage error - bad arguments, missing required options.
pub const EXIT_USAGE: u8 = 2;

/// A required column is absent from a spreadsheet input.
pub const EXIT_SCHEMA: u8 = 3;

/// A prerequisite table was absent at reconcile time (e.g. every store
/// export was skipped).
pub const EXIT_MISSING_INPUT: u8 = 4;

/// Runtime error - unreadable workbook, write failure.
pub const EXIT_RUNTIME: u8 = 5;
