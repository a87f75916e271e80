//! # dynect-cli
//!
//! Command-line listing of DynECT zones and nodes (`pnz`).
//!
//! The binary logs in with credentials from a key-value file, walks the
//! account's zones (and nodes with `-n`), writes the listing to stdout or a
//! file, and logs out.

pub mod cli;
pub mod config;
pub mod output;

pub use cli::run;
