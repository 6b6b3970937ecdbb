//! Report rendering for a finished scan.
//!
//! # Submodules
//!
//! - [`report`]: Human readable layouts (compact for preview runs, verbose for full-text runs)
//! - [`json`]: Machine readable report for `--json`
//!
//! Text reports are `Display` types and the JSON report is a string; printing
//! is left to `main`.

pub mod json;
pub mod report;
