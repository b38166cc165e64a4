//! CLI command handlers
//!
//! # Modules
//!
//! - `analyze`: Score text and render per-token results
//! - `classify`: Label a raw score
//! - `lexicon`: Validate AFINN word lists

pub mod analyze;
pub mod classify;
pub mod lexicon;
