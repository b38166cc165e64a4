//! Integration tests for polarity-core.
//!
//! Exercise the public API end to end against a deterministic fake lexicon,
//! the built-in word list, and lexicon/config files on disk.

mod helpers;
mod concurrency_tests;
mod scoring_tests;
