//! Unit tests for the schedule module.
//!
//! Tests are organised by domain concept, covering happy paths, error cases,
//! and edge cases for all public APIs.

mod config_file_tests;
mod fixtures;
