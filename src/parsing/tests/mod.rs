//! Unit tests for the parsing module.
//!
//! Tests are organised by pipeline stage, covering happy paths, degraded
//! paths, and edge cases for all public APIs.

mod json_scan_tests;
mod rules_tests;
mod synthesis_tests;
