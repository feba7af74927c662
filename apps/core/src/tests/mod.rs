//! Test Module
//!
//! Cross-module test suite for the triage pipeline.
//!
//! ## Test Categories
//! - `triage_tests`: normalization, classification ladder, confidence bounds
//! - `text_extract_tests`: MIME detection, encoding ladder, PDF strategy chain
//! - `pipeline_tests`: end-to-end processor behavior, backend on/off paths

pub mod text_extract_tests;
pub mod triage_tests;
