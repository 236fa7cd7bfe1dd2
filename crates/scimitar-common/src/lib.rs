//! Common types and utilities for the scimitar binding generator.
//!
//! This crate provides foundational types used across all scimitar crates:
//! - Diagnostics surfaced to the collection layer (`Diagnostic`, `DiagnosticCategory`)
//! - Generator limits and thresholds

// Diagnostics - Ambiguity and consistency reports
pub mod diagnostics;
pub use diagnostics::{
    Diagnostic, DiagnosticCategory, diagnostic_codes, diagnostic_messages, format_message,
};

// Centralized limits and thresholds
pub mod limits;
