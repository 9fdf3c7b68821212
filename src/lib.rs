//! Dictask: transcript-to-task parsing pipeline.
//!
//! This crate converts an unstructured natural-language transcript (a spoken
//! or typed sentence) into a structured task draft with bounded, validated
//! fields: title, description, priority, status, and an optional due date.
//! The conversion is total: every input, including the empty string, yields a
//! well-formed draft even when the external completion service fails or is
//! unavailable.
//!
//! # Architecture
//!
//! Dictask follows hexagonal architecture principles:
//!
//! - **Domain**: Pure extraction and normalization logic with no
//!   infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (fixed responders and
//!   failure doubles)
//!
//! # Modules
//!
//! - [`parsing`]: Heuristic extraction, completion-service escalation, and
//!   draft finalization

pub mod parsing;
