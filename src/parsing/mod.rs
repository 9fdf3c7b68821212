//! Transcript parsing for Dictask.
//!
//! This module implements the full transcript-to-task pipeline: a
//! deterministic heuristic extractor, a completeness gate, a
//! completion-service extractor used only as escalation, and a finalization
//! stage that guarantees well-formed output regardless of which path produced
//! it. The module follows hexagonal architecture:
//!
//! - Domain types and pure extraction logic in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
