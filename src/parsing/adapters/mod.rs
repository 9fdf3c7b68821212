//! Adapter implementations of parsing ports.

pub mod memory;
