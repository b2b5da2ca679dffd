//! Sink adapters for printkit.
//!
//! This crate implements the `Sink` port defined in
//! `printkit_core::application::ports`. It contains every concrete output
//! destination: process streams, generic `io::Write` / `fmt::Write`
//! bridges, and an in-memory sink for tests.

pub mod memory;
pub mod standard;
pub mod write;

// Re-export commonly used sinks
pub use memory::MemorySink;
pub use standard::{StderrSink, StdoutSink};
pub use write::{FmtSink, IoSink};
