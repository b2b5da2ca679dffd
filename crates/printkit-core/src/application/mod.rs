//! Application layer for printkit.
//!
//! This layer contains:
//! - The emission pipeline ([`Emitter`]) — the one use case of this crate
//! - The driven ports ([`ports::Sink`], [`ports::FlushStrategy`]) implemented
//!   by `printkit-sinks` and by test doubles

pub mod emitter;
pub mod ports;

pub use emitter::Emitter;
