//! Domain layer: pure value types for the print facility.
//!
//! No I/O, no logging, no external dependencies — just the sentinel, the
//! slot values, and the typestate options record.

pub mod glue;
pub mod options;

pub use glue::{Glue, Nothing};
pub use options::PrintOptions;
