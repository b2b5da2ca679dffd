//! printkit core — Python-style `print` with keyword arguments.
//!
//! This crate provides the domain and application layers for the printkit
//! facility, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │   print! / raw_print! / print_no_end!   │
//! │    (Argument grammar, macros module)    │
//! └──────────────────┬──────────────────────┘
//!                    │ expands to
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      PrintOptions (typestate record)    │
//! │    Tracks set slots at compile time     │
//! └──────────────────┬──────────────────────┘
//!                    │ finalized into
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │          Emitter (application)          │
//! │  separator state machine, terminator,   │
//! │      flush, first-error latching        │
//! └──────────────────┬──────────────────────┘
//!                    │ writes through
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Ports: Sink, FlushStrategy         │
//! │   (implemented by printkit-sinks and    │
//! │            test doubles)                │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```no_run
//! use printkit_core::prelude::*;
//! use printkit_core::{print, raw_print};
//!
//! # fn demo() -> PrintResult<()> {
//! print!("Hello, world!")?;            // "Hello, world!\n" to stdout
//!
//! let a = 1;
//! let b = 4;
//! print!(a, b, sep = "; ")?;           // "1; 4\n"
//! print!("a", nothing, "b", sep = "+", end = nothing)?; // "ab"
//! raw_print!("pure", "concatenation")?;
//! # Ok(())
//! # }
//! ```
//!
//! Importing `print!` from this crate shadows the std prelude macro of the
//! same name at the use site.
//!
//! Keyword-argument misuse — a duplicate slot, a non-displayable value, a
//! `file` that is not a [`Sink`] — is rejected at compile time. The only
//! runtime failure mode is a sink write error, returned as [`PrintError`].

// Domain layer: sentinel, slot values, typestate options record
pub mod domain;

// Application layer: emission pipeline and ports
pub mod application;

// Error types
pub mod error;

// The print!/raw_print!/print_no_end! front-end
pub mod macros;

pub use application::Emitter;
pub use application::ports::{FlushSink, FlushStrategy, Sink};
pub use domain::{Glue, Nothing, PrintOptions};
pub use error::{PrintError, PrintResult};

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        Emitter,
        ports::{FlushSink, FlushStrategy, Sink},
    };
    pub use crate::domain::{Glue, Nothing, PrintOptions};
    pub use crate::error::{PrintError, PrintResult};
    pub use crate::{print, print_no_end, raw_print};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
