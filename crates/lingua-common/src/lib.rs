//! # Lingua Common
//!
//! Shared error types, logging setup and test utilities for the Lingua workspace.
//!
//! Every other crate in the workspace reports failures through [`LinguaError`]
//! and initializes tracing through [`logging`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;
pub mod macros;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::*;
pub use logging::{init_logging, with_startup_logging, LogFormat, LoggingConfig};
