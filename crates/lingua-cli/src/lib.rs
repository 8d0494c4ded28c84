//! # Lingua CLI
//!
//! Command-line access to Lingua translation catalogs: resolve a path, list
//! catalog keys, or translate a file of validation errors.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod commands;

pub use cli::{Cli, Command};
pub use commands::execute;
