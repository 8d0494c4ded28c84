//! # Lingua Config
//!
//! Type-safe settings for Lingua: which locales exist, where their documents
//! live, which locale is active at startup and which one to fall back to.
//!
//! Settings are read from a TOML or YAML file, overridden from the
//! environment and validated before anything else starts.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validator;

pub use defaults::*;
pub use loader::*;
pub use schema::*;
pub use validator::*;
