//! # required-env
//!
//! Typed accessors for environment variables that must be set.
//!
//! | Concern | Item |
//! |---------|------|
//! | Source abstraction | [`ReadEnv`], [`SystemEnv`], `InMemoryEnv`* |
//! | Required lookups | [`EnvReader::require_int`] and friends, or the free functions |
//! | Optional lookups | [`EnvReader::int_or`] and friends |
//! | Errors | [`RequireError`] |
//! | Fail fast | [`required`], [`check`] |
//!
//! *Available with `#[cfg(test)]` or the `"test-support"` feature.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use required_env::{EnvReader, ReadEnv, Result, required};
//!
//! struct ServerConfig {
//!     port: i64,
//!     timeout: Duration,
//! }
//!
//! fn load<E: ReadEnv>(env: &EnvReader<E>) -> Result<ServerConfig> {
//!     Ok(ServerConfig {
//!         port: env.require_int("PORT")?,
//!         timeout: env.require_duration("TIMEOUT")?,
//!     })
//! }
//!
//! let config = required(load(required_env::default_reader()));
//! ```
//!
//! Every required lookup fails with [`RequireError::MissingKey`] when the
//! key is unset, empty, or does not parse. Addresses fail with
//! [`RequireError::InvalidAddress`] instead, and
//! [`require_url`](EnvReader::require_url) reports a malformed value as
//! `Ok(None)`.

pub mod error;
pub mod fatal;
mod fallback;
pub mod global;
mod parse;
pub mod reader;
pub mod source;

pub use error::{RequireError, Result};
pub use fatal::{check, required};
pub use global::{
    DEFAULT_READER, default_reader, require_addr, require_bool, require_bytes, require_duration,
    require_f64, require_int, require_string, require_strings, require_strings_with, require_url,
    require_url_strict,
};
pub use reader::EnvReader;
pub use source::{ReadEnv, SystemEnv};
