//! Free functions over the process environment.
//!
//! Each forwards to [`DEFAULT_READER`]. Code that wants to be testable
//! should take an [`EnvReader`] (or a `ReadEnv`) by reference instead.

use std::net::IpAddr;
use std::time::Duration;

use url::Url;

use crate::error::Result;
use crate::reader::EnvReader;
use crate::source::SystemEnv;

/// Process-wide reader. Immutable, so safe to use from any thread.
pub static DEFAULT_READER: EnvReader<SystemEnv> = EnvReader::system();

pub fn default_reader() -> &'static EnvReader<SystemEnv> {
    &DEFAULT_READER
}

pub fn require_bool(key: &str) -> Result<bool> {
    DEFAULT_READER.require_bool(key)
}

pub fn require_bytes(key: &str) -> Result<Vec<u8>> {
    DEFAULT_READER.require_bytes(key)
}

pub fn require_f64(key: &str) -> Result<f64> {
    DEFAULT_READER.require_f64(key)
}

pub fn require_duration(key: &str) -> Result<Duration> {
    DEFAULT_READER.require_duration(key)
}

pub fn require_int(key: &str) -> Result<i64> {
    DEFAULT_READER.require_int(key)
}

pub fn require_string(key: &str) -> Result<String> {
    DEFAULT_READER.require_string(key)
}

pub fn require_strings(key: &str) -> Result<Vec<String>> {
    DEFAULT_READER.require_strings(key)
}

pub fn require_strings_with(key: &str, sep: &str) -> Result<Vec<String>> {
    DEFAULT_READER.require_strings_with(key, sep)
}

/// See [`EnvReader::require_url`] for how malformed values are reported.
pub fn require_url(key: &str) -> Result<Option<Url>> {
    DEFAULT_READER.require_url(key)
}

pub fn require_url_strict(key: &str) -> Result<Url> {
    DEFAULT_READER.require_url_strict(key)
}

pub fn require_addr(key: &str) -> Result<IpAddr> {
    DEFAULT_READER.require_addr(key)
}
