use std::env::VarError;
use std::net::IpAddr;
use std::time::Duration;

use tracing::{debug, warn};
use url::Url;

use crate::error::{RequireError, Result};
use crate::parse;
use crate::source::{ReadEnv, SystemEnv};

/// Typed, required lookups against an environment source.
///
/// Every `require_*` method follows the same steps: fetch the raw value,
/// treat an absent or empty value as missing, then parse it. A value that
/// fails to parse is reported as [`RequireError::MissingKey`] as well,
/// except for addresses ([`RequireError::InvalidAddress`]) and URLs (see
/// [`require_url`](Self::require_url)).
///
/// The reader holds nothing but its source and never mutates it, so one
/// instance can be shared freely.
///
/// ```no_run
/// use required_env::{EnvReader, RequireError};
///
/// let env = EnvReader::system();
/// let port = env.require_int("PORT")?;
/// let peers = env.require_strings_with("PEERS", ";")?;
/// # let _ = (port, peers);
/// # Ok::<(), RequireError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvReader<E = SystemEnv> {
    source: E,
}

impl EnvReader<SystemEnv> {
    /// Reader over the process environment.
    pub const fn system() -> Self {
        Self::new(SystemEnv)
    }
}

impl<E> EnvReader<E> {
    pub const fn new(source: E) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &E {
        &self.source
    }

    pub fn into_source(self) -> E {
        self.source
    }
}

impl<E: ReadEnv> EnvReader<E> {
    /// Raw value for `key`, or `None` when it is absent or empty.
    pub(crate) fn lookup(&self, key: &str) -> Option<String> {
        match self.source.var(key) {
            Ok(value) if !value.is_empty() => Some(value),
            Ok(_) | Err(VarError::NotPresent) => None,
            Err(VarError::NotUnicode(_)) => {
                debug!(key, "environment value is not valid unicode, treating as unset");
                None
            }
        }
    }

    fn require_with<T>(&self, key: &str, parse: impl FnOnce(&str) -> Option<T>) -> Result<T> {
        self.lookup(key)
            .as_deref()
            .and_then(parse)
            .ok_or_else(|| RequireError::missing(key))
    }

    pub fn require_bool(&self, key: &str) -> Result<bool> {
        self.require_with(key, parse::parse_bool)
    }

    /// The raw value's UTF-8 bytes; no decoding is applied.
    pub fn require_bytes(&self, key: &str) -> Result<Vec<u8>> {
        self.require_with(key, |raw| Some(raw.as_bytes().to_vec()))
    }

    pub fn require_f64(&self, key: &str) -> Result<f64> {
        self.require_with(key, parse::parse_f64)
    }

    /// Accepts literals such as `5s`, `300ms` or `2h45m`.
    pub fn require_duration(&self, key: &str) -> Result<Duration> {
        self.require_with(key, parse::parse_duration)
    }

    pub fn require_int(&self, key: &str) -> Result<i64> {
        self.require_with(key, parse::parse_int)
    }

    pub fn require_string(&self, key: &str) -> Result<String> {
        self.lookup(key).ok_or_else(|| RequireError::missing(key))
    }

    /// Comma-separated list. A value without commas yields one element.
    pub fn require_strings(&self, key: &str) -> Result<Vec<String>> {
        self.require_strings_with(key, parse::DEFAULT_SEPARATOR)
    }

    /// List split on `sep`. Segments are not trimmed and empty segments are
    /// kept.
    pub fn require_strings_with(&self, key: &str, sep: &str) -> Result<Vec<String>> {
        self.require_with(key, |raw| Some(parse::split_list(raw, sep)))
    }

    /// Only an absent or empty value is an error here. A value that is
    /// present but does not parse as an absolute URL yields `Ok(None)`
    /// and a `warn` event; use [`require_url_strict`](Self::require_url_strict)
    /// to get an error instead.
    ///
    /// Relative references have no base to resolve against, so they take
    /// the `Ok(None)` path too:
    ///
    /// | Raw value | Result |
    /// |-----------|--------|
    /// | `https://example.com/api/v1` | `Ok(Some(url))` |
    /// | `/api/v1` | `Ok(None)` |
    /// | unset or empty | `Err(MissingKey)` |
    pub fn require_url(&self, key: &str) -> Result<Option<Url>> {
        let raw = self.require_string(key)?;
        match Url::parse(&raw) {
            Ok(url) => Ok(Some(url)),
            Err(error) => {
                warn!(key, %error, "environment value is not a valid URL, returning no URL");
                Ok(None)
            }
        }
    }

    pub fn require_url_strict(&self, key: &str) -> Result<Url> {
        let raw = self.require_string(key)?;
        Url::parse(&raw).map_err(|source| RequireError::InvalidUrl {
            key: key.to_string(),
            source,
        })
    }

    /// IPv4 or IPv6 literal. A present but malformed value fails with
    /// [`RequireError::InvalidAddress`].
    pub fn require_addr(&self, key: &str) -> Result<IpAddr> {
        let raw = self.require_string(key)?;
        raw.parse()
            .map_err(|_| RequireError::InvalidAddress(key.to_string()))
    }
}
