//! Fail-fast helpers for startup code.
//!
//! Lookups only ever return errors; turning one into a process abort is the
//! caller's decision, made by routing the result through [`required`] or
//! [`check`].

use std::fmt::Display;

use tracing::error;

/// Unwraps `result`, aborting with `Fatal error: <error>` on `Err`.
///
/// ```should_panic
/// use required_env::{EnvReader, required};
///
/// let port = required(EnvReader::system().require_int("REQUIRED_ENV_DOC_UNSET_PORT"));
/// ```
#[track_caller]
pub fn required<T, E: Display>(result: Result<T, E>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => abort(&e),
    }
}

/// Aborts with `Fatal error: <error>` when `error` is `Some`; does nothing
/// otherwise.
#[track_caller]
pub fn check<E: Display>(error: Option<E>) {
    if let Some(e) = error {
        abort(&e);
    }
}

#[track_caller]
fn abort(e: &dyn Display) -> ! {
    error!(error = %e, "required configuration is unavailable");
    panic!("Fatal error: {e}");
}
