use std::env;

use super::ReadEnv;

/// Zero-sized; delegates to `std::env`. Usable in `const` and `static`
/// context.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemEnv;

impl ReadEnv for SystemEnv {
    #[inline]
    fn var(&self, key: &str) -> Result<String, env::VarError> {
        env::var(key)
    }
}
