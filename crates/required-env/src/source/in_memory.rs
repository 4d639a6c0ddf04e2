#[cfg(any(test, feature = "test-support"))]
use std::collections::HashMap;
#[cfg(any(test, feature = "test-support"))]
use std::env;

#[cfg(any(test, feature = "test-support"))]
use super::ReadEnv;

/// Fixed key/value table that never touches the process environment.
///
/// Built up front and immutable afterwards, so it is `Send + Sync` and can
/// back a reader shared across threads.
///
/// ```ignore
/// use required_env::source::InMemoryEnv;
///
/// let env = InMemoryEnv::new()
///     .with("PORT", "8080")
///     .with("DEBUG", "true");
///
/// let env: InMemoryEnv = [("PORT", "8080")].into_iter().collect();
/// ```
#[cfg(any(test, feature = "test-support"))]
#[derive(Debug, Clone, Default)]
pub struct InMemoryEnv {
    vars: HashMap<String, String>,
}

#[cfg(any(test, feature = "test-support"))]
impl InMemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn without(mut self, key: &str) -> Self {
        self.vars.remove(key);
        self
    }

    pub fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

#[cfg(any(test, feature = "test-support"))]
impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for InMemoryEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
impl ReadEnv for InMemoryEnv {
    fn var(&self, key: &str) -> Result<String, env::VarError> {
        self.vars
            .get(key)
            .cloned()
            .ok_or(env::VarError::NotPresent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_sets_value() {
        let env = InMemoryEnv::new().with("TEST_VAR", "test_value");
        assert_eq!(env.var("TEST_VAR").unwrap(), "test_value");
    }

    #[test]
    fn unknown_key_is_not_present() {
        let env = InMemoryEnv::new();
        assert!(matches!(
            env.var("NONEXISTENT"),
            Err(std::env::VarError::NotPresent)
        ));
    }

    #[test]
    fn later_with_overwrites() {
        let env = InMemoryEnv::new().with("KEY", "v1").with("KEY", "v2");
        assert_eq!(env.var("KEY").unwrap(), "v2");
        assert_eq!(env.len(), 1);
    }

    #[test]
    fn without_removes_key() {
        let env = InMemoryEnv::new().with("KEY", "v").without("KEY");
        assert!(!env.contains("KEY"));
        assert!(env.is_empty());
    }

    #[test]
    fn empty_value_is_present() {
        let env = InMemoryEnv::new().with("EMPTY", "");
        assert_eq!(env.var("EMPTY").unwrap(), "");
    }

    #[test]
    fn collects_from_pairs() {
        let env: InMemoryEnv = [("A", "1"), ("B", "2")].into_iter().collect();
        assert_eq!(env.var("A").unwrap(), "1");
        assert_eq!(env.var("B").unwrap(), "2");
    }

    #[test]
    fn is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<InMemoryEnv>();
    }
}
