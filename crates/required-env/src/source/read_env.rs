use std::env;
use std::rc::Rc;
use std::sync::Arc;

/// A read-only key/value lookup shaped like [`std::env::var`].
///
/// Implementations must not mutate anything observable; a reader may call
/// `var` any number of times for the same key.
pub trait ReadEnv {
    fn var(&self, key: &str) -> Result<String, env::VarError>;
}

impl<E: ReadEnv + ?Sized> ReadEnv for &E {
    #[inline]
    fn var(&self, key: &str) -> Result<String, env::VarError> {
        (**self).var(key)
    }
}

impl<E: ReadEnv + ?Sized> ReadEnv for Arc<E> {
    #[inline]
    fn var(&self, key: &str) -> Result<String, env::VarError> {
        (**self).var(key)
    }
}

impl<E: ReadEnv + ?Sized> ReadEnv for Rc<E> {
    #[inline]
    fn var(&self, key: &str) -> Result<String, env::VarError> {
        (**self).var(key)
    }
}

impl<E: ReadEnv + ?Sized> ReadEnv for Box<E> {
    #[inline]
    fn var(&self, key: &str) -> Result<String, env::VarError> {
        (**self).var(key)
    }
}
