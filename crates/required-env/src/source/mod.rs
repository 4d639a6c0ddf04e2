//! Where raw values come from.
//!
//! Readers never touch `std::env` directly; they go through [`ReadEnv`] so
//! tests can swap the process environment for a fixed map.
//!
//! ```
//! use required_env::source::{ReadEnv, SystemEnv};
//!
//! fn home<E: ReadEnv>(env: &E) -> Option<String> {
//!     env.var("HOME").ok()
//! }
//!
//! let _ = home(&SystemEnv);
//! ```
//!
//! ```ignore
//! use required_env::source::InMemoryEnv;
//!
//! let env = InMemoryEnv::new().with("HOME", "/home/test");
//! assert_eq!(home(&env).as_deref(), Some("/home/test"));
//! ```

mod in_memory;
mod read_env;
mod system;

#[cfg(any(test, feature = "test-support"))]
pub use in_memory::InMemoryEnv;
pub use read_env::ReadEnv;
pub use system::SystemEnv;
