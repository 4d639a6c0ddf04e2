//! Optional lookups that fall back to a caller-supplied value.
//!
//! These never fail. An absent or empty key silently yields the fallback;
//! a present value that does not parse yields the fallback with a `warn`
//! event.

use std::net::IpAddr;
use std::time::Duration;

use tracing::warn;
use url::Url;

use crate::parse;
use crate::reader::EnvReader;
use crate::source::ReadEnv;

impl<E: ReadEnv> EnvReader<E> {
    fn or_fallback<T>(&self, key: &str, fallback: T, parse: impl FnOnce(&str) -> Option<T>) -> T {
        let Some(raw) = self.lookup(key) else {
            return fallback;
        };
        match parse(&raw) {
            Some(value) => value,
            None => {
                warn!("{key}={raw:?} is not valid, using fallback");
                fallback
            }
        }
    }

    pub fn bool_or(&self, key: &str, fallback: bool) -> bool {
        self.or_fallback(key, fallback, parse::parse_bool)
    }

    pub fn bytes_or(&self, key: &str, fallback: &[u8]) -> Vec<u8> {
        self.lookup(key)
            .map_or_else(|| fallback.to_vec(), String::into_bytes)
    }

    pub fn f64_or(&self, key: &str, fallback: f64) -> f64 {
        self.or_fallback(key, fallback, parse::parse_f64)
    }

    pub fn duration_or(&self, key: &str, fallback: Duration) -> Duration {
        self.or_fallback(key, fallback, parse::parse_duration)
    }

    pub fn int_or(&self, key: &str, fallback: i64) -> i64 {
        self.or_fallback(key, fallback, parse::parse_int)
    }

    pub fn string_or(&self, key: &str, fallback: &str) -> String {
        self.lookup(key).unwrap_or_else(|| fallback.to_string())
    }

    /// Comma-separated list, or `fallback` when the key is unset.
    pub fn strings_or<S: AsRef<str>>(&self, key: &str, fallback: &[S]) -> Vec<String> {
        self.lookup(key).map_or_else(
            || fallback.iter().map(|s| s.as_ref().to_string()).collect(),
            |raw| parse::split_list(&raw, parse::DEFAULT_SEPARATOR),
        )
    }

    pub fn url_or(&self, key: &str, fallback: Url) -> Url {
        self.or_fallback(key, fallback, |raw| Url::parse(raw).ok())
    }

    pub fn addr_or(&self, key: &str, fallback: IpAddr) -> IpAddr {
        self.or_fallback(key, fallback, |raw| raw.parse().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::InMemoryEnv;
    use std::net::Ipv4Addr;

    fn reader(pairs: &[(&str, &str)]) -> EnvReader<InMemoryEnv> {
        EnvReader::new(pairs.iter().copied().collect())
    }

    #[test]
    fn absent_and_empty_use_fallback() {
        for env in [reader(&[]), reader(&[("K", "")])] {
            assert!(env.bool_or("K", true));
            assert_eq!(env.bytes_or("K", b"fb"), b"fb".to_vec());
            assert_eq!(env.f64_or("K", 1.5), 1.5);
            assert_eq!(env.duration_or("K", Duration::from_secs(3)), Duration::from_secs(3));
            assert_eq!(env.int_or("K", 9), 9);
            assert_eq!(env.string_or("K", "fb"), "fb");
            assert_eq!(env.strings_or("K", &["a", "b"]), vec!["a", "b"]);
            assert_eq!(
                env.addr_or("K", IpAddr::V4(Ipv4Addr::LOCALHOST)),
                IpAddr::V4(Ipv4Addr::LOCALHOST)
            );
        }
    }

    #[test]
    fn invalid_values_use_fallback() {
        let env = reader(&[("K", "garbage")]);

        assert!(!env.bool_or("K", false));
        assert_eq!(env.f64_or("K", 0.5), 0.5);
        assert_eq!(env.duration_or("K", Duration::from_millis(10)), Duration::from_millis(10));
        assert_eq!(env.int_or("K", -1), -1);
        assert_eq!(
            env.addr_or("K", IpAddr::V4(Ipv4Addr::UNSPECIFIED)),
            IpAddr::V4(Ipv4Addr::UNSPECIFIED)
        );

        let fallback = Url::parse("http://localhost:4222").unwrap();
        assert_eq!(env.url_or("K", fallback.clone()), fallback);
    }

    #[test]
    fn valid_values_win_over_fallback() {
        let env = reader(&[
            ("BOOL", "F"),
            ("BYTES", "raw"),
            ("FLOAT", "0.25"),
            ("DURATION", "1m30s"),
            ("INT", "-12"),
            ("STRING", "value"),
            ("LIST", "x,y"),
            ("URL", "nats://broker:4222"),
            ("ADDR", "192.168.1.10"),
        ]);

        assert!(!env.bool_or("BOOL", true));
        assert_eq!(env.bytes_or("BYTES", b""), b"raw".to_vec());
        assert_eq!(env.f64_or("FLOAT", 0.0), 0.25);
        assert_eq!(env.duration_or("DURATION", Duration::ZERO), Duration::from_secs(90));
        assert_eq!(env.int_or("INT", 0), -12);
        assert_eq!(env.string_or("STRING", "fb"), "value");
        assert_eq!(env.strings_or::<&str>("LIST", &[]), vec!["x", "y"]);
        assert_eq!(
            env.url_or("URL", Url::parse("http://fallback").unwrap()).as_str(),
            "nats://broker:4222"
        );
        assert_eq!(
            env.addr_or("ADDR", IpAddr::V4(Ipv4Addr::LOCALHOST)),
            IpAddr::V4(Ipv4Addr::new(192, 168, 1, 10))
        );
    }
}
