//! Loading a typed config struct at startup, the way callers are expected
//! to use the reader.

use std::net::IpAddr;
use std::time::Duration;

use required_env::source::InMemoryEnv;
use required_env::{EnvReader, ReadEnv, RequireError, Result, required};

#[derive(Debug)]
struct ServerConfig {
    bind: IpAddr,
    port: i64,
    debug: bool,
    timeout: Duration,
    peers: Vec<String>,
    log_level: String,
}

impl ServerConfig {
    fn from_env<E: ReadEnv>(env: &EnvReader<E>) -> Result<Self> {
        Ok(Self {
            bind: env.require_addr("BIND")?,
            port: env.require_int("PORT")?,
            debug: env.require_bool("DEBUG")?,
            timeout: env.require_duration("TIMEOUT")?,
            peers: env.require_strings("PEERS")?,
            log_level: env.string_or("LOG_LEVEL", "info"),
        })
    }
}

fn full_env() -> InMemoryEnv {
    InMemoryEnv::new()
        .with("BIND", "0.0.0.0")
        .with("PORT", "8080")
        .with("DEBUG", "false")
        .with("TIMEOUT", "2m30s")
        .with("PEERS", "a:1,b:2")
}

#[test]
fn loads_every_field() {
    let config = required(ServerConfig::from_env(&EnvReader::new(full_env())));

    assert_eq!(config.bind, "0.0.0.0".parse::<IpAddr>().unwrap());
    assert_eq!(config.port, 8080);
    assert!(!config.debug);
    assert_eq!(config.timeout, Duration::from_secs(150));
    assert_eq!(config.peers, vec!["a:1", "b:2"]);
    assert_eq!(config.log_level, "info");
}

#[test]
fn first_missing_field_is_reported() {
    let env = EnvReader::new(full_env().without("TIMEOUT"));

    let err = ServerConfig::from_env(&env).unwrap_err();
    assert_eq!(err, RequireError::MissingKey("TIMEOUT".to_string()));
    assert_eq!(err.key(), "TIMEOUT");
}

#[test]
fn malformed_address_is_reported_as_invalid_address() {
    let env = EnvReader::new(full_env().with("BIND", "localhost"));

    assert_eq!(
        ServerConfig::from_env(&env).unwrap_err(),
        RequireError::InvalidAddress("BIND".to_string())
    );
}

#[test]
#[should_panic(expected = "Fatal error: PORT is a required environment variable.")]
fn required_aborts_on_unparsable_port() {
    let env = EnvReader::new(full_env().with("PORT", "eighty"));
    required(ServerConfig::from_env(&env));
}
