use std::fmt;
use std::str::FromStr;

use required_env::{EnvReader, ReadEnv, RequireError};
use tracing::{error, info};

/// The type a key's value must parse as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Bool,
    Bytes,
    Float,
    Duration,
    Int,
    String,
    Strings,
    Url,
    Addr,
}

impl ValueKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Bytes => "bytes",
            Self::Float => "float",
            Self::Duration => "duration",
            Self::Int => "int",
            Self::String => "string",
            Self::Strings => "strings",
            Self::Url => "url",
            Self::Addr => "addr",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValueKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bool" => Ok(Self::Bool),
            "bytes" => Ok(Self::Bytes),
            "float" => Ok(Self::Float),
            "duration" => Ok(Self::Duration),
            "int" => Ok(Self::Int),
            "string" => Ok(Self::String),
            "strings" => Ok(Self::Strings),
            "url" => Ok(Self::Url),
            "addr" => Ok(Self::Addr),
            other => Err(format!("unknown type '{other}'")),
        }
    }
}

/// `KEY` or `KEY:TYPE`; a bare key is checked as a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySpec {
    pub key: String,
    pub kind: ValueKind,
}

impl FromStr for KeySpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, kind) = match s.split_once(':') {
            Some((key, kind)) => (key, kind.parse()?),
            None => (s, ValueKind::String),
        };
        if key.is_empty() {
            return Err(format!("missing key in '{s}'"));
        }
        Ok(Self {
            key: key.to_string(),
            kind,
        })
    }
}

#[derive(Debug)]
pub struct Outcome {
    pub spec: KeySpec,
    /// The parsed value rendered for display.
    pub result: Result<String, RequireError>,
}

impl Outcome {
    pub fn passed(&self) -> bool {
        self.result.is_ok()
    }
}

pub fn check_all<E: ReadEnv>(
    env: &EnvReader<E>,
    specs: &[KeySpec],
    separator: &str,
) -> Vec<Outcome> {
    specs
        .iter()
        .map(|spec| Outcome {
            spec: spec.clone(),
            result: check_one(env, spec, separator),
        })
        .collect()
}

// URLs go through the strict accessor: a preflight check should not pass a
// value the service will be unable to use.
fn check_one<E: ReadEnv>(
    env: &EnvReader<E>,
    spec: &KeySpec,
    separator: &str,
) -> Result<String, RequireError> {
    let key = spec.key.as_str();
    match spec.kind {
        ValueKind::Bool => env.require_bool(key).map(|v| v.to_string()),
        ValueKind::Bytes => env.require_bytes(key).map(|v| format!("{} bytes", v.len())),
        ValueKind::Float => env.require_f64(key).map(|v| v.to_string()),
        ValueKind::Duration => env.require_duration(key).map(|v| format!("{v:?}")),
        ValueKind::Int => env.require_int(key).map(|v| v.to_string()),
        ValueKind::String => env.require_string(key),
        ValueKind::Strings => env
            .require_strings_with(key, separator)
            .map(|v| format!("{v:?}")),
        ValueKind::Url => env.require_url_strict(key).map(String::from),
        ValueKind::Addr => env.require_addr(key).map(|v| v.to_string()),
    }
}

pub fn report(outcomes: &[Outcome], show_values: bool) {
    for outcome in outcomes {
        let key = outcome.spec.key.as_str();
        let kind = outcome.spec.kind.as_str();
        match &outcome.result {
            Ok(value) if show_values => info!(key, kind, value = value.as_str(), "ok"),
            Ok(_) => info!(key, kind, "ok"),
            Err(e) => error!(key, kind, error = %e, "check failed"),
        }
    }
}
