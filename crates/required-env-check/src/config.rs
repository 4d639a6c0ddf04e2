use clap::Parser;
use required_env::{EnvReader, ReadEnv};

use crate::check::KeySpec;

const ENV_SEPARATOR: &str = "REQUIRED_ENV_SEPARATOR";
const DEFAULT_SEPARATOR: &str = ",";

#[derive(Parser, Debug)]
#[command(name = "required-env-check")]
#[command(
    about = "Fail unless every listed environment variable is set and parses as its type",
    long_about = None
)]
pub struct Args {
    /// Separator for `strings` values (falls back to $REQUIRED_ENV_SEPARATOR, then ",")
    #[arg(long)]
    pub separator: Option<String>,

    /// Log parsed values, not just key names
    #[arg(long)]
    pub show_values: bool,

    /// KEY or KEY:TYPE, TYPE one of bool, bytes, float, duration, int, string, strings, url, addr
    #[arg(required = true, value_name = "KEY[:TYPE]")]
    pub keys: Vec<KeySpec>,
}

#[derive(Debug)]
pub struct CheckConfig {
    pub keys: Vec<KeySpec>,
    pub separator: String,
    pub show_values: bool,
}

pub fn from_args<E: ReadEnv>(args: Args, env: &EnvReader<E>) -> CheckConfig {
    let separator = args
        .separator
        .unwrap_or_else(|| env.string_or(ENV_SEPARATOR, DEFAULT_SEPARATOR));

    CheckConfig {
        keys: args.keys,
        separator,
        show_values: args.show_values,
    }
}
