mod check;
mod config;

use anyhow::bail;
use clap::Parser;
use required_env::EnvReader;
use tracing::info;

use crate::check::{check_all, report};
use crate::config::{Args, from_args};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let env = EnvReader::system();
    let config = from_args(Args::parse(), &env);

    let outcomes = check_all(&env, &config.keys, &config.separator);
    report(&outcomes, config.show_values);

    let failed = outcomes.iter().filter(|o| !o.passed()).count();
    if failed > 0 {
        bail!(
            "{failed} of {} required environment variables are missing or invalid",
            outcomes.len()
        );
    }

    info!(count = outcomes.len(), "all required environment variables are set");
    Ok(())
}

