use std::io::Write;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;
use trv_core::config::{DEFAULT_GATEWAY_URL, GATEWAY_URL_ENV};
use trv_core::{ClientConfig, HttpExample, ResponseMode};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    Text,
    Json,
    Post,
}

impl From<Mode> for ResponseMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Text => ResponseMode::Text,
            Mode::Json => ResponseMode::Json,
            Mode::Post => ResponseMode::Post,
        }
    }
}

/// Issue an example request against the TRV gateway.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Gateway base URL; `/trv` is appended.
    #[arg(long, env = GATEWAY_URL_ENV, default_value = DEFAULT_GATEWAY_URL)]
    base_url: String,

    /// Which example request to run.
    #[arg(long, value_enum, default_value_t = Mode::Text)]
    mode: Mode,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let example = HttpExample::new(ClientConfig::new(args.base_url));
    let mut stdout = std::io::stdout().lock();

    if let Err(err) = example.run(args.mode.into(), &mut stdout) {
        writeln!(stdout, "{err}")?;
    }
    Ok(())
}
