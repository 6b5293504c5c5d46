mod session;

use std::env;
use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::{Context, Result};
use classical_engine::{ClassicalEngine, EngineConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

use session::{Flow, UciSession};

const CONFIG_ENV: &str = "CHESS_ENGINE_CONFIG";
const DEFAULT_CONFIG: &str = "engine.toml";

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only UCI traffic.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if env::args().nth(1).as_deref() == Some("--print-config") {
        print!("{}", EngineConfig::default().to_toml_string()?);
        return Ok(());
    }

    let config = load_config()?;
    info!(level = %config.level, time_limit_ms = config.time_limit_ms, "engine ready");

    let mut session = UciSession::new(ClassicalEngine::from_config(&config));
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        if session.handle_line(&line, &mut stdout)? == Flow::Quit {
            break;
        }
    }
    Ok(())
}

/// Explicit path from the environment must exist; the default file is
/// optional.
fn load_config() -> Result<EngineConfig> {
    if let Some(path) = env::var_os(CONFIG_ENV).map(PathBuf::from) {
        return EngineConfig::load(&path)
            .with_context(|| format!("loading {CONFIG_ENV}={}", path.display()));
    }

    let default = PathBuf::from(DEFAULT_CONFIG);
    if default.exists() {
        info!(path = %default.display(), "loading config");
        return Ok(EngineConfig::load(&default)?);
    }
    Ok(EngineConfig::default())
}
