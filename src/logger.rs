use anyhow::Result;
use log::Level;
use simple_logger::init_with_level;
use std::{env, str::FromStr};

pub fn init() -> Result<()> {
    init_with_level(level_from_env())?;

    Ok(())
}

/// `LOG_LEVEL` wins, then the runner's debug switch, then `Info`.
fn level_from_env() -> Level {
    resolve_level(
        env::var("LOG_LEVEL").ok().as_deref(),
        env::var("RUNNER_DEBUG").ok().as_deref(),
    )
}

fn resolve_level(log_level: Option<&str>, runner_debug: Option<&str>) -> Level {
    if let Some(level) = log_level.and_then(|level| Level::from_str(level.trim()).ok()) {
        return level;
    }

    match runner_debug {
        Some("1") => Level::Debug,
        _ => Level::Info,
    }
}
