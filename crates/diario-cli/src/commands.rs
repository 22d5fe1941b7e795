use super::args::{Cli, Commands};
use super::handlers;
use anyhow::{Result, bail};
use diario_runtime::Config;
use std::path::Path;

pub fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let format = cli.format;

    match cli.command {
        Commands::Classify { input } => handlers::classify::handle(&input, format),

        Commands::Render { input, view } => handlers::render::handle(&input, view, &config, format),

        Commands::Stats { input } => handlers::stats::handle(&input, format),

        Commands::Export { input, output } => {
            handlers::export::handle(&input, output, &config, format)
        }

        Commands::Replay { stream, view } => {
            handlers::replay::handle(&stream, view, &config, format)
        }

        Commands::Request {
            start,
            end,
            terms,
            terms_file,
        } => handlers::request::handle(&start, &end, terms, terms_file, format),
    }
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let config = match explicit {
        Some(path) => {
            if !path.exists() {
                bail!("Config file not found: {}", path.display());
            }
            Config::load_from(path)?
        }
        None => Config::load()?,
    };
    tracing::debug!(?config, "configuration loaded");
    Ok(config)
}
