use super::render::print_view;
use super::stats::print_stats;
use crate::input::read_source;
use crate::types::{OutputFormat, RenderView};
use anyhow::{Result, bail};
use diario_runtime::{Config, Session, SessionUpdate};

/// Feed a recorded event stream through a session, then show the final view
pub fn handle(stream: &str, view: RenderView, config: &Config, format: OutputFormat) -> Result<()> {
    let text = read_source(stream)?;
    let mut session = Session::with_options(config.render_options());

    for (n, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let update = session.apply_raw(line);
        tracing::trace!(line = n + 1, ?update, "applied");

        if format == OutputFormat::Plain {
            match update {
                SessionUpdate::Status(message) => println!("» {}", message),
                SessionUpdate::Results { count } => println!("» {} registros recebidos", count),
                SessionUpdate::Completed => println!("» Raspagem concluída!"),
                SessionUpdate::Failed(message) => println!("» Erro: {}", message),
                SessionUpdate::Ignored => {}
            }
        }
    }

    let stats = session.stats();
    match format {
        OutputFormat::Json => {
            let summary = serde_json::json!({
                "status": session.last_status(),
                "error": session.last_error(),
                "in_progress": session.in_progress(),
                "stats": config.stats.enabled.then_some(stats),
                "records": session.records(),
            });
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        OutputFormat::Plain => {
            println!();
            print_view(&session, view, format)?;
            if config.stats.enabled && !stats.is_empty() {
                println!();
                print_stats(&stats);
            }
        }
    }

    if let Some(error) = session.last_error() {
        bail!("Ocorreu um erro durante a raspagem: {}", error);
    }

    Ok(())
}
