use crate::input::load_records;
use crate::types::OutputFormat;
use anyhow::Result;
use diario_runtime::{Config, Session};
use std::path::PathBuf;

pub fn handle(
    input: &str,
    output: Option<PathBuf>,
    config: &Config,
    format: OutputFormat,
) -> Result<()> {
    let mut session = Session::new();
    let count = session.replace(load_records(input)?);

    let out = output.unwrap_or_else(|| PathBuf::from(&config.export.file_name));
    session.export_to(&out)?;

    match format {
        OutputFormat::Json => {
            let summary = serde_json::json!({
                "path": out.display().to_string(),
                "records": count,
            });
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        OutputFormat::Plain => {
            println!("Exported {} records to {}", count, out.display());
        }
    }

    Ok(())
}
