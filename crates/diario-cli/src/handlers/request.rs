use crate::input::read_source;
use crate::types::OutputFormat;
use anyhow::Result;
use diario_runtime::SearchForm;
use std::path::PathBuf;

pub fn handle(
    start: &str,
    end: &str,
    terms: Vec<String>,
    terms_file: Option<PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    let mut terms_text = terms.join("\n");
    if let Some(path) = terms_file {
        terms_text.push('\n');
        terms_text.push_str(&read_source(&path.to_string_lossy())?);
    }

    let request = SearchForm::new(start, end, terms_text).to_client_request()?;

    match format {
        OutputFormat::Plain => println!("{}", request.to_json()?),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&request)?),
    }

    Ok(())
}
