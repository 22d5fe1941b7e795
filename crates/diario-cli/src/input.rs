use anyhow::{Context, Result, bail};
use diario_types::{RawRecord, StreamMessage};
use std::io::Read;

/// Read a file, or stdin when `path` is `-`
pub fn read_source(path: &str) -> Result<String> {
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))
}

/// Load a result set from a bare JSON array or a `result` stream message
pub fn load_records(path: &str) -> Result<Vec<RawRecord>> {
    let text = read_source(path)?;
    parse_records(&text).with_context(|| format!("Invalid input in {}", path))
}

fn parse_records(text: &str) -> Result<Vec<RawRecord>> {
    if text.trim_start().starts_with('[') {
        return Ok(serde_json::from_str(text)?);
    }

    match StreamMessage::parse(text)? {
        StreamMessage::Result { data } => Ok(data.unwrap_or_default()),
        _ => bail!("expected a JSON array of records or a result message"),
    }
}
