pub mod classify;
pub mod export;
pub mod render;
pub mod replay;
pub mod request;
pub mod stats;

use anyhow::Result;
use serde::Serialize;

pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
