use super::print_json;
use crate::input::load_records;
use crate::style;
use crate::types::OutputFormat;
use anyhow::Result;
use diario_engine::classify_all;
use diario_runtime::session::NO_RESULTS;

pub fn handle(input: &str, format: OutputFormat) -> Result<()> {
    let classified = classify_all(load_records(input)?);

    if format == OutputFormat::Json {
        return print_json(&classified);
    }

    if classified.is_empty() {
        println!("{}", NO_RESULTS);
        return Ok(());
    }

    let color = style::color_enabled();
    println!(
        "{:>3}  {:<14} {:<11} {:<15} LABEL",
        "#", "TYPE", "CATEGORY", "ICON"
    );
    for (i, record) in classified.iter().enumerate() {
        println!(
            "{:>3}  {:<14} {:<11} {:<15} {}",
            i + 1,
            record.canonical_type.as_str(),
            record.presentation.visual_category.as_str(),
            record.presentation.icon_tag.as_str(),
            style::badge(
                record.display_label(),
                record.presentation.visual_category,
                color
            )
        );
    }

    Ok(())
}
