// Engine module - pure classification, layout and aggregation logic
// This layer sits between raw scraper records (types) and any presentation surface

pub mod aggregate;
pub mod card;
pub mod classifier;
pub mod document;
pub mod error;
pub mod export;
pub mod layout;
pub mod redact;

pub use aggregate::aggregate;
pub use card::{render_card, Card};
pub use classifier::{classify, classify_all, classify_record, presentation};
pub use document::format_document;
pub use error::{Error, Result};
pub use export::{to_csv_string, write_csv, CSV_HEADERS, DEFAULT_EXPORT_FILE};
pub use layout::{render, render_with, Layout, Line, RenderOptions, RenderedDocument};
pub use redact::anonymize_cpf;

use diario_types::{ClassifiedRecord, RawRecord};

// Façade API - Stable public interface for runtime and CLI layers

/// Lay out a batch, preserving input order
pub fn render_all(records: &[ClassifiedRecord], options: &RenderOptions) -> Vec<RenderedDocument> {
    records.iter().map(|r| render_with(r, options)).collect()
}

/// Classify raw records and render the text document view
pub fn document_from_raw(records: Vec<RawRecord>) -> String {
    let classified = classify_all(records);
    format_document(&render_all(&classified, &RenderOptions::default()))
}
