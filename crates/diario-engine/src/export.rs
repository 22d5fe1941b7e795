use std::io::Write;

use csv::{QuoteStyle, Terminator, WriterBuilder};
use diario_types::RawRecord;

use crate::error::Result;

/// Column headers of the spreadsheet export
pub const CSV_HEADERS: [&str; 7] = [
    "Data",
    "Termo",
    "Objeto",
    "Valor",
    "Processo",
    "Contratada",
    "Link PDF",
];

pub const DEFAULT_EXPORT_FILE: &str = "resultados_diario.csv";

/// Write the result set as CSV, one row per record in input order.
///
/// Every cell is quoted and embedded quotes are doubled. Values are written
/// as the scraper delivered them; only absent fields become empty cells.
pub fn write_csv<'a, W, I>(writer: W, records: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a RawRecord>,
{
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    wtr.write_record(CSV_HEADERS)?;

    for record in records {
        wtr.write_record([
            record.date.as_deref().unwrap_or(""),
            record.term.as_deref().unwrap_or(""),
            record.object_text.as_deref().unwrap_or(""),
            record.value.as_deref().unwrap_or(""),
            record.process_number.as_deref().unwrap_or(""),
            record.contractor.as_deref().unwrap_or(""),
            record.link_pdf.as_deref().unwrap_or(""),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn to_csv_string<'a, I>(records: I) -> Result<String>
where
    I: IntoIterator<Item = &'a RawRecord>,
{
    let mut buf = Vec::new();
    write_csv(&mut buf, records)?;
    Ok(String::from_utf8(buf)?)
}
