use super::print_json;
use crate::input::load_records;
use crate::types::OutputFormat;
use anyhow::Result;
use diario_engine::{aggregate, classify_all};
use diario_runtime::session::NO_RESULTS;
use diario_types::AggregateStats;

pub fn handle(input: &str, format: OutputFormat) -> Result<()> {
    let stats = aggregate(&classify_all(load_records(input)?));

    match format {
        OutputFormat::Json => print_json(&stats),
        OutputFormat::Plain => {
            if stats.is_empty() {
                println!("{}", NO_RESULTS);
            } else {
                print_stats(&stats);
            }
            Ok(())
        }
    }
}

pub(crate) fn print_stats(stats: &AggregateStats) {
    println!("Contratos:    {}", stats.contratos);
    println!("Pregões:      {}", stats.pregoes);
    println!("Aditamentos:  {}", stats.aditamentos);
    println!("Outros:       {}", stats.outros);
    println!("Total:        {}", stats.total);
}
