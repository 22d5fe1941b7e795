use crate::types::{LogLevel, OutputFormat, RenderView};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "diario")]
#[command(about = "Classify and render municipal gazette procurement notices", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[arg(
        long,
        global = true,
        help = "Configuration file (default: config.toml in the diario data directory)"
    )]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Show the category assigned to each record")]
    Classify {
        #[arg(help = "JSON array of records or a result message ('-' for stdin)")]
        input: String,
    },

    #[command(about = "Render records as a document or as grid cards")]
    Render {
        #[arg(help = "JSON array of records or a result message ('-' for stdin)")]
        input: String,

        #[arg(long, default_value = "text")]
        view: RenderView,
    },

    #[command(about = "Count records per stats bucket")]
    Stats {
        #[arg(help = "JSON array of records or a result message ('-' for stdin)")]
        input: String,
    },

    #[command(about = "Export records to CSV")]
    Export {
        #[arg(help = "JSON array of records or a result message ('-' for stdin)")]
        input: String,

        #[arg(
            short,
            long,
            help = "Output file (default: export file name from the configuration)"
        )]
        output: Option<PathBuf>,
    },

    #[command(about = "Replay a recorded event stream (one JSON message per line)")]
    Replay {
        #[arg(help = "Recorded stream ('-' for stdin)")]
        stream: String,

        #[arg(long, default_value = "text")]
        view: RenderView,
    },

    #[command(about = "Build the start_search request sent to the scraper")]
    Request {
        #[arg(long, help = "First publication date (YYYY-MM-DD)")]
        start: String,

        #[arg(long, help = "Last publication date (YYYY-MM-DD)")]
        end: String,

        #[arg(long = "term", help = "Search term (repeatable)")]
        terms: Vec<String>,

        #[arg(long, help = "File with one search term per line")]
        terms_file: Option<PathBuf>,
    },
}
