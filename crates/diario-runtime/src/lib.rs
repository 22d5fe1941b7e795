//! Client-side runtime: session state fed by the scraper's event stream,
//! search request construction and user configuration.

pub mod config;
pub mod error;
pub mod search;
pub mod session;

pub use config::{resolve_workspace_path, Config, ExportConfig, RenderConfig, StatsConfig};
pub use error::{Error, Result};
pub use search::{split_terms, SearchForm};
pub use session::{Session, SessionUpdate};
