use std::fs::File;
use std::io::Write;
use std::path::Path;

use diario_engine::{
    aggregate, classify_all, format_document, render_all, render_card, write_csv, Card,
    RenderOptions, RenderedDocument,
};
use diario_types::{
    AggregateStats, ClassifiedRecord, ClientRequest, RawRecord, SearchRequest, StreamMessage,
};

use crate::{Error, Result};

pub const STATUS_SEARCHING: &str = "Pesquisando...";
pub const STATUS_COMPLETE: &str = "Raspagem concluída!";
pub const STATUS_CLEARED: &str = "Resultados limpos.";
pub const UNKNOWN_ERROR: &str = "Erro desconhecido";
pub const NOTHING_TO_EXPORT: &str = "Nada para exportar!";
pub const NO_RESULTS: &str = "Nenhum resultado encontrado.";

/// What a stream message changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionUpdate {
    /// Status line replaced
    Status(String),
    /// Result set replaced
    Results { count: usize },
    /// Search finished
    Completed,
    /// Search failed with the shown message
    Failed(String),
    /// Message could not be decoded; nothing changed
    Ignored,
}

/// Client-side state of one connection to the scraper backend.
///
/// Holds the current result set and status. Every `result` message replaces
/// the set wholesale; responses are not correlated with requests, so a late
/// reply to an older search overwrites a newer one.
#[derive(Debug, Default)]
pub struct Session {
    current: Vec<ClassifiedRecord>,
    last_status: Option<String>,
    last_error: Option<String>,
    in_progress: bool,
    options: RenderOptions,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: RenderOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Mark a search as running and build the request to send.
    pub fn begin_search(&mut self, request: &SearchRequest) -> ClientRequest {
        tracing::info!(
            start = %request.start_date,
            end = %request.end_date,
            terms = request.terms.len(),
            "starting search"
        );
        self.in_progress = true;
        self.last_error = None;
        self.last_status = Some(STATUS_SEARCHING.to_string());
        ClientRequest::StartSearch(request.clone())
    }

    pub fn apply(&mut self, message: StreamMessage) -> SessionUpdate {
        match message {
            StreamMessage::Log { message } => {
                tracing::debug!(%message, "status");
                self.last_status = Some(message.clone());
                SessionUpdate::Status(message)
            }
            StreamMessage::Result { data } => SessionUpdate::Results {
                count: self.replace(data.unwrap_or_default()),
            },
            StreamMessage::Complete => {
                self.in_progress = false;
                self.last_status = Some(STATUS_COMPLETE.to_string());
                SessionUpdate::Completed
            }
            StreamMessage::Error { message } => {
                let message = message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| UNKNOWN_ERROR.to_string());
                tracing::warn!(%message, "search failed");
                self.in_progress = false;
                self.last_status = Some(format!("Erro: {}", message));
                self.last_error = Some(message.clone());
                SessionUpdate::Failed(message)
            }
        }
    }

    /// Decode and apply one wire message. Undecodable input is logged and
    /// leaves the session untouched.
    pub fn apply_raw(&mut self, text: &str) -> SessionUpdate {
        match StreamMessage::parse(text) {
            Ok(message) => self.apply(message),
            Err(e) => {
                tracing::warn!(error = %e, "ignoring malformed stream message");
                SessionUpdate::Ignored
            }
        }
    }

    /// Classify `records` and make them the current set. Returns the new size.
    pub fn replace(&mut self, records: Vec<RawRecord>) -> usize {
        self.current = classify_all(records);
        tracing::debug!(count = self.current.len(), "result set replaced");
        self.current.len()
    }

    pub fn clear(&mut self) {
        self.current.clear();
        self.last_status = Some(STATUS_CLEARED.to_string());
    }

    pub fn records(&self) -> &[ClassifiedRecord] {
        &self.current
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    pub fn in_progress(&self) -> bool {
        self.in_progress
    }

    pub fn last_status(&self) -> Option<&str> {
        self.last_status.as_deref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn stats(&self) -> AggregateStats {
        aggregate(&self.current)
    }

    pub fn rendered(&self) -> Vec<RenderedDocument> {
        render_all(&self.current, &self.options)
    }

    /// Plain-text document view of the current set
    pub fn document(&self) -> String {
        format_document(&self.rendered())
    }

    pub fn cards(&self) -> Vec<Card> {
        self.current.iter().map(render_card).collect()
    }

    pub fn export_csv<W: Write>(&self, writer: W) -> Result<()> {
        if self.current.is_empty() {
            return Err(Error::Validation(NOTHING_TO_EXPORT.to_string()));
        }
        write_csv(writer, self.current.iter().map(|c| &c.record))?;
        Ok(())
    }

    /// Write the CSV export to `path`. No file is created for an empty set.
    pub fn export_to(&self, path: &Path) -> Result<()> {
        if self.current.is_empty() {
            return Err(Error::Validation(NOTHING_TO_EXPORT.to_string()));
        }
        let file = File::create(path)?;
        self.export_csv(file)?;
        tracing::debug!(path = %path.display(), rows = self.current.len(), "csv written");
        Ok(())
    }
}
