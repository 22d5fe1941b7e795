use chrono::NaiveDate;
use diario_types::{ClientRequest, SearchRequest};

use crate::{Error, Result};

/// Date format of the form inputs
const ISO_DATE: &str = "%Y-%m-%d";
/// Date format the backend expects
const GAZETTE_DATE: &str = "%d/%m/%Y";

pub const MISSING_DATES: &str = "Por favor, preencha as datas.";
pub const INVALID_DATE: &str = "Data deve estar no formato DD/MM/AAAA";
pub const START_AFTER_END: &str = "Data inicial não pode ser superior à data final";

/// Raw search form input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchForm {
    /// `YYYY-MM-DD`
    pub start_date: String,
    /// `YYYY-MM-DD`
    pub end_date: String,
    /// One search term per line
    pub terms_text: String,
}

impl SearchForm {
    pub fn new(
        start_date: impl Into<String>,
        end_date: impl Into<String>,
        terms_text: impl Into<String>,
    ) -> Self {
        Self {
            start_date: start_date.into(),
            end_date: end_date.into(),
            terms_text: terms_text.into(),
        }
    }

    /// Validate the form and build the request payload.
    pub fn to_request(&self) -> Result<SearchRequest> {
        let start_raw = self.start_date.trim();
        let end_raw = self.end_date.trim();
        if start_raw.is_empty() || end_raw.is_empty() {
            return Err(Error::Validation(MISSING_DATES.to_string()));
        }

        let start = parse_iso(start_raw)?;
        let end = parse_iso(end_raw)?;
        if start > end {
            return Err(Error::Validation(START_AFTER_END.to_string()));
        }

        Ok(SearchRequest {
            start_date: start.format(GAZETTE_DATE).to_string(),
            end_date: end.format(GAZETTE_DATE).to_string(),
            terms: split_terms(&self.terms_text),
        })
    }

    pub fn to_client_request(&self) -> Result<ClientRequest> {
        Ok(ClientRequest::StartSearch(self.to_request()?))
    }
}

/// One term per line, trimmed, blank lines dropped
pub fn split_terms(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_iso(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, ISO_DATE)
        .map_err(|_| Error::Validation(INVALID_DATE.to_string()))
}
