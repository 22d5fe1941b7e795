use serde::{Deserialize, Serialize};

/// One gazette publication as delivered by the scraper.
///
/// Every member is optional: the scraper fills what it could extract and
/// leaves the rest absent, `null`, empty or `"-"`. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawRecord {
    /// Search term that matched the publication
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
    /// Free-text excerpt of the publication
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Procurement modality (PREGÃO ELETRÔNICO, DISPENSA, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modality: Option<String>,
    /// Category assigned by the backend, when it had one
    #[serde(rename = "doc_type", skip_serializing_if = "Option::is_none")]
    pub doc_type_hint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amendment_number: Option<String>,
    /// Contract an amendment refers to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_contract: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contractor: Option<String>,
    /// CNPJ/CPF of the contractor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_doc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Publication date (DD/MM/YYYY)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validity_start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validity_end: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opening_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_pdf: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_html: Option<String>,
}

impl RawRecord {
    pub fn term(&self) -> &str {
        self.term.as_deref().unwrap_or("")
    }

    pub fn summary(&self) -> &str {
        self.summary.as_deref().unwrap_or("")
    }

    pub fn modality(&self) -> &str {
        self.modality.as_deref().unwrap_or("")
    }
}
