//! Per-category field layouts for the document view.
//!
//! Each category maps to one of six layout families. A layout decides which
//! fields appear, in what order, and what text stands in for missing data.
//! Labels are literal source-locale strings and are reproduced as data.

use serde::Serialize;

use diario_types::{or_default, present, CanonicalType, ClassifiedRecord, VisualCategory};

use crate::redact::anonymize_cpf;

/// Universal missing-value placeholder
const MISSING: &str = "-";
/// Missing instrument number
const NO_NUMBER: &str = "S/N";
/// Value line when an amendment or contract carries no amount
const NO_FINANCIAL_EFFECT: &str = "Sem efeito financeiros";
/// Winning bidder before adjudication
const IN_PROGRESS: &str = "EM PROCESSO";
/// Publication label when no modality was extracted
const GENERIC_PUBLICATION: &str = "PUBLICACAO";
const DONATION_INSTRUMENT: &str = "Termo de Doação/Comodato";
/// Fixed assumption for donations, not scraped
const DONATION_CHARGES: &str = "Sem ônus para a municipalidade";
const LOW_PRIORITY_BANNER: &str = "[Publicação Diversa - Baixa Prioridade]";

/// One display line of a rendered document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Line {
    /// Low-priority notice shown above the fields
    Banner { text: &'static str },
    /// Labelled value, optionally linked to the source document
    Field {
        label: &'static str,
        value: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        href: Option<String>,
    },
}

impl Line {
    fn field(label: &'static str, value: impl Into<String>) -> Self {
        Line::Field {
            label,
            value: value.into(),
            href: None,
        }
    }

    fn link(label: &'static str, value: impl Into<String>, href: Option<&str>) -> Self {
        Line::Field {
            label,
            value: value.into(),
            href: href.map(str::to_string),
        }
    }

    pub fn label(&self) -> Option<&'static str> {
        match self {
            Line::Field { label, .. } => Some(*label),
            Line::Banner { .. } => None,
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Line::Field { value, .. } => value,
            Line::Banner { text } => text,
        }
    }
}

/// Layout family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// ADITAMENTO, APOSTILAMENTO
    Amendment,
    /// PARCERIA
    Partnership,
    /// DOACAO
    Donation,
    /// CONTRATO
    Contract,
    /// EMPENHO
    Commitment,
    /// Everything else: PREGAO, DIVERSOS, OUTRO, hint-only categories
    General,
}

type LayoutFn = fn(&ClassifiedRecord, &RenderOptions) -> Vec<Line>;

impl Layout {
    pub fn for_type(doc_type: CanonicalType) -> Self {
        match doc_type {
            CanonicalType::Aditamento | CanonicalType::Apostilamento => Layout::Amendment,
            CanonicalType::Parceria => Layout::Partnership,
            CanonicalType::Doacao => Layout::Donation,
            CanonicalType::Contrato => Layout::Contract,
            CanonicalType::Empenho => Layout::Commitment,
            CanonicalType::Pregao
            | CanonicalType::Diversos
            | CanonicalType::Homologacao
            | CanonicalType::PedidoCompra
            | CanonicalType::Outro => Layout::General,
        }
    }

    fn lines(self) -> LayoutFn {
        match self {
            Layout::Amendment => amendment_lines,
            Layout::Partnership => partnership_lines,
            Layout::Donation => donation_lines,
            Layout::Contract | Layout::Commitment => contract_lines,
            Layout::General => general_lines,
        }
    }
}

/// Rendering switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Mask CPF numbers in the contractor line
    pub anonymize_documents: bool,
}

/// Field list for one record, in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedDocument {
    pub canonical_type: CanonicalType,
    pub visual_category: VisualCategory,
    pub display_label: String,
    pub layout: Layout,
    pub lines: Vec<Line>,
}

impl RenderedDocument {
    /// First field with the given label
    pub fn field(&self, label: &str) -> Option<&str> {
        self.lines
            .iter()
            .find(|line| line.label() == Some(label))
            .map(Line::value)
    }
}

/// Render with default options
pub fn render(record: &ClassifiedRecord) -> RenderedDocument {
    render_with(record, &RenderOptions::default())
}

pub fn render_with(record: &ClassifiedRecord, options: &RenderOptions) -> RenderedDocument {
    let layout = Layout::for_type(record.canonical_type);
    RenderedDocument {
        canonical_type: record.canonical_type,
        visual_category: record.presentation.visual_category,
        display_label: record.presentation.display_label.clone(),
        layout,
        lines: (layout.lines())(record, options),
    }
}

// --- Layouts ---

fn amendment_lines(classified: &ClassifiedRecord, options: &RenderOptions) -> Vec<Line> {
    let r = &classified.record;
    let label = if classified.canonical_type == CanonicalType::Apostilamento {
        "Apostilamento nº"
    } else {
        "Aditamento nº"
    };

    let mut lines = vec![
        process_link(classified),
        Line::link(
            label,
            format!(
                "{} ao Contrato nº {}",
                or_default(r.amendment_number.as_deref(), NO_NUMBER),
                or_default(r.parent_contract.as_deref(), NO_NUMBER)
            ),
            present(r.link_pdf.as_deref()),
        ),
        Line::field("Contratada:", contractor_with_doc(classified, options)),
    ];

    if let Some(modality) = present(r.modality.as_deref()) {
        lines.push(Line::field("Modalidade:", modality));
    }

    lines.push(object_line(classified));
    lines.push(Line::field(
        "Data da Assinatura:",
        or_default(r.validity_start.as_deref(), MISSING),
    ));
    lines.push(publication_date(classified, "Data da Publicação:"));

    if let Some(end) = present(r.validity_end.as_deref()) {
        lines.push(Line::field(
            "Vigência:",
            format!(
                "{} e {}",
                or_default(r.validity_start.as_deref(), MISSING),
                end
            ),
        ));
    }

    lines.push(Line::field(
        "Valor:",
        or_default(r.value.as_deref(), NO_FINANCIAL_EFFECT),
    ));
    lines
}

fn partnership_lines(classified: &ClassifiedRecord, _options: &RenderOptions) -> Vec<Line> {
    let r = &classified.record;
    vec![
        process_link(classified),
        Line::link(
            "Instrumento nº",
            or_default(r.contract_number.as_deref(), NO_NUMBER),
            present(r.link_pdf.as_deref()),
        ),
        Line::field(
            "Participe/OS:",
            or_default(r.contractor.as_deref(), MISSING),
        ),
        object_line(classified),
        Line::field(
            "Vigência:",
            format!(
                "{} a {}",
                or_default(r.validity_start.as_deref(), MISSING),
                or_default(r.validity_end.as_deref(), MISSING)
            ),
        ),
        Line::field("Valor:", or_default(r.value.as_deref(), MISSING)),
        publication_date(classified, "Data da Publicação:"),
    ]
}

fn donation_lines(classified: &ClassifiedRecord, _options: &RenderOptions) -> Vec<Line> {
    let r = &classified.record;
    vec![
        process_link(classified),
        Line::link(
            "Instrumento:",
            DONATION_INSTRUMENT,
            present(r.link_pdf.as_deref()),
        ),
        Line::field(
            "Doador/Comodatário:",
            or_default(r.contractor.as_deref(), MISSING),
        ),
        object_line(classified),
        Line::field("Encargos:", DONATION_CHARGES),
        publication_date(classified, "Data da Publicação:"),
    ]
}

/// Contracts and commitment notes; only contracts list the vigency window
fn contract_lines(classified: &ClassifiedRecord, options: &RenderOptions) -> Vec<Line> {
    let r = &classified.record;
    let is_contract = classified.canonical_type == CanonicalType::Contrato;
    let label = if is_contract {
        "Contrato nº"
    } else {
        "Nota de Empenho nº"
    };

    let mut lines = vec![
        process_link(classified),
        Line::link(
            label,
            format!(
                "{} - {}",
                or_default(r.contract_number.as_deref(), NO_NUMBER),
                contractor_with_doc(classified, options)
            ),
            present(r.link_pdf.as_deref()),
        ),
    ];

    if let Some(modality) = present(r.modality.as_deref()) {
        lines.push(Line::field("Modalidade:", modality));
    }

    lines.push(object_line(classified));
    lines.push(Line::field(
        "Data da Assinatura:",
        or_default(r.validity_start.as_deref(), MISSING),
    ));

    if is_contract {
        lines.push(Line::field(
            "Início da Vigência do Contrato:",
            or_default(r.validity_start.as_deref(), MISSING),
        ));
        lines.push(Line::field(
            "Término da Vigência do Contrato:",
            or_default(r.validity_end.as_deref(), MISSING),
        ));
    }

    lines.push(publication_date(classified, "Data da Publicação:"));
    lines.push(Line::field(
        "Valor:",
        or_default(r.value.as_deref(), NO_FINANCIAL_EFFECT),
    ));
    lines
}

/// Procurement notices and everything without a dedicated layout
fn general_lines(classified: &ClassifiedRecord, _options: &RenderOptions) -> Vec<Line> {
    let r = &classified.record;
    let is_misc = classified.canonical_type == CanonicalType::Diversos;
    let mut lines = Vec::new();

    if is_misc {
        lines.push(Line::Banner {
            text: LOW_PRIORITY_BANNER,
        });
    }

    lines.push(Line::field(
        "Número do Processo:",
        or_default(r.process_number.as_deref(), MISSING),
    ));

    // Short numbers are scraper noise ("1", "-"), not publication numbers
    let number = present(r.contract_number.as_deref())
        .filter(|n| n.chars().count() > 2)
        .unwrap_or(NO_NUMBER);
    lines.push(Line::link(
        "Número da Publicação:",
        format!(
            "{} {}",
            or_default(r.modality.as_deref(), GENERIC_PUBLICATION),
            number
        ),
        present(r.link_pdf.as_deref()),
    ));

    lines.push(Line::link(
        "Documento:",
        or_default(r.document_id.as_deref(), MISSING),
        present(r.link_html.as_deref()),
    ));

    if !is_misc {
        lines.push(Line::field(
            "Licitante Vencedor:",
            or_default(r.contractor.as_deref(), IN_PROGRESS),
        ));
        lines.push(Line::field(
            "Modalidade:",
            or_default(r.modality.as_deref(), MISSING),
        ));
        lines.push(Line::field(
            "Data da Abertura:",
            or_default(r.opening_date.as_deref(), MISSING),
        ));
    }

    lines.push(object_line(classified));
    lines.push(publication_date(classified, "Data de Publicação:"));
    lines
}

// --- Shared lines ---

fn process_link(classified: &ClassifiedRecord) -> Line {
    let r = &classified.record;
    Line::link(
        "Processo SEI:",
        or_default(r.process_number.as_deref(), MISSING),
        present(r.link_html.as_deref()),
    )
}

fn object_line(classified: &ClassifiedRecord) -> Line {
    Line::field(
        "Objeto:",
        or_default(classified.record.object_text.as_deref(), MISSING),
    )
}

fn publication_date(classified: &ClassifiedRecord, label: &'static str) -> Line {
    Line::field(label, or_default(classified.record.date.as_deref(), MISSING))
}

/// `contractor` followed by `, company_doc` when the tax id is known
fn contractor_with_doc(classified: &ClassifiedRecord, options: &RenderOptions) -> String {
    let r = &classified.record;
    let contractor = or_default(r.contractor.as_deref(), MISSING);
    match present(r.company_doc.as_deref()) {
        Some(doc) if options.anonymize_documents => {
            format!("{}, {}", contractor, anonymize_cpf(doc))
        }
        Some(doc) => format!("{}, {}", contractor, doc),
        None => contractor.to_string(),
    }
}
