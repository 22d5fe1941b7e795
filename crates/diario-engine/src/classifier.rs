use diario_types::{
    present, CanonicalType, ClassifiedRecord, IconTag, Presentation, RawRecord, VisualCategory,
};

/// What makes a rule fire
enum Trigger {
    /// Haystack contains any of the keywords
    Keywords(&'static [&'static str]),
    /// Record carries an amendment number, or haystack contains any keyword
    AmendmentOrKeywords(&'static [&'static str]),
}

/// One entry of the priority cascade
struct Rule {
    doc_type: CanonicalType,
    trigger: Trigger,
}

impl Rule {
    const fn keywords(doc_type: CanonicalType, keywords: &'static [&'static str]) -> Self {
        Self {
            doc_type,
            trigger: Trigger::Keywords(keywords),
        }
    }

    const fn amendment(doc_type: CanonicalType, keywords: &'static [&'static str]) -> Self {
        Self {
            doc_type,
            trigger: Trigger::AmendmentOrKeywords(keywords),
        }
    }

    fn matches(&self, record: &RawRecord, haystack: &str) -> bool {
        match self.trigger {
            Trigger::Keywords(keywords) => contains_any(haystack, keywords),
            Trigger::AmendmentOrKeywords(keywords) => {
                present(record.amendment_number.as_deref()).is_some()
                    || contains_any(haystack, keywords)
            }
        }
    }
}

/// Text heuristics in priority order. First match wins.
///
/// Keyword sets overlap (CONTRATO appears in amendments, PREGÃO in apostilles),
/// so the order is the tie-break and must not be changed.
const RULES: &[Rule] = &[
    Rule::keywords(CanonicalType::Apostilamento, &["APOSTILAMENTO"]),
    Rule::amendment(CanonicalType::Aditamento, &["ADITAMENTO"]),
    Rule::keywords(
        CanonicalType::Parceria,
        &[
            "FOMENTO",
            "COLABORAÇÃO",
            "COOPERAÇÃO",
            "TERMO DE COLABORAÇÃO",
        ],
    ),
    Rule::keywords(CanonicalType::Doacao, &["DOAÇÃO", "COMODATO"]),
    Rule::keywords(CanonicalType::Empenho, &["EMPENHO"]),
    Rule::keywords(
        CanonicalType::Diversos,
        &[
            "ESCLARECIMENTO",
            "QUESTIONAMENTO",
            "IMPUGNAÇ",
            "IMPUGNAC",
            "DEMONSTRATIVO DAS COMPRAS",
        ],
    ),
    // Strong contract markers outrank the procurement keywords below
    Rule::keywords(
        CanonicalType::Contrato,
        &["TERMO DE CONTRATO", "EXTRATO DE CONTRATO"],
    ),
    Rule::keywords(
        CanonicalType::Pregao,
        &["PREGÃO", "LICITAÇÃO", "PREGAO", "CONVITE", "CONCORRÊNCIA"],
    ),
    Rule::keywords(CanonicalType::Contrato, &["CONTRATO"]),
];

/// Assign exactly one category to a record.
///
/// A backend hint other than `OUTRO` wins outright. Otherwise the text
/// cascade runs over `term`, `summary` and `modality`; nothing matching
/// yields `OUTRO`. Total over every input, including an empty record.
pub fn classify(record: &RawRecord) -> CanonicalType {
    if let Some(hinted) = hinted_type(record) {
        return hinted;
    }

    let haystack = haystack(record);
    RULES
        .iter()
        .find(|rule| rule.matches(record, &haystack))
        .map(|rule| rule.doc_type)
        .unwrap_or(CanonicalType::Outro)
}

/// Display triple for a category.
///
/// Only amendments and the uncategorized default look at the record itself.
pub fn presentation(doc_type: CanonicalType, record: &RawRecord) -> Presentation {
    let (visual_category, icon_tag, display_label) = match doc_type {
        CanonicalType::Aditamento | CanonicalType::Apostilamento => (
            VisualCategory::Aditamento,
            IconTag::FilePen,
            match present(record.amendment_number.as_deref()) {
                Some(number) => format!("ADITAMENTO {}", number),
                None => "ADITAMENTO".to_string(),
            },
        ),
        CanonicalType::Parceria => (
            VisualCategory::Parceria,
            IconTag::Handshake,
            "PARCERIA".to_string(),
        ),
        CanonicalType::Doacao => (VisualCategory::Doacao, IconTag::Gift, "DOAÇÃO".to_string()),
        CanonicalType::Contrato => (
            VisualCategory::Contrato,
            IconTag::FileSignature,
            "CONTRATO".to_string(),
        ),
        CanonicalType::Empenho => (
            VisualCategory::Contrato,
            IconTag::FileSignature,
            "EMPENHO".to_string(),
        ),
        CanonicalType::Pregao => (
            VisualCategory::Pregao,
            IconTag::Gavel,
            "LICITAÇÃO".to_string(),
        ),
        CanonicalType::Homologacao => (
            VisualCategory::Destaque,
            IconTag::Award,
            "HOMOLOGAÇÃO".to_string(),
        ),
        CanonicalType::Diversos => (
            VisualCategory::Diversos,
            IconTag::Paperclip,
            "DIVERSOS".to_string(),
        ),
        CanonicalType::PedidoCompra => (
            VisualCategory::Compra,
            IconTag::CartShopping,
            "PEDIDO COMPRA".to_string(),
        ),
        CanonicalType::Outro => (
            VisualCategory::Outro,
            IconTag::File,
            present(record.term.as_deref())
                .unwrap_or(doc_type.as_str())
                .to_string(),
        ),
    };

    Presentation {
        visual_category,
        display_label,
        icon_tag,
    }
}

/// Classify a record and attach its presentation
pub fn classify_record(record: RawRecord) -> ClassifiedRecord {
    let canonical_type = classify(&record);
    let presentation = presentation(canonical_type, &record);
    ClassifiedRecord {
        record,
        canonical_type,
        presentation,
    }
}

/// Classify a whole result set, preserving order
pub fn classify_all(records: Vec<RawRecord>) -> Vec<ClassifiedRecord> {
    records.into_iter().map(classify_record).collect()
}

// --- Internal helpers ---

/// Backend authority: `Some` stops the heuristics.
///
/// A hint that names no known category is still authoritative and maps to
/// `OUTRO` rather than being second-guessed by the text rules.
fn hinted_type(record: &RawRecord) -> Option<CanonicalType> {
    let hint = present(record.doc_type_hint.as_deref())?;
    match hint.parse::<CanonicalType>() {
        Ok(CanonicalType::Outro) => None,
        Ok(doc_type) => Some(doc_type),
        Err(_) => Some(CanonicalType::Outro),
    }
}

/// Uppercased `term summary modality`; diacritics kept as-is
fn haystack(record: &RawRecord) -> String {
    format!(
        "{} {} {}",
        record.term(),
        record.summary(),
        record.modality()
    )
    .to_uppercase()
}

fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| haystack.contains(k))
}
