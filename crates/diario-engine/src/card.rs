use serde::Serialize;

use diario_types::{or_default, present, CanonicalType, ClassifiedRecord, IconTag, VisualCategory};

/// Grid view entry for one record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub canonical_type: CanonicalType,
    pub visual_category: VisualCategory,
    pub icon_tag: IconTag,
    /// Badge text, the record's display label
    pub badge: String,
    pub date: String,
    pub process_number: String,
    /// Excerpt shown as the card body
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_pdf: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_html: Option<String>,
}

pub fn render_card(classified: &ClassifiedRecord) -> Card {
    let r = &classified.record;
    Card {
        canonical_type: classified.canonical_type,
        visual_category: classified.presentation.visual_category,
        icon_tag: classified.presentation.icon_tag,
        badge: classified.presentation.display_label.clone(),
        date: r.date.as_deref().unwrap_or_default().trim().to_string(),
        process_number: or_default(r.process_number.as_deref(), "-").to_string(),
        summary: r.summary().trim().to_string(),
        link_pdf: present(r.link_pdf.as_deref()).map(str::to_string),
        link_html: present(r.link_html.as_deref()).map(str::to_string),
    }
}
