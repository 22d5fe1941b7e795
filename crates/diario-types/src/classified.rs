use serde::{Deserialize, Serialize};

use crate::kind::{CanonicalType, Presentation};
use crate::record::RawRecord;

/// A [`RawRecord`] with its category and presentation attached.
///
/// Serializes flat: the raw fields followed by `canonical_type`,
/// `visual_category`, `display_label` and `icon_tag`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedRecord {
    #[serde(flatten)]
    pub record: RawRecord,
    pub canonical_type: CanonicalType,
    #[serde(flatten)]
    pub presentation: Presentation,
}

impl ClassifiedRecord {
    pub fn display_label(&self) -> &str {
        &self.presentation.display_label
    }
}
