use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Administrative document category of a gazette publication.
///
/// `Homologacao` and `PedidoCompra` are only ever assigned by the backend
/// hint; the text heuristics never infer them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CanonicalType {
    Apostilamento,
    Aditamento,
    Parceria,
    Doacao,
    Empenho,
    Diversos,
    Contrato,
    Pregao,
    Homologacao,
    PedidoCompra,
    /// Uncategorized default
    Outro,
}

impl CanonicalType {
    pub const ALL: [CanonicalType; 11] = [
        CanonicalType::Apostilamento,
        CanonicalType::Aditamento,
        CanonicalType::Parceria,
        CanonicalType::Doacao,
        CanonicalType::Empenho,
        CanonicalType::Diversos,
        CanonicalType::Contrato,
        CanonicalType::Pregao,
        CanonicalType::Homologacao,
        CanonicalType::PedidoCompra,
        CanonicalType::Outro,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CanonicalType::Apostilamento => "APOSTILAMENTO",
            CanonicalType::Aditamento => "ADITAMENTO",
            CanonicalType::Parceria => "PARCERIA",
            CanonicalType::Doacao => "DOACAO",
            CanonicalType::Empenho => "EMPENHO",
            CanonicalType::Diversos => "DIVERSOS",
            CanonicalType::Contrato => "CONTRATO",
            CanonicalType::Pregao => "PREGAO",
            CanonicalType::Homologacao => "HOMOLOGACAO",
            CanonicalType::PedidoCompra => "PEDIDO_COMPRA",
            CanonicalType::Outro => "OUTRO",
        }
    }
}

impl fmt::Display for CanonicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CanonicalType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_uppercase();
        CanonicalType::ALL
            .into_iter()
            .find(|t| t.as_str() == wanted)
            .ok_or_else(|| Error::UnknownDocType(s.to_string()))
    }
}

/// Visual bucket a category is drawn in (card colour, text block style).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualCategory {
    Aditamento,
    Parceria,
    Doacao,
    Contrato,
    Pregao,
    Destaque,
    Diversos,
    Compra,
    Outro,
}

impl VisualCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            VisualCategory::Aditamento => "aditamento",
            VisualCategory::Parceria => "parceria",
            VisualCategory::Doacao => "doacao",
            VisualCategory::Contrato => "contrato",
            VisualCategory::Pregao => "pregao",
            VisualCategory::Destaque => "destaque",
            VisualCategory::Diversos => "diversos",
            VisualCategory::Compra => "compra",
            VisualCategory::Outro => "outro",
        }
    }
}

impl fmt::Display for VisualCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Icon shown next to the category badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconTag {
    FilePen,
    Handshake,
    Gift,
    FileSignature,
    Gavel,
    Award,
    Paperclip,
    CartShopping,
    /// Generic document
    File,
}

impl IconTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            IconTag::FilePen => "file-pen",
            IconTag::Handshake => "handshake",
            IconTag::Gift => "gift",
            IconTag::FileSignature => "file-signature",
            IconTag::Gavel => "gavel",
            IconTag::Award => "award",
            IconTag::Paperclip => "paperclip",
            IconTag::CartShopping => "cart-shopping",
            IconTag::File => "file",
        }
    }
}

impl fmt::Display for IconTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display triple derived from a [`CanonicalType`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Presentation {
    pub visual_category: VisualCategory,
    pub display_label: String,
    pub icon_tag: IconTag,
}
