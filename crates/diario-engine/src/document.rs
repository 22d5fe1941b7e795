use std::fmt::Write;

use crate::layout::{Line, RenderedDocument};

pub const DOCUMENT_HEADER: &str = "RESULTADOS - DIÁRIO OFICIAL";
pub const NO_RESULTS: &str = "Sem resultados.";

/// Plain-text document view of a rendered result set.
///
/// One block per record, headed by its display label. Linked values are
/// followed by their target in angle brackets.
pub fn format_document(documents: &[RenderedDocument]) -> String {
    if documents.is_empty() {
        return format!("{}\n", NO_RESULTS);
    }

    let mut out = String::new();
    out.push_str(DOCUMENT_HEADER);
    out.push('\n');

    for doc in documents {
        out.push('\n');
        let _ = writeln!(out, "[{}]", doc.display_label);
        for line in &doc.lines {
            match line {
                Line::Banner { text } => {
                    let _ = writeln!(out, "{}", text);
                }
                Line::Field { label, value, href } => {
                    let _ = write!(out, "{} {}", label, value);
                    if let Some(href) = href {
                        let _ = write!(out, " <{}>", href);
                    }
                    out.push('\n');
                }
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify_record;
    use crate::layout::render;
    use diario_types::RawRecord;

    #[test]
    fn test_empty_set() {
        assert_eq!(format_document(&[]), "Sem resultados.\n");
    }

    #[test]
    fn test_document_blocks() {
        let records = vec![
            RawRecord {
                term: Some("ADITAMENTO".to_string()),
                summary: Some(String::new()),
                modality: Some("-".to_string()),
                amendment_number: Some("2".to_string()),
                parent_contract: Some("15".to_string()),
                ..Default::default()
            },
            RawRecord {
                term: Some("DEMONSTRATIVO DAS COMPRAS".to_string()),
                date: Some("02/01/2024".to_string()),
                link_html: Some("https://diario.example/d.html".to_string()),
                ..Default::default()
            },
        ];
        let docs: Vec<_> = records
            .into_iter()
            .map(|r| render(&classify_record(r)))
            .collect();

        insta::assert_snapshot!(format_document(&docs), @r"
        RESULTADOS - DIÁRIO OFICIAL

        [ADITAMENTO 2]
        Processo SEI: -
        Aditamento nº 2 ao Contrato nº 15
        Contratada: -
        Objeto: -
        Data da Assinatura: -
        Data da Publicação: -
        Valor: Sem efeito financeiros

        [DIVERSOS]
        [Publicação Diversa - Baixa Prioridade]
        Número do Processo: -
        Número da Publicação: PUBLICACAO S/N
        Documento: - <https://diario.example/d.html>
        Objeto: -
        Data de Publicação: 02/01/2024
        ");
    }
}
