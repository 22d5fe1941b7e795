use diario_types::{AggregateStats, ClassifiedRecord};

/// Tally a result set into the stats panel buckets.
///
/// Bucketing looks at `term` and `summary` only and ignores the assigned
/// category, so an amendment whose summary mentions "CONTRATO" counts as a
/// contract here while the grid shows it as an amendment.
pub fn aggregate(records: &[ClassifiedRecord]) -> AggregateStats {
    let mut stats = AggregateStats {
        total: records.len(),
        ..Default::default()
    };

    for classified in records {
        let text = format!(
            "{}{}",
            classified.record.term(),
            classified.record.summary()
        )
        .to_uppercase();

        if text.contains("CONTRATO") {
            stats.contratos += 1;
        } else if text.contains("PREGÃO") || text.contains("PREGAO") {
            stats.pregoes += 1;
        } else if text.contains("ADITAMENTO") {
            stats.aditamentos += 1;
        } else {
            stats.outros += 1;
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify_record;
    use diario_types::{CanonicalType, RawRecord};

    fn record(term: &str, summary: &str) -> ClassifiedRecord {
        classify_record(RawRecord {
            term: Some(term.to_string()),
            summary: Some(summary.to_string()),
            ..Default::default()
        })
    }

    #[test]
    fn test_empty_set_is_all_zero() {
        let stats = aggregate(&[]);
        assert_eq!(stats, AggregateStats::default());
        assert!(stats.is_empty());
    }

    #[test]
    fn test_buckets_in_order() {
        let records = vec![
            record("contrato", ""),
            record("Pregão eletrônico", ""),
            record("PREGAO", "sem acento"),
            record("ADITAMENTO", ""),
            record("PARCERIA", "termo de fomento"),
            record("PREGÃO", "EXTRATO DE CONTRATO"),
        ];
        let stats = aggregate(&records);
        assert_eq!(
            stats,
            AggregateStats {
                contratos: 2,
                pregoes: 2,
                aditamentos: 1,
                outros: 1,
                total: 6,
            }
        );
        assert!(!stats.is_empty());
    }

    #[test]
    fn test_ignores_assigned_category() {
        let classified = record("ADITAMENTO", "ao contrato 15");
        assert_eq!(classified.canonical_type, CanonicalType::Aditamento);

        let stats = aggregate(&[classified]);
        assert_eq!(stats.contratos, 1);
        assert_eq!(stats.aditamentos, 0);
    }

    #[test]
    fn test_modality_is_not_consulted() {
        let classified = classify_record(RawRecord {
            term: Some("AVISO".to_string()),
            modality: Some("PREGÃO ELETRÔNICO".to_string()),
            ..Default::default()
        });
        let stats = aggregate(&[classified]);
        assert_eq!(stats.outros, 1);
        assert_eq!(stats.pregoes, 0);
    }
}
