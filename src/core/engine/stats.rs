use crate::types::{ClassificationRecord, StatsSnapshot};

/// Fold stored classifications into aggregate counts.
///
/// The ratio is mutants over humans, defined as 0 when no human records
/// exist; it is never infinite or NaN.
pub fn aggregate<'a, I>(records: I) -> StatsSnapshot
where
    I: IntoIterator<Item = &'a ClassificationRecord>,
{
    let mut count_mutant_dna = 0;
    let mut count_human_dna = 0;

    for record in records {
        if record.is_mutant {
            count_mutant_dna += 1;
        } else {
            count_human_dna += 1;
        }
    }

    let ratio = if count_human_dna > 0 {
        count_mutant_dna as f64 / count_human_dna as f64
    } else {
        0.0
    };

    StatsSnapshot {
        count_mutant_dna,
        count_human_dna,
        ratio,
    }
}
