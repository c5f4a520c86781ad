use serde::Serialize;

/// Aggregate counts over all stored classifications.
///
/// The serialized field names are a stable output contract; renaming them
/// breaks downstream consumers of the stats payload.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatsSnapshot {
    pub count_mutant_dna: usize,
    pub count_human_dna: usize,
    pub ratio: f64,
}
