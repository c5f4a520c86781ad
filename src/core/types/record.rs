use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Serialize;
use strum::{Display, EnumString};

use crate::types::{AppError, DnaGrid};

/// Classification outcome for a single grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize)]
#[strum(ascii_case_insensitive)]
pub enum Verdict {
    Mutant,
    Human,
}

impl Verdict {
    pub fn from_flag(is_mutant: bool) -> Self {
        if is_mutant { Verdict::Mutant } else { Verdict::Human }
    }

    pub fn is_mutant(self) -> bool {
        matches!(self, Verdict::Mutant)
    }

    /// Response string for the verdict: an affirmative status for mutants,
    /// a denial for humans.
    pub fn response(self) -> &'static str {
        match self {
            Verdict::Mutant => "Mutant detected",
            Verdict::Human => "Forbidden",
        }
    }

    /// Process exit status for the CLI boundary. The denial side of the
    /// contract maps to a nonzero status.
    pub fn exit_code(self) -> i32 {
        match self {
            Verdict::Mutant => 0,
            Verdict::Human => 1,
        }
    }

    /// Parse an optional CLI filter value ("mutant"/"human", any case).
    pub fn parse_filter(value: Option<&str>) -> Result<Option<Self>, AppError> {
        match value {
            None => Ok(None),
            Some(s) => Verdict::from_str(s)
                .map(Some)
                .map_err(|_| AppError::UnknownVerdict(s.to_string())),
        }
    }
}

/// A persisted classification: the grid that was checked and its verdict.
///
/// `id` and `checked_at` come from the storage layer; the classification
/// payload proper is the grid plus the mutant flag.
#[derive(Debug, Clone, Serialize)]
pub struct ClassificationRecord {
    pub id: i64,
    pub dna: DnaGrid,
    pub is_mutant: bool,
    pub checked_at: DateTime<Utc>,
}

impl ClassificationRecord {
    pub fn verdict(&self) -> Verdict {
        Verdict::from_flag(self.is_mutant)
    }

    /// Truncated fingerprint for table display.
    pub fn short_hash(&self) -> String {
        self.dna.fingerprint()[..12].to_string()
    }
}
