//! End-to-end boundary tests: the check and stats handlers driven through
//! an in-memory implementation of the storage port.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use sentinel::RecordStore;
use sentinel::core::cli::CheckArgs;
use sentinel::core::cmds::execute_check;
use sentinel::engine::stats;
use sentinel::types::{AppError, ClassificationRecord, DnaGrid, StoreResult, Verdict};

#[derive(Default)]
struct MemStore {
    records: Mutex<Vec<ClassificationRecord>>,
}

#[async_trait]
impl RecordStore for MemStore {
    async fn store_record(&self, dna: &DnaGrid, verdict: Verdict) -> StoreResult<i64> {
        let mut records = self.records.lock().expect("lock");
        let id = records.len() as i64 + 1;
        records.push(ClassificationRecord {
            id,
            dna: dna.clone(),
            is_mutant: verdict.is_mutant(),
            checked_at: Utc::now(),
        });
        Ok(id)
    }

    async fn read_all_records(&self) -> StoreResult<Vec<ClassificationRecord>> {
        Ok(self.records.lock().expect("lock").clone())
    }
}

fn check_args(sequences: &str) -> CheckArgs {
    CheckArgs {
        sequences: Some(sequences.to_string()),
        file: None,
        format: "json".to_string(),
    }
}

#[tokio::test]
async fn mutant_grid_exits_zero_and_is_stored() {
    let store = MemStore::default();
    let args = check_args("ATGCGA,CAGTGC,TTATGT,AGAAGG,CCCCTA,TCACTG");

    let code = execute_check(args, &store).await.expect("check");
    assert_eq!(code, 0);

    let records = store.read_all_records().await.expect("read");
    assert_eq!(records.len(), 1);
    assert!(records[0].is_mutant);
}

#[tokio::test]
async fn human_grid_exits_nonzero_and_is_stored() {
    let store = MemStore::default();
    let args = check_args("ATGCGA,CAGTGC,TTATTT,AGACGG,GCGTCA,TCACTG");

    let code = execute_check(args, &store).await.expect("check");
    assert_eq!(code, 1);

    let records = store.read_all_records().await.expect("read");
    assert_eq!(records.len(), 1);
    assert!(!records[0].is_mutant);
}

#[tokio::test]
async fn whitespace_separated_rows_are_accepted() {
    let store = MemStore::default();
    let args = check_args("ATGCGA CAGTGC TTATGT\nAGAAGG CCCCTA TCACTG");

    let code = execute_check(args, &store).await.expect("check");
    assert_eq!(code, 0);
}

#[tokio::test]
async fn malformed_grids_are_rejected_before_classification() {
    let store = MemStore::default();

    // Five rows
    let args = check_args("ATGCGA,CAGTGC,TTATGT,AGAAGG,CCCCTA");
    let err = execute_check(args, &store).await.expect_err("five rows");
    assert!(matches!(err, AppError::Validation(_)));

    // Bad symbol
    let args = check_args("ATGCGA,CAGTGC,TTXTGT,AGAAGG,CCCCTA,TCACTG");
    let err = execute_check(args, &store).await.expect_err("bad symbol");
    assert!(matches!(err, AppError::Validation(_)));

    // Nothing reached the store
    assert!(store.read_all_records().await.expect("read").is_empty());
}

#[tokio::test]
async fn stats_reflect_checks_made_through_the_port() {
    let store = MemStore::default();

    let mutant = "ATGCGA,CAGTGC,TTATGT,AGAAGG,CCCCTA,TCACTG";
    let human = "ATGCGA,CAGTGC,TTATTT,AGACGG,GCGTCA,TCACTG";

    execute_check(check_args(mutant), &store).await.expect("check");
    execute_check(check_args(human), &store).await.expect("check");
    execute_check(check_args(human), &store).await.expect("check");

    let snapshot = stats::aggregate(&store.read_all_records().await.expect("read"));
    assert_eq!(snapshot.count_mutant_dna, 1);
    assert_eq!(snapshot.count_human_dna, 2);
    assert_eq!(snapshot.ratio, 0.5);
}
