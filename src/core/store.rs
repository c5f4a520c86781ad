use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{Sqlite, SqlitePool, SqliteRow};
use sqlx::{QueryBuilder, Row};

use crate::types::{ClassificationRecord, DnaGrid, StoreError, StoreResult, Verdict};

/// Storage port consumed by the boundary handlers.
///
/// The capability is injected rather than held in a process-global handle,
/// so the handlers never name a concrete engine.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Persist one classification. Always inserts: duplicate grids get
    /// their own rows; the record collection is append-only.
    async fn store_record(&self, dna: &DnaGrid, verdict: Verdict) -> StoreResult<i64>;

    /// Read every stored classification, oldest first.
    async fn read_all_records(&self) -> StoreResult<Vec<ClassificationRecord>>;
}

#[derive(Clone, Debug)]
pub struct SqlStore {
    pool: SqlitePool,
}

impl SqlStore {
    pub async fn new(sqlite_connection_string: String) -> StoreResult<Self> {
        let pool = SqlitePool::connect(&sqlite_connection_string).await?;
        sqlx::migrate!("./migrations").run(&pool).await?;
        Ok(Self { pool })
    }

    /// List stored classifications, newest first, with optional verdict
    /// filter and row cap.
    pub async fn get_records_filtered(
        &self,
        verdict: Option<Verdict>,
        limit: Option<u32>,
    ) -> StoreResult<Vec<ClassificationRecord>> {
        let mut query_builder: QueryBuilder<Sqlite> =
            QueryBuilder::new("SELECT id, dna, is_mutant, checked_at FROM records");

        if let Some(verdict) = verdict {
            // COALESCE so rows with no flag land on the human side
            query_builder
                .push(" WHERE COALESCE(is_mutant, 0) = ")
                .push_bind(verdict.is_mutant());
        }

        query_builder.push(" ORDER BY id DESC");

        if let Some(limit) = limit {
            query_builder.push(" LIMIT ").push_bind(i64::from(limit));
        }

        let rows = query_builder.build().fetch_all(&self.pool).await?;

        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            records.push(record_from_row(&row)?);
        }
        Ok(records)
    }

    /// Delete stored classifications, optionally only those with the given
    /// verdict. Returns the number of rows removed.
    pub async fn purge_records(&self, verdict: Option<Verdict>) -> StoreResult<u64> {
        let mut query_builder: QueryBuilder<Sqlite> = QueryBuilder::new("DELETE FROM records");

        if let Some(verdict) = verdict {
            query_builder
                .push(" WHERE COALESCE(is_mutant, 0) = ")
                .push_bind(verdict.is_mutant());
        }

        let result = query_builder.build().execute(&self.pool).await?;
        Ok(result.rows_affected())
    }
}

#[async_trait]
impl RecordStore for SqlStore {
    async fn store_record(&self, dna: &DnaGrid, verdict: Verdict) -> StoreResult<i64> {
        let dna_json = serde_json::to_string(dna.rows())?;
        let checked_at = Utc::now().to_rfc3339();

        let result = sqlx::query(
            r#"
            INSERT INTO records (dna, dna_hash, is_mutant, checked_at)
            VALUES (?, ?, ?, ?)
        "#,
        )
        .bind(dna_json)
        .bind(dna.fingerprint())
        .bind(verdict.is_mutant())
        .bind(checked_at)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    async fn read_all_records(&self) -> StoreResult<Vec<ClassificationRecord>> {
        let rows = sqlx::query(
            r#"
            SELECT id, dna, is_mutant, checked_at
            FROM records
            ORDER BY id
        "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            records.push(record_from_row(&row)?);
        }
        Ok(records)
    }
}

fn record_from_row(row: &SqliteRow) -> StoreResult<ClassificationRecord> {
    let id: i64 = row.try_get("id")?;

    let dna_rows: Vec<String> = serde_json::from_str(&row.try_get::<String, _>("dna")?)?;
    let dna = DnaGrid::parse(dna_rows).map_err(|_| StoreError::CorruptGrid(id))?;

    // Rows written before the flag existed count as human
    let is_mutant = row
        .try_get::<Option<i64>, _>("is_mutant")?
        .map(|flag| flag != 0)
        .unwrap_or(false);

    let checked_at = DateTime::parse_from_rfc3339(&row.try_get::<String, _>("checked_at")?)
        .map(|dt| dt.with_timezone(&Utc))?;

    Ok(ClassificationRecord {
        id,
        dna,
        is_mutant,
        checked_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn scratch_store(dir: &tempfile::TempDir) -> SqlStore {
        let path = dir.path().join("records.sqlite");
        std::fs::File::create(&path).expect("create db file");
        SqlStore::new(format!("sqlite:{}", path.display()))
            .await
            .expect("open store")
    }

    fn sample_grid() -> DnaGrid {
        DnaGrid::parse(["ATGCGA", "CAGTGC", "TTATGT", "AGAAGG", "CCCCTA", "TCACTG"])
            .expect("sample grid is valid")
    }

    #[test]
    fn missing_mutant_flag_reads_as_human() {
        tokio_test::block_on(async {
            let dir = tempfile::tempdir().expect("tmpdir");
            let store = scratch_store(&dir).await;

            let grid = sample_grid();
            sqlx::query(
                "INSERT INTO records (dna, dna_hash, is_mutant, checked_at) VALUES (?, ?, NULL, ?)",
            )
            .bind(serde_json::to_string(grid.rows()).unwrap())
            .bind(grid.fingerprint())
            .bind(Utc::now().to_rfc3339())
            .execute(&store.pool)
            .await
            .expect("raw insert");

            let records = store.read_all_records().await.expect("read");
            assert_eq!(records.len(), 1);
            assert!(!records[0].is_mutant);
            assert_eq!(records[0].verdict(), Verdict::Human);
        });
    }

    #[test]
    fn legacy_rows_land_on_the_human_side_of_filters() {
        tokio_test::block_on(async {
            let dir = tempfile::tempdir().expect("tmpdir");
            let store = scratch_store(&dir).await;

            let grid = sample_grid();
            store.store_record(&grid, Verdict::Mutant).await.expect("store");
            sqlx::query(
                "INSERT INTO records (dna, dna_hash, is_mutant, checked_at) VALUES (?, ?, NULL, ?)",
            )
            .bind(serde_json::to_string(grid.rows()).unwrap())
            .bind(grid.fingerprint())
            .bind(Utc::now().to_rfc3339())
            .execute(&store.pool)
            .await
            .expect("raw insert");

            let humans = store
                .get_records_filtered(Some(Verdict::Human), None)
                .await
                .expect("filter humans");
            assert_eq!(humans.len(), 1);

            let mutants = store
                .get_records_filtered(Some(Verdict::Mutant), None)
                .await
                .expect("filter mutants");
            assert_eq!(mutants.len(), 1);
        });
    }

    #[test]
    fn corrupt_dna_column_surfaces_as_store_error() {
        tokio_test::block_on(async {
            let dir = tempfile::tempdir().expect("tmpdir");
            let store = scratch_store(&dir).await;

            sqlx::query(
                "INSERT INTO records (dna, dna_hash, is_mutant, checked_at) VALUES (?, ?, 1, ?)",
            )
            .bind(r#"["AAAA"]"#)
            .bind("deadbeef")
            .bind(Utc::now().to_rfc3339())
            .execute(&store.pool)
            .await
            .expect("raw insert");

            let err = store.read_all_records().await.expect_err("corrupt grid");
            assert!(matches!(err, StoreError::CorruptGrid(_)));
        });
    }
}
