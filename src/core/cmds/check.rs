use std::io::Read;

use log::{debug, info};
use serde::Serialize;

use crate::core::cli::CheckArgs;
use crate::core::store::RecordStore;
use crate::engine::{classifier, scanner};
use crate::types::{AppResult, DnaGrid, Verdict};

#[derive(Serialize)]
struct CheckReport<'a> {
    record_id: i64,
    dna: &'a DnaGrid,
    verdict: Verdict,
    is_mutant: bool,
}

/// Validate the input rows, classify the grid, and persist one record.
/// Returns the process exit status for the verdict.
pub async fn execute_check<S: RecordStore>(args: CheckArgs, store: &S) -> AppResult<i32> {
    let rows = read_rows(&args)?;
    let grid = DnaGrid::parse(rows)?;

    let windows = scanner::scan(grid.rows());
    debug!("Scanner found {} unique windows", windows.len());

    let verdict = Verdict::from_flag(classifier::is_mutant(&windows));
    let record_id = store.store_record(&grid, verdict).await?;

    match args.format.as_str() {
        "json" => {
            let report = CheckReport {
                record_id,
                dna: &grid,
                verdict,
                is_mutant: verdict.is_mutant(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        _ => {
            info!("{}", verdict.response());
            info!("Stored record {} ({})", record_id, &grid.fingerprint()[..12]);
        }
    }

    Ok(verdict.exit_code())
}

fn read_rows(args: &CheckArgs) -> AppResult<Vec<String>> {
    if let Some(inline) = &args.sequences {
        return Ok(split_rows(inline));
    }
    if let Some(path) = &args.file {
        let text = std::fs::read_to_string(path)?;
        return Ok(split_rows(&text));
    }

    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;
    Ok(split_rows(&text))
}

fn split_rows(input: &str) -> Vec<String> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}
