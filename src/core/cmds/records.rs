use log::info;

use crate::core::cli::RecordsArgs;
use crate::core::store::SqlStore;
use crate::types::{AppResult, Verdict};

pub async fn execute_records(args: RecordsArgs, store: &SqlStore) -> AppResult<()> {
    let verdict = Verdict::parse_filter(args.verdict.as_deref())?;
    let records = store.get_records_filtered(verdict, args.limit).await?;

    match args.format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        "ids" => {
            for record in &records {
                println!("{}", record.id);
            }
        }
        _ => {
            if records.is_empty() {
                info!("No records stored. Use the 'check' command to classify a grid.");
                return Ok(());
            }

            info!(
                "{:<6} | {:<7} | {:<12} | {:<19} | Grid",
                "ID", "Verdict", "Hash", "Checked at"
            );
            for record in &records {
                info!(
                    "{:<6} | {:<7} | {:<12} | {:<19} | {}",
                    record.id,
                    record.verdict().to_string(),
                    record.short_hash(),
                    record.checked_at.format("%Y-%m-%d %H:%M:%S").to_string(),
                    record.dna,
                );
            }
            info!("");
            info!("{} record(s)", records.len());
        }
    }

    Ok(())
}
