use log::info;

use crate::core::cli::StatsArgs;
use crate::core::store::RecordStore;
use crate::engine::stats;
use crate::types::AppResult;

pub async fn execute_stats<S: RecordStore>(args: StatsArgs, store: &S) -> AppResult<()> {
    let records = store.read_all_records().await?;
    let snapshot = stats::aggregate(&records);

    match args.format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
        _ => {
            info!("Classification Statistics");
            info!("=========================");
            info!("Mutant DNA: {}", snapshot.count_mutant_dna);
            info!("Human DNA:  {}", snapshot.count_human_dna);
            info!("Ratio:      {:.4}", snapshot.ratio);
        }
    }

    Ok(())
}
