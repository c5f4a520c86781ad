use log::info;

use crate::core::cli::PurgeArgs;
use crate::core::store::SqlStore;
use crate::types::{AppResult, Verdict};

pub async fn execute_purge(args: PurgeArgs, store: &SqlStore) -> AppResult<()> {
    let verdict = Verdict::parse_filter(args.verdict.as_deref())?;
    let removed = store.purge_records(verdict).await?;

    match verdict {
        Some(verdict) => info!("Purged {} {} record(s)", removed, verdict),
        None => info!("Purged {} record(s)", removed),
    }

    Ok(())
}
