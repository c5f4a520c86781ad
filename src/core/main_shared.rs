use std::path::PathBuf;

use clap::Parser;
use log::debug;

use crate::core::cli::{Args, Commands};
use crate::core::cmds;
use crate::core::logging::init_logging;
use crate::core::store::SqlStore;
use crate::types::AppResult;
use crate::types::config::{CliOverrides, config, init_with_overrides};

pub async fn run_main() -> AppResult<()> {
    let args = Args::parse();

    // Build CLI overrides for config precedence
    let cli_overrides = CliOverrides {
        db: args.db.clone(),
        log_level: args.log_level.clone(),
        log_color: args.log_color.clone(),
    };

    // Initialize configuration (file, then CLI overrides)
    init_with_overrides(&cli_overrides);

    // Initialize logging after config so level/color are applied
    init_logging();

    // Initialize the database
    let db_path = config().db();
    let db_file = PathBuf::from(&db_path);

    if !db_file.exists() {
        debug!(
            "Database file doesn't exist. Creating it at: {}",
            db_file.display()
        );
        let file = std::fs::File::create(&db_file)?;
        drop(file);
    }

    let db_connection_string = format!("sqlite:{db_path}");
    debug!("Using database: {db_connection_string}");
    let store = SqlStore::new(db_connection_string).await?;

    // Dispatch to appropriate command
    let exit_code = match args.command {
        Commands::Init => {
            cmds::execute_init().await?;
            0
        }
        Commands::Check(check_args) => cmds::execute_check(check_args, &store).await?,
        Commands::Stats(stats_args) => {
            cmds::execute_stats(stats_args, &store).await?;
            0
        }
        Commands::Records(records_args) => {
            cmds::execute_records(records_args, &store).await?;
            0
        }
        Commands::Purge(purge_args) => {
            cmds::execute_purge(purge_args, &store).await?;
            0
        }
    };

    // Non-mutant verdicts surface as a nonzero exit status
    if exit_code != 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}
