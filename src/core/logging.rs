use log::LevelFilter;

use crate::types::config::{colors_enabled, config};

/// Install the global fern logger using the effective configuration.
///
/// Info-level messages are printed bare: command output (tables, verdicts)
/// goes through `info!` and should read like plain program output. Other
/// levels carry a prefix, styled when colors are enabled.
pub fn init_logging() {
    let level = config()
        .log()
        .level()
        .parse::<LevelFilter>()
        .unwrap_or(LevelFilter::Info);
    let colorize = colors_enabled();

    let dispatch = fern::Dispatch::new()
        .level(level)
        .format(move |out, message, record| {
            let level = record.level();
            if level == log::Level::Info {
                out.finish(format_args!("{message}"))
            } else {
                let tag = if colorize {
                    match level {
                        log::Level::Error => console::style(level).red().bold().to_string(),
                        log::Level::Warn => console::style(level).yellow().to_string(),
                        _ => console::style(level).dim().to_string(),
                    }
                } else {
                    level.to_string()
                };
                out.finish(format_args!("{tag}: {message}"))
            }
        })
        .chain(std::io::stdout());

    // A second apply (tests) keeps the existing logger
    let _ = dispatch.apply();
}
