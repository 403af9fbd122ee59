use chrono::Local;
use colored::*;
use env_logger::{Builder, Env};
use log::{debug, SetLoggerError};
use std::{env as stdenv, io::Write, path::Path};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Installs a coloured `env_logger` for binaries using this crate.
/// `RUST_LOG` picks the filter (default `info`); `RUST_LOG=trace` switches
/// to the compact `file:line LEVEL: message` layout.
pub fn setup_logger() -> Result<(), SetLoggerError> {
    let this_script_name = Path::new(&stdenv::args().next().unwrap_or_default())
        .file_name()
        .unwrap_or_default()
        .to_str()
        .unwrap_or_default()
        .to_owned();
    let compact = matches!(stdenv::var("RUST_LOG"), Ok(val) if val.to_lowercase() == "trace");
    let tag = format!("{}_{}", this_script_name, VERSION);

    Builder::from_env(Env::default().default_filter_or("info"))
        .format(move |buf, record| {
            let level = match record.level() {
                log::Level::Error => format!("{}", record.level()).red(),
                log::Level::Warn => format!(" {}", record.level()).yellow(),
                log::Level::Info => format!(" {}", record.level()).green(),
                log::Level::Debug => format!("{}", record.level()).blue(),
                log::Level::Trace => format!("{}", record.level()).purple(),
            };
            let file = record.file().unwrap_or("unknown");
            let line = record.line().unwrap_or(0);

            if compact {
                writeln!(buf, "{}:{} {}: {}", file, line, level, record.args())
            } else {
                writeln!(
                    buf,
                    "{}:{} [{} {}]{}: {}",
                    file,
                    line,
                    tag.dimmed().purple(),
                    format!("{}", Local::now().format("%Y%m%d %H:%M:%S")).purple(),
                    level,
                    record.args()
                )
            }
        })
        .try_init()?;
    debug!("logger initialized");
    Ok(())
}

