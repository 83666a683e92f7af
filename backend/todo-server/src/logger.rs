//! Process-wide logging for todo-server.
//!
//! Every record becomes one line: `<timestamp> <LEVEL> <target> <message>`.
//! Stdout may color the level; a log file is always plain text and also
//! carries the record's source position.

use crate::error::{Result as ServerErrorResult, ServerError};

use todo_config::LogLevel;

use std::fmt;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use log::{LevelFilter, Record, info};

/// Install the global logger. `colored` only affects stdout.
pub fn initialize(
    log_level: LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let level_filter: LevelFilter = log_level.into();

    let output = match log_file.as_deref() {
        Some(path) => file_dispatch(open_log_file(path)?),
        None if colored => colored_stdout_dispatch(),
        None => Dispatch::new()
            .format(|out, message, record| write_line(out, message, record, &record.level(), false))
            .chain(std::io::stdout()),
    };

    Dispatch::new()
        .level(level_filter)
        .chain(output)
        .apply()
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to install logger: {e}"),
        })?;

    match log_file {
        Some(path) => info!("Logging at {} to {}", level_filter, path.display()),
        None => info!("Logging at {} to stdout", level_filter),
    }

    Ok(())
}

fn open_log_file(path: &Path) -> ServerErrorResult<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| ServerError::Logger {
            message: format!("Cannot open log file {}: {}", path.display(), e),
        })
}

fn file_dispatch(file: File) -> Dispatch {
    Dispatch::new()
        .format(|out, message, record| write_line(out, message, record, &record.level(), true))
        .chain(file)
}

fn colored_stdout_dispatch() -> Dispatch {
    let colors = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::Green)
        .debug(Color::Cyan)
        .trace(Color::BrightBlack);

    Dispatch::new()
        .format(move |out, message, record| {
            write_line(out, message, record, &colors.color(record.level()), false)
        })
        .chain(std::io::stdout())
}

fn write_line(
    out: FormatCallback,
    message: &fmt::Arguments,
    record: &Record,
    level: &dyn fmt::Display,
    with_position: bool,
) {
    let timestamp = humantime::format_rfc3339_millis(SystemTime::now());

    if with_position {
        out.finish(format_args!(
            "{timestamp} {level:<5} {target} {message} ({file}:{line})",
            target = record.target(),
            file = record.file().unwrap_or("?"),
            line = record.line().unwrap_or(0),
        ))
    } else {
        out.finish(format_args!(
            "{timestamp} {level:<5} {target} {message}",
            target = record.target(),
        ))
    }
}
