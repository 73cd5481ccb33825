// src/logging/mod.rs
use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use log::LevelFilter;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Logger already initialised: {0}")]
    AlreadyInitialised(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, LoggingError>;

/// Install the process logger, writing to the configured file or to stderr.
pub fn init(level: LevelFilter, log_file: Option<&Path>) -> Result<()> {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(false);

    if let Some(path) = log_file {
        let file = open_log_file(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    } else {
        builder.target(env_logger::Target::Stderr);
    }

    builder.try_init()?;
    log::debug!("logging initialised at level {}", level);
    Ok(())
}

fn open_log_file(path: &Path) -> Result<fs::File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_file_and_parent_are_created() {
        let dir = std::env::temp_dir().join(format!("passmeter-log-{}", std::process::id()));
        let path = dir.join("nested").join("passmeter.log");

        open_log_file(&path).unwrap();
        assert!(path.exists());

        fs::remove_dir_all(&dir).unwrap();
    }
}
