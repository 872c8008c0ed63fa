//! Timestamped log file and the process-wide diagnostic sink
//!
//! The codec reports diagnostics through [`log`] and [`error`]. Nothing is
//! written to disk until a [`LogFile`] is installed with [`install`]; until
//! then errors go to `stderr` and informational lines are dropped.

use crate::utils::Utils;
use crate::{Error, Result};
use chrono::{Local, Utc};
use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex, OnceLock};
use std::time::Instant;

static LOG_INSTANCE: OnceLock<Mutex<Option<LogFile>>> = OnceLock::new();

#[derive(Clone)]
pub struct LogFile {
    inner: Arc<LogFileInner>,
}

struct LogFileInner {
    state: Mutex<LogState>,
    start: Instant,
    output_to_console: bool,
}

struct LogState {
    writer: BufWriter<File>,
    last_seconds: f32,
}

impl LogFile {
    /// Create a log file at `path`, or `cornerstl_<date>_<time>.log` in the
    /// system temp folder when no path is given.
    pub fn new(path: Option<&str>, output_to_console: bool) -> Result<Self> {
        let path = match path {
            Some(path) if !path.is_empty() => PathBuf::from(path),
            _ => {
                let name = Utils::date_time_filename("cornerstl_", ".log");
                env::temp_dir().join(name)
            }
        };

        let file = File::create(&path).map_err(|e| {
            Error::InvalidPath(format!("Unable to create file {}: {}", path.display(), e))
        })?;

        let log = Self {
            inner: Arc::new(LogFileInner {
                state: Mutex::new(LogState {
                    writer: BufWriter::new(file),
                    last_seconds: 0.0,
                }),
                start: Instant::now(),
                output_to_console,
            }),
        };

        log.log(format!("Opened {}", path.display()))?;
        log.log_time()?;
        log.log("----------------------------------------")?;

        Ok(log)
    }

    pub fn log(&self, message: impl AsRef<str>) -> Result<()> {
        self.inner.log_lines(message.as_ref())
    }

    pub fn log_time(&self) -> Result<()> {
        self.log(format!(
            "Current time (UTC): {}",
            Utc::now().format("%Y-%m-%d %H:%M:%S (UTC)")
        ))?;
        self.log(format!(
            "Current local time: {}",
            Local::now().format("%Y-%m-%d %H:%M:%S (%z)")
        ))
    }
}

impl LogFileInner {
    fn log_lines(&self, message: &str) -> Result<()> {
        let seconds = self.start.elapsed().as_secs_f32();

        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        let diff = seconds - state.last_seconds;
        let prefix = format!("{:7.0}s {:6.1}+ ", seconds, diff);

        for line in message.split('\n') {
            if self.output_to_console {
                println!("{}{}", prefix, line);
            }
            state.writer.write_all(prefix.as_bytes())?;
            state.writer.write_all(line.as_bytes())?;
            state.writer.write_all(b"\n")?;
            state.writer.flush()?;
            state.last_seconds = seconds;
        }

        Ok(())
    }
}

impl Drop for LogFileInner {
    fn drop(&mut self) {
        let _ = self.log_lines("----------------------------------------");
        let _ = self.log_lines("Closing log file.");
    }
}

fn store() -> &'static Mutex<Option<LogFile>> {
    LOG_INSTANCE.get_or_init(|| Mutex::new(None))
}

/// Route diagnostics to `log`, replacing any previously installed log file
pub fn install(log: LogFile) {
    *store().lock().unwrap_or_else(|e| e.into_inner()) = Some(log);
}

/// Detach the installed log file, returning it
pub fn uninstall() -> Option<LogFile> {
    store().lock().unwrap_or_else(|e| e.into_inner()).take()
}

/// Informational line; dropped when no log file is installed
pub fn log(message: impl AsRef<str>) {
    let installed = store().lock().unwrap_or_else(|e| e.into_inner()).clone();
    if let Some(log) = installed {
        let _ = log.log(message);
    }
}

/// Error line, prefixed with `ERROR | `; goes to `stderr` when no log file
/// is installed
pub fn error(message: impl AsRef<str>) {
    let line = format!("ERROR | {}", message.as_ref());
    let installed = store().lock().unwrap_or_else(|e| e.into_inner()).clone();
    match installed {
        Some(log) => {
            let _ = log.log(line);
        }
        None => eprintln!("{}", line),
    }
}
