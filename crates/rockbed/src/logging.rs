//! File logging for the `rockbed` binary
//!
//! Everything goes to one append-only file in the data directory. The CLI
//! writes results to stdout, so log lines never mix with report output.

use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_FILE: &str = "rockbed.log";
const ROTATE_AT_BYTES: u64 = 5 * 1024 * 1024;
const RETAIN_BYTES: u64 = 1024 * 1024;
const ROTATION_MARKER: &[u8] = b"--- earlier log entries trimmed ---\n";

/// Filter used when `RUST_LOG` is unset: `level` for the CLI, warnings from the engine
fn default_directives(level: &str) -> String {
    format!("rockbed={level},rockbed_core=warn")
}

/// Shrink `log_path` to its last `retain` bytes, starting at a line boundary,
/// once it has grown past `rotate_at`. Returns whether the file was trimmed.
fn trim_log(log_path: &Path, rotate_at: u64, retain: u64) -> std::io::Result<bool> {
    let size = match fs::metadata(log_path) {
        Ok(meta) => meta.len(),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e),
    };
    if size <= rotate_at {
        return Ok(false);
    }

    let mut tail = Vec::new();
    {
        let mut file = File::open(log_path)?;
        file.seek(SeekFrom::Start(size.saturating_sub(retain)))?;
        file.read_to_end(&mut tail)?;
    }

    let first_full_line = tail
        .iter()
        .position(|&b| b == b'\n')
        .map_or(0, |newline| newline + 1);

    let mut file = File::create(log_path)?;
    file.write_all(ROTATION_MARKER)?;
    file.write_all(&tail[first_full_line..])?;
    Ok(true)
}

/// Shared handle to the open log file; every writer the subscriber asks for
/// appends through the same lock
#[derive(Clone)]
struct SharedLog(Arc<Mutex<File>>);

struct SharedLogWriter(Arc<Mutex<File>>);

impl Write for SharedLogWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .flush()
    }
}

impl<'a> MakeWriter<'a> for SharedLog {
    type Writer = SharedLogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        SharedLogWriter(Arc::clone(&self.0))
    }
}

/// Start logging to `rockbed.log` under `data_dir` and return the file's path.
///
/// The file is trimmed to its most recent megabyte once it passes five.
/// `RUST_LOG`, when set, replaces the default filter entirely.
pub fn init_logging(data_dir: &Path, level: &str) -> color_eyre::Result<PathBuf> {
    fs::create_dir_all(data_dir)?;
    let log_path = data_dir.join(LOG_FILE);

    let trimmed = trim_log(&log_path, ROTATE_AT_BYTES, RETAIN_BYTES).unwrap_or_else(|e| {
        eprintln!("Warning: could not trim {}: {e}", log_path.display());
        false
    });

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(SharedLog(Arc::new(Mutex::new(file))))
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()?;

    tracing::info!(path = %log_path.display(), trimmed, "logging started");
    Ok(log_path)
}
