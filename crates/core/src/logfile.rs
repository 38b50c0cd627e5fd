use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;

const BANNER: &str = "================================================================================";

/// Append-only run log mirroring the console output of each stage.
///
/// The file is opened in append mode for every write and closed again, so a
/// crash mid-pipeline loses at most the line being written. Logging failures
/// are swallowed; the log must never be the reason a build fails.
#[derive(Debug)]
pub struct RunLog {
    path: PathBuf,
}

impl RunLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes a timestamped section header for a pipeline stage.
    pub fn section(&self, title: &str) {
        let stamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        self.append(&format!("\n{BANNER}\n{title} ({stamp})\n{BANNER}"));
    }

    /// Writes one message line.
    pub fn line(&self, message: &str) {
        self.append(message);
    }

    fn append(&self, text: &str) {
        let opened = OpenOptions::new().append(true).create(true).open(&self.path);
        if let Ok(mut file) = opened {
            let _ = writeln!(file, "{text}");
        }
    }
}
