//! Git deploy sequence: stage everything, commit, push.
//!
//! Commit failures are downgraded to warnings across the board; "nothing
//! to commit" is indistinguishable from a genuine commit error here, so
//! both are non-fatal. Push failures are fatal.

use std::path::PathBuf;
use std::process::{Command, ExitStatus};

use tracing::debug;

use crate::logfile::RunLog;
use crate::project::{self, ProjectLayout};
use crate::report::Report;
use crate::status::{Status, StatusSink};

/// Result of one deploy attempt plus the errors/warnings it recorded.
#[derive(Debug)]
pub struct DeployOutcome {
    pub ok: bool,
    pub report: Report,
}

impl DeployOutcome {
    fn failed(report: Report) -> Self {
        Self { ok: false, report }
    }
}

/// Runs the fixed `git add . && git commit && git push` sequence against
/// the project root.
pub struct GitSequence {
    program: PathBuf,
    root: PathBuf,
    git_dir: PathBuf,
}

impl GitSequence {
    pub fn new(layout: &ProjectLayout) -> Self {
        Self {
            program: PathBuf::from("git"),
            root: layout.root().to_path_buf(),
            git_dir: layout.git_dir(),
        }
    }

    /// Substitutes the git executable, used by tests to inject a fake.
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    /// Stage, commit, push. Requires a `.git` directory at the project
    /// root; without one, nothing is spawned and the outcome is fatal.
    pub fn commit_and_push(
        &self,
        message: &str,
        branch: &str,
        sink: &mut dyn StatusSink,
        log: &RunLog,
    ) -> DeployOutcome {
        let mut status = Status::new(sink, log);
        status.header("GIT COMMIT & PUSH");
        let mut report = Report::new();

        if !self.git_dir.is_dir() {
            status.error("No .git directory found; cannot deploy");
            report.error("Not a git repository");
            return DeployOutcome::failed(report);
        }

        status.info("Running: git add .");
        match self.run(&["add", "."]) {
            Ok(exit) if exit.success() => {}
            Ok(_) => {
                status.error("Git command failed: git add .");
                report.error("Git command failed");
                return DeployOutcome::failed(report);
            }
            Err(err) => {
                status.error(&format!("Git command failed: {err}"));
                report.error("Git command failed");
                return DeployOutcome::failed(report);
            }
        }

        status.info(&format!("Running: git commit -m \"{message}\""));
        match self.run(&["commit", "-m", message]) {
            Ok(exit) if exit.success() => {}
            Ok(_) => {
                // Most common: nothing to commit.
                status.warning("git commit failed (likely nothing to commit)");
                report.warn("git commit failed (likely nothing to commit)");
            }
            Err(err) => {
                status.error(&format!("Git command failed: {err}"));
                report.error("Git command failed");
                return DeployOutcome::failed(report);
            }
        }

        status.info(&format!(
            "Running: git push -u {} {branch}",
            project::GIT_REMOTE
        ));
        match self.run(&["push", "-u", project::GIT_REMOTE, branch]) {
            Ok(exit) if exit.success() => {}
            Ok(_) => {
                status.error("git push failed (check remote/auth/branch)");
                report.error("git push failed");
                return DeployOutcome::failed(report);
            }
            Err(err) => {
                status.error(&format!("Git command failed: {err}"));
                report.error("Git command failed");
                return DeployOutcome::failed(report);
            }
        }

        status.success("Push successful");
        DeployOutcome { ok: true, report }
    }

    fn run(&self, args: &[&str]) -> std::io::Result<ExitStatus> {
        debug!("Invoking {} {:?}", self.program.display(), args);
        Command::new(&self.program)
            .args(args)
            .current_dir(&self.root)
            .status()
    }
}
