use std::path::PathBuf;

use clap::Parser;

/// Validation, build, and deploy helper for the mega-xp-storage mod
#[derive(Parser, Debug)]
#[command(name = "fabricator")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    /// Validation only (the default when no mode is given)
    #[arg(long)]
    pub check: bool,

    /// Validation + Gradle build
    #[arg(long)]
    pub build: bool,

    /// Validation + runClient
    #[arg(long)]
    pub run: bool,

    /// Validation + build + git add/commit/push
    #[arg(long)]
    pub deploy: bool,

    /// Validation + clean + build + git add/commit/push
    #[arg(long)]
    pub full: bool,

    /// Run `gradle clean` before building
    #[arg(long, conflicts_with = "no_clean")]
    pub clean: bool,

    /// Skip `gradle clean`
    #[arg(long)]
    pub no_clean: bool,

    /// Git commit message (used with --deploy/--full)
    #[arg(long, default_value = "fix")]
    pub message: String,

    /// Project root (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub project_root: Option<PathBuf>,

    /// Emit the final report as JSON instead of the colored summary
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn wants_build(&self) -> bool {
        self.build || self.deploy || self.full
    }

    pub fn wants_deploy(&self) -> bool {
        self.deploy || self.full
    }

    /// `--full` always cleans; otherwise only an explicit `--clean` does.
    pub fn clean_requested(&self) -> bool {
        self.full || self.clean
    }
}
