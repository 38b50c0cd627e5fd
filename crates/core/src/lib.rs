//! fabricator-core - the pipeline behind the `fabricator` build helper
//!
//! This crate provides functionality to:
//! - Validate the mega-xp-storage project files against their expected contents
//! - Drive the Gradle wrapper (clean, build, runClient) with an isolated Gradle home
//! - Stage, commit, and push the project through git
//! - Accumulate errors and warnings into a report and mirror them to a run log
pub mod error;
pub mod git;
pub mod gradle;
pub mod logfile;
pub mod project;
pub mod report;
pub mod status;
pub mod validate;

// Re-export commonly used types
pub use error::{Error, Result};
pub use git::{DeployOutcome, GitSequence};
pub use gradle::{Artifact, BuildOutcome, GradleWrapper, build_project, run_client, run_client_in};
pub use logfile::RunLog;
pub use project::ProjectLayout;
pub use report::Report;
pub use status::{Status, StatusSink};
pub use validate::validate_all;
