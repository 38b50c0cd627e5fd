//! Gradle wrapper invocation.
//!
//! All Gradle work goes through the project-local wrapper with
//! `GRADLE_USER_HOME` pointed at a directory inside the project, scoped to
//! each child invocation. Repeated local builds then never touch the shared
//! global Gradle cache.

mod build;
mod client;

pub use build::{Artifact, BuildOutcome, build_project};
pub use client::{run_client, run_client_in};

use std::fs;
use std::path::PathBuf;
use std::process::{Command, ExitStatus};

use tracing::debug;

use crate::error::{Error, Result};
use crate::project::ProjectLayout;

/// Handle on the project's Gradle wrapper executable.
pub struct GradleWrapper {
    executable: PathBuf,
    user_home: PathBuf,
    root: PathBuf,
}

impl GradleWrapper {
    /// Locates the wrapper at the project root and prepares the isolated
    /// Gradle home. Fails with [`Error::WrapperMissing`] if the wrapper
    /// executable is absent.
    pub fn locate(layout: &ProjectLayout) -> Result<Self> {
        let executable = layout.gradle_wrapper();
        if !executable.exists() {
            return Err(Error::WrapperMissing);
        }
        let user_home = layout.gradle_user_home();
        fs::create_dir_all(&user_home)?;
        Ok(Self {
            executable,
            user_home,
            root: layout.root().to_path_buf(),
        })
    }

    /// Runs the wrapper with the given arguments and blocks until it exits.
    /// The `GRADLE_USER_HOME` override applies to this child only.
    pub fn invoke(&self, args: &[&str]) -> Result<ExitStatus> {
        debug!("Invoking {} {:?}", self.executable.display(), args);
        let status = Command::new(&self.executable)
            .args(args)
            .current_dir(&self.root)
            .env("GRADLE_USER_HOME", &self.user_home)
            .status()?;
        debug!("Wrapper exited with {status}");
        Ok(status)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn locate_fails_without_wrapper() {
        let dir = TempDir::new().unwrap();
        let layout = ProjectLayout::new(dir.path());
        assert!(matches!(
            GradleWrapper::locate(&layout),
            Err(Error::WrapperMissing)
        ));
    }

    #[cfg(unix)]
    #[test]
    fn locate_creates_the_isolated_gradle_home() {
        let dir = TempDir::new().unwrap();
        let layout = ProjectLayout::new(dir.path());
        test_support::fake_wrapper(&layout.gradle_wrapper(), "exit 0");

        let wrapper = GradleWrapper::locate(&layout).unwrap();
        assert!(layout.gradle_user_home().is_dir());
        assert!(wrapper.invoke(&["build", "--no-daemon"]).unwrap().success());
    }
}
