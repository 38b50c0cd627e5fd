use std::fs;
use std::path::PathBuf;

use super::GradleWrapper;
use crate::logfile::RunLog;
use crate::project::{self, ProjectLayout};
use crate::status::{Status, StatusSink};

const INSTANCE_DIR_NAME: &str = ".megaxpstorage-test-instance";

/// Launches the mod through `gradlew runClient` in a dedicated game
/// directory under the user's home, so test runs never pollute a normal
/// instance. Success is a zero exit from the wrapper.
pub fn run_client(layout: &ProjectLayout, sink: &mut dyn StatusSink, log: &RunLog) -> bool {
    let instance_dir = dirs::home_dir().map(|home| home.join(INSTANCE_DIR_NAME));
    run_client_in(layout, instance_dir, sink, log)
}

/// Same as [`run_client`] with the instance directory supplied by the
/// caller. `None` means no home directory could be resolved and fails the
/// run; tests point this at a tempdir.
pub fn run_client_in(
    layout: &ProjectLayout,
    instance_dir: Option<PathBuf>,
    sink: &mut dyn StatusSink,
    log: &RunLog,
) -> bool {
    let mut status = Status::new(sink, log);
    status.header("RUN CLIENT");

    let wrapper = match GradleWrapper::locate(layout) {
        Ok(wrapper) => wrapper,
        Err(err) => {
            status.error(&err.to_string());
            return false;
        }
    };

    let Some(instance_dir) = instance_dir else {
        status.error("Could not resolve a home directory for the test instance");
        return false;
    };
    if let Err(err) = fs::create_dir_all(&instance_dir) {
        status.error(&format!(
            "Could not create {}: {err}",
            instance_dir.display()
        ));
        return false;
    }

    status.info(&format!("Using gameDir: {}", instance_dir.display()));
    let run_args = format!(
        "--args=--gameDir \"{}\" --username {}",
        instance_dir.display(),
        project::TEST_USERNAME
    );

    match wrapper.invoke(&["runClient", &run_args]) {
        Ok(exit) if exit.success() => true,
        Ok(_) => {
            status.error("runClient failed");
            false
        }
        Err(err) => {
            status.error(&format!("runClient failed to start: {err}"));
            false
        }
    }
}
