use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing::debug;

use super::GradleWrapper;
use crate::logfile::RunLog;
use crate::project::ProjectLayout;
use crate::status::{Status, StatusSink};

/// A packaged jar produced by the build.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub path: PathBuf,
    pub size: u64,
}

impl Artifact {
    pub fn size_mb(&self) -> f64 {
        self.size as f64 / (1024.0 * 1024.0)
    }
}

/// Result of one build invocation, consumed immediately by the caller.
#[derive(Debug)]
pub struct BuildOutcome {
    pub ok: bool,
    pub latest_jar: Option<Artifact>,
}

impl BuildOutcome {
    fn failed() -> Self {
        Self {
            ok: false,
            latest_jar: None,
        }
    }
}

/// Runs `gradlew [clean] build` and picks out the newest jar.
///
/// A failed clean is a warning only; the build still runs. A failed build
/// is fatal. A successful build with an empty `build/libs` is a warning,
/// not a failure.
pub fn build_project(
    layout: &ProjectLayout,
    clean: bool,
    sink: &mut dyn StatusSink,
    log: &RunLog,
) -> BuildOutcome {
    let mut status = Status::new(sink, log);
    status.header("GRADLE BUILD");

    let wrapper = match GradleWrapper::locate(layout) {
        Ok(wrapper) => wrapper,
        Err(err) => {
            status.error(&err.to_string());
            return BuildOutcome::failed();
        }
    };

    if clean {
        status.info("Running gradle clean...");
        let cleaned = wrapper
            .invoke(&["clean", "--no-daemon"])
            .map(|exit| exit.success())
            .unwrap_or(false);
        if !cleaned {
            status.warning("Clean failed; continuing with build");
        }
    }

    status.info("Running gradle build...");
    let built = wrapper
        .invoke(&["build", "--no-daemon"])
        .map(|exit| exit.success())
        .unwrap_or(false);
    if !built {
        status.error("Build failed");
        return BuildOutcome::failed();
    }

    let latest = latest_jar(&layout.libs_dir());
    match &latest {
        Some(jar) => {
            let name = jar
                .path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            status.success(&format!("Build OK; jar: {} ({:.2} MB)", name, jar.size_mb()));
        }
        None => status.warning("Build OK but no jar found in build/libs"),
    }

    BuildOutcome {
        ok: true,
        latest_jar: latest,
    }
}

/// Newest `.jar` in `libs` by modification time, skipping `-sources` and
/// `-dev` variants. Non-recursive; an absent directory yields `None`.
pub fn latest_jar(libs: &Path) -> Option<Artifact> {
    let entries = fs::read_dir(libs).ok()?;

    let mut jars: Vec<(PathBuf, SystemTime, u64)> = Vec::new();
    for entry in entries.filter_map(|entry| entry.ok()) {
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("jar") {
            continue;
        }
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if name.contains("-sources") || name.contains("-dev") {
            debug!("Skipping non-distribution jar {name}");
            continue;
        }
        let Ok(meta) = entry.metadata() else {
            continue;
        };
        let mtime = meta.modified().unwrap_or(SystemTime::UNIX_EPOCH);
        jars.push((path, mtime, meta.len()));
    }

    jars.sort_by(|a, b| b.1.cmp(&a.1));
    jars.into_iter().next().map(|(path, _, size)| Artifact { path, size })
}
