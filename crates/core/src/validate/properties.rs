use super::read_lossy;
use crate::project::{self, ProjectLayout};
use crate::report::Report;
use crate::status::Status;

/// Checks `gradle.properties` for the pinned Minecraft version and the
/// Fabric loader key. A missing file or wrong version is an error; a
/// missing loader key only warns.
pub(super) fn check(layout: &ProjectLayout, status: &mut Status<'_>) -> Report {
    status.info("Validating gradle.properties...");
    let mut report = Report::new();

    let Some(content) = read_lossy(&layout.gradle_properties()) else {
        report.error("Missing gradle.properties");
        status.error("gradle.properties not found");
        return report;
    };

    if content.contains(project::MINECRAFT_VERSION_LINE) {
        status.success("Minecraft version: 1.21.1");
    } else {
        report.error("Minecraft version mismatch (expected 1.21.1)");
        status.error("Minecraft version mismatch (expected 1.21.1)");
    }

    if content.contains(project::LOADER_VERSION_KEY) {
        status.success("Fabric loader version present");
    } else {
        report.warn("No loader_version= in gradle.properties");
        status.warning("No loader_version= in gradle.properties");
    }

    report
}
