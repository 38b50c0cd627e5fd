use super::read_lossy;
use crate::project::{self, ProjectLayout};
use crate::report::Report;
use crate::status::Status;

/// Checks the mixins config for the expected package and verifies the
/// mixin entry class exists on disk.
pub(super) fn check(layout: &ProjectLayout, status: &mut Status<'_>) -> Report {
    status.info("Validating mixins config and classes...");
    let mut report = Report::new();

    let Some(content) = read_lossy(&layout.mixins_config()) else {
        report.error("Missing mega-xp-storage.mixins.json");
        status.error("Missing mega-xp-storage.mixins.json");
        return report;
    };

    if content.contains(project::MIXIN_PACKAGE_FIELD) {
        status.success("Mixins package correct");
    } else {
        report.error("Mixins package mismatch");
        status.error("Mixins package mismatch");
    }

    if layout.mixin_entry_class().exists() {
        status.success("PlayerEntityMixin present");
    } else {
        report.error("Missing PlayerEntityMixin.java");
        status.error("Missing PlayerEntityMixin.java");
    }

    report
}
