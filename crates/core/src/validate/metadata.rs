use super::read_lossy;
use crate::project::{self, ProjectLayout};
use crate::report::Report;
use crate::status::Status;

/// Checks `fabric.mod.json` for the mod id (primary identifier, error on
/// mismatch) and the Minecraft dependency range (secondary, warning only).
pub(super) fn check(layout: &ProjectLayout, status: &mut Status<'_>) -> Report {
    status.info("Validating fabric.mod.json...");
    let mut report = Report::new();

    let Some(content) = read_lossy(&layout.fabric_mod_json()) else {
        report.error("Missing src/main/resources/fabric.mod.json");
        status.error("fabric.mod.json not found");
        return report;
    };

    if content.contains(project::MOD_ID_FIELD) {
        status.success("Mod id: mega-xp-storage");
    } else {
        report.error("fabric.mod.json id is not mega-xp-storage");
        status.error("fabric.mod.json id is not mega-xp-storage");
    }

    if content.contains(project::MINECRAFT_DEP_FIELD) {
        status.success("Minecraft dependency: ~1.21.1");
    } else {
        report.warn("fabric.mod.json minecraft dependency is not ~1.21.1");
        status.warning("fabric.mod.json minecraft dependency is not ~1.21.1");
    }

    report
}
