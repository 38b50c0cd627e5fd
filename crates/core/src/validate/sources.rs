use walkdir::WalkDir;

use super::read_lossy;
use crate::project::{self, ProjectLayout};
use crate::report::Report;
use crate::status::Status;

/// Scans every `.java` file under `src/` for the pre-1.21 `new Identifier(`
/// constructor. Each offending file yields one distinct error; the console
/// gets a single summary line either way.
pub(super) fn check(layout: &ProjectLayout, status: &mut Status<'_>) -> Report {
    status.info("Scanning Java sources for common 1.21.1 API issues...");
    let mut report = Report::new();

    let mut offenders = 0usize;
    for entry in WalkDir::new(layout.java_source_root())
        .into_iter()
        .filter_map(|entry| entry.ok())
    {
        if entry.path().extension().and_then(|ext| ext.to_str()) != Some("java") {
            continue;
        }
        let Some(content) = read_lossy(entry.path()) else {
            continue;
        };
        if content.contains(project::OLD_IDENTIFIER_CALL) {
            offenders += 1;
            report.error(format!(
                "Old Identifier constructor used in {}",
                entry.path().display()
            ));
        }
    }

    if offenders == 0 {
        status.success("No old Identifier constructor usage");
    } else {
        status.error(&format!(
            "Found {offenders} old Identifier constructor usages"
        ));
    }

    report
}
