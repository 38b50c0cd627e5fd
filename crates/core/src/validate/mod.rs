//! Static validation of the project tree.
//!
//! Four independent substring checks over a fixed set of files. All four
//! always run, regardless of earlier failures, and each returns its own
//! [`Report`] for the caller to merge. Matching is deliberately literal:
//! the expected strings are the contract, not the file formats.

mod metadata;
mod mixins;
mod properties;
mod sources;

use std::fs;
use std::path::Path;

use crate::logfile::RunLog;
use crate::project::ProjectLayout;
use crate::report::Report;
use crate::status::{Status, StatusSink};

/// Runs every validation check and merges their reports.
pub fn validate_all(layout: &ProjectLayout, sink: &mut dyn StatusSink, log: &RunLog) -> Report {
    let mut status = Status::new(sink, log);
    status.header("VALIDATION SUITE");

    let mut report = Report::new();
    report.merge(properties::check(layout, &mut status));
    report.merge(metadata::check(layout, &mut status));
    report.merge(sources::check(layout, &mut status));
    report.merge(mixins::check(layout, &mut status));
    report
}

/// Reads a file as text, replacing invalid UTF-8 rather than failing.
/// Returns `None` when the file is missing or unreadable.
pub(crate) fn read_lossy(path: &Path) -> Option<String> {
    fs::read(path)
        .ok()
        .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::capture::CaptureSink;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn write(path: &Path, contents: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    /// Lays out a project that passes every check.
    fn valid_project(root: &Path) -> ProjectLayout {
        let layout = ProjectLayout::new(root);
        write(
            &layout.gradle_properties(),
            "minecraft_version=1.21.1\nloader_version=0.16.5\n",
        );
        write(
            &layout.fabric_mod_json(),
            r#"{
  "id": "mega-xp-storage",
  "depends": {
    "minecraft": "~1.21.1"
  }
}
"#,
        );
        write(
            &layout.mixins_config(),
            r#"{
  "package": "com.carte.megaxpstorage.mixin",
  "mixins": ["PlayerEntityMixin"]
}
"#,
        );
        write(
            &layout.mixin_entry_class(),
            "package com.carte.megaxpstorage.mixin;\n\npublic class PlayerEntityMixin {}\n",
        );
        layout
    }

    fn run(layout: &ProjectLayout) -> (Report, CaptureSink) {
        let mut sink = CaptureSink::new();
        let log = RunLog::new(layout.log_file());
        let report = validate_all(layout, &mut sink, &log);
        (report, sink)
    }

    #[test]
    fn fully_valid_project_passes_with_no_errors() {
        let dir = TempDir::new().unwrap();
        let layout = valid_project(dir.path());

        let (report, sink) = run(&layout);

        assert!(report.passed(), "errors: {:?}", report.errors());
        assert!(report.errors().is_empty());
        assert!(report.warnings().is_empty());
        assert!(sink.contains("Minecraft version: 1.21.1"));
        assert!(sink.contains("PlayerEntityMixin present"));
    }

    #[test]
    fn missing_properties_file_does_not_stop_later_checks() {
        let dir = TempDir::new().unwrap();
        let layout = valid_project(dir.path());
        fs::remove_file(layout.gradle_properties()).unwrap();
        fs::remove_file(layout.mixins_config()).unwrap();

        let (report, sink) = run(&layout);

        assert!(!report.passed());
        assert!(report.errors().iter().any(|e| e == "Missing gradle.properties"));
        // The mixins check still ran and recorded its own error.
        assert!(
            report
                .errors()
                .iter()
                .any(|e| e == "Missing mega-xp-storage.mixins.json")
        );
        assert!(sink.contains("Validating mixins config and classes"));
    }

    #[test]
    fn loader_version_absence_is_only_a_warning() {
        let dir = TempDir::new().unwrap();
        let layout = valid_project(dir.path());
        write(&layout.gradle_properties(), "minecraft_version=1.21.1\n");

        let (report, _) = run(&layout);

        assert!(report.passed());
        assert_eq!(report.warnings(), ["No loader_version= in gradle.properties"]);
    }

    #[test]
    fn one_error_per_file_using_the_old_constructor() {
        let dir = TempDir::new().unwrap();
        let layout = valid_project(dir.path());
        let java = layout.java_source_root();
        write(
            &java.join("main/java/com/carte/megaxpstorage/A.java"),
            "Identifier id = new Identifier(\"a\");\n",
        );
        write(
            &java.join("main/java/com/carte/megaxpstorage/nested/B.java"),
            "Identifier id = new Identifier(\"b\");\n",
        );
        write(
            &java.join("main/java/com/carte/megaxpstorage/Fine.java"),
            "Identifier id = Identifier.of(\"fine\");\n",
        );

        let (report, sink) = run(&layout);

        let identifier_errors: Vec<_> = report
            .errors()
            .iter()
            .filter(|e| e.contains("Old Identifier constructor"))
            .collect();
        assert_eq!(identifier_errors.len(), 2);
        assert!(identifier_errors.iter().any(|e| e.contains("A.java")));
        assert!(identifier_errors.iter().any(|e| e.contains("B.java")));
        assert!(sink.contains("Found 2 old Identifier constructor usages"));
    }

    #[test]
    fn clean_source_tree_reports_no_identifier_errors() {
        let dir = TempDir::new().unwrap();
        let layout = valid_project(dir.path());

        let (report, sink) = run(&layout);

        assert!(report.passed());
        assert!(sink.contains("No old Identifier constructor usage"));
    }

    #[test]
    fn metadata_secondary_field_mismatch_is_a_warning() {
        let dir = TempDir::new().unwrap();
        let layout = valid_project(dir.path());
        write(
            &layout.fabric_mod_json(),
            r#"{"id": "mega-xp-storage", "depends": {"minecraft": "~1.20.4"}}"#,
        );

        let (report, _) = run(&layout);

        assert!(report.passed());
        assert_eq!(
            report.warnings(),
            ["fabric.mod.json minecraft dependency is not ~1.21.1"]
        );
    }

    #[test]
    fn wrong_mod_id_is_an_error() {
        let dir = TempDir::new().unwrap();
        let layout = valid_project(dir.path());
        write(
            &layout.fabric_mod_json(),
            r#"{"id": "other-mod", "depends": {"minecraft": "~1.21.1"}}"#,
        );

        let (report, _) = run(&layout);

        assert!(!report.passed());
        assert!(
            report
                .errors()
                .iter()
                .any(|e| e == "fabric.mod.json id is not mega-xp-storage")
        );
    }

    #[test]
    fn missing_mixin_class_is_an_error() {
        let dir = TempDir::new().unwrap();
        let layout = valid_project(dir.path());
        fs::remove_file(layout.mixin_entry_class()).unwrap();

        let (report, _) = run(&layout);

        assert!(!report.passed());
        assert!(report.errors().iter().any(|e| e == "Missing PlayerEntityMixin.java"));
    }
}
