use anyhow::{Context, Result};
use tracing::debug;

use fabricator_core::{
    GitSequence, ProjectLayout, Report, RunLog, StatusSink, build_project, run_client,
    validate_all,
};

use crate::cli::Cli;
use crate::display::{Console, Quiet, print_report};

const DEPLOY_BRANCH: &str = "main";

/// Runs the selected stages in pipeline order. Validation always runs
/// first and aborts everything else on failure; each later stage gates
/// the stages after it. Returns the process exit code (0 or 1).
pub fn run_pipeline(cli: &Cli) -> Result<i32> {
    let root = match &cli.project_root {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().context("Failed to get current directory")?,
    };
    debug!("Project root: {}", root.display());

    let layout = ProjectLayout::new(root);
    let log = RunLog::new(layout.log_file());
    let mut sink: Box<dyn StatusSink> = if cli.json {
        Box::new(Quiet)
    } else {
        Box::new(Console::new())
    };

    let mut report = validate_all(&layout, sink.as_mut(), &log);
    if !report.passed() {
        finish(cli, &report, &layout)?;
        return Ok(1);
    }

    if cli.wants_build() {
        let outcome = build_project(&layout, cli.clean_requested(), sink.as_mut(), &log);
        if !outcome.ok {
            report.error("Build failed");
            finish(cli, &report, &layout)?;
            return Ok(1);
        }
    }

    if cli.run && !run_client(&layout, sink.as_mut(), &log) {
        report.error("runClient failed");
        finish(cli, &report, &layout)?;
        return Ok(1);
    }

    if cli.wants_deploy() {
        let deploy = GitSequence::new(&layout).commit_and_push(
            &cli.message,
            DEPLOY_BRANCH,
            sink.as_mut(),
            &log,
        );
        let deployed = deploy.ok;
        report.merge(deploy.report);
        if !deployed {
            finish(cli, &report, &layout)?;
            return Ok(1);
        }
    }

    finish(cli, &report, &layout)?;
    Ok(0)
}

fn finish(cli: &Cli, report: &Report, layout: &ProjectLayout) -> Result<()> {
    if cli.json {
        let mut document = serde_json::to_value(report)?;
        document["passed"] = serde_json::Value::Bool(report.passed());
        document["log_file"] = serde_json::to_value(layout.log_file())?;
        println!("{}", serde_json::to_string_pretty(&document)?);
    } else {
        let log_name = layout
            .log_file()
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        print_report(&mut Console::new(), report, &log_name);
    }
    Ok(())
}
