use fabricator_core::{Report, StatusSink};

const RED: &str = "\x1b[91m";
const GREEN: &str = "\x1b[92m";
const YELLOW: &str = "\x1b[93m";
const BLUE: &str = "\x1b[94m";
const CYAN: &str = "\x1b[96m";
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const BANNER_WIDTH: usize = 80;

/// ANSI-colored terminal sink for status lines.
#[derive(Debug, Default)]
pub struct Console;

impl Console {
    pub fn new() -> Self {
        Self
    }
}

impl StatusSink for Console {
    fn success(&mut self, message: &str) {
        println!("{GREEN}OK  {message}{RESET}");
    }

    fn info(&mut self, message: &str) {
        println!("{CYAN}INFO {message}{RESET}");
    }

    fn warning(&mut self, message: &str) {
        println!("{YELLOW}WARN {message}{RESET}");
    }

    fn error(&mut self, message: &str) {
        println!("{RED}ERR {message}{RESET}");
    }

    fn header(&mut self, title: &str) {
        let banner = "=".repeat(BANNER_WIDTH);
        let centered = format!("{title:^width$}", width = BANNER_WIDTH);
        println!();
        println!("{BLUE}{banner}{RESET}");
        println!("{BOLD}{CYAN}{centered}{RESET}");
        println!("{BLUE}{banner}{RESET}");
    }
}

/// Sink that drops every status line. Used with `--json`, where stdout
/// must carry nothing but the report document.
#[derive(Debug, Default)]
pub struct Quiet;

impl StatusSink for Quiet {
    fn success(&mut self, _message: &str) {}
    fn info(&mut self, _message: &str) {}
    fn warning(&mut self, _message: &str) {}
    fn error(&mut self, _message: &str) {}
    fn header(&mut self, _title: &str) {}
}

/// Prints the final BUILD REPORT summary: all-clear, or every error and
/// warning with counts, then the log file name.
pub fn print_report(console: &mut Console, report: &Report, log_name: &str) {
    console.header("BUILD REPORT");

    if report.errors().is_empty() && report.warnings().is_empty() {
        console.success("All checks passed");
    } else if !report.errors().is_empty() {
        console.error(&format!("{} error(s) found", report.errors().len()));
        for error in report.errors() {
            println!("{RED}  - {error}{RESET}");
        }
    }
    if !report.warnings().is_empty() {
        console.warning(&format!("{} warning(s)", report.warnings().len()));
        for warning in report.warnings() {
            println!("{YELLOW}  - {warning}{RESET}");
        }
    }

    console.success(&format!("Log file: {log_name}"));
}
