use crate::logfile::RunLog;

/// Where color-coded status lines go. The CLI renders these to the
/// terminal; tests capture them instead.
pub trait StatusSink {
    fn success(&mut self, message: &str);
    fn info(&mut self, message: &str);
    fn warning(&mut self, message: &str);
    fn error(&mut self, message: &str);
    fn header(&mut self, title: &str);
}

/// Couples a [`StatusSink`] with the [`RunLog`] so stage code emits each
/// message exactly once and both outputs stay in step.
pub struct Status<'a> {
    sink: &'a mut dyn StatusSink,
    log: &'a RunLog,
}

impl<'a> Status<'a> {
    pub fn new(sink: &'a mut dyn StatusSink, log: &'a RunLog) -> Self {
        Self { sink, log }
    }

    pub fn header(&mut self, title: &str) {
        self.sink.header(title);
        self.log.section(title);
    }

    pub fn success(&mut self, message: &str) {
        self.sink.success(message);
        self.log.line(&format!("OK  {message}"));
    }

    pub fn info(&mut self, message: &str) {
        self.sink.info(message);
        self.log.line(&format!("INFO {message}"));
    }

    pub fn warning(&mut self, message: &str) {
        self.sink.warning(message);
        self.log.line(&format!("WARN {message}"));
    }

    pub fn error(&mut self, message: &str) {
        self.sink.error(message);
        self.log.line(&format!("ERR {message}"));
    }
}

#[cfg(test)]
pub(crate) mod capture {
    use super::StatusSink;

    /// Test sink that records every emitted line with a severity prefix.
    #[derive(Debug, Default)]
    pub struct CaptureSink {
        pub lines: Vec<String>,
    }

    impl CaptureSink {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn contains(&self, needle: &str) -> bool {
            self.lines.iter().any(|line| line.contains(needle))
        }
    }

    impl StatusSink for CaptureSink {
        fn success(&mut self, message: &str) {
            self.lines.push(format!("OK  {message}"));
        }

        fn info(&mut self, message: &str) {
            self.lines.push(format!("INFO {message}"));
        }

        fn warning(&mut self, message: &str) {
            self.lines.push(format!("WARN {message}"));
        }

        fn error(&mut self, message: &str) {
            self.lines.push(format!("ERR {message}"));
        }

        fn header(&mut self, title: &str) {
            self.lines.push(format!("== {title} =="));
        }
    }
}
