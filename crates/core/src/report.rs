use serde::Serialize;

/// Accumulated errors and warnings from one pipeline run.
///
/// Each stage builds its own `Report` and the orchestrator merges them, so
/// there is no shared mutable accumulator. Warnings never fail a run; only
/// errors do.
#[derive(Debug, Default, Clone, Serialize)]
pub struct Report {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Appends all entries from `other`, preserving order.
    pub fn merge(&mut self, other: Report) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}
