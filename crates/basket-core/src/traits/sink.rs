//! The result-consuming collaborator.

use crate::errors::SinkError;
use crate::types::AnalysisReport;

/// Consumes the output of an analysis run.
///
/// Persistence, bundle naming, and downstream pricing all live behind
/// this seam; the engine never touches a concrete store.
pub trait ResultSink: Send {
    /// Persist one analysis report.
    fn persist(&mut self, report: &AnalysisReport) -> Result<(), SinkError>;
}

/// In-memory implementation of `ResultSink` for tests.
#[derive(Debug, Default)]
pub struct InMemoryResultSink {
    reports: Vec<AnalysisReport>,
}

impl InMemoryResultSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports persisted so far, in arrival order.
    pub fn reports(&self) -> &[AnalysisReport] {
        &self.reports
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}

impl ResultSink for InMemoryResultSink {
    fn persist(&mut self, report: &AnalysisReport) -> Result<(), SinkError> {
        self.reports.push(report.clone());
        Ok(())
    }
}
