use crate::domain::callstack::CallstackContainer;

pub mod html_formatter;

/// One crash record after parsing.
#[derive(Debug, Clone)]
pub struct CallstackReport {
    pub crash_id: u64,
    pub callstack: CallstackContainer,
}

pub trait CallstackFormatter: Send + Sync {
    /// Render one callstack under its own display options.
    fn format(&self, callstack: &CallstackContainer) -> String;

    /// Heading printed before each crash in a batch.
    fn header(&self, report: &CallstackReport) -> String {
        format!(
            "== Crash {} ({}) ==\n",
            report.crash_id,
            report.callstack.module_name()
        )
    }

    /// Render a batch of crashes into one document.
    fn format_reports(&self, reports: &[CallstackReport]) -> String {
        reports
            .iter()
            .map(|report| format!("{}{}", self.header(report), self.format(&report.callstack)))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub trait OutputExporter {
    fn export(&self, content: &str, path: &str) -> std::io::Result<()>;
}
