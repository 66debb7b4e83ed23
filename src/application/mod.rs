use crate::config::ParserConfig;
use crate::domain::callstack::{CallstackContainer, DisplayOptions};
use crate::domain::crash::CrashRecord;
use crate::ports::{CallstackFormatter, CallstackReport, OutputExporter};
use rayon::prelude::*;

pub struct FormatCallstacksUsecase<'a> {
    pub config: &'a ParserConfig,
    pub options: DisplayOptions,
    pub formatter: &'a dyn CallstackFormatter,
}

impl<'a> FormatCallstacksUsecase<'a> {
    /// Parse every record in parallel; output order follows input order.
    pub fn parse_all(&self, records: &[CrashRecord]) -> Vec<CallstackReport> {
        let reports: Vec<CallstackReport> = records
            .par_iter()
            .map(|record| {
                let mut callstack = CallstackContainer::new(record, self.config);
                callstack.options = self.options;
                CallstackReport {
                    crash_id: record.id,
                    callstack,
                }
            })
            .collect();

        log::info!("Parsed {} callstacks", reports.len());
        reports
    }

    /// Parse and render every record into one document.
    pub fn render(&self, records: &[CrashRecord]) -> String {
        let reports = self.parse_all(records);
        self.formatter.format_reports(&reports)
    }

    pub fn run(
        &self,
        records: &[CrashRecord],
        exporter: &dyn OutputExporter,
        export_path: &str,
    ) -> std::io::Result<()> {
        let output = self.render(records);
        exporter.export(&output, export_path)
    }
}
