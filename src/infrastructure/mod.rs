// Infrastructure implementations for crashstack.

use crate::api::dto::{CallstackDto, CrashReportDto};
use crate::domain::callstack::CallstackContainer;
use crate::ports::{CallstackFormatter, CallstackReport, OutputExporter};
use serde::Serialize;

pub mod concurrency;
pub mod crash_loader;

pub use crash_loader::CrashLoader;

pub struct TextFormatter;
impl CallstackFormatter for TextFormatter {
    fn format(&self, callstack: &CallstackContainer) -> String {
        callstack.formatted()
    }
}

/// Serializes parsed frames instead of rendering them; display options
/// are ignored.
pub struct JsonFormatter;
impl CallstackFormatter for JsonFormatter {
    fn format(&self, callstack: &CallstackContainer) -> String {
        Self::to_json(&CallstackDto::from(callstack))
    }

    fn format_reports(&self, reports: &[CallstackReport]) -> String {
        let dtos: Vec<CrashReportDto> = reports.iter().map(CrashReportDto::from).collect();
        Self::to_json(&dtos)
    }
}

impl JsonFormatter {
    fn to_json<T: Serialize>(value: &T) -> String {
        match serde_json::to_string_pretty(value) {
            Ok(json) => json,
            Err(e) => {
                log::error!("Failed to serialize callstack: {}", e);
                String::new()
            }
        }
    }
}

pub struct FileExporter;
impl OutputExporter for FileExporter {
    fn export(&self, content: &str, path: &str) -> std::io::Result<()> {
        std::fs::write(path, content)
    }
}
