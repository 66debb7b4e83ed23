use serde::{Serialize, Deserialize};
use crate::domain::callstack::CallstackContainer;
use crate::domain::frame::Frame;
use crate::ports::CallstackReport;

#[derive(Debug, Serialize, Deserialize)]
pub struct CallstackDto {
    pub dialect: Option<String>,
    pub culprit_module: String,
    pub frames: Vec<FrameDto>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FrameDto {
    pub module: String,
    pub function: String,
    pub file_path: String,
    pub line_number: i32,
    pub raw_line: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CrashReportDto {
    pub crash_id: u64,
    #[serde(flatten)]
    pub callstack: CallstackDto,
}

impl From<&Frame> for FrameDto {
    fn from(frame: &Frame) -> Self {
        FrameDto {
            module: frame.module_name().to_string(),
            function: frame.function_name().to_string(),
            file_path: frame.file_path.clone(),
            line_number: frame.line_number,
            raw_line: frame.raw_line.clone(),
        }
    }
}

impl From<&CallstackContainer> for CallstackDto {
    fn from(callstack: &CallstackContainer) -> Self {
        CallstackDto {
            dialect: callstack.dialect().map(|d| d.to_string()),
            culprit_module: callstack.module_name().to_string(),
            frames: callstack.frames().iter().map(FrameDto::from).collect(),
        }
    }
}

impl From<&CallstackReport> for CrashReportDto {
    fn from(report: &CallstackReport) -> Self {
        CrashReportDto {
            crash_id: report.crash_id,
            callstack: CallstackDto::from(&report.callstack),
        }
    }
}
