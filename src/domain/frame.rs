// Stack frame structures for crashstack.
// One parsed line of a crash callstack.

use crate::domain::dialect::Dialect;

/// Shown in place of a function name that could not be parsed.
pub const UNKNOWN_FUNCTION: &str = "<Unknown>";

/// A single parsed frame of a callstack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// The source line this frame was parsed from.
    pub raw_line: String,
    /// Module (binary) name, if the line carried one.
    pub module: Option<String>,
    /// Source file path, empty when the line had none.
    pub file_path: String,
    /// Function signature, if the line carried one.
    pub function: Option<String>,
    pub line_number: i32,
    /// Dialect the frame was parsed with.
    pub dialect: Dialect,
}

impl Frame {
    /// A frame with every field at its unknown value for `dialect`.
    pub fn unknown(raw_line: impl Into<String>, dialect: Dialect) -> Self {
        Self {
            raw_line: raw_line.into(),
            module: None,
            file_path: String::new(),
            function: None,
            line_number: dialect.unknown_line(),
            dialect,
        }
    }

    /// Module name for display; falls back to the dialect's sentinel.
    pub fn module_name(&self) -> &str {
        self.module
            .as_deref()
            .unwrap_or_else(|| self.dialect.unknown_module())
    }

    /// Function name for display.
    pub fn function_name(&self) -> &str {
        self.function.as_deref().unwrap_or(UNKNOWN_FUNCTION)
    }

    /// Last component of the file path with the line number appended,
    /// or an empty string when there is no file path.
    pub fn file_name(&self) -> String {
        if self.file_path.is_empty() {
            return String::new();
        }
        let name = self
            .file_path
            .rsplit(|c: char| c == '/' || c == '\\')
            .next()
            .unwrap_or(&self.file_path);
        format!("{}:{}", name, self.line_number)
    }

    /// Full file path with the line number appended, or empty.
    pub fn file_path_with_line(&self) -> String {
        if self.file_path.is_empty() {
            return String::new();
        }
        format!("{}:{}", self.file_path, self.line_number)
    }

    /// At most `max_chars` characters of the function name.
    pub fn trimmed_function_name(&self, max_chars: usize) -> String {
        self.function_name().chars().take(max_chars).collect()
    }
}
