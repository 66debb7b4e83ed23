//! Parsed Callstack
//!
//! Turns the raw callstack text of one crash into frames, picks the module
//! most likely responsible for the crash, and renders the frames back to
//! text under the caller's display options.

use crate::config::ParserConfig;
use crate::domain::crash::{CrashRecord, CrashType};
use crate::domain::dialect::Dialect;
use crate::domain::frame::Frame;
use crate::domain::{current_format, legacy_format};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Reported as the culprit when a callstack has no frames.
pub const UNKNOWN_MODULE: &str = "<Unknown>";

/// Independent toggles controlling how frames are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayOptions {
    /// Print each frame's raw line instead of the structured fields.
    pub raw: bool,
    pub module_names: bool,
    pub function_names: bool,
    /// File name and line only.
    pub file_names: bool,
    /// Full file path and line; wins over `file_names`.
    pub file_paths: bool,
}

impl DisplayOptions {
    /// The file location of `frame` as these options want it shown.
    pub fn location(&self, frame: &Frame) -> Option<String> {
        if frame.file_path.is_empty() {
            return None;
        }
        if self.file_paths {
            Some(frame.file_path_with_line())
        } else if self.file_names {
            Some(frame.file_name())
        } else {
            None
        }
    }
}

/// A parsed callstack together with its display options.
#[derive(Debug, Clone)]
pub struct CallstackContainer {
    frames: Vec<Frame>,
    dialect: Option<Dialect>,
    handler_module: String,
    core_module: String,
    pub options: DisplayOptions,
}

impl CallstackContainer {
    /// Parse the callstack of a crash record.
    pub fn new(record: &CrashRecord, config: &ParserConfig) -> Self {
        let started = Instant::now();
        let container = Self::parse(record.raw_callstack.as_deref(), record.kind(), config);
        log::debug!(
            "Parsed callstack (CrashId={}): {} frames, dialect {:?}, {:?}",
            record.id,
            container.frames.len(),
            container.dialect,
            started.elapsed()
        );
        container
    }

    /// Parse raw callstack text.
    pub fn parse(raw: Option<&str>, crash_type: CrashType, config: &ParserConfig) -> Self {
        let mut container = Self {
            frames: Vec::new(),
            dialect: None,
            handler_module: config.handler_module.clone(),
            core_module: config.core_module.clone(),
            options: DisplayOptions::default(),
        };

        let Some(raw) = raw.filter(|raw| !raw.is_empty()) else {
            return container;
        };

        let lines: Vec<&str> = raw.split('\n').filter(|line| !line.is_empty()).collect();
        let Some(first) = lines.first() else {
            return container;
        };

        let dialect = Dialect::detect(first);
        container.dialect = Some(dialect);

        container.frames = match dialect {
            // Legacy lines that do not match are dropped rather than kept
            // as unknown frames, and assert markers are not honoured.
            Dialect::Legacy => lines
                .iter()
                .filter_map(|line| legacy_format::parse_line(line))
                .take(config.max_frames)
                .collect(),
            Dialect::Current => {
                let start = match config.skip_marker(crash_type) {
                    Some(marker) => lines
                        .iter()
                        .position(|line| line.contains(marker))
                        .map_or(lines.len(), |index| index + 1),
                    None => 0,
                };
                lines[start..]
                    .iter()
                    .take(config.max_frames)
                    .map(|line| current_format::parse_line(line))
                    .collect()
            }
        };

        container
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Replace every frame at once.
    pub fn set_frames(&mut self, frames: Vec<Frame>) {
        self.frames = frames;
    }

    /// Dialect the callstack was parsed with; `None` for empty input.
    pub fn dialect(&self) -> Option<Dialect> {
        self.dialect
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// The module most likely responsible for the crash.
    ///
    /// Normally the top frame's module. When the top frame is in the OS
    /// exception handler the crash came through an assert, so the first
    /// frame outside the engine core is blamed instead.
    pub fn module_name(&self) -> &str {
        let Some(top) = self.frames.first() else {
            return UNKNOWN_MODULE;
        };

        let in_handler = top
            .module
            .as_deref()
            .is_some_and(|module| module.eq_ignore_ascii_case(&self.handler_module));

        if in_handler {
            let culprit = self.frames[1..].iter().find(|frame| {
                !frame
                    .module
                    .as_deref()
                    .is_some_and(|module| module.eq_ignore_ascii_case(&self.core_module))
            });
            if let Some(frame) = culprit {
                return frame.module_name();
            }
        }

        top.module_name()
    }

    /// Render the frames as plain text, one frame per line.
    pub fn formatted(&self) -> String {
        let mut out = String::new();
        for frame in &self.frames {
            if self.options.raw {
                out.push_str(&frame.raw_line);
                out.push('\n');
                continue;
            }
            if self.options.module_names {
                out.push_str(frame.module_name());
                out.push('!');
            }
            if self.options.function_names {
                out.push_str(frame.function_name());
            }
            if let Some(location) = self.options.location(frame) {
                out.push_str(" --- ");
                out.push_str(&location);
            }
            out.push('\n');
        }
        out
    }
}
