//! Legacy Format Line Extraction
//!
//! Callstacks uploaded before the engine upgrade look like
//! `UObject::ProcessEvent(UFunction*,void*) [in Core] [File=d:\src\obj.cpp:412]`.
//! The module is not recoverable from this layout.

use crate::domain::dialect::Dialect;
use crate::domain::frame::Frame;
use regex::Regex;
use std::sync::OnceLock;

const FILE_START: &str = "[File=";

/// Group 1: everything up to the first parenthesized argument list.
/// Group 3: the last bracketed group that follows it.
fn legacy_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)([^(]*[(][^)]*[)])([^\[]*([\[][^\]]*[\]]))*")
            .expect("legacy callstack pattern is valid")
    })
}

/// Parse one line of a legacy callstack. Lines that do not look like a
/// frame produce nothing.
pub fn parse_line(line: &str) -> Option<Frame> {
    let caps = legacy_pattern().captures(line)?;
    let matched = caps.get(0)?.as_str();
    if matched.is_empty() {
        return None;
    }

    let mut frame = Frame::unknown(matched, Dialect::Legacy);
    frame.function = caps.get(1).map(|m| m.as_str().to_string());

    if let Some(location) = caps.get(3).and_then(|m| file_location(m.as_str())) {
        match location.rfind(':') {
            Some(separator) => {
                frame.file_path = location[..separator].to_string();
                frame.line_number = location[separator + 1..]
                    .parse()
                    .unwrap_or(Dialect::Legacy.unknown_line());
            }
            None => frame.file_path = location.to_string(),
        }
    }

    Some(frame)
}

/// Contents of a `[File=...]` group, without the marker and closing bracket.
fn file_location(group: &str) -> Option<&str> {
    let prefix = group.get(..FILE_START.len())?;
    if !prefix.eq_ignore_ascii_case(FILE_START) {
        return None;
    }
    group[FILE_START.len()..].strip_suffix(']')
}
