//! Crash record input types.

use serde::{Deserialize, Serialize};

/// Classification of a crash, derived from the integer code stored with
/// each crash report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrashType {
    /// Ordinary crash, or any code without special handling.
    Crash,
    /// Fatal assertion; frames above the assert handler are noise.
    Assert,
    /// Non-fatal ensure failure.
    Ensure,
}

impl CrashType {
    pub const ASSERT_CODE: i32 = 2;
    pub const ENSURE_CODE: i32 = 3;

    pub fn from_code(code: i32) -> CrashType {
        match code {
            Self::ASSERT_CODE => CrashType::Assert,
            Self::ENSURE_CODE => CrashType::Ensure,
            _ => CrashType::Crash,
        }
    }
}

/// The fields of a crash report the callstack parser consumes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrashRecord {
    #[serde(default)]
    pub id: u64,
    #[serde(default = "default_crash_type")]
    pub crash_type: i32,
    #[serde(default)]
    pub raw_callstack: Option<String>,
}

fn default_crash_type() -> i32 {
    1
}

impl CrashRecord {
    pub fn new(id: u64, crash_type: i32, raw_callstack: impl Into<String>) -> Self {
        Self {
            id,
            crash_type,
            raw_callstack: Some(raw_callstack.into()),
        }
    }

    pub fn kind(&self) -> CrashType {
        CrashType::from_code(self.crash_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(CrashType::from_code(1), CrashType::Crash);
        assert_eq!(CrashType::from_code(2), CrashType::Assert);
        assert_eq!(CrashType::from_code(3), CrashType::Ensure);
        assert_eq!(CrashType::from_code(-7), CrashType::Crash);
    }

    #[test]
    fn test_record_deserializes_with_defaults() {
        let record: CrashRecord = serde_json::from_str(r#"{"id": 9}"#).unwrap();
        assert_eq!(record.id, 9);
        assert_eq!(record.crash_type, 1);
        assert!(record.raw_callstack.is_none());
        assert_eq!(record.kind(), CrashType::Crash);
    }
}
