//! Parser configuration.
//!
//! Constants the callstack parser works with. Defaults match the crash
//! reports produced by the engine; a TOML file can override any of them.
//!
//! ```toml
//! max_frames = 64
//! assert_marker = "FDebug::AssertFailed()"
//! ```

use crate::domain::crash::CrashType;
use crate::error::LoadError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const MAX_FRAMES_TO_PARSE: usize = 128;
pub const ASSERT_MARKER: &str = "FDebug::AssertFailed()";
pub const ENSURE_MARKER: &str = "FDebug::EnsureFailed()";
pub const HANDLER_MODULE: &str = "KERNELBASE";
pub const CORE_MODULE: &str = "UE4_CORE";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Hard cap on frames produced per callstack.
    pub max_frames: usize,
    /// Lines up to and including this one are dropped for assert crashes.
    pub assert_marker: String,
    /// Lines up to and including this one are dropped for ensure crashes.
    pub ensure_marker: String,
    /// A top frame in this module means the crash went through the OS
    /// exception handler.
    pub handler_module: String,
    /// Engine core module skipped when looking past the handler frame.
    pub core_module: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_frames: MAX_FRAMES_TO_PARSE,
            assert_marker: ASSERT_MARKER.to_string(),
            ensure_marker: ENSURE_MARKER.to_string(),
            handler_module: HANDLER_MODULE.to_string(),
            core_module: CORE_MODULE.to_string(),
        }
    }
}

impl ParserConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, LoadError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, LoadError> {
        let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        log::debug!("Loaded parser config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Marker to skip up to for the given crash type, if any.
    pub fn skip_marker(&self, crash_type: CrashType) -> Option<&str> {
        match crash_type {
            CrashType::Assert => Some(self.assert_marker.as_str()),
            CrashType::Ensure => Some(self.ensure_marker.as_str()),
            CrashType::Crash => None,
        }
    }
}
