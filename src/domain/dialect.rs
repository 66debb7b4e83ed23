/// Dialect Domain Module
///
/// The two textual layouts a crash callstack can arrive in.

use regex::Regex;
use std::sync::OnceLock;

/// Line layout of a raw callstack, decided once per callstack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Pre-upgrade layout: `Function(args) [in Module] [File=path:line]`
    Legacy,
    /// `Module!Function() + N bytes [path:line]`
    Current,
}

fn current_format_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?is)\(\).*?bytes.*?\[.*?\]").expect("current format pattern is valid")
    })
}

impl Dialect {
    /// Detect the dialect from the first non-empty line of a callstack.
    pub fn detect(first_line: &str) -> Dialect {
        if current_format_pattern().is_match(first_line) {
            Dialect::Current
        } else {
            Dialect::Legacy
        }
    }

    /// Sentinel shown when a frame's module could not be determined.
    pub fn unknown_module(&self) -> &'static str {
        match self {
            Dialect::Legacy => "<unknown module>",
            Dialect::Current => "<Unknown>",
        }
    }

    /// Line number reported when none could be parsed.
    pub fn unknown_line(&self) -> i32 {
        match self {
            Dialect::Legacy => -1,
            Dialect::Current => 0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Dialect::Legacy => "legacy",
            Dialect::Current => "current",
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
