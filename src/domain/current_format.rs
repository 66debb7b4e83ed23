//! Current Format Line Extraction
//!
//! Parses lines shaped like
//! `UE4_Engine!UEngine::Exec() + 21105 bytes [d:\depot\...\unrealengine.cpp:2777]`
//! by scanning for the `!`, ` + `, ` bytes`, `[` and `]` delimiters.
//! Every line yields a frame; whatever could not be located keeps its
//! unknown value.

use crate::domain::dialect::Dialect;
use crate::domain::frame::Frame;

const BYTES: &str = " bytes";
const PLUS: &str = " + ";

/// Parse one line of a current-format callstack.
pub fn parse_line(line: &str) -> Frame {
    let mut frame = Frame::unknown(line, Dialect::Current);

    let pling = line.find('!');
    let plus = line.find(PLUS);
    let bytes = line.find(BYTES);
    let open_bracket = line.find('[');
    let close_bracket = line.rfind(']');

    match (pling, bytes) {
        (Some(pling), _) if pling > 0 => {
            frame.module = Some(line[..pling].trim().to_string());

            let Some(bytes) = bytes.filter(|&bytes| bytes > pling) else {
                return frame;
            };
            frame.function = Some(line[pling + 1..bytes + BYTES.len()].trim().to_string());

            if let (Some(open), Some(close)) = (open_bracket, close_bracket) {
                if open > bytes && close > bytes && close > open {
                    let file_line = line[open + 1..close].trim();
                    if let Some((path, line_number)) = split_location(file_line) {
                        frame.file_path = path.to_string();
                        frame.line_number = line_number;
                    }
                }
            }
        }
        (_, Some(bytes)) if bytes > 0 => {
            // Module-only line, e.g. `KERNELBASE + 12345 bytes`.
            let end = plus.unwrap_or(line.len());
            frame.module = Some(line[..end].trim().to_string());
        }
        _ => {}
    }

    frame
}

/// Split `path:line` into its parts.
///
/// The path is what remains after stripping trailing digits and colons.
/// Returns `None` when nothing was stripped, which means the bracket did not
/// hold a location.
fn split_location(file_line: &str) -> Option<(&str, i32)> {
    let path = file_line.trim_end_matches(|c: char| c.is_ascii_digit() || c == ':');
    if path.len() >= file_line.len() {
        log::warn!("Callstack location without line number: [{}]", file_line);
        return None;
    }

    // Skip the one separator character following the path.
    let line_number = file_line
        .get(path.len() + 1..)
        .and_then(|digits| digits.parse::<i32>().ok())
        .unwrap_or(0);

    Some((path, line_number))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_line() {
        let line = r"UE4_Engine!UEngine::Exec() + 21105 bytes [d:\depot\ue4\engine\source\runtime\engine\private\unrealengine.cpp:2777]";
        let frame = parse_line(line);
        assert_eq!(frame.module.as_deref(), Some("UE4_Engine"));
        assert_eq!(frame.function.as_deref(), Some("UEngine::Exec() + 21105 bytes"));
        assert_eq!(
            frame.file_path,
            r"d:\depot\ue4\engine\source\runtime\engine\private\unrealengine.cpp"
        );
        assert_eq!(frame.line_number, 2777);
        assert_eq!(frame.raw_line, line);
    }

    #[test]
    fn test_module_and_function_without_location() {
        let frame = parse_line("UE4_Core!FDebug::AssertFailed() + 391 bytes");
        assert_eq!(frame.module.as_deref(), Some("UE4_Core"));
        assert_eq!(frame.function.as_deref(), Some("FDebug::AssertFailed() + 391 bytes"));
        assert_eq!(frame.file_path, "");
        assert_eq!(frame.line_number, 0);
    }

    #[test]
    fn test_module_only_without_bytes() {
        let frame = parse_line("  ntdll!RtlUserThreadStart()");
        assert_eq!(frame.module.as_deref(), Some("ntdll"));
        assert!(frame.function.is_none());
    }

    #[test]
    fn test_module_only_line() {
        let frame = parse_line("KERNELBASE + 35498 bytes");
        assert_eq!(frame.module.as_deref(), Some("KERNELBASE"));
        assert!(frame.function.is_none());
        assert_eq!(frame.file_path, "");
    }

    #[test]
    fn test_module_only_line_without_plus_takes_whole_line() {
        let frame = parse_line(" KERNELBASE 35498 bytes ");
        assert_eq!(frame.module.as_deref(), Some("KERNELBASE 35498 bytes"));
    }

    #[test]
    fn test_leading_pling_is_not_a_module() {
        let frame = parse_line("!Foo() + 3 bytes");
        // Falls through to the module-only branch.
        assert_eq!(frame.module.as_deref(), Some("!Foo()"));
        assert!(frame.function.is_none());
    }

    #[test]
    fn test_unrecognized_line() {
        let frame = parse_line("Unknown0x0000000000000000");
        assert!(frame.module.is_none());
        assert!(frame.function.is_none());
        assert_eq!(frame.module_name(), "<Unknown>");
        assert_eq!(frame.line_number, 0);
    }

    #[test]
    fn test_bracket_without_line_number_is_dropped() {
        let frame = parse_line("Game!Tick() + 8 bytes [c:\\src\\game.cpp]");
        assert_eq!(frame.module.as_deref(), Some("Game"));
        assert_eq!(frame.file_path, "");
        assert_eq!(frame.line_number, 0);
    }

    #[test]
    fn test_unparsable_line_number_defaults_to_zero() {
        let frame = parse_line("Game!Tick() + 8 bytes [game.cpp::12]");
        assert_eq!(frame.file_path, "game.cpp");
        assert_eq!(frame.line_number, 0);
    }

    #[test]
    fn test_bracket_before_bytes_is_ignored() {
        let frame = parse_line("Game!Tick[2]() + 8 bytes");
        assert_eq!(frame.function.as_deref(), Some("Tick[2]() + 8 bytes"));
        assert_eq!(frame.file_path, "");
    }

    #[test]
    fn test_split_location() {
        assert_eq!(split_location("a.cpp:12"), Some(("a.cpp", 12)));
        assert_eq!(split_location("a.cpp"), None);
        assert_eq!(split_location("123"), Some(("", 23)));
    }
}
