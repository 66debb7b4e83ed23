/// End-to-end batch formatting: load records from disk, parse in parallel,
/// render and export.

use crashstack::application::FormatCallstacksUsecase;
use crashstack::infrastructure::{CrashLoader, FileExporter, JsonFormatter, TextFormatter};
use crashstack::ports::html_formatter::HtmlFormatter;
use crashstack::{CrashRecord, DisplayOptions, ParserConfig};
use std::fs;
use tempfile::tempdir;

const RECORDS_JSON: &str = r#"[
    {"id": 100, "crash_type": 1, "raw_callstack": "UE4_Engine!UEngine::Exec() + 21105 bytes [d:\\src\\unrealengine.cpp:2777]\nUE4_Core!FMain() + 4 bytes [d:\\src\\main.cpp:9]"},
    {"id": 101, "crash_type": 2, "raw_callstack": "KERNELBASE!RaiseException() + 88 bytes [d:\\os\\kernelbase.cpp:12]\nUE4_Core!FDebug::AssertFailed() + 391 bytes [d:\\src\\assertionmacros.cpp:160]\nMyGame!AMyActor::Tick() + 12 bytes [d:\\game\\myactor.cpp:55]"},
    {"id": 102, "raw_callstack": ""}
]"#;

fn options() -> DisplayOptions {
    DisplayOptions {
        module_names: true,
        function_names: true,
        file_names: true,
        ..Default::default()
    }
}

fn load() -> Vec<CrashRecord> {
    let dir = tempdir().unwrap();
    let path = dir.path().join("records.json");
    fs::write(&path, RECORDS_JSON).unwrap();
    CrashLoader::load_records(&path).unwrap()
}

#[test]
fn test_parse_all_keeps_order() {
    let records = load();
    let config = ParserConfig::default();
    let usecase = FormatCallstacksUsecase {
        config: &config,
        options: options(),
        formatter: &TextFormatter,
    };

    let reports = usecase.parse_all(&records);
    let ids: Vec<u64> = reports.iter().map(|r| r.crash_id).collect();
    assert_eq!(ids, vec![100, 101, 102]);

    assert_eq!(reports[0].callstack.frames().len(), 2);
    // Assert crash: everything through the assert handler is dropped.
    assert_eq!(reports[1].callstack.frames().len(), 1);
    assert_eq!(reports[1].callstack.module_name(), "MyGame");
    assert!(reports[2].callstack.frames().is_empty());
    assert_eq!(reports[2].callstack.options, options());
}

#[test]
fn test_text_render() {
    let records = load();
    let config = ParserConfig::default();
    let usecase = FormatCallstacksUsecase {
        config: &config,
        options: options(),
        formatter: &TextFormatter,
    };

    let text = usecase.render(&records);
    assert!(text.contains("== Crash 100 (UE4_Engine) =="));
    assert!(text.contains("UE4_Engine!UEngine::Exec() + 21105 bytes --- unrealengine.cpp:2777\n"));
    assert!(text.contains("MyGame!AMyActor::Tick() + 12 bytes --- myactor.cpp:55\n"));
    assert!(text.contains("== Crash 102 (<Unknown>) =="));
}

#[test]
fn test_html_render() {
    let records = load();
    let config = ParserConfig::default();
    let usecase = FormatCallstacksUsecase {
        config: &config,
        options: DisplayOptions {
            file_paths: true,
            ..Default::default()
        },
        formatter: &HtmlFormatter,
    };

    let html = usecase.render(&records);
    assert!(html.contains("<h3>Crash 101 (MyGame)</h3>"));
    assert!(html.contains(r" --- <b>d:\game\myactor.cpp:55</b><br>"));
}

#[test]
fn test_json_export() {
    let records = load();
    let config = ParserConfig::default();
    let usecase = FormatCallstacksUsecase {
        config: &config,
        options: options(),
        formatter: &JsonFormatter,
    };

    let dir = tempdir().unwrap();
    let out = dir.path().join("out.json");
    usecase
        .run(&records, &FileExporter, out.to_str().unwrap())
        .unwrap();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 3);
    assert_eq!(json[1]["crash_id"], 101);
    assert_eq!(json[1]["culprit_module"], "MyGame");
    assert_eq!(json[1]["frames"][0]["function"], "AMyActor::Tick() + 12 bytes");
}

#[test]
fn test_config_file_overrides() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("crashstack.toml");
    fs::write(&path, "max_frames = 1\n").unwrap();
    let config = ParserConfig::from_file(&path).unwrap();

    let usecase = FormatCallstacksUsecase {
        config: &config,
        options: options(),
        formatter: &TextFormatter,
    };
    let reports = usecase.parse_all(&load());
    assert_eq!(reports[0].callstack.frames().len(), 1);
}
