// Command-line entry point for crashstack.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use crashstack::application::FormatCallstacksUsecase;
use crashstack::infrastructure::concurrency::init_thread_pool;
use crashstack::infrastructure::{CrashLoader, FileExporter, JsonFormatter, TextFormatter};
use crashstack::ports::html_formatter::HtmlFormatter;
use crashstack::ports::CallstackFormatter;
use crashstack::{CrashRecord, DisplayOptions, ParserConfig};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Html,
    Json,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Raw callstack file (can specify multiple)
    #[arg(short, long)]
    input: Vec<PathBuf>,

    /// Folder of raw callstack files (.txt, .log)
    #[arg(short = 'd', long)]
    folder: Vec<PathBuf>,

    /// JSON array of crash records
    #[arg(short, long)]
    records: Vec<PathBuf>,

    /// Crash type code for raw callstack files (2 = assert, 3 = ensure)
    #[arg(short, long, default_value_t = 1)]
    crash_type: i32,

    /// Parser configuration (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print raw lines instead of parsed fields
    #[arg(long)]
    raw: bool,

    /// Show module names
    #[arg(long)]
    modules: bool,

    /// Show function names
    #[arg(long)]
    functions: bool,

    /// Show file names with line numbers
    #[arg(long)]
    file_names: bool,

    /// Show full file paths with line numbers
    #[arg(long)]
    file_paths: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Output file path (stdout if omitted)
    #[arg(short, long)]
    output: Option<String>,

    /// Worker threads (default: half the cores)
    #[arg(long)]
    threads: Option<usize>,
}

impl Cli {
    fn display_options(&self) -> DisplayOptions {
        let options = DisplayOptions {
            raw: self.raw,
            module_names: self.modules,
            function_names: self.functions,
            file_names: self.file_names,
            file_paths: self.file_paths,
        };
        if options == DisplayOptions::default() {
            DisplayOptions {
                module_names: true,
                function_names: true,
                file_names: true,
                ..options
            }
        } else {
            options
        }
    }

    fn collect_records(&self) -> Result<Vec<CrashRecord>> {
        let mut records = Vec::new();

        for path in &self.records {
            records.extend(
                CrashLoader::load_records(path)
                    .with_context(|| format!("Cannot load crash records from {}", path.display()))?,
            );
        }

        let mut next_id = records.iter().map(|r| r.id).max().map_or(1, |max| max + 1);

        for path in &self.input {
            records.push(
                CrashLoader::load_raw(path, next_id, self.crash_type)
                    .with_context(|| format!("Cannot read input file {}", path.display()))?,
            );
            next_id += 1;
        }

        for folder in &self.folder {
            let loaded = CrashLoader::load_raw_dir(folder, next_id, self.crash_type)
                .with_context(|| format!("Cannot read folder {}", folder.display()))?;
            next_id += loaded.len() as u64;
            records.extend(loaded);
        }

        Ok(records)
    }
}

fn load_config(path: Option<&Path>) -> Result<ParserConfig> {
    match path {
        Some(path) => ParserConfig::from_file(path)
            .with_context(|| format!("Cannot load config {}", path.display())),
        None => Ok(ParserConfig::default()),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    let records = cli.collect_records()?;
    if records.is_empty() {
        anyhow::bail!("Please provide at least one --input <file>, --folder <dir> or --records <json>");
    }

    init_thread_pool(cli.threads)?;

    let formatter: &dyn CallstackFormatter = match cli.format {
        OutputFormat::Text => &TextFormatter,
        OutputFormat::Html => &HtmlFormatter,
        OutputFormat::Json => &JsonFormatter,
    };

    let usecase = FormatCallstacksUsecase {
        config: &config,
        options: cli.display_options(),
        formatter,
    };

    match &cli.output {
        Some(path) => {
            usecase
                .run(&records, &FileExporter, path)
                .with_context(|| format!("Cannot write output to {}", path))?;
            log::info!("Formatted {} callstacks into {}", records.len(), path);
        }
        None => print!("{}", usecase.render(&records)),
    }

    Ok(())
}
