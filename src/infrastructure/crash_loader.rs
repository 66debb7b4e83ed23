use crate::domain::crash::CrashRecord;
use crate::error::LoadError;
use std::fs;
use std::path::Path;

const RAW_EXTENSIONS: &[&str] = &["txt", "log"];

pub struct CrashLoader;

impl CrashLoader {
    /// Load a JSON array of crash records.
    pub fn load_records(path: &Path) -> Result<Vec<CrashRecord>, LoadError> {
        let content = Self::read(path)?;
        let records: Vec<CrashRecord> =
            serde_json::from_str(&content).map_err(|source| LoadError::Json {
                path: path.display().to_string(),
                source,
            })?;
        log::info!("Loaded {} crash records from {}", records.len(), path.display());
        Ok(records)
    }

    /// Load a file holding one raw callstack.
    pub fn load_raw(path: &Path, id: u64, crash_type: i32) -> Result<CrashRecord, LoadError> {
        let content = Self::read(path)?;
        Ok(CrashRecord::new(id, crash_type, content))
    }

    /// Load every raw callstack file (`.txt`, `.log`) under `dir`, recursively,
    /// in path order. Ids are assigned from `first_id` upwards.
    pub fn load_raw_dir(dir: &Path, first_id: u64, crash_type: i32) -> Result<Vec<CrashRecord>, LoadError> {
        let mut paths = Vec::new();
        Self::collect_raw_recursive(dir, &mut paths)?;
        paths.sort();

        paths
            .iter()
            .zip(first_id..)
            .map(|(path, id)| Self::load_raw(path, id, crash_type))
            .collect()
    }

    fn collect_raw_recursive(dir: &Path, out: &mut Vec<std::path::PathBuf>) -> Result<(), LoadError> {
        let entries = fs::read_dir(dir).map_err(|source| LoadError::Io {
            path: dir.display().to_string(),
            source,
        })?;

        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                Self::collect_raw_recursive(&path, out)?;
            } else if let Some(ext) = path.extension().and_then(|ext| ext.to_str()) {
                if RAW_EXTENSIONS.contains(&ext) {
                    out.push(path);
                }
            }
        }
        Ok(())
    }

    fn read(path: &Path) -> Result<String, LoadError> {
        fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })
    }
}
