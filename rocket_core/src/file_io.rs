//! # File I/O Module
//!
//! Persistence collaborators for computed designs:
//! - **Result sinks**: [`ResultSink`] receives each finished design;
//!   [`TextRecordSink`] writes the human-readable `key_unit: value` record,
//!   [`MemorySink`] keeps designs in memory
//! - **Atomic saves**: write to .tmp, sync, rename to prevent corruption
//! - **Version validation**: JSON records must match the schema version
//!
//! ## Example
//!
//! ```rust,no_run
//! use rocket_core::calculations::{calculate, DesignRequest};
//! use rocket_core::file_io::{ResultSink, TextRecordSink};
//!
//! let request = DesignRequest::default();
//! let result = calculate(&request)?;
//!
//! let mut sink = TextRecordSink::new("TXTs");
//! sink.record(&request, &result)?;
//! // -> TXTs/gasoline_200_500_2.5_60_3_results.txt
//! # Ok::<(), rocket_core::errors::CalcError>(())
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use crate::assumptions::DesignAssumptions;
use crate::calculations::{DesignRequest, DesignResult};
use crate::errors::{CalcError, CalcResult};
use crate::record::{DesignRecord, SCHEMA_VERSION};

/// Receives each completed design.
pub trait ResultSink {
    fn record(&mut self, request: &DesignRequest, result: &DesignResult) -> CalcResult<()>;
}

/// Writes one text record per design into a directory.
#[derive(Debug, Clone)]
pub struct TextRecordSink {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl TextRecordSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        TextRecordSink {
            dir: dir.into(),
            written: Vec::new(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path the record for `request` is written to.
    pub fn path_for(&self, request: &DesignRequest) -> PathBuf {
        self.dir.join(format!("{}_results.txt", request.record_stem()))
    }

    /// Files written so far, in order
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl ResultSink for TextRecordSink {
    fn record(&mut self, request: &DesignRequest, result: &DesignResult) -> CalcResult<()> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            CalcError::file_error("create directory", self.dir.display().to_string(), e.to_string())
        })?;

        let path = self.path_for(request);
        write_atomic(&path, &render_text_record(result))?;
        tracing::info!(path = %path.display(), "wrote design record");

        self.written.push(path);
        Ok(())
    }
}

/// Keeps every design in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub designs: Vec<(DesignRequest, DesignResult)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.designs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.designs.is_empty()
    }
}

impl ResultSink for MemorySink {
    fn record(&mut self, request: &DesignRequest, result: &DesignResult) -> CalcResult<()> {
        self.designs.push((request.clone(), *result));
        Ok(())
    }
}

/// One `key_unit: value` line per quantity, in output order.
pub fn render_text_record(result: &DesignResult) -> String {
    let mut text = String::new();
    for quantity in result.quantities() {
        text.push_str(&quantity.to_string());
        text.push('\n');
    }
    text
}

/// Write `contents` to `path` with atomic write semantics.
///
/// The save process:
/// 1. Write to a temporary file (`<name>.tmp`)
/// 2. Sync to disk (fsync)
/// 3. Rename over the target (atomic on most filesystems)
pub fn write_atomic(path: &Path, contents: &str) -> CalcResult<()> {
    let mut tmp_name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(contents.as_bytes()).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        // Clean up temp file if rename fails
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    Ok(())
}

/// Save a design record as pretty JSON.
///
/// # Example
///
/// ```rust,no_run
/// use rocket_core::calculations::{calculate, DesignRequest};
/// use rocket_core::file_io::save_record;
/// use rocket_core::record::DesignRecord;
/// use std::path::Path;
///
/// let request = DesignRequest::default();
/// let result = calculate(&request)?;
/// let record = DesignRecord::new("bench", request, result);
/// save_record(&record, Path::new("bench.json"))?;
/// # Ok::<(), rocket_core::errors::CalcError>(())
/// ```
pub fn save_record(record: &DesignRecord, path: &Path) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(record).map_err(|e| CalcError::serialization(e.to_string()))?;
    write_atomic(path, &json)
}

/// Load a design record.
///
/// # Returns
///
/// * `Ok(DesignRecord)` - Successfully loaded record
/// * `Err(CalcError::VersionMismatch)` - File version is incompatible
/// * `Err(CalcError::SerializationError)` - Invalid JSON
/// * `Err(CalcError::FileError)` - I/O error
pub fn load_record(path: &Path) -> CalcResult<DesignRecord> {
    let contents = read_to_string(path)?;
    let record: DesignRecord = serde_json::from_str(&contents)
        .map_err(|e| CalcError::serialization(format!("Invalid JSON in {}: {}", path.display(), e)))?;

    validate_version(&record.meta.version)?;

    Ok(record)
}

/// Load a design basis override. Fields missing from the file keep their
/// defaults; the loaded basis is validated.
pub fn load_assumptions(path: &Path) -> CalcResult<DesignAssumptions> {
    let contents = read_to_string(path)?;
    let basis: DesignAssumptions = serde_json::from_str(&contents)
        .map_err(|e| CalcError::serialization(format!("Invalid JSON in {}: {}", path.display(), e)))?;
    basis.validate()?;
    Ok(basis)
}

fn read_to_string(path: &Path) -> CalcResult<String> {
    let mut file = File::open(path).map_err(|e| {
        CalcError::file_error("open", path.display().to_string(), e.to_string())
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| {
        CalcError::file_error("read", path.display().to_string(), e.to_string())
    })?;
    Ok(contents)
}

/// Validate that a file version is compatible with the current schema.
fn validate_version(file_version: &str) -> CalcResult<()> {
    let mismatch = || CalcError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let file_parts: Vec<u32> = file_version
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();
    let current_parts: Vec<u32> = SCHEMA_VERSION
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();

    if file_parts.is_empty() || current_parts.is_empty() {
        return Err(mismatch());
    }

    // Major version must match
    if file_parts[0] != current_parts[0] {
        return Err(mismatch());
    }

    // For 0.x versions a newer minor may carry breaking changes
    if current_parts[0] == 0 && file_parts.len() > 1 && current_parts.len() > 1 && file_parts[1] > current_parts[1] {
        return Err(mismatch());
    }

    Ok(())
}
