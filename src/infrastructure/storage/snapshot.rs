//! Word bank file persistence - full JSON snapshots with atomic replace

use std::fs;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;
use tempfile::NamedTempFile;

use crate::application::errors::StorageError;
use crate::domain::entities::RecordMap;

/// Load the record map from `path`. A missing file yields an empty map.
pub fn load(path: &Path) -> Result<RecordMap, StorageError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!("No word bank at {}, starting empty", path.display());
            return Ok(RecordMap::new());
        }
        Err(e) => return Err(StorageError::Io(e)),
    };

    let mut records: RecordMap = serde_json::from_str(&content)
        .map_err(|source| StorageError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;

    for (keyword, record) in records.iter_mut() {
        let dropped = record.dedup();
        if dropped > 0 {
            tracing::warn!("Dropped {} duplicate values from keyword '{}'", dropped, keyword);
        }
    }

    tracing::info!("Loaded {} keywords from {}", records.len(), path.display());
    Ok(records)
}

/// Write the full record map to `path`, replacing the previous file atomically
pub fn save(path: &Path, records: &RecordMap) -> Result<(), StorageError> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let mut temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(temp_file.as_file_mut());
        serde_json::to_writer_pretty(&mut writer, records)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        writer.flush()?;
    }
    temp_file.as_file().sync_all()?;
    temp_file.persist(path)?;

    tracing::debug!("Saved {} keywords to {}", records.len(), path.display());
    Ok(())
}
