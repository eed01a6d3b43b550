use crate::domain::entities::snapshot::MarketSnapshot;
use crate::domain::error::DomainError;
use std::fs;
use std::path::Path;

/// Write the snapshot as pretty-printed UTF-8 JSON, creating parent
/// directories as needed. Overwrites any previous file.
pub fn write_snapshot(snapshot: &MarketSnapshot, path: &Path) -> Result<(), DomainError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(path, json)?;
    Ok(())
}
