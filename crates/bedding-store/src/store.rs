//! JSON-file record store.

use std::io;
use std::path::{Path, PathBuf};

use bedding_catalog::CatalogRecord;

use crate::error::StoreError;

/// Flat JSON-file store of generated catalog records.
///
/// The document is a single JSON array, appended monotonically. There
/// are no transactional guarantees; concurrent writers race and the
/// whole file is last-write-wins.
pub struct ProductStore {
    path: PathBuf,
}

impl ProductStore {
    /// Create a store over the given document path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The store document path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full accumulated record set.
    ///
    /// A missing file reads as empty, as does a document whose top-level
    /// value is not an array.
    pub fn load(&self) -> Result<Vec<CatalogRecord>, StoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::ReadError(e.to_string())),
        };
        let document: serde_json::Value = serde_json::from_str(&content)?;
        if !document.is_array() {
            return Ok(Vec::new());
        }
        // Deserialize from the text, not the parsed value: going through
        // serde_json::Value would reorder record fields.
        Ok(serde_json::from_str(&content)?)
    }

    /// Append records to the store and return the new total count.
    pub fn append(&self, records: &[CatalogRecord]) -> Result<usize, StoreError> {
        let mut all = self.load()?;
        all.extend(records.iter().cloned());
        self.save(&all)?;
        Ok(all.len())
    }

    /// Rewrite the whole document with the given record set.
    pub fn save(&self, records: &[CatalogRecord]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::WriteError(e.to_string()))?;
        }
        let json = serde_json::to_string_pretty(records)?;
        std::fs::write(&self.path, json).map_err(|e| StoreError::WriteError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bedding_catalog::FieldValue;

    fn record(code: i64, description: &str) -> CatalogRecord {
        let mut record = CatalogRecord::new();
        record.set("B1_XCODANT", code);
        record.set("B1_DESC", description);
        record
    }

    #[test]
    fn test_missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProductStore::new(dir.path().join("products.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_append_accumulates() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProductStore::new(dir.path().join("data").join("products.json"));

        let total = store.append(&[record(1, "Colchão A")]).unwrap();
        assert_eq!(total, 1);

        let total = store
            .append(&[record(2, "Colchão B"), record(3, "Kit C")])
            .unwrap();
        assert_eq!(total, 3);

        let records = store.load().unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(
            records[2].get("B1_DESC"),
            Some(&FieldValue::Text("Kit C".to_string()))
        );
        // Field order survives the disk round-trip.
        assert_eq!(records[0].columns(), ["B1_XCODANT", "B1_DESC"]);
    }

    #[test]
    fn test_non_array_document_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products.json");
        std::fs::write(&path, r#"{"not": "an array"}"#).unwrap();
        assert!(ProductStore::new(&path).load().unwrap().is_empty());
    }

    #[test]
    fn test_invalid_json_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(
            ProductStore::new(&path).load(),
            Err(StoreError::ParseError(_))
        ));
    }
}
