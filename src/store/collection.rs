use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::errors::StoreError;

/// A stored record with a numeric identifier.
pub trait Record {
    fn id(&self) -> i64;
}

/// One collection persisted as a single JSON array file. Every load reads the
/// whole file and every persist rewrites it; there is no partial update at
/// the file level.
pub struct JsonCollection {
    path: PathBuf,
}

impl JsonCollection {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the backing file. A missing, empty or whitespace-only
    /// file is the empty collection; any other content must be a JSON array
    /// of records.
    pub fn load<T: DeserializeOwned>(&self) -> Result<Vec<T>, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source: e,
                });
            }
        };

        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&raw).map_err(|e| StoreError::Corrupt {
            path: self.path.clone(),
            source: e,
        })
    }

    /// Overwrite the backing file with the full collection, pretty-printed
    /// with two-space indentation.
    pub fn persist<T: Serialize>(&self, records: &[T]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(records).map_err(|e| StoreError::Serialize {
            path: self.path.clone(),
            source: e,
        })?;

        fs::write(&self.path, json).map_err(|e| StoreError::Write {
            path: self.path.clone(),
            source: e,
        })
    }
}

/// Next identifier for a collection: one past the highest existing id, or 1
/// for an empty collection. Ids are never reused after deletion, so gaps are
/// expected once records are removed.
pub fn next_id<T: Record>(records: &[T]) -> i64 {
    records.iter().map(Record::id).max().unwrap_or(0) + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Item {
        id: i64,
        label: String,
    }

    impl Record for Item {
        fn id(&self) -> i64 {
            self.id
        }
    }

    fn item(id: i64, label: &str) -> Item {
        Item {
            id,
            label: label.to_string(),
        }
    }

    fn temp_path(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join("roster_api_collection_tests");
        fs::create_dir_all(&dir).unwrap();
        dir.join(name)
    }

    #[test]
    fn missing_file_is_the_empty_collection() {
        let collection = JsonCollection::new(temp_path("does_not_exist.json"));
        let items: Vec<Item> = collection.load().unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn whitespace_only_file_is_the_empty_collection() {
        let path = temp_path("whitespace.json");
        fs::write(&path, "  \n\t  ").unwrap();

        let collection = JsonCollection::new(&path);
        let items: Vec<Item> = collection.load().unwrap();
        assert!(items.is_empty());

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn invalid_json_is_reported_as_corrupt() {
        let path = temp_path("corrupt.json");
        fs::write(&path, "{ definitely not an array").unwrap();

        let collection = JsonCollection::new(&path);
        let result: Result<Vec<Item>, _> = collection.load();
        assert!(matches!(result, Err(StoreError::Corrupt { .. })));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn persist_then_load_round_trips() {
        let path = temp_path("round_trip.json");
        let collection = JsonCollection::new(&path);

        let items = vec![item(1, "first"), item(2, "second")];
        collection.persist(&items).unwrap();

        let loaded: Vec<Item> = collection.load().unwrap();
        assert_eq!(loaded, items);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn persisted_files_are_pretty_printed() {
        let path = temp_path("pretty.json");
        let collection = JsonCollection::new(&path);

        collection.persist(&[item(1, "first")]).unwrap();
        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.starts_with("[\n  {"));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn next_id_starts_at_one() {
        let items: Vec<Item> = Vec::new();
        assert_eq!(next_id(&items), 1);
    }

    #[test]
    fn next_id_is_one_past_the_maximum() {
        let items = vec![item(1, "a"), item(7, "b"), item(3, "c")];
        assert_eq!(next_id(&items), 8);
    }
}
