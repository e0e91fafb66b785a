use crate::word_bank::Difficulty;
use chrono::Local;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const MAX_ENTRIES: usize = 10;

/// One persisted high-score row. Immutable once stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoreEntry {
    pub name: String,
    pub score: u32,
    pub difficulty: Difficulty,
    pub date: String,
}

impl ScoreEntry {
    pub fn new(name: String, score: u32, difficulty: Difficulty) -> Self {
        Self {
            name,
            score,
            difficulty,
            date: Local::now().format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

pub trait ScoreStore {
    /// Loads whatever is persisted. Missing or unparseable data is "no
    /// scores yet", never an error.
    fn load(&self) -> Vec<ScoreEntry>;
    fn save(&self, entries: &[ScoreEntry]) -> io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let path = if let Some(pd) = ProjectDirs::from("", "", "letterwise") {
            pd.data_local_dir().join("scores.json")
        } else {
            PathBuf::from("letterwise_scores.json")
        };
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }
}

impl Default for FileScoreStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreStore for FileScoreStore {
    fn load(&self) -> Vec<ScoreEntry> {
        if let Ok(bytes) = fs::read(&self.path) {
            if let Ok(entries) = serde_json::from_slice::<Vec<ScoreEntry>>(&bytes) {
                return entries;
            }
        }
        Vec::new()
    }

    fn save(&self, entries: &[ScoreEntry]) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(entries).unwrap_or_default();
        fs::write(&self.path, data)
    }
}

/// The bounded top-10 list. Kept sorted descending by score at all times;
/// ties keep insertion order.
#[derive(Debug)]
pub struct ScoreLedger<S: ScoreStore> {
    entries: Vec<ScoreEntry>,
    store: S,
}

impl<S: ScoreStore> ScoreLedger<S> {
    pub fn load(store: S) -> Self {
        let mut entries = store.load();
        // A hand-edited file may violate the ordering invariant; re-establish
        // it on the way in.
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries.truncate(MAX_ENTRIES);
        Self { entries, store }
    }

    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True if the score would earn a spot on the board: the board has room,
    /// or the score strictly beats the current lowest entry. A tie with the
    /// lowest entry does not bump it.
    pub fn qualifies(&self, score: u32) -> bool {
        self.entries.len() < MAX_ENTRIES
            || self.entries.last().is_some_and(|lowest| score > lowest.score)
    }

    /// Inserts, re-ranks, truncates to the top 10 and persists. The save is
    /// best-effort; an unwritable store never fails the session.
    pub fn insert(&mut self, entry: ScoreEntry) {
        self.entries.push(entry);
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(MAX_ENTRIES);
        let _ = self.store.save(&self.entries);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn entry(name: &str, score: u32) -> ScoreEntry {
        ScoreEntry::new(name.to_string(), score, Difficulty::Easy)
    }

    struct FailingStore;

    impl ScoreStore for FailingStore {
        fn load(&self) -> Vec<ScoreEntry> {
            Vec::new()
        }
        fn save(&self, _entries: &[ScoreEntry]) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"))
        }
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempdir().unwrap();
        let store = FileScoreStore::with_path(dir.path().join("absent.json"));
        let ledger = ScoreLedger::load(store);
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_corrupt_file_loads_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scores.json");
        fs::write(&path, b"{ this is not json").unwrap();

        let ledger = ScoreLedger::load(FileScoreStore::with_path(&path));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_insert_persists_and_reloads() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scores.json");

        let mut ledger = ScoreLedger::load(FileScoreStore::with_path(&path));
        ledger.insert(entry("Alice", 50));

        let reloaded = ScoreLedger::load(FileScoreStore::with_path(&path));
        assert_eq!(reloaded.entries().len(), 1);
        assert_eq!(reloaded.entries()[0].name, "Alice");
        assert_eq!(reloaded.entries()[0].score, 50);
    }

    #[test]
    fn test_insert_keeps_descending_order() {
        let dir = tempdir().unwrap();
        let store = FileScoreStore::with_path(dir.path().join("scores.json"));
        let mut ledger = ScoreLedger::load(store);

        for (name, score) in [("a", 30), ("b", 90), ("c", 10), ("d", 60)] {
            ledger.insert(entry(name, score));
        }

        let scores: Vec<u32> = ledger.entries().iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![90, 60, 30, 10]);
    }

    #[test]
    fn test_insert_truncates_to_ten() {
        let dir = tempdir().unwrap();
        let store = FileScoreStore::with_path(dir.path().join("scores.json"));
        let mut ledger = ScoreLedger::load(store);

        for score in 0..25 {
            ledger.insert(entry("p", score));
        }

        assert_eq!(ledger.entries().len(), MAX_ENTRIES);
        assert_eq!(ledger.entries()[0].score, 24);
        assert_eq!(ledger.entries().last().unwrap().score, 15);
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let dir = tempdir().unwrap();
        let store = FileScoreStore::with_path(dir.path().join("scores.json"));
        let mut ledger = ScoreLedger::load(store);

        ledger.insert(entry("first", 40));
        ledger.insert(entry("second", 40));
        ledger.insert(entry("third", 40));

        let names: Vec<&str> = ledger.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_qualifies_with_room_regardless_of_score() {
        let dir = tempdir().unwrap();
        let store = FileScoreStore::with_path(dir.path().join("scores.json"));
        let mut ledger = ScoreLedger::load(store);

        assert!(ledger.qualifies(0));

        for score in [100, 90, 80] {
            ledger.insert(entry("p", score));
        }
        // Still under ten entries; even a zero score qualifies.
        assert!(ledger.qualifies(0));
    }

    #[test]
    fn test_qualifies_is_strict_when_full() {
        let dir = tempdir().unwrap();
        let store = FileScoreStore::with_path(dir.path().join("scores.json"));
        let mut ledger = ScoreLedger::load(store);

        for _ in 0..MAX_ENTRIES {
            ledger.insert(entry("p", 100));
        }

        assert!(!ledger.qualifies(100)); // tie does not bump the lowest entry
        assert!(!ledger.qualifies(99));
        assert!(ledger.qualifies(101));
    }

    #[test]
    fn test_unwritable_store_is_swallowed() {
        let mut ledger = ScoreLedger::load(FailingStore);
        ledger.insert(entry("Alice", 50));
        // In-memory state is still updated even though the save failed.
        assert_eq!(ledger.entries().len(), 1);
    }

    #[test]
    fn test_load_reorders_tampered_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scores.json");
        let out_of_order = vec![entry("low", 5), entry("high", 500)];
        FileScoreStore::with_path(&path).save(&out_of_order).unwrap();

        let ledger = ScoreLedger::load(FileScoreStore::with_path(&path));
        assert_eq!(ledger.entries()[0].score, 500);
        assert_eq!(ledger.entries()[1].score, 5);
    }
}
