//! Request-local hand-off of the candidate table.
//!
//! Each hand-off writes to its own uniquely named file, so concurrent
//! requests never read each other's candidates.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use tracing::{debug, warn};
use uuid::Uuid;

use crate::{lineup::filter::Candidate, Result};

/// Path: ~/.cache/fpl-xi
pub fn default_scratch_dir() -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join("fpl-xi")
}

/// Write a string to file
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}

/// [`write_string`], removing whatever was written if it fails part-way.
fn write_or_discard(path: &Path, contents: &str) -> std::io::Result<()> {
    write_string(path, contents).inspect_err(|_| {
        if path.symlink_metadata().is_ok() {
            if let Err(e) = fs::remove_file(path) {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "could not remove partial candidate table"
                );
            }
        }
    })
}

/// How the shortlist reaches the optimizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateStore {
    /// Pass the table along untouched.
    InMemory,
    /// Round-trip the table through a unique JSON file in this directory.
    Scratch(PathBuf),
}

impl CandidateStore {
    pub fn from_dir(dir: Option<PathBuf>) -> Self {
        match dir {
            Some(dir) => CandidateStore::Scratch(dir),
            None => CandidateStore::InMemory,
        }
    }

    /// Hand `pool` over and return what the next stage reads.
    ///
    /// Scratch files are removed once read back.
    pub fn hand_off(&self, pool: Vec<Candidate>) -> Result<Vec<Candidate>> {
        let dir = match self {
            CandidateStore::InMemory => return Ok(pool),
            CandidateStore::Scratch(dir) => dir,
        };

        let path = dir.join(format!("candidates-{}.json", Uuid::new_v4()));
        write_or_discard(&path, &serde_json::to_string_pretty(&pool)?)?;
        debug!(path = %path.display(), rows = pool.len(), "wrote candidate table");

        let read_back = fs::read_to_string(&path);
        if let Err(e) = fs::remove_file(&path) {
            warn!(path = %path.display(), error = %e, "could not remove candidate table");
        }

        Ok(serde_json::from_str(&read_back?)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::types::{Position, TeamId};
    use tempfile::tempdir;

    fn pool() -> Vec<Candidate> {
        vec![
            Candidate {
                first_name: "Jordan".to_string(),
                second_name: "Pickford".to_string(),
                web_name: "Pickford".to_string(),
                team: TeamId::new(8),
                cost: 50,
                ep_next: 4.2,
                position: Position::GK,
                total_points: 120,
                event_points: 6,
            },
            Candidate {
                first_name: "Erling".to_string(),
                second_name: "Haaland".to_string(),
                web_name: "Haaland".to_string(),
                team: TeamId::new(13),
                cost: 145,
                ep_next: 8.1,
                position: Position::FWD,
                total_points: 180,
                event_points: 13,
            },
        ]
    }

    #[test]
    fn test_default_scratch_dir() {
        let path = default_scratch_dir();
        assert!(path.to_string_lossy().ends_with("fpl-xi"));
    }

    #[test]
    fn test_write_string_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("subdir").join("output.txt");

        write_string(&file_path, "test content").unwrap();

        let content = fs::read_to_string(&file_path).unwrap();
        assert_eq!(content, "test content");
    }

    #[test]
    fn test_in_memory_hand_off() {
        let store = CandidateStore::from_dir(None);
        assert_eq!(store, CandidateStore::InMemory);
        assert_eq!(store.hand_off(pool()).unwrap(), pool());
    }

    #[test]
    fn test_scratch_hand_off_round_trips_and_cleans_up() {
        let dir = tempdir().unwrap();
        let scratch = dir.path().join("nested");
        let store = CandidateStore::from_dir(Some(scratch.clone()));

        assert_eq!(store.hand_off(pool()).unwrap(), pool());

        let leftovers = fs::read_dir(&scratch).unwrap().count();
        assert_eq!(leftovers, 0);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_failed_write_leaves_no_file() {
        // /dev/full accepts the open and fails every write with ENOSPC.
        if !Path::new("/dev/full").exists() {
            return;
        }
        let dir = tempdir().unwrap();
        let path = dir.path().join("candidates-full.json");
        std::os::unix::fs::symlink("/dev/full", &path).unwrap();

        let err = write_or_discard(&path, "[]").unwrap_err();

        assert_eq!(err.raw_os_error(), Some(28));
        assert!(path.symlink_metadata().is_err());
        assert!(Path::new("/dev/full").exists());
    }

    #[test]
    fn test_concurrent_hand_offs_do_not_collide() {
        let dir = tempdir().unwrap();
        let store = CandidateStore::Scratch(dir.path().to_path_buf());

        std::thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|i| {
                    let store = &store;
                    s.spawn(move || {
                        let mut mine = pool();
                        mine[0].ep_next = i as f64;
                        let back = store.hand_off(mine.clone()).unwrap();
                        assert_eq!(back, mine);
                    })
                })
                .collect();
            for h in handles {
                h.join().unwrap();
            }
        });
    }
}
