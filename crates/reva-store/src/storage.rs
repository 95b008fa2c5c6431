//! The storage capability.

use reva_core::{Calculation, CommitId};

use crate::error::StorageError;

/// Persists calculations by commit id.
///
/// Implementors provide the fallible `try_*` pair. The provided `store` and
/// `fetch` wrap them with the fire-and-forget contract hosts rely on: every
/// failure is logged at `error` level and swallowed.
pub trait Storage: Send + Sync {
    /// Write `calculation`, replacing anything stored under the same key.
    fn try_store(&self, calculation: &Calculation) -> Result<(), StorageError>;

    /// Read the calculation stored under `commit_id`.
    fn try_fetch(&self, commit_id: &CommitId) -> Result<Calculation, StorageError>;

    /// Write `calculation`. Failures are logged, never returned.
    fn store(&self, calculation: &Calculation) {
        if let Err(e) = self.try_store(calculation) {
            tracing::error!(
                commit_id = %calculation.commit_id,
                error = %e,
                "could not store calculation"
            );
        }
    }

    /// Read the calculation for `commit_id`, or `None` if it is missing,
    /// unreadable, or malformed. The cause is logged.
    fn fetch(&self, commit_id: &CommitId) -> Option<Calculation> {
        match self.try_fetch(commit_id) {
            Ok(calculation) => Some(calculation),
            Err(e) => {
                tracing::error!(
                    commit_id = %commit_id,
                    error = %e,
                    "could not find calculation"
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::Mutex;

    /// Records calls and fails on demand.
    struct Scripted {
        fail: bool,
        stored: Mutex<Vec<Calculation>>,
    }

    impl Storage for Scripted {
        fn try_store(&self, calculation: &Calculation) -> Result<(), StorageError> {
            if self.fail {
                return Err(StorageError::Io {
                    path: PathBuf::from("/nowhere"),
                    source: std::io::Error::new(std::io::ErrorKind::Other, "disk gone"),
                });
            }
            self.stored.lock().unwrap().push(calculation.clone());
            Ok(())
        }

        fn try_fetch(&self, commit_id: &CommitId) -> Result<Calculation, StorageError> {
            self.stored
                .lock()
                .unwrap()
                .iter()
                .rev()
                .find(|c| &c.commit_id == commit_id)
                .cloned()
                .ok_or_else(|| StorageError::NotFound {
                    commit_id: commit_id.clone(),
                    path: PathBuf::from("/nowhere"),
                })
        }
    }

    fn scripted(fail: bool) -> Scripted {
        Scripted {
            fail,
            stored: Mutex::new(Vec::new()),
        }
    }

    #[test]
    fn store_swallows_errors() {
        let s = scripted(true);
        let calc = Calculation::new(CommitId::new("abc123").unwrap());
        s.store(&calc);
        assert!(s.stored.lock().unwrap().is_empty());
    }

    #[test]
    fn fetch_maps_errors_to_none() {
        let s = scripted(false);
        assert!(s.fetch(&CommitId::new("abc123").unwrap()).is_none());
    }

    #[test]
    fn provided_methods_delegate() {
        let s = scripted(false);
        let calc = Calculation::new(CommitId::new("abc123").unwrap())
            .with_field("hours", 3)
            .unwrap();
        s.store(&calc);
        assert_eq!(s.fetch(&calc.commit_id), Some(calc));
    }

    #[test]
    fn is_object_safe() {
        let s: Box<dyn Storage> = Box::new(scripted(false));
        assert!(s.fetch(&CommitId::new("abc123").unwrap()).is_none());
    }
}
