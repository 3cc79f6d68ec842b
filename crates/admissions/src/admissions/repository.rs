use std::sync::{Mutex, MutexGuard};

use super::domain::Candidate;

/// Append-only candidate storage iterated in insertion order.
pub trait CandidateRepository: Send + Sync {
    fn add(&self, candidate: Candidate) -> Result<(), RepositoryError>;
    /// Snapshot of every stored candidate in insertion order.
    fn all(&self) -> Result<Vec<Candidate>, RepositoryError>;
    fn count(&self) -> Result<usize, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Default)]
pub struct InMemoryCandidateRepository {
    records: Mutex<Vec<Candidate>>,
}

impl InMemoryCandidateRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn records(&self) -> Result<MutexGuard<'_, Vec<Candidate>>, RepositoryError> {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("candidate store lock poisoned".to_string()))
    }
}

impl CandidateRepository for InMemoryCandidateRepository {
    fn add(&self, candidate: Candidate) -> Result<(), RepositoryError> {
        self.records()?.push(candidate);
        Ok(())
    }

    fn all(&self) -> Result<Vec<Candidate>, RepositoryError> {
        Ok(self.records()?.clone())
    }

    fn count(&self) -> Result<usize, RepositoryError> {
        Ok(self.records()?.len())
    }
}
