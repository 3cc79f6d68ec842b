use std::sync::Arc;

use chrono::NaiveDate;

use crate::admissions::domain::Candidate;
use crate::admissions::repository::{
    CandidateRepository, InMemoryCandidateRepository, RepositoryError,
};
use crate::admissions::service::AdmissionService;
use crate::config::RankingConfig;

/// Non-minority, mid score, strong math.
pub(super) fn zapata() -> Candidate {
    Candidate::new("Andres", "Zapata", 450, 70, 60).with_ethnicity("mestizo")
}

/// Minority candidate with the same admission score as Zapata.
pub(super) fn diaz() -> Candidate {
    Candidate::new("Beatriz", "Diaz", 450, 80, 60).with_ethnicity("indigena")
}

/// Highest score, no declared ethnicity.
pub(super) fn ardila() -> Candidate {
    Candidate::new("Camilo", "Ardila", 500, 60, 90)
}

pub(super) fn scenario() -> Vec<Candidate> {
    vec![zapata(), diaz(), ardila()]
}

pub(super) fn registered_on(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, day).expect("valid registration date")
}

pub(super) fn family_names(candidates: &[Candidate]) -> Vec<&str> {
    candidates
        .iter()
        .map(|candidate| candidate.family_name.as_str())
        .collect()
}

pub(super) fn service() -> (
    Arc<InMemoryCandidateRepository>,
    AdmissionService<InMemoryCandidateRepository>,
) {
    let repository = Arc::new(InMemoryCandidateRepository::new());
    let service = AdmissionService::new(repository.clone(), RankingConfig::default());
    (repository, service)
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

/// Repository double whose storage is always unavailable.
#[derive(Default)]
pub(super) struct OfflineRepository;

impl CandidateRepository for OfflineRepository {
    fn add(&self, _candidate: Candidate) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn all(&self) -> Result<Vec<Candidate>, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn count(&self) -> Result<usize, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }
}
