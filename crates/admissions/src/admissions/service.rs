use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use super::domain::Candidate;
use super::loader::{CandidateLoadError, CandidateLoader};
use super::ranking::Ranker;
use super::report::AdmissionReport;
use super::repository::{CandidateRepository, RepositoryError};
use super::statistics::{StatisticsAggregator, StatisticsSnapshot};
use crate::config::RankingConfig;

/// Service composing the candidate repository, ranker and statistics aggregator.
pub struct AdmissionService<R> {
    repository: Arc<R>,
    ranker: Arc<Ranker>,
    aggregator: Arc<StatisticsAggregator>,
}

impl<R> AdmissionService<R>
where
    R: CandidateRepository + 'static,
{
    pub fn new(repository: Arc<R>, config: RankingConfig) -> Self {
        let RankingConfig {
            minority_policy,
            top_candidates,
        } = config;

        let aggregator =
            StatisticsAggregator::new(minority_policy.clone()).with_top_candidates(top_candidates);
        let ranker = Ranker::new(minority_policy);

        Self {
            repository,
            ranker: Arc::new(ranker),
            aggregator: Arc::new(aggregator),
        }
    }

    pub fn ranker(&self) -> &Ranker {
        &self.ranker
    }

    pub fn aggregator(&self) -> &StatisticsAggregator {
        &self.aggregator
    }

    /// Store every supplied candidate, returning how many were added.
    pub fn initialize<I>(&self, candidates: I) -> Result<usize, AdmissionServiceError>
    where
        I: IntoIterator<Item = Candidate>,
    {
        let mut added = 0;
        for candidate in candidates {
            self.repository.add(candidate)?;
            added += 1;
        }

        info!(added, "candidate repository initialized");
        Ok(added)
    }

    /// Load a JSON or CSV candidate file into the repository.
    pub fn initialize_from_path<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<usize, AdmissionServiceError> {
        let candidates = CandidateLoader::from_path(path)?;
        self.initialize(candidates)
    }

    /// Rank every stored candidate according to the admission criteria.
    pub fn process_admitted_candidates(&self) -> Result<Vec<Candidate>, AdmissionServiceError> {
        let candidates = self.repository.all()?;
        let ranked = self.ranker.rank(&candidates);
        debug!(count = ranked.len(), "ranked admitted candidates");
        Ok(ranked)
    }

    pub fn generate_statistics(&self, ranked: &[Candidate]) -> StatisticsSnapshot {
        self.aggregator.compute(ranked)
    }

    pub fn total_candidates(&self) -> Result<usize, AdmissionServiceError> {
        Ok(self.repository.count()?)
    }

    /// Rank the stored candidates and compute statistics over the result.
    pub fn run(&self) -> Result<AdmissionReport, AdmissionServiceError> {
        let ranked = self.process_admitted_candidates()?;
        let statistics = self.generate_statistics(&ranked);

        info!(
            total = statistics.total,
            minority = statistics.minority_count,
            "admission ranking completed"
        );

        Ok(AdmissionReport::new(
            ranked,
            statistics,
            self.ranker.policy().clone(),
        ))
    }
}

/// Error raised by the admission service.
#[derive(Debug, thiserror::Error)]
pub enum AdmissionServiceError {
    #[error(transparent)]
    Load(#[from] CandidateLoadError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
