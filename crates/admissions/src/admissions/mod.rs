//! Candidate ranking and admission statistics.
//!
//! [`Ranker`] and [`StatisticsAggregator`] are the pure core: both borrow
//! their input immutably and never fail. The loader, repository and service
//! modules wire them to a data source for the command line front end.

pub mod domain;
pub mod loader;
pub mod minority;
pub mod ranking;
pub mod report;
pub mod repository;
pub mod service;
pub mod statistics;

#[cfg(test)]
mod tests;

pub use domain::Candidate;
pub use loader::{CandidateFormat, CandidateLoadError, CandidateLoader};
pub use minority::{is_minority, MinorityPolicy, STANDARD_MINORITY_KEYWORDS};
pub use ranking::{rank, Ranker, RankingCriterion, RankingKey, SortDirection, STANDARD_CRITERIA};
pub use report::views::{
    AdmissionReportSummary, RankedCandidateView, StatisticsView, GENERAL_POPULATION_LABEL,
};
pub use report::AdmissionReport;
pub use repository::{CandidateRepository, InMemoryCandidateRepository, RepositoryError};
pub use service::{AdmissionService, AdmissionServiceError};
pub use statistics::{compute, StatisticsAggregator, StatisticsSnapshot, DEFAULT_TOP_CANDIDATES};
