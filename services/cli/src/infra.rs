use admissions::admissions::{AdmissionService, InMemoryCandidateRepository};
use admissions::config::RankingConfig;
use admissions::error::AppError;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Wire an admission service over a fresh in-memory repository, applying an
/// optional command line override of the top slice size.
pub(crate) fn build_service(
    ranking: &RankingConfig,
    top: Option<usize>,
) -> AdmissionService<InMemoryCandidateRepository> {
    let mut ranking = ranking.clone();
    if let Some(top) = top {
        ranking.top_candidates = top;
    }

    let repository = Arc::new(InMemoryCandidateRepository::new());
    AdmissionService::new(repository, ranking)
}

/// Command line input wins over the configured default path.
pub(crate) fn resolve_input(
    input: Option<PathBuf>,
    configured: Option<&Path>,
) -> Result<PathBuf, AppError> {
    input
        .or_else(|| configured.map(Path::to_path_buf))
        .ok_or(AppError::MissingInput)
}
