use std::sync::Arc;

use super::common::*;
use crate::admissions::minority::MinorityPolicy;
use crate::admissions::repository::{CandidateRepository, RepositoryError};
use crate::admissions::service::{AdmissionService, AdmissionServiceError};
use crate::config::RankingConfig;

#[test]
fn initialize_appends_in_insertion_order() {
    let (repository, service) = service();

    let added = service.initialize(scenario()).expect("initialize succeeds");

    assert_eq!(added, 3);
    assert_eq!(service.total_candidates().expect("count"), 3);
    assert_eq!(repository.all().expect("all"), scenario());
}

#[test]
fn process_ranks_repository_contents_without_reordering_storage() {
    let (repository, service) = service();
    service.initialize(scenario()).expect("initialize succeeds");

    let ranked = service.process_admitted_candidates().expect("ranked");

    assert_eq!(family_names(&ranked), vec!["Diaz", "Ardila", "Zapata"]);
    assert_eq!(repository.all().expect("all"), scenario());
}

#[test]
fn run_combines_ranking_and_statistics() {
    let (_, service) = service();
    service.initialize(scenario()).expect("initialize succeeds");

    let report = service.run().expect("report builds");
    let summary = report.summary();

    assert_eq!(report.statistics.total, 3);
    assert_eq!(report.statistics.top_candidates, report.ranked);
    assert_eq!(summary.candidates[0].position, 1);
    assert!(summary.candidates[0].minority);
    assert_eq!(summary.candidates[1].ethnicity_label, "General");
    assert!(summary.candidates[1].ethnicity.is_none());
    assert_eq!(summary.statistics.top_candidates.len(), 3);
}

#[test]
fn run_over_empty_repository_is_not_an_error() {
    let (_, service) = service();

    let report = service.run().expect("report builds");

    assert!(report.ranked.is_empty());
    assert!(report.statistics.is_empty());
    assert!(report.summary().candidates.is_empty());
}

#[test]
fn ranking_config_flows_to_ranker_and_aggregator() {
    let repository = Arc::new(crate::admissions::repository::InMemoryCandidateRepository::new());
    let config = RankingConfig {
        minority_policy: MinorityPolicy::from_keywords(["mestizo"]),
        top_candidates: 2,
    };
    let service = AdmissionService::new(repository, config);
    service.initialize(scenario()).expect("initialize succeeds");

    let report = service.run().expect("report builds");

    assert_eq!(family_names(&report.ranked), vec!["Zapata", "Ardila", "Diaz"]);
    assert_eq!(report.statistics.minority_count, 1);
    assert_eq!(family_names(&report.statistics.top_candidates), vec!["Zapata", "Ardila"]);
    assert_eq!(service.aggregator().top_candidates(), 2);
}

#[test]
fn repository_failures_surface_as_service_errors() {
    let service = AdmissionService::new(Arc::new(OfflineRepository), RankingConfig::default());

    let error = service.initialize(scenario()).expect_err("offline repository");
    assert!(matches!(
        error,
        AdmissionServiceError::Repository(RepositoryError::Unavailable(_))
    ));

    assert!(service.process_admitted_candidates().is_err());
    assert!(service.total_candidates().is_err());
}

#[test]
fn initialize_from_path_reports_load_errors() {
    let (_, service) = service();

    let error = service
        .initialize_from_path("./missing-candidates.csv")
        .expect_err("missing file");

    assert!(matches!(error, AdmissionServiceError::Load(_)));
    assert_eq!(service.total_candidates().expect("count"), 0);
}
