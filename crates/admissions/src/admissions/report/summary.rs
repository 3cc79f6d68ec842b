use super::super::domain::Candidate;
use super::super::minority::MinorityPolicy;
use super::super::statistics::StatisticsSnapshot;
use super::views::{
    AdmissionReportSummary, RankedCandidateView, StatisticsView, GENERAL_POPULATION_LABEL,
};

/// Ranked candidates together with the statistics computed over them.
#[derive(Debug, Clone)]
pub struct AdmissionReport {
    pub ranked: Vec<Candidate>,
    pub statistics: StatisticsSnapshot,
    policy: MinorityPolicy,
}

impl AdmissionReport {
    pub fn new(
        ranked: Vec<Candidate>,
        statistics: StatisticsSnapshot,
        policy: MinorityPolicy,
    ) -> Self {
        Self {
            ranked,
            statistics,
            policy,
        }
    }

    pub fn policy(&self) -> &MinorityPolicy {
        &self.policy
    }

    pub fn summary(&self) -> AdmissionReportSummary {
        let candidates = self.candidate_views(&self.ranked);
        let statistics = StatisticsView {
            total: self.statistics.total,
            minority_count: self.statistics.minority_count,
            minority_percentage: self.statistics.minority_percentage,
            average_score: self.statistics.average_score,
            max_score: self.statistics.max_score,
            min_score: self.statistics.min_score,
            top_candidates: self.candidate_views(&self.statistics.top_candidates),
        };

        AdmissionReportSummary {
            candidates,
            statistics,
        }
    }

    fn candidate_views(&self, candidates: &[Candidate]) -> Vec<RankedCandidateView> {
        candidates
            .iter()
            .enumerate()
            .map(|(index, candidate)| self.view(index + 1, candidate))
            .collect()
    }

    fn view(&self, position: usize, candidate: &Candidate) -> RankedCandidateView {
        let ethnicity = candidate.declared_ethnicity().map(str::to_string);
        let ethnicity_label = ethnicity
            .clone()
            .unwrap_or_else(|| GENERAL_POPULATION_LABEL.to_string());

        RankedCandidateView {
            position,
            given_name: candidate.given_name.clone(),
            family_name: candidate.family_name.clone(),
            ethnicity,
            ethnicity_label,
            minority: self.policy.is_minority(candidate),
            admission_score: candidate.admission_score,
            math_score: candidate.math_score,
            english_score: candidate.english_score,
            registration_date: candidate.registration_date,
        }
    }
}
