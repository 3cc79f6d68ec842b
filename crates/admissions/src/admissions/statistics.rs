use super::domain::Candidate;
use super::minority::MinorityPolicy;
use serde::Serialize;

/// Number of leading candidates reported in [`StatisticsSnapshot::top_candidates`].
pub const DEFAULT_TOP_CANDIDATES: usize = 3;

/// Population metrics derived from an already-ranked candidate sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticsSnapshot {
    pub total: usize,
    pub minority_count: usize,
    /// Share of minority candidates in percent, `0.0` for an empty population.
    pub minority_percentage: f64,
    /// Mean admission score, `0.0` for an empty population.
    pub average_score: f64,
    /// `0` for an empty population.
    pub max_score: i32,
    /// `0` for an empty population.
    pub min_score: i32,
    pub top_candidates: Vec<Candidate>,
}

impl StatisticsSnapshot {
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Stateless aggregator over a ranked sequence.
///
/// The input order is trusted for the top slice only; every other metric is
/// order independent, and the aggregator never re-sorts or filters.
#[derive(Debug, Clone)]
pub struct StatisticsAggregator {
    policy: MinorityPolicy,
    top_candidates: usize,
}

impl StatisticsAggregator {
    pub fn new(policy: MinorityPolicy) -> Self {
        Self {
            policy,
            top_candidates: DEFAULT_TOP_CANDIDATES,
        }
    }

    pub fn with_top_candidates(mut self, top_candidates: usize) -> Self {
        self.top_candidates = top_candidates;
        self
    }

    pub fn top_candidates(&self) -> usize {
        self.top_candidates
    }

    pub fn compute(&self, ranked: &[Candidate]) -> StatisticsSnapshot {
        let total = ranked.len();
        let minority_count = ranked
            .iter()
            .filter(|candidate| self.policy.is_minority(candidate))
            .count();

        let (minority_percentage, average_score) = if total == 0 {
            (0.0, 0.0)
        } else {
            let score_sum: i64 = ranked
                .iter()
                .map(|candidate| i64::from(candidate.admission_score))
                .sum();
            (
                (minority_count as f64 * 100.0) / total as f64,
                score_sum as f64 / total as f64,
            )
        };

        let scores = ranked.iter().map(|candidate| candidate.admission_score);
        let max_score = scores.clone().max().unwrap_or(0);
        let min_score = scores.min().unwrap_or(0);

        let top_candidates = ranked.iter().take(self.top_candidates).cloned().collect();

        StatisticsSnapshot {
            total,
            minority_count,
            minority_percentage,
            average_score,
            max_score,
            min_score,
            top_candidates,
        }
    }
}

impl Default for StatisticsAggregator {
    fn default() -> Self {
        Self::new(MinorityPolicy::standard())
    }
}

/// Aggregate with the standard keyword table and top slice size.
pub fn compute(ranked: &[Candidate]) -> StatisticsSnapshot {
    StatisticsAggregator::default().compute(ranked)
}
