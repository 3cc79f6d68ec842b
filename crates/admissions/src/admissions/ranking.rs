use super::domain::Candidate;
use super::minority::MinorityPolicy;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Candidate attribute consulted by a ranking criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankingKey {
    /// Minority candidates rank as 0, everyone else as 1.
    MinorityStatus,
    AdmissionScore,
    MathScore,
    EnglishScore,
    FamilyName,
    GivenName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// One row of the comparator table: which key, in which direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingCriterion {
    pub key: RankingKey,
    pub direction: SortDirection,
}

impl RankingCriterion {
    pub const fn ascending(key: RankingKey) -> Self {
        Self {
            key,
            direction: SortDirection::Ascending,
        }
    }

    pub const fn descending(key: RankingKey) -> Self {
        Self {
            key,
            direction: SortDirection::Descending,
        }
    }

    fn compare(&self, left: &RankedEntry<'_>, right: &RankedEntry<'_>) -> Ordering {
        let ordering = match self.key {
            RankingKey::MinorityStatus => left.minority_rank().cmp(&right.minority_rank()),
            RankingKey::AdmissionScore => left
                .candidate
                .admission_score
                .cmp(&right.candidate.admission_score),
            RankingKey::MathScore => left.candidate.math_score.cmp(&right.candidate.math_score),
            RankingKey::EnglishScore => left
                .candidate
                .english_score
                .cmp(&right.candidate.english_score),
            RankingKey::FamilyName => left
                .candidate
                .family_name
                .cmp(&right.candidate.family_name),
            RankingKey::GivenName => left.candidate.given_name.cmp(&right.candidate.given_name),
        };

        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Admission order: minorities first, then scores high to low, then names.
pub const STANDARD_CRITERIA: [RankingCriterion; 6] = [
    RankingCriterion::ascending(RankingKey::MinorityStatus),
    RankingCriterion::descending(RankingKey::AdmissionScore),
    RankingCriterion::descending(RankingKey::MathScore),
    RankingCriterion::descending(RankingKey::EnglishScore),
    RankingCriterion::ascending(RankingKey::FamilyName),
    RankingCriterion::ascending(RankingKey::GivenName),
];

struct RankedEntry<'a> {
    candidate: &'a Candidate,
    minority: bool,
}

impl RankedEntry<'_> {
    fn minority_rank(&self) -> u8 {
        if self.minority {
            0
        } else {
            1
        }
    }
}

/// Stateless ranker applying a comparator table to a candidate slice.
///
/// The sort is stable: candidates that compare equal on every criterion keep
/// the order in which they were supplied.
#[derive(Debug, Clone)]
pub struct Ranker {
    criteria: Vec<RankingCriterion>,
    policy: MinorityPolicy,
}

impl Ranker {
    pub fn new(policy: MinorityPolicy) -> Self {
        Self::with_criteria(policy, STANDARD_CRITERIA.to_vec())
    }

    pub fn with_criteria(policy: MinorityPolicy, criteria: Vec<RankingCriterion>) -> Self {
        Self { criteria, policy }
    }

    pub fn criteria(&self) -> &[RankingCriterion] {
        &self.criteria
    }

    pub fn policy(&self) -> &MinorityPolicy {
        &self.policy
    }

    /// Return a ranked copy of `candidates`; the input is left untouched.
    pub fn rank(&self, candidates: &[Candidate]) -> Vec<Candidate> {
        let mut entries: Vec<RankedEntry<'_>> = candidates
            .iter()
            .map(|candidate| RankedEntry {
                candidate,
                minority: self.policy.is_minority(candidate),
            })
            .collect();

        entries.sort_by(|left, right| self.compare(left, right));

        entries
            .into_iter()
            .map(|entry| entry.candidate.clone())
            .collect()
    }

    fn compare(&self, left: &RankedEntry<'_>, right: &RankedEntry<'_>) -> Ordering {
        self.criteria
            .iter()
            .map(|criterion| criterion.compare(left, right))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new(MinorityPolicy::standard())
    }
}

/// Rank with the standard criteria and keyword table.
pub fn rank(candidates: &[Candidate]) -> Vec<Candidate> {
    Ranker::default().rank(candidates)
}
