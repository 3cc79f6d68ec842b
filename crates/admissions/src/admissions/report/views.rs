use chrono::NaiveDate;
use serde::Serialize;

/// Label shown for candidates without a declared ethnicity.
pub const GENERAL_POPULATION_LABEL: &str = "General";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedCandidateView {
    pub position: usize,
    pub given_name: String,
    pub family_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ethnicity: Option<String>,
    pub ethnicity_label: String,
    pub minority: bool,
    pub admission_score: i32,
    pub math_score: i32,
    pub english_score: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticsView {
    pub total: usize,
    pub minority_count: usize,
    pub minority_percentage: f64,
    pub average_score: f64,
    pub max_score: i32,
    pub min_score: i32,
    pub top_candidates: Vec<RankedCandidateView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdmissionReportSummary {
    pub candidates: Vec<RankedCandidateView>,
    pub statistics: StatisticsView,
}
