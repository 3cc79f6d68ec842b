use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Admission candidate exactly as supplied by the data source.
///
/// Field names follow the interchange format (`givenName`, `familyName`, ...).
/// The legacy export names `name`, `lastName` and `globalIcfesScore` are
/// accepted as aliases when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default, alias = "name")]
    pub given_name: String,
    #[serde(default, alias = "lastName")]
    pub family_name: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub ethnicity: Option<String>,
    #[serde(alias = "globalIcfesScore")]
    pub admission_score: i32,
    #[serde(default, deserialize_with = "optional_date")]
    pub registration_date: Option<NaiveDate>,
    pub math_score: i32,
    pub english_score: i32,
}

impl Candidate {
    pub fn new(
        given_name: impl Into<String>,
        family_name: impl Into<String>,
        admission_score: i32,
        math_score: i32,
        english_score: i32,
    ) -> Self {
        Self {
            given_name: given_name.into(),
            family_name: family_name.into(),
            ethnicity: None,
            admission_score,
            registration_date: None,
            math_score,
            english_score,
        }
    }

    pub fn with_ethnicity(mut self, ethnicity: impl Into<String>) -> Self {
        self.ethnicity = Some(ethnicity.into());
        self
    }

    pub fn with_registration_date(mut self, date: NaiveDate) -> Self {
        self.registration_date = Some(date);
        self
    }

    /// Ethnicity with surrounding whitespace removed, `None` when blank.
    pub fn declared_ethnicity(&self) -> Option<&str> {
        self.ethnicity
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.given_name, self.family_name)
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - ICFES: {}",
            self.given_name, self.family_name, self.admission_score
        )
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = blank_as_none(deserializer)?;
    opt.map(|value| parse_date(&value).map_err(serde::de::Error::custom))
        .transpose()
}
