use crate::admissions::minority::MinorityPolicy;
use crate::admissions::statistics::DEFAULT_TOP_CANDIDATES;
use std::env;
use std::fmt;
use std::num::ParseIntError;
use std::path::PathBuf;

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub ranking: RankingConfig,
    /// Candidate file used when no input is given on the command line.
    pub candidates_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let candidates_path = env::var("APP_CANDIDATES_PATH")
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        let top_candidates = match env::var("APP_TOP_CANDIDATES") {
            Ok(value) => value
                .trim()
                .parse::<usize>()
                .map_err(|source| ConfigError::InvalidTopCandidates { value, source })?,
            Err(_) => DEFAULT_TOP_CANDIDATES,
        };

        let minority_policy = match env::var("APP_MINORITY_KEYWORDS") {
            Ok(value) => {
                let policy = MinorityPolicy::from_keywords(value.split(','));
                if policy.is_empty() {
                    return Err(ConfigError::EmptyMinorityKeywords);
                }
                policy
            }
            Err(_) => MinorityPolicy::standard(),
        };

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            ranking: RankingConfig {
                minority_policy,
                top_candidates,
            },
            candidates_path,
        })
    }
}

/// Ranking policy knobs shared by the ranker and the statistics aggregator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingConfig {
    pub minority_policy: MinorityPolicy,
    pub top_candidates: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            minority_policy: MinorityPolicy::standard(),
            top_candidates: DEFAULT_TOP_CANDIDATES,
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidTopCandidates {
        value: String,
        source: ParseIntError,
    },
    EmptyMinorityKeywords,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTopCandidates { value, .. } => write!(
                f,
                "APP_TOP_CANDIDATES must be a non-negative integer (got '{}')",
                value
            ),
            ConfigError::EmptyMinorityKeywords => {
                write!(f, "APP_MINORITY_KEYWORDS must list at least one keyword")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidTopCandidates { source, .. } => Some(source),
            ConfigError::EmptyMinorityKeywords => None,
        }
    }
}
