mod parser;

use super::domain::Candidate;
use std::io::Read;
use std::path::Path;
use tracing::info;

#[derive(Debug)]
pub enum CandidateLoadError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Csv(csv::Error),
    UnsupportedFormat { extension: String },
}

impl std::fmt::Display for CandidateLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CandidateLoadError::Io(err) => write!(f, "failed to read candidate file: {}", err),
            CandidateLoadError::Json(err) => write!(f, "invalid candidate JSON data: {}", err),
            CandidateLoadError::Csv(err) => write!(f, "invalid candidate CSV data: {}", err),
            CandidateLoadError::UnsupportedFormat { extension } => write!(
                f,
                "unsupported candidate file extension '{}' (expected json or csv)",
                extension
            ),
        }
    }
}

impl std::error::Error for CandidateLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CandidateLoadError::Io(err) => Some(err),
            CandidateLoadError::Json(err) => Some(err),
            CandidateLoadError::Csv(err) => Some(err),
            CandidateLoadError::UnsupportedFormat { .. } => None,
        }
    }
}

impl From<std::io::Error> for CandidateLoadError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for CandidateLoadError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<csv::Error> for CandidateLoadError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Encoding of a candidate file, chosen from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateFormat {
    Json,
    Csv,
}

impl CandidateFormat {
    pub fn from_path(path: &Path) -> Result<Self, CandidateLoadError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        match extension.as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(CandidateLoadError::UnsupportedFormat { extension }),
        }
    }
}

/// Reads candidate records from JSON or CSV sources. No validation is applied
/// beyond what the encoding itself requires.
pub struct CandidateLoader;

impl CandidateLoader {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Candidate>, CandidateLoadError> {
        let path = path.as_ref();
        let format = CandidateFormat::from_path(path)?;
        let file = std::fs::File::open(path)?;
        let candidates = match format {
            CandidateFormat::Json => Self::from_json_reader(file)?,
            CandidateFormat::Csv => Self::from_csv_reader(file)?,
        };

        info!(path = %path.display(), count = candidates.len(), "loaded candidate records");
        Ok(candidates)
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Vec<Candidate>, CandidateLoadError> {
        parser::parse_json(reader).map_err(CandidateLoadError::from)
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Vec<Candidate>, CandidateLoadError> {
        parser::parse_csv(reader).map_err(CandidateLoadError::from)
    }
}
