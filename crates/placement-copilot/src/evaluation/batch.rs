use super::domain::{InputError, SkillScoreSet};
use serde::Deserialize;
use std::fmt;
use std::io::Read;
use std::path::Path;

#[derive(Debug)]
pub enum CandidateImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Row { line: usize, source: InputError },
}

impl fmt::Display for CandidateImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CandidateImportError::Io(err) => write!(f, "failed to read candidate file: {}", err),
            CandidateImportError::Csv(err) => write!(f, "invalid candidate CSV data: {}", err),
            CandidateImportError::Row { line, source } => {
                write!(f, "candidate on line {}: {}", line, source)
            }
        }
    }
}

impl std::error::Error for CandidateImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CandidateImportError::Io(err) => Some(err),
            CandidateImportError::Csv(err) => Some(err),
            CandidateImportError::Row { source, .. } => Some(source),
        }
    }
}

impl From<std::io::Error> for CandidateImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for CandidateImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// One candidate row from a batch file, validated and ready to evaluate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateRecord {
    pub candidate: String,
    pub scores: SkillScoreSet,
    pub feedback: String,
}

#[derive(Debug, Deserialize)]
struct CandidateRow {
    #[serde(default)]
    candidate: Option<String>,
    excel: i64,
    sql: i64,
    python: i64,
    stats: i64,
    ml: i64,
    bi: i64,
    #[serde(default)]
    feedback: Option<String>,
}

/// Reads candidates from CSV with the same column names as the evaluation request.
pub struct CandidateBatchImporter;

impl CandidateBatchImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<CandidateRecord>, CandidateImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<CandidateRecord>, CandidateImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut records = Vec::new();

        for (index, row) in csv_reader.deserialize::<CandidateRow>().enumerate() {
            let row = row?;
            // header is line 1
            let line = index + 2;
            let scores =
                SkillScoreSet::from_scores([row.excel, row.sql, row.python, row.stats, row.ml, row.bi])
                    .map_err(|source| CandidateImportError::Row { line, source })?;

            let candidate = row
                .candidate
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| format!("candidate-{}", index + 1));

            records.push(CandidateRecord {
                candidate,
                scores,
                feedback: row.feedback.unwrap_or_default(),
            });
        }

        Ok(records)
    }
}
