//! Batch creation types and data structures

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Body of `POST /todos/batch`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchRequest {
    /// Titles to create, one record each. Duplicates are independent inserts.
    /// A missing or `null` list is an empty batch.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub titles: Vec<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Stage at which a single creation attempt failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreationErrorKind {
    /// No statement handle could be obtained
    PrepareFailed,
    /// The insert itself was rejected (constraint, connectivity)
    ExecFailed,
    /// The insert ran but the assigned id could not be read
    IdRetrievalFailed,
}

/// Failure of one creation attempt
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CreationError {
    #[error("failed to prepare insert: {0}")]
    PrepareFailed(String),

    #[error("failed to create todo: {0}")]
    ExecFailed(String),

    #[error("failed to read inserted id: {0}")]
    IdRetrievalFailed(String),
}

impl CreationError {
    pub fn kind(&self) -> CreationErrorKind {
        match self {
            CreationError::PrepareFailed(_) => CreationErrorKind::PrepareFailed,
            CreationError::ExecFailed(_) => CreationErrorKind::ExecFailed,
            CreationError::IdRetrievalFailed(_) => CreationErrorKind::IdRetrievalFailed,
        }
    }
}

/// Status field of a [`CreationOutcome`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeStatus {
    Success,
    Error,
    Cancelled,
}

/// Result of creating one title, correlated by title only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CreationOutcome {
    Success {
        title: String,
        id: i64,
    },
    Error {
        title: String,
        message: String,
        error_kind: CreationErrorKind,
    },
    Cancelled {
        title: String,
        message: String,
    },
}

impl CreationOutcome {
    pub fn from_result(title: String, result: Result<i64, CreationError>) -> Self {
        match result {
            Ok(id) => CreationOutcome::Success { title, id },
            Err(err) => CreationOutcome::Error {
                title,
                message: err.to_string(),
                error_kind: err.kind(),
            },
        }
    }

    /// Outcome for a task stopped by the batch deadline or by the caller
    pub fn cancelled(title: String) -> Self {
        CreationOutcome::Cancelled {
            title,
            message: "batch cancelled before the todo was created".to_string(),
        }
    }

    /// Outcome for a task that terminated without reporting (panic or abort)
    pub fn aborted(title: String) -> Self {
        let err = CreationError::ExecFailed("creation task aborted".to_string());
        Self::from_result(title, Err(err))
    }

    pub fn title(&self) -> &str {
        match self {
            CreationOutcome::Success { title, .. }
            | CreationOutcome::Error { title, .. }
            | CreationOutcome::Cancelled { title, .. } => title,
        }
    }

    pub fn status(&self) -> OutcomeStatus {
        match self {
            CreationOutcome::Success { .. } => OutcomeStatus::Success,
            CreationOutcome::Error { .. } => OutcomeStatus::Error,
            CreationOutcome::Cancelled { .. } => OutcomeStatus::Cancelled,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, CreationOutcome::Success { .. })
    }

    /// Assigned id on success
    pub fn id(&self) -> Option<i64> {
        match self {
            CreationOutcome::Success { id, .. } => Some(*id),
            _ => None,
        }
    }

    /// Failure stage on error
    pub fn error_kind(&self) -> Option<CreationErrorKind> {
        match self {
            CreationOutcome::Error { error_kind, .. } => Some(*error_kind),
            _ => None,
        }
    }
}

/// All outcomes of one batch, in submission order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    pub results: Vec<CreationOutcome>,
}

impl BatchReport {
    pub fn new(results: Vec<CreationOutcome>) -> Self {
        Self { results }
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    fn count(&self, status: OutcomeStatus) -> usize {
        self.results.iter().filter(|r| r.status() == status).count()
    }

    pub fn succeeded(&self) -> usize {
        self.count(OutcomeStatus::Success)
    }

    pub fn failed(&self) -> usize {
        self.count(OutcomeStatus::Error)
    }

    pub fn cancelled(&self) -> usize {
        self.count(OutcomeStatus::Cancelled)
    }
}
