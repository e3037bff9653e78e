use serde::Serialize;
use uuid::Uuid;

/// A single field-level validation problem.
///
/// `path` is the offending field name (`"year"`, `"genre"`, ...); the empty
/// string denotes an issue with the payload as a whole (e.g. not an object).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    pub path: String,
    pub message: String,
}

impl FieldIssue {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// One or more field-level validation failures, collected in a single pass.
///
/// Built directly as structured data — never by parsing a formatted message
/// back apart.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("validation failed with {} issue(s)", .issues.len())]
pub struct ValidationError {
    pub issues: Vec<FieldIssue>,
}

impl ValidationError {
    pub fn new(issues: Vec<FieldIssue>) -> Self {
        Self { issues }
    }

    /// Whether any issue names the given field.
    pub fn mentions(&self, path: &str) -> bool {
        self.issues.iter().any(|i| i.path == path)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} with id {id} does not exist")]
    NotFound { entity: &'static str, id: Uuid },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
