use thiserror::Error;

/// Errors surfaced by taskline operations.
///
/// The identifier variants keep their messages fixed so callers can match on them; the
/// offending input travels in the payload and is available through
/// [`TasklineError::detail`].
#[derive(Error, Debug)]
pub enum TasklineError {
    #[error("Invalid Input ID Range")]
    IdentifierSyntax(String),

    #[error("Invalid InputIDs")]
    InvalidIdentifiers(Vec<u64>),

    #[error("Priority can only be 1, 2 or 3 (got {0:?})")]
    InvalidPriority(String),

    #[error("Unable to parse date: {0}")]
    InvalidDate(String),

    #[error("Description cannot be empty")]
    EmptyDescription,

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

impl TasklineError {
    /// The rejected identifier input, for the variants whose message omits it.
    pub fn detail(&self) -> Option<String> {
        match self {
            TasklineError::IdentifierSyntax(term) => Some(term.clone()),
            TasklineError::InvalidIdentifiers(ids) => Some(join_ids(ids)),
            _ => None,
        }
    }
}

fn join_ids(ids: &[u64]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, TasklineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_messages_are_fixed() {
        assert_eq!(
            TasklineError::IdentifierSyntax("1-b".into()).to_string(),
            "Invalid Input ID Range"
        );
        assert_eq!(
            TasklineError::InvalidIdentifiers(vec![5, 7]).to_string(),
            "Invalid InputIDs"
        );
    }

    #[test]
    fn detail_carries_the_rejected_input() {
        assert_eq!(
            TasklineError::IdentifierSyntax("1-b".into()).detail().as_deref(),
            Some("1-b")
        );
        assert_eq!(
            TasklineError::InvalidIdentifiers(vec![5, 7]).detail().as_deref(),
            Some("5, 7")
        );
        assert!(TasklineError::EmptyDescription.detail().is_none());
    }

    #[test]
    fn other_messages_include_their_input() {
        assert_eq!(
            TasklineError::InvalidDate("someday".into()).to_string(),
            "Unable to parse date: someday"
        );
    }
}
