use thiserror::Error;

/// Error types for queue resolution and polling.
///
/// Only failures that stop the tail are represented here. A body that is
/// not JSON, or a delete that fails, is handled in place and never becomes
/// an `SqsTailError`.
#[derive(Debug, Error)]
pub enum SqsTailError {
    /// No queue name starts with the requested prefix.
    #[error("no queues found matching '{prefix}'")]
    NotFound { prefix: String },

    /// More than one queue starts with the requested prefix.
    ///
    /// `limit_reached` is set when the listing returned as many URLs as it
    /// was allowed to, so more matches may exist beyond `candidates`.
    #[error(
        "found {} queues matching '{prefix}', please narrow down your search by providing a specific name",
        candidates.len()
    )]
    Ambiguous {
        prefix: String,
        candidates: Vec<String>,
        limit_reached: bool,
    },

    /// A call to the queue service failed.
    #[error("failed to {operation}: {message}")]
    Transport {
        operation: &'static str,
        message: String,
    },
}

impl SqsTailError {
    /// Creates a `Transport` error for the named operation.
    pub fn transport(operation: &'static str, message: impl Into<String>) -> Self {
        SqsTailError::Transport {
            operation,
            message: message.into(),
        }
    }
}
