use std::fmt::Display;

use error_stack::Context;
use uuid::Uuid;

use crate::entity::Book;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum KernelError {
    NotFound,
    InsufficientCopies,
    InvalidState,
    Timeout,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::NotFound => write!(f, "Referenced entity does not exist"),
            KernelError::InsufficientCopies => write!(f, "No available copies left"),
            KernelError::InvalidState => write!(f, "Operation not allowed in the current state"),
            KernelError::Timeout => write!(f, "Process timed out"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}

/// Attached to `InsufficientCopies`/`NotFound` reports so callers can tell
/// which book made a multi-book operation infeasible.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RejectedBook {
    pub id: Uuid,
    pub title: String,
}

impl From<&Book> for RejectedBook {
    fn from(value: &Book) -> Self {
        Self {
            id: *value.id().as_ref(),
            title: value.title().as_ref().to_string(),
        }
    }
}

impl Display for RejectedBook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "book {} ({})", self.title, self.id)
    }
}
