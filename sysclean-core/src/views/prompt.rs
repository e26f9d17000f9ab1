//! Confirmation prompts

/// A destructive action waiting for the user's confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation<A> {
    pub message: String,
    pub action: A,
}

impl<A> Confirmation<A> {
    pub fn new(message: impl Into<String>, action: A) -> Self {
        Self {
            message: message.into(),
            action,
        }
    }
}
