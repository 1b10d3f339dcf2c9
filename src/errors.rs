use thiserror::Error;

/// Discriminant of a [`ValidationError`], handy for matching without the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    InvalidAmount,
    MissingDescription,
    InvalidKind,
}

/// Recoverable, user-correctable rejection of a submitted movement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("amount must be greater than 0")]
    InvalidAmount,
    #[error("description is required")]
    MissingDescription,
    #[error("kind is invalid")]
    InvalidKind,
}

impl ValidationError {
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            ValidationError::InvalidAmount => ValidationErrorKind::InvalidAmount,
            ValidationError::MissingDescription => ValidationErrorKind::MissingDescription,
            ValidationError::InvalidKind => ValidationErrorKind::InvalidKind,
        }
    }

    /// User-facing message, identical to the `Display` output.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Error type that captures failures outside the validation path.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Config(String),
}
