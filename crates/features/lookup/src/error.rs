use std::borrow::Cow;

/// Failures of a single lookup.
#[whub_derive::whub_error]
pub enum LookupError {
    /// Malformed or out-of-range input; `message` is shown to the caller as is.
    #[error("Invalid query{}: {message}", format_context(.context))]
    InvalidQuery { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The word store could not answer.
    #[error("Word store unavailable{}: {message}", format_context(.context))]
    StorageUnavailable { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal lookup error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl LookupError {
    pub(crate) fn invalid(message: impl Into<Cow<'static, str>>) -> Self {
        Self::InvalidQuery { message: message.into(), context: None }
    }

    /// HTTP-style status the failure maps to.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::InvalidQuery { .. } => 400,
            Self::StorageUnavailable { .. } | Self::Internal { .. } => 500,
        }
    }
}
