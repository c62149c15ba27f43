use thiserror::Error;

/// Submission fields that can be named in a rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Username,
    Name,
    Avatar,
    Bio,
    Interests,
}

impl Field {
    /// Human label used at the start of rejection messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Username => "Username",
            Self::Name => "Full name",
            Self::Avatar => "Avatar",
            Self::Bio => "Bio",
            Self::Interests => "Interests",
        }
    }

    fn expected_type(self) -> &'static str {
        match self {
            Self::Interests => "an array",
            _ => "a string",
        }
    }
}

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("{} is required.", .0.label())]
    MissingField(Field),

    #[error("{} must be {}.", .0.label(), .0.expected_type())]
    WrongType(Field),

    #[error("{} must be between 3 and 50 characters long.", .0.label())]
    InvalidLength(Field),

    #[error("Username must include only lower-case letters, numbers, _ or .")]
    InvalidUsernameCharset,

    #[error("{} includes a blacklisted word.", .0.label())]
    Blacklisted(Field),

    /// Text the store cannot hold (NUL bytes).
    #[error("{} contains invalid characters.", .0.label())]
    InvalidCharacters(Field),

    #[error("Username already taken.")]
    UsernameTaken,

    #[error("Onboarding already completed.")]
    AlreadyOnboarded,

    #[error("Onboarding not completed.")]
    OnboardingIncomplete,

    #[error("Not implemented.")]
    NotImplemented,

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("internal: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ProfileError {
    pub fn http_status(&self) -> u16 {
        match self {
            Self::Unauthorized(_) => 401,
            Self::Internal(_) => 500,
            _ => 400,
        }
    }

    /// Machine-readable code returned alongside the message.
    ///
    /// `CONBOARDING_ALREADY_COMPLETED` keeps its historical spelling; clients
    /// match on it.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingField(_) => "MISSING_FIELD",
            Self::WrongType(_) => "INVALID_TYPE",
            Self::InvalidLength(_) => "INVALID_LENGTH",
            Self::InvalidUsernameCharset => "INVALID_CHARSET",
            Self::Blacklisted(_) => "BLACKLISTED_WORD",
            Self::InvalidCharacters(_) => "INVALID_CHARACTERS",
            Self::UsernameTaken => "USERNAME_TAKEN",
            Self::AlreadyOnboarded => "CONBOARDING_ALREADY_COMPLETED",
            Self::OnboardingIncomplete => "COMPLETE_ONBOARDING",
            Self::NotImplemented => "NOT_IMPLEMENTED",
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::Internal(_) => "INTERNAL",
        }
    }

    /// True for outcomes caused by caller input or account state rather than
    /// by the service itself.
    pub fn is_rejection(&self) -> bool {
        !matches!(self, Self::Internal(_))
    }
}
