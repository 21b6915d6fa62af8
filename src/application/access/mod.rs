/// Why a request could not be tied to a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthRefusal {
    MissingToken,
    InvalidToken,
    ExpiredToken,
}

impl AuthRefusal {
    pub fn code(&self) -> &'static str {
        match self {
            AuthRefusal::MissingToken => "AUTH_TOKEN_MISSING",
            AuthRefusal::InvalidToken => "AUTH_TOKEN_INVALID",
            AuthRefusal::ExpiredToken => "AUTH_TOKEN_EXPIRED",
        }
    }
}

impl std::fmt::Display for AuthRefusal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::error::Error for AuthRefusal {}

/// Per-request caller identity. Built by the presentation layer before handlers run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthContext {
    Authenticated { user_id: String },
    Unauthenticated { reason: AuthRefusal },
}

impl AuthContext {
    pub fn user_id(&self) -> Option<&str> {
        match self {
            AuthContext::Authenticated { user_id } => Some(user_id.as_str()),
            AuthContext::Unauthenticated { .. } => None,
        }
    }

    pub fn require_user(&self) -> Result<&str, AuthRefusal> {
        match self {
            AuthContext::Authenticated { user_id } => Ok(user_id.as_str()),
            AuthContext::Unauthenticated { reason } => Err(*reason),
        }
    }
}
