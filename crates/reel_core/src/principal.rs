use crate::error::ProfileError;

/// The authenticated caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub user_id: String,
}

impl Principal {
    /// Construct from validated JWT claims at the server boundary.
    /// Core logic never reads raw tokens.
    pub fn from_jwt_claims(claims: &JwtClaims) -> Result<Self, ProfileError> {
        let user_id = claims
            .sub
            .clone()
            .filter(|sub| !sub.trim().is_empty())
            .ok_or_else(|| ProfileError::Unauthorized("missing sub claim".into()))?;
        Ok(Self { user_id })
    }

    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}

/// JWT claims shape expected from the identity provider.
#[derive(Debug, serde::Deserialize)]
pub struct JwtClaims {
    pub sub: Option<String>,
    pub exp: Option<u64>,
}
