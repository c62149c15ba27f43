//! Bearer-token authentication.
//!
//! Validates an HS256 JWT from the `Authorization` header and inserts the
//! resulting [`Principal`] into request extensions for handlers.

use axum::{
    extract::Request,
    http::header::AUTHORIZATION,
    middleware::Next,
    response::{IntoResponse, Response},
    Extension,
};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use reel_core::principal::{JwtClaims, Principal};
use reel_core::ProfileError;

use crate::error::AppError;

#[derive(Clone)]
pub struct JwtConfig {
    key: DecodingKey,
    validation: Validation,
}

impl JwtConfig {
    pub fn from_secret(secret: &[u8]) -> Self {
        Self {
            key: DecodingKey::from_secret(secret),
            validation: Validation::new(Algorithm::HS256),
        }
    }

    pub fn principal_from_token(&self, token: &str) -> Result<Principal, ProfileError> {
        let data = decode::<JwtClaims>(token, &self.key, &self.validation)
            .map_err(|e| ProfileError::Unauthorized(format!("invalid token: {e}")))?;
        Principal::from_jwt_claims(&data.claims)
    }
}

fn bearer_token(req: &Request) -> Result<&str, ProfileError> {
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .ok_or_else(|| ProfileError::Unauthorized("missing bearer token".into()))?;
    header
        .to_str()
        .ok()
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ProfileError::Unauthorized("malformed authorization header".into()))
}

pub async fn jwt_auth(
    Extension(config): Extension<JwtConfig>,
    mut req: Request,
    next: Next,
) -> Response {
    let principal = match bearer_token(&req).and_then(|t| config.principal_from_token(t)) {
        Ok(p) => p,
        Err(e) => {
            tracing::debug!(path = %req.uri().path(), "rejected request: {e}");
            return AppError::from(e).into_response();
        }
    };
    req.extensions_mut().insert(principal);
    next.run(req).await
}
