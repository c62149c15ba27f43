//! Profile handlers.
//!
//! GET   /profiles/me          — caller's profile
//! POST  /profiles/onboarding  — create the caller's profile (once)
//! PATCH /profiles/me          — declared, always NOT_IMPLEMENTED

use std::sync::Arc;

use axum::{extract::rejection::JsonRejection, Extension, Json};
use reel_core::{
    principal::Principal, service::ProfileService, OnboardingReceipt, OnboardingSubmission,
    Profile,
};
use serde_json::Value;

use crate::error::AppError;

pub async fn get_me(
    Extension(principal): Extension<Principal>,
    Extension(service): Extension<Arc<dyn ProfileService>>,
) -> Result<Json<Profile>, AppError> {
    let profile = service.get_me(&principal).await?;
    Ok(Json(profile))
}

pub async fn complete_onboarding(
    Extension(principal): Extension<Principal>,
    Extension(service): Extension<Arc<dyn ProfileService>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<OnboardingReceipt>, AppError> {
    let Json(body) = payload.map_err(|e| AppError::MalformedPayload(e.body_text()))?;
    let submission = OnboardingSubmission::from_body(body).ok_or_else(|| {
        AppError::MalformedPayload("Expected a JSON object or array.".into())
    })?;
    let receipt = service.complete_onboarding(&principal, submission).await?;
    Ok(Json(receipt))
}

pub async fn edit_me(
    Extension(principal): Extension<Principal>,
    Extension(service): Extension<Arc<dyn ProfileService>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Profile>, AppError> {
    // Any body is accepted, including none at all.
    let payload = payload.map(|Json(v)| v).unwrap_or(Value::Null);
    let profile = service.edit_me(&principal, payload).await?;
    Ok(Json(profile))
}
