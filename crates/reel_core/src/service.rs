//! ProfileService — the operations exposed over HTTP.
//!
//! Takes the store via `Arc<dyn ProfileStore>` so the same logic runs against
//! Postgres or the in-memory store.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;

use crate::{
    error::ProfileError,
    ports::{InsertOutcome, ProfileStore},
    principal::Principal,
    profile::{OnboardingReceipt, OnboardingSubmission, Profile},
    validate::OnboardingValidator,
};

pub type Result<T> = std::result::Result<T, ProfileError>;

#[async_trait]
pub trait ProfileService: Send + Sync {
    /// The caller's own profile. `OnboardingIncomplete` when none exists.
    async fn get_me(&self, principal: &Principal) -> Result<Profile>;

    /// Validate and persist the caller's profile. At most once per user.
    async fn complete_onboarding(
        &self,
        principal: &Principal,
        submission: OnboardingSubmission,
    ) -> Result<OnboardingReceipt>;

    /// Declared but not implemented: always `NotImplemented`.
    async fn edit_me(&self, principal: &Principal, payload: Value) -> Result<Profile>;
}

pub struct ProfileServiceImpl {
    store: Arc<dyn ProfileStore>,
    validator: OnboardingValidator,
}

impl ProfileServiceImpl {
    pub fn new(store: Arc<dyn ProfileStore>, validator: OnboardingValidator) -> Self {
        Self { store, validator }
    }

    async fn onboard(
        &self,
        principal: &Principal,
        submission: &OnboardingSubmission,
    ) -> Result<Profile> {
        let screened = self.validator.screen(submission)?;

        if self
            .store
            .find_by_username(&screened.username)
            .await?
            .is_some()
        {
            return Err(ProfileError::UsernameTaken);
        }

        let draft = self.validator.finish(screened)?;

        if self.store.find_by_id(&principal.user_id).await?.is_some() {
            return Err(ProfileError::AlreadyOnboarded);
        }

        let profile = draft.into_profile(principal.user_id.clone(), Utc::now());
        match self.store.insert_if_absent(&profile).await? {
            InsertOutcome::Inserted => Ok(profile),
            InsertOutcome::IdExists => Err(ProfileError::AlreadyOnboarded),
            InsertOutcome::UsernameTaken => Err(ProfileError::UsernameTaken),
        }
    }
}

#[async_trait]
impl ProfileService for ProfileServiceImpl {
    async fn get_me(&self, principal: &Principal) -> Result<Profile> {
        self.store
            .find_by_id(&principal.user_id)
            .await?
            .ok_or(ProfileError::OnboardingIncomplete)
    }

    async fn complete_onboarding(
        &self,
        principal: &Principal,
        submission: OnboardingSubmission,
    ) -> Result<OnboardingReceipt> {
        match self.onboard(principal, &submission).await {
            Ok(profile) => {
                tracing::info!(
                    user_id = %principal.user_id,
                    username = %profile.username,
                    interests = profile.interests.len(),
                    "onboarding completed"
                );
                Ok(OnboardingReceipt::completed())
            }
            Err(err) if err.is_rejection() => {
                tracing::debug!(
                    user_id = %principal.user_id,
                    code = err.code(),
                    "onboarding rejected: {err}"
                );
                Err(err)
            }
            Err(err) => Err(err),
        }
    }

    async fn edit_me(&self, principal: &Principal, payload: Value) -> Result<Profile> {
        tracing::debug!(user_id = %principal.user_id, %payload, "edit_me called");
        Err(ProfileError::NotImplemented)
    }
}
