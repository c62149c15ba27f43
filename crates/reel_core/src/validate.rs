//! Onboarding validation.
//!
//! Checks run in a fixed order and the first failure wins. The username
//! uniqueness lookup sits between the username and name checks, so the
//! validator is split into two pure stages around it:
//!
//! 1. [`OnboardingValidator::screen`] — presence, types, username shape and
//!    content.
//! 2. (caller) username-taken lookup against the store.
//! 3. [`OnboardingValidator::finish`] — name shape and content, storable
//!    text, interest filtering.
//!
//! Lengths are counted in UTF-16 code units, so a character outside the
//! Basic Multilingual Plane counts as two.

use std::sync::{Arc, LazyLock};

use chrono::{DateTime, Utc};
use regex::Regex;
use serde_json::Value;

use crate::error::{Field, ProfileError};
use crate::policy::{ContentPolicy, InterestCatalog, WordBlacklist};
use crate::profile::{OnboardingSubmission, Profile};

static USERNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9_.]+$").unwrap());

const MIN_LEN: usize = 3;
const MAX_LEN: usize = 50;

pub type Result<T> = std::result::Result<T, ProfileError>;

/// Output of the first stage. Borrowed from the submission.
#[derive(Debug)]
pub struct ScreenedSubmission<'a> {
    /// Lowercased; this is the key used for the uniqueness lookup.
    pub username: String,
    name: &'a str,
    bio: &'a str,
    avatar: Option<&'a str>,
    interests: &'a [Value],
}

/// Fully validated profile fields, ready to be bound to a user id.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileDraft {
    pub username: String,
    pub name: String,
    pub avatar: Option<String>,
    pub bio: String,
    pub interests: Vec<String>,
}

impl ProfileDraft {
    pub fn into_profile(self, id: impl Into<String>, created_at: DateTime<Utc>) -> Profile {
        Profile {
            id: id.into(),
            username: self.username,
            name: self.name,
            avatar: self.avatar,
            bio: self.bio,
            interests: self.interests,
            created_at,
        }
    }
}

#[derive(Clone)]
pub struct OnboardingValidator {
    interests: InterestCatalog,
    content: Arc<dyn ContentPolicy>,
}

impl Default for OnboardingValidator {
    fn default() -> Self {
        Self::new(InterestCatalog::default(), Arc::new(WordBlacklist::default()))
    }
}

impl OnboardingValidator {
    pub fn new(interests: InterestCatalog, content: Arc<dyn ContentPolicy>) -> Self {
        Self { interests, content }
    }

    pub fn interests(&self) -> &InterestCatalog {
        &self.interests
    }

    pub fn screen<'a>(&self, sub: &'a OnboardingSubmission) -> Result<ScreenedSubmission<'a>> {
        if !is_present(sub.username.as_ref()) {
            return Err(ProfileError::MissingField(Field::Username));
        }
        if !is_present(sub.name.as_ref()) {
            return Err(ProfileError::MissingField(Field::Name));
        }

        let username = as_str(sub.username.as_ref(), Field::Username)?;
        let name = as_str(sub.name.as_ref(), Field::Name)?;
        let bio = as_str(sub.bio.as_ref(), Field::Bio)?;
        let interests = sub
            .interests
            .as_ref()
            .and_then(Value::as_array)
            .ok_or(ProfileError::WrongType(Field::Interests))?;

        if !length_ok(username) {
            return Err(ProfileError::InvalidLength(Field::Username));
        }
        if !USERNAME_RE.is_match(username) {
            return Err(ProfileError::InvalidUsernameCharset);
        }
        if self.content.has_bad_words(username) {
            return Err(ProfileError::Blacklisted(Field::Username));
        }

        Ok(ScreenedSubmission {
            username: username.to_lowercase(),
            name,
            bio,
            // Avatar upload is not handled here; non-string values are dropped.
            avatar: sub.avatar.as_ref().and_then(Value::as_str),
            interests,
        })
    }

    pub fn finish(&self, screened: ScreenedSubmission<'_>) -> Result<ProfileDraft> {
        if !length_ok(screened.name) {
            return Err(ProfileError::InvalidLength(Field::Name));
        }
        if self.content.has_bad_words(screened.name) {
            return Err(ProfileError::Blacklisted(Field::Name));
        }
        for (field, text) in [
            (Field::Name, Some(screened.name)),
            (Field::Bio, Some(screened.bio)),
            (Field::Avatar, screened.avatar),
        ] {
            if text.is_some_and(|t| t.contains('\0')) {
                return Err(ProfileError::InvalidCharacters(field));
            }
        }

        Ok(ProfileDraft {
            username: screened.username,
            name: screened.name.to_owned(),
            avatar: screened.avatar.map(str::to_owned),
            bio: screened.bio.to_owned(),
            interests: self.interests.filter(screened.interests),
        })
    }
}

/// JSON truthiness: absent, `null`, `false`, `0` and `""` are not present.
fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Number(n)) => n.as_f64() != Some(0.0),
        Some(_) => true,
    }
}

fn as_str(value: Option<&Value>, field: Field) -> Result<&str> {
    value
        .and_then(Value::as_str)
        .ok_or(ProfileError::WrongType(field))
}

fn length_ok(s: &str) -> bool {
    (MIN_LEN..=MAX_LEN).contains(&s.encode_utf16().count())
}
