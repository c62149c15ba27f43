//! reel_core — profile domain for the Reel backend.
//!
//! Pure domain types, the onboarding validator, injected policy objects and
//! the `ProfileStore` port. Storage adapters live in `reel_postgres`; the HTTP
//! surface lives in `reel_server`.

pub mod error;
pub mod memory;
pub mod policy;
pub mod ports;
pub mod principal;
pub mod profile;
pub mod service;
pub mod validate;

pub use error::{Field, ProfileError};
pub use profile::{OnboardingReceipt, OnboardingSubmission, Profile};
