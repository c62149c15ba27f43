//! reel_server — REST surface for Reel profiles.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod startup;
