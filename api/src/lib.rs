//! Server-facing pieces shared by every casecobra front end: the resolved
//! [`Session`], site configuration and the `current_session` server function.

use dioxus::prelude::*;

pub mod config;
pub mod identity;
mod session;

pub use session::{Session, UserRecord};

/// Resolve the session for the current request.
///
/// Identity lookups never surface as errors here: a failing provider degrades
/// to the anonymous session so the navbar always has a value to render.
#[server]
pub async fn current_session() -> Result<Session, ServerFnError> {
    let config = config::SiteConfig::from_env();
    Ok(identity::registered_session(&config).await)
}
