//! Seam to the external identity provider.
//!
//! The hosting server registers one [`IdentityProvider`] at startup (before
//! launching the app). `current_session` asks it for the signed-in user and
//! derives the [`Session`] from the answer.

use std::sync::Arc;

use async_trait::async_trait;
use dioxus::logger::tracing::warn;
use once_cell::sync::OnceCell;

use crate::config::SiteConfig;
use crate::session::{Session, UserRecord};

#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("identity provider unreachable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// The user bound to the current request, or `None` when signed out.
    async fn current_user(&self) -> Result<Option<UserRecord>, IdentityError>;
}

static PROVIDER: OnceCell<Arc<dyn IdentityProvider>> = OnceCell::new();

/// Install the process-wide provider. Later registrations are ignored.
pub fn register_provider(provider: Arc<dyn IdentityProvider>) {
    if PROVIDER.set(provider).is_err() {
        warn!("identity provider already registered; ignoring replacement");
    }
}

pub fn provider() -> Option<Arc<dyn IdentityProvider>> {
    PROVIDER.get().cloned()
}

/// Session for the current request from the registered provider; anonymous
/// when none is registered.
pub async fn registered_session(config: &SiteConfig) -> Session {
    match provider() {
        Some(provider) => resolve_session(provider.as_ref(), config).await,
        None => Session::anonymous(),
    }
}

/// Ask `provider` for the user and derive the session.
/// Provider failures degrade to the anonymous session.
pub async fn resolve_session(provider: &dyn IdentityProvider, config: &SiteConfig) -> Session {
    match provider.current_user().await {
        Ok(user) => Session::resolve(user.as_ref(), config.admin_email.as_deref()),
        Err(err) => {
            warn!("session lookup failed ({err}); rendering as signed out");
            Session::anonymous()
        }
    }
}
