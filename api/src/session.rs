use serde::{Deserialize, Serialize};

/// A signed-in user as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl UserRecord {
    pub fn new(id: impl Into<String>, email: Option<String>) -> Self {
        Self {
            id: id.into(),
            email,
        }
    }
}

/// Per-render view of who is browsing. Derived once, never mutated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub is_authenticated: bool,
    pub is_admin: bool,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Derive the session from an optional user and the configured admin email.
    ///
    /// Admin status is an exact, case-sensitive match. A user without an email,
    /// or a site without a configured admin, never yields an admin session.
    pub fn resolve(user: Option<&UserRecord>, admin_email: Option<&str>) -> Self {
        let Some(user) = user else {
            return Self::anonymous();
        };

        let is_admin = match (user.email.as_deref(), admin_email) {
            (Some(email), Some(admin)) => !admin.is_empty() && email == admin,
            _ => false,
        };

        Self {
            is_authenticated: true,
            is_admin,
        }
    }
}
