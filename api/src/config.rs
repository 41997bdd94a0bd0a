//! Site configuration read from the process environment.
//!
//! Server builds load a `.env` file (if present) before reading variables, so
//! local development can keep `ADMIN_EMAIL` out of the shell profile.

/// Environment variable holding the admin account's email.
pub const ADMIN_EMAIL_VAR: &str = "ADMIN_EMAIL";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteConfig {
    pub admin_email: Option<String>,
}

impl SiteConfig {
    pub fn from_env() -> Self {
        #[cfg(feature = "server")]
        load_dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let admin_email = lookup(ADMIN_EMAIL_VAR)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());
        Self { admin_email }
    }
}

#[cfg(feature = "server")]
fn load_dotenv() {
    use std::sync::Once;
    static DOTENV: Once = Once::new();
    DOTENV.call_once(|| {
        // A missing .env file is the normal production case.
        let _ = dotenv::dotenv();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_admin_email() {
        let config = SiteConfig::from_lookup(|key| {
            (key == ADMIN_EMAIL_VAR).then(|| " owner@casecobra.shop ".to_string())
        });
        assert_eq!(config.admin_email.as_deref(), Some("owner@casecobra.shop"));
    }

    #[test]
    fn blank_admin_email_is_unset() {
        let config = SiteConfig::from_lookup(|_| Some("   ".to_string()));
        assert_eq!(config, SiteConfig::default());
    }
}
