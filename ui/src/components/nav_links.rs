//! Session → navigation link mapping.

use api::Session;

use crate::core::classes::{button_class, ButtonSize, ButtonVariant};
use crate::t;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavLink {
    SignUp,
    Login,
    SignOut,
    Dashboard,
    CreateCase,
}

impl NavLink {
    pub fn href(self) -> &'static str {
        match self {
            NavLink::SignUp => "/api/auth/register",
            NavLink::Login => "/api/auth/login",
            NavLink::SignOut => "/api/auth/logout",
            NavLink::Dashboard => "/dashboard",
            NavLink::CreateCase => "/configure/upload",
        }
    }

    /// Auth endpoints belong to the identity provider and need a full page load.
    pub fn is_auth_endpoint(self) -> bool {
        self.href().starts_with("/api/auth/")
    }

    pub fn label(self) -> String {
        match self {
            NavLink::SignUp => t!("nav-sign-up"),
            NavLink::Login => t!("nav-login"),
            NavLink::SignOut => t!("nav-sign-out"),
            NavLink::Dashboard => t!("nav-dashboard"),
            NavLink::CreateCase => t!("nav-create-case"),
        }
    }

    pub fn has_arrow(self) -> bool {
        matches!(self, NavLink::Login | NavLink::CreateCase)
    }

    pub fn has_sparkle(self) -> bool {
        matches!(self, NavLink::Dashboard)
    }

    pub fn class(self) -> String {
        match self {
            NavLink::CreateCase => {
                button_class(ButtonVariant::Primary, ButtonSize::Sm, "navbar__cta")
            }
            _ => button_class(ButtonVariant::Ghost, ButtonSize::Sm, "navbar__link"),
        }
    }
}

/// Links shown for `session`, in display order.
pub fn nav_links(session: Session) -> Vec<NavLink> {
    match (session.is_authenticated, session.is_admin) {
        (false, _) => vec![NavLink::SignUp, NavLink::Login, NavLink::CreateCase],
        (true, false) => vec![NavLink::SignOut, NavLink::CreateCase],
        (true, true) => vec![NavLink::SignOut, NavLink::Dashboard, NavLink::CreateCase],
    }
}

/// Signed-out visitors get a divider between the auth links and the call to action.
pub fn shows_divider_before(session: Session, link: NavLink) -> bool {
    !session.is_authenticated && link == NavLink::CreateCase
}
