//! Shared UI crate for casecobra: components, layout logic, i18n and styles.

pub mod core;
pub mod i18n;
pub mod reviews;
pub mod views;

pub mod components {
    // Session → link mapping (components/nav_links.rs)
    pub mod nav_links;
    pub use nav_links::{nav_links, NavLink};

    // Session-aware site header (components/site_navbar.rs)
    mod site_navbar;
    pub use site_navbar::SiteNavbar;
}
