use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::reviews::Reviews;

#[component]
pub fn Home() -> Element {
    // Subscribe to the global language code (if provided) so we re-render on change.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_current = lang_code.as_ref().map(|s| s()).unwrap_or_default();
    debug!("[i18n] Home render (lang_marker={lang_current})");

    rsx! {
        section { class: "page page-home",
            div { class: "max-width page-home__hero",
                h1 { {crate::t!("home-title")} }
                p { class: "page-home__tagline", {crate::t!("home-tagline")} }
            }
        }

        section { class: "page-home__reviews",
            h2 { class: "page-home__reviews-heading", {crate::t!("home-reviews-heading")} }
            Reviews {}
        }
    }
}
