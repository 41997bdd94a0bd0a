use dioxus::prelude::*;

use crate::core::classes::{button_class, ButtonSize, ButtonVariant};
use crate::t;

/// Fallback page for unknown routes. `path` is shown without its leading slash.
#[component]
pub fn NotFound(path: String) -> Element {
    let back_class = button_class(ButtonVariant::Ghost, ButtonSize::Default, "");

    rsx! {
        section { class: "page page-not-found max-width",
            h1 { {t!("not-found-title")} }
            p { {t!("not-found-body", path = path.clone())} }
            Link { to: "/", class: "{back_class}", {t!("not-found-back")} }
        }
    }
}
