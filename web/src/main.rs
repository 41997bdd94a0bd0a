use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use ui::components::SiteNavbar;
use ui::views::{Home, NotFound};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Shared theme (ui/assets/theme/main.css), embedded so the shell has no asset of its own.

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Global reactive language code; SiteNavbar writes it on language selection.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    use_hook(|| info!("casecobra web v{} starting", env!("CARGO_PKG_VERSION")));

    rsx! {
        document::Title { "casecobra" }
        document::Style { "{MAIN_CSS_INLINE}" }

        // Keyed wrapper forces a full remount when the language changes.
        div {
            key: "{lang_code()}",
            Router::<Route> {}
        }
    }
}

/// Web layout: the shared navbar above the routed page.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        SiteNavbar {}
        Outlet::<Route> {}
    }
}

#[component]
fn PageNotFound(segments: Vec<String>) -> Element {
    rsx! {
        NotFound { path: segments.join("/") }
    }
}
