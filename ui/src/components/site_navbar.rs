use api::Session;
use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;

use super::nav_links::{nav_links, shows_divider_before, NavLink};
use crate::i18n::{self};
use crate::t;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Sticky site header with session-aware links.
///
/// Rendering is two-phase: the component suspends until `current_session`
/// resolves, then derives the link set from the resolved [`Session`]. A failed
/// lookup renders the signed-out links.
///
/// If the platform provides a `Signal<String>` language context, the locale
/// switcher writes the selected tag into it so the rest of the tree re-renders.
#[component]
pub fn SiteNavbar() -> Element {
    i18n::init();

    let session = use_server_future(api::current_session)?;
    let session = match &*session.read() {
        Some(Ok(session)) => *session,
        Some(Err(err)) => {
            warn!("session unavailable ({err}); showing signed-out navigation");
            Session::anonymous()
        }
        None => Session::anonymous(),
    };

    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    // The navbar remounts on every language switch; start from the live selection.
    let mut current_lang =
        use_signal(|| initial_selection(lang_code_ctx.map(|code| code.peek().to_string())));
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    // Reactive dependency on the global language code (if provided).
    let lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    debug!(
        "[i18n] SiteNavbar render lang={} authenticated={} admin={}",
        if lang_marker.is_empty() { "<none>" } else { lang_marker.as_str() },
        session.is_authenticated,
        session.is_admin
    );

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        if i18n::set_language(&val).is_ok() {
            current_lang.set(val.clone());
            if let Some(mut code) = lang_code_ctx {
                code.set(val);
            }
        }
    };

    let links = nav_links(session);

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        nav { id: "navbar", class: "navbar",
            // Hidden marker ensures a re-render when the global language signal changes.
            div { style: "display:none", "{lang_marker}" }
            div { class: "max-width",
                div { class: "navbar__inner",
                    Link { to: "/", class: "navbar__brand",
                        {t!("brand-case")}
                        span { class: "navbar__brand-accent", {t!("brand-cobra")} }
                    }

                    div { class: "navbar__links",
                        for link in links {
                            if shows_divider_before(session, link) {
                                div { class: "navbar__divider", aria_hidden: "true" }
                            }
                            {render_link(link)}
                        }

                        if show_switcher {
                            div { class: "navbar__locale",
                                label {
                                    class: "visually-hidden",
                                    r#for: "locale-select",
                                    {t!("nav-language-label")}
                                }
                                select {
                                    id: "locale-select",
                                    value: "{current_lang()}",
                                    oninput: on_change,
                                    { langs().iter().map(|code| {
                                        let c = code.clone();
                                        rsx!{
                                            option { key: "{c}", value: "{c}", "{c}" }
                                        }
                                    })}
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Language shown in the picker: the shared tag when the shell provides one,
/// otherwise whatever the loader serves.
fn initial_selection(shared: Option<String>) -> String {
    shared
        .filter(|tag| !tag.trim().is_empty())
        .unwrap_or_else(i18n::current_language)
}

fn render_link(link: NavLink) -> Element {
    let label = link.label();
    let class = link.class();
    let body = rsx! {
        "{label}"
        if link.has_sparkle() {
            span { class: "navbar__sparkle", aria_hidden: "true", " ✨" }
        }
        if link.has_arrow() {
            ArrowRight {}
        }
    };

    if link.is_auth_endpoint() {
        rsx! {
            a { key: "{link.href()}", href: link.href(), class: "{class}", {body} }
        }
    } else {
        rsx! {
            Link { key: "{link.href()}", to: link.href(), class: "{class}", {body} }
        }
    }
}

#[component]
fn ArrowRight() -> Element {
    rsx! {
        svg {
            class: "navbar__arrow",
            width: "20",
            height: "20",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            path { d: "M5 12h14" }
            path { d: "m12 5 7 7-7 7" }
        }
    }
}
