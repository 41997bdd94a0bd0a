use std::cell::RefCell;
use std::rc::Rc;

use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedSender;
use futures_util::StreamExt;

use crate::core::classes::join_classes;
use crate::core::dom;
use crate::core::subscription::SubscriptionSlot;
use crate::t;

use super::assets::{DECORATION_IMAGE, TESTIMONIAL_IMAGES};
use super::delay::pick_delay;
use super::layout::{compose_columns, ColumnSpec};
use super::reveal::{RevealLatch, REVEAL_THRESHOLD};
use super::timing::{looped, ColumnTiming};

const REVIEWS_CSS: Asset = asset!("/assets/styling/reviews.css");

/// Testimonial section: decorative illustration plus the marquee grid.
#[component]
pub fn Reviews() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: REVIEWS_CSS }

        div { class: "max-width reviews",
            img {
                class: "reviews__decoration",
                aria_hidden: "true",
                alt: "",
                src: DECORATION_IMAGE,
            }
            ReviewGrid {}
        }
    }
}

/// Grid container that stays empty until it first scrolls 40% into view.
#[component]
pub fn ReviewGrid() -> Element {
    let mut revealed = use_signal(|| false);
    let columns = use_hook(|| match compose_columns(&TESTIMONIAL_IMAGES) {
        Ok(columns) => columns.to_vec(),
        Err(err) => {
            warn!("review columns unavailable: {err}");
            Vec::new()
        }
    });

    let observer_slot = use_hook(|| Rc::new(RefCell::new(SubscriptionSlot::default())));
    {
        let slot = observer_slot.clone();
        use_drop(move || slot.borrow_mut().clear());
    }

    let reveals = use_coroutine(move |mut rx: UnboundedReceiver<()>| {
        let mut revealed = revealed;
        async move {
            if rx.next().await.is_some() {
                debug!("review grid entered the viewport");
                revealed.set(true);
            }
        }
    });

    let on_mounted = {
        let slot = observer_slot.clone();
        let tx: UnboundedSender<()> = reveals.tx();
        move |evt: MountedEvent| {
            let tx = tx.clone();
            let mut latch = RevealLatch::new(REVEAL_THRESHOLD);
            let observed = dom::observe_visibility(&evt.data(), REVEAL_THRESHOLD, move |ratio| {
                if latch.observe(ratio) {
                    let _ = tx.unbounded_send(());
                }
                latch.control_flow()
            });

            match observed {
                Ok(subscription) => slot.borrow_mut().replace(subscription),
                Err(err) => {
                    warn!("viewport observer unavailable ({err}); revealing reviews immediately");
                    revealed.set(true);
                }
            }
        }
    };

    rsx! {
        div { class: "reviews__grid", onmounted: on_mounted,
            if revealed() {
                for (index, spec) in columns.iter().cloned().enumerate() {
                    ReviewColumn { key: "{index}", spec }
                }
            }
        }
    }
}

/// One endlessly scrolling column. Its duration tracks its rendered height.
#[component]
pub fn ReviewColumn(spec: ColumnSpec) -> Element {
    let timing = use_signal(|| ColumnTiming::new(spec.ms_per_pixel));

    let observer_slot = use_hook(|| Rc::new(RefCell::new(SubscriptionSlot::default())));
    {
        let slot = observer_slot.clone();
        use_drop(move || slot.borrow_mut().clear());
    }

    let resizes = use_coroutine(move |mut rx: UnboundedReceiver<u32>| {
        let mut timing = timing;
        async move {
            while let Some(height) = rx.next().await {
                if timing.with_mut(|t| t.on_resize(height)) {
                    debug!("marquee column resized to {height}px");
                }
            }
        }
    });

    let on_mounted = {
        let slot = observer_slot.clone();
        let tx: UnboundedSender<u32> = resizes.tx();
        move |evt: MountedEvent| {
            let tx = tx.clone();
            match dom::observe_height(&evt.data(), move |height| {
                let _ = tx.unbounded_send(height);
            }) {
                Ok(subscription) => slot.borrow_mut().replace(subscription),
                Err(err) => debug!("column height not observed ({err}); marquee stays idle"),
            }
        }
    };

    let style = timing.read().style();
    let column_class = join_classes(["reviews__column", "animate-marquee", spec.column_class()]);
    let items: Vec<(usize, &'static str, &'static str)> = looped(&spec.reviews)
        .map(|(index, logical, src)| (index, *src, spec.item_class.class_for(logical)))
        .collect();

    rsx! {
        div { class: "{column_class}", style: "{style}", onmounted: on_mounted,
            for (index, src, item_class) in items {
                Review { key: "{index}", src, class: item_class }
            }
        }
    }
}

#[component]
fn Review(src: &'static str, #[props(default)] class: &'static str) -> Element {
    let delay = pick_delay(&mut rand::thread_rng());
    let alt = t!("reviews-image-alt");
    let card_class = join_classes(["reviews__item", "animate-fade-in", class]);

    rsx! {
        div { class: "{card_class}", style: "animation-delay: {delay}",
            PhoneIcon {}
            img { class: "reviews__image", src: "{src}", alt: "{alt}" }
        }
    }
}

#[component]
fn PhoneIcon() -> Element {
    rsx! {
        svg {
            class: "reviews__icon",
            width: "24",
            height: "24",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            path { d: "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z" }
        }
    }
}
