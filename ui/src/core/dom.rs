//! Browser observer glue.
//!
//! Wraps `ResizeObserver` / `IntersectionObserver` registrations in a
//! [`Subscription`] that disconnects the observer and frees the JS callback when
//! released. Callbacks receive plain values and must not touch component state
//! directly; components forward them into a coroutine.
//!
//! Outside the browser every call returns [`ObserveError::Unsupported`] and the
//! caller picks its fallback.

use std::ops::ControlFlow;

use dioxus::prelude::MountedData;

use super::subscription::Subscription;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ObserveError {
    #[error("element observers are not available on this platform")]
    Unsupported,
    #[error("mounted node is not an HTML element")]
    NotAnElement,
    #[error("observer construction failed: {0}")]
    Js(String),
}

/// Report the element's rendered height (`offsetHeight`, px) on every resize,
/// including the initial measurement the browser delivers on `observe`.
#[cfg(target_arch = "wasm32")]
pub fn observe_height(
    mounted: &MountedData,
    mut on_height: impl FnMut(u32) + 'static,
) -> Result<Subscription, ObserveError> {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;
    use web_sys::ResizeObserver;

    let element = html_element(mounted)?;
    let target = element.clone();
    let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |_entries: js_sys::Array| {
        on_height(target.offset_height().max(0) as u32);
    });

    let observer = ResizeObserver::new(callback.as_ref().unchecked_ref()).map_err(js_error)?;
    observer.observe(&element);

    Ok(Subscription::new(move || {
        observer.disconnect();
        drop(callback);
    }))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn observe_height(
    _mounted: &MountedData,
    _on_height: impl FnMut(u32) + 'static,
) -> Result<Subscription, ObserveError> {
    Err(ObserveError::Unsupported)
}

/// Report the element's viewport intersection ratio each time it crosses
/// `threshold`. Returning `ControlFlow::Break` from `on_ratio` disconnects the
/// observer; the returned subscription still owns the callback until released.
#[cfg(target_arch = "wasm32")]
pub fn observe_visibility(
    mounted: &MountedData,
    threshold: f64,
    mut on_ratio: impl FnMut(f64) -> ControlFlow<()> + 'static,
) -> Result<Subscription, ObserveError> {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    let element = html_element(mounted)?;
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if on_ratio(entry.intersection_ratio()).is_break() {
                    observer.disconnect();
                    break;
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(js_error)?;
    observer.observe(&element);

    Ok(Subscription::new(move || {
        observer.disconnect();
        drop(callback);
    }))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn observe_visibility(
    _mounted: &MountedData,
    _threshold: f64,
    _on_ratio: impl FnMut(f64) -> ControlFlow<()> + 'static,
) -> Result<Subscription, ObserveError> {
    Err(ObserveError::Unsupported)
}

#[cfg(target_arch = "wasm32")]
fn html_element(mounted: &MountedData) -> Result<web_sys::HtmlElement, ObserveError> {
    use wasm_bindgen::JsCast;

    mounted
        .downcast::<web_sys::Element>()
        .cloned()
        .ok_or(ObserveError::NotAnElement)?
        .dyn_into::<web_sys::HtmlElement>()
        .map_err(|_| ObserveError::NotAnElement)
}

#[cfg(target_arch = "wasm32")]
fn js_error(err: wasm_bindgen::JsValue) -> ObserveError {
    ObserveError::Js(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}
