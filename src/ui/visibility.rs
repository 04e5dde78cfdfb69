//! Browser binding for viewport visibility
//!
//! Provides:
//! - `BrowserViewportObserver`, a [`ViewportObserver`] backed by `IntersectionObserver`
//! - `use_viewport_visibility`, a hook that tracks a `NodeRef` and exposes a signal

use leptos::html::Div;
use leptos::prelude::*;

use crate::core::VisibilityOptions;

#[cfg(feature = "hydrate")]
pub use browser::BrowserViewportObserver;

#[cfg(feature = "hydrate")]
mod browser {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::JsValue;
    use wasm_bindgen::closure::Closure;

    use crate::core::{
        Intersection, IntersectionCallback, Observation, ObserverError, ViewportObserver,
        VisibilityOptions,
    };

    /// `IntersectionObserver` with one observer per observed element
    #[derive(Clone, Copy, Debug, Default)]
    pub struct BrowserViewportObserver;

    impl BrowserViewportObserver {
        fn is_supported() -> bool {
            web_sys::window()
                .map(|window| {
                    js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver"))
                        .unwrap_or(false)
                })
                .unwrap_or(false)
        }
    }

    impl ViewportObserver for BrowserViewportObserver {
        type Region = web_sys::Element;

        fn observe(
            &self,
            region: &web_sys::Element,
            options: &VisibilityOptions,
            on_change: IntersectionCallback,
        ) -> Result<Observation, ObserverError> {
            if !Self::is_supported() {
                return Err(ObserverError::Unsupported);
            }

            let handler = Closure::<dyn Fn(js_sys::Array)>::new(move |entries: js_sys::Array| {
                for entry in entries.iter() {
                    let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                    on_change(Intersection {
                        ratio: entry.intersection_ratio(),
                        intersecting: entry.is_intersecting(),
                    });
                }
            });

            let init = web_sys::IntersectionObserverInit::new();
            init.set_threshold(&JsValue::from_f64(options.threshold));
            init.set_root_margin(&options.root_margin);

            let observer = web_sys::IntersectionObserver::new_with_options(
                handler.as_ref().unchecked_ref(),
                &init,
            )
            .map_err(|err| ObserverError::Registration(format!("{err:?}")))?;
            observer.observe(region);

            Ok(Observation::new(move || {
                observer.disconnect();
                drop(handler);
            }))
        }
    }
}

/// Track whether the element behind `node_ref` has entered the viewport.
///
/// The observer is registered once the element is mounted and released when
/// the owning component is cleaned up. On the server the signal stays `false`.
pub fn use_viewport_visibility(node_ref: NodeRef<Div>, options: VisibilityOptions) -> ReadSignal<bool> {
    let (visible, set_visible) = signal(false);

    #[cfg(feature = "hydrate")]
    {
        use crate::core::{TrackedRegion, track_visibility};

        let tracked = StoredValue::new_local(None::<TrackedRegion>);

        Effect::new(move |_| {
            let Some(div) = node_ref.get() else {
                return;
            };
            if tracked.with_value(Option::is_some) {
                return;
            }
            let element: web_sys::Element = div.into();
            let region = track_visibility(&BrowserViewportObserver, &element, &options, move |v| {
                let _ = set_visible.try_set(v);
            });
            tracked.set_value(Some(region));
        });

        on_cleanup(move || {
            // Dropping the region detaches the tracker and disconnects the observer
            let _ = tracked.try_update_value(Option::take);
        });
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (node_ref, options, set_visible);
    }

    visible
}
