use leptos::html::Div;
use leptos::prelude::*;

use crate::core::{RevealState, VisibilityOptions, region_class};
use crate::ui::visibility::use_viewport_visibility;

/// Wraps content that fades and slides in once it scrolls into view
#[component]
pub fn AnimatedRegion(
    /// Extra classes for the wrapper (layout, sizing)
    #[prop(optional)]
    class: &'static str,
    /// Threshold and reveal policy; defaults to 10% visible, sticky
    #[prop(optional)]
    options: Option<VisibilityOptions>,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<Div>::new();
    let visible = use_viewport_visibility(node_ref, options.unwrap_or_default());

    view! {
        <div
            node_ref=node_ref
            class=move || region_class(visible.get(), class)
            data-reveal=move || RevealState::from(visible.get()).as_str()
        >
            {children()}
        </div>
    }
}
