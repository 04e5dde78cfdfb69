//! Page header with scroll-reactive background and a mobile menu

use leptos::prelude::*;

use crate::core::{HeaderEvent, HeaderState, MenuIcon, PageContent};
use crate::ui::icon::{Icon, IconKind};

#[cfg(feature = "hydrate")]
mod listeners {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    /// `change` listener on a media query, removed on drop
    pub struct MediaQueryListener {
        query: web_sys::MediaQueryList,
        handler: Closure<dyn Fn(web_sys::MediaQueryListEvent)>,
    }

    impl MediaQueryListener {
        /// Returns the listener and whether the query matches right now
        pub fn new(
            query: &str,
            on_change: impl Fn(bool) + 'static,
        ) -> Option<(Self, bool)> {
            let window = web_sys::window()?;
            let query = window.match_media(query).ok().flatten()?;
            let handler = Closure::<dyn Fn(web_sys::MediaQueryListEvent)>::new(
                move |e: web_sys::MediaQueryListEvent| on_change(e.matches()),
            );
            query
                .add_event_listener_with_callback("change", handler.as_ref().unchecked_ref())
                .ok()?;
            let matches = query.matches();
            Some((Self { query, handler }, matches))
        }
    }

    impl Drop for MediaQueryListener {
        fn drop(&mut self) {
            let _ = self.query.remove_event_listener_with_callback(
                "change",
                self.handler.as_ref().unchecked_ref(),
            );
        }
    }
}

/// Fixed page header
#[component]
pub fn PageHeader(content: &'static PageContent) -> impl IntoView {
    let state = RwSignal::new(HeaderState::default());
    let presentation = Memo::new(move |_| state.get().presentation());

    // Only notify subscribers when the state actually changes
    let dispatch = move |event: HeaderEvent| {
        let current = state.get_untracked();
        let next = current.next(event);
        if next != current {
            state.set(next);
        }
    };

    #[cfg(feature = "hydrate")]
    {
        use leptos::ev::scroll;

        use crate::core::WIDE_LAYOUT_QUERY;
        use listeners::MediaQueryListener;

        let current_offset = || window().scroll_y().unwrap_or(0.0);

        Effect::new(move |_| {
            dispatch(HeaderEvent::Scrolled(current_offset()));

            let scroll_handle = window_event_listener(scroll, move |_| {
                dispatch(HeaderEvent::Scrolled(current_offset()));
            });

            let layout = StoredValue::new_local(None::<MediaQueryListener>);
            if let Some((listener, wide)) = MediaQueryListener::new(WIDE_LAYOUT_QUERY, move |wide| {
                dispatch(HeaderEvent::LayoutChanged { compact: !wide });
            }) {
                dispatch(HeaderEvent::LayoutChanged { compact: !wide });
                layout.set_value(Some(listener));
            }

            on_cleanup(move || {
                scroll_handle.remove();
                let _ = layout.try_update_value(Option::take);
            });
        });
    }

    let nav_link = move |class: &'static str, closes_menu: bool| {
        content
            .nav
            .iter()
            .map(move |item| {
                view! {
                    <li>
                        <a
                            href=item.href()
                            class=class
                            on:click=move |_| {
                                if closes_menu {
                                    dispatch(HeaderEvent::NavSelected);
                                }
                            }
                        >
                            {item.label}
                        </a>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <header class=move || presentation.get().header_class>
            <div class="container mx-auto flex justify-between items-center p-4">
                <h1 class="text-2xl md:text-3xl font-bold text-white">{content.brand}</h1>

                // Desktop navigation
                <nav class="hidden md:block">
                    <ul class="flex space-x-6">
                        {nav_link("text-white hover:text-purple-300 transition duration-300", false)}
                    </ul>
                </nav>

                // Mobile menu button
                <button
                    class="md:hidden text-white"
                    on:click=move |_| dispatch(HeaderEvent::ToggleMenu)
                    aria-label=content.menu_toggle_label
                    aria-expanded=move || presentation.get().show_mobile_nav.to_string()
                >
                    {move || match presentation.get().toggle_icon {
                        MenuIcon::Close => view! { <Icon kind=IconKind::X /> },
                        MenuIcon::Menu => view! { <Icon kind=IconKind::Menu /> },
                    }}
                </button>
            </div>

            // Mobile navigation
            <Show when=move || presentation.get().show_mobile_nav>
                <nav class="md:hidden bg-purple-900 p-4">
                    <ul class="space-y-2">
                        {nav_link("block text-white hover:text-purple-300 transition duration-300", true)}
                    </ul>
                </nav>
            </Show>
        </header>
    }
}
