//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::core::Locale;

/// Not found (404) page component
///
/// `default_locale` is the locale served at `/`; the home link points there
/// when the page is shown in that language.
#[component]
pub fn NotFoundPage(locale: Locale, default_locale: Locale) -> impl IntoView {
    let content = locale.content();
    let text = &content.not_found;

    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text=text.title />

        <div
            lang=locale.html_lang()
            class="min-h-screen bg-gradient-to-r from-purple-900 to-indigo-900 text-white flex flex-col items-center justify-center p-4"
        >
            <div class="text-center">
                // Error code
                <h1 class="text-6xl font-bold mb-4">"404"</h1>

                // Title
                <h2 class="text-2xl font-semibold mb-2">{text.title}</h2>

                // Description
                <p class="text-purple-200 mb-8 max-w-md mx-auto">{text.description}</p>

                <A
                    href=locale.home_path(default_locale)
                    attr:class="bg-white text-purple-900 px-6 py-3 rounded-full font-semibold hover:bg-purple-200 transition duration-300"
                >
                    {text.home_label}
                </A>
            </div>

            // Footer
            <div class="absolute bottom-8 text-center">
                <p class="text-sm text-purple-300">{content.footer.copyright}</p>
            </div>
        </div>
    }
}
