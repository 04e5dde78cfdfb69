use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::core::Locale;
use crate::ui::{LandingPage, NotFoundPage};

/// Locale served at `/`, provided by the server from its configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DefaultLocale(pub Locale);

pub fn shell(options: LeptosOptions) -> impl IntoView {
    let locale = use_context::<DefaultLocale>()
        .map(|DefaultLocale(locale)| locale)
        .unwrap_or_default();

    view! {
        <!DOCTYPE html>
        <html lang=locale.html_lang()>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Default locale as seen by this side of the render.
///
/// The server knows it from context; the hydrating client reads back the
/// `<html lang>` the server wrote, so both render the same tree at `/`.
fn resolve_default_locale() -> Locale {
    if let Some(DefaultLocale(locale)) = use_context::<DefaultLocale>() {
        return locale;
    }

    #[cfg(feature = "hydrate")]
    {
        if let Some(locale) = document()
            .document_element()
            .and_then(|html| html.get_attribute("lang"))
            .and_then(|lang| lang.parse::<Locale>().ok())
        {
            return locale;
        }
    }

    Locale::default()
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let default_locale = resolve_default_locale();

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/studytrack.css"/>

        <Router>
            <Routes fallback=move || view! { <NotFoundPage locale=default_locale default_locale=default_locale /> }>
                <Route path=path!("/") view=move || view! { <LandingPage locale=default_locale /> } />
                <Route path=path!("/uz") view=|| view! { <LandingPage locale=Locale::Uz /> } />
                <Route path=path!("/en") view=|| view! { <LandingPage locale=Locale::En /> } />
            </Routes>
        </Router>
    }
}
