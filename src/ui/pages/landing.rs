//! Landing page component
//!
//! The single marketing page for StudyTrack:
//! - SEO meta tags
//! - Fixed header with in-page navigation and a mobile menu
//! - Hero section with product screenshots
//! - Services grid
//! - AI capabilities grid
//! - Footer with contacts

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::core::{Locale, PageContent};
use crate::ui::footer::PageFooter;
use crate::ui::header::PageHeader;
use crate::ui::sections::{AiFeaturesSection, FeaturesSection, HeroSection};

/// Without scripts no observer ever fires, so regions are shown as revealed
const NOSCRIPT_STYLES: &str = r#"
[data-reveal="hidden"] {
    opacity: 1 !important;
    transform: none !important;
}
"#;

/// Landing page in the given language
#[component]
pub fn LandingPage(locale: Locale) -> impl IntoView {
    let content = locale.content();

    view! {
        <SeoMeta content=content />

        <div lang=locale.html_lang() class="min-h-screen flex flex-col">
            <PageHeader content=content />
            <main class="flex-grow">
                <HeroSection content=content />
                <FeaturesSection content=content />
                <AiFeaturesSection content=content />
            </main>
            <PageFooter content=content />
        </div>

        <noscript>
            <style>{NOSCRIPT_STYLES}</style>
        </noscript>
    }
}

/// SEO Meta tags component using leptos_meta
#[component]
fn SeoMeta(content: &'static PageContent) -> impl IntoView {
    let seo = &content.seo;
    let hero_image = content.hero.left.src;

    view! {
        <Title text=seo.title />
        <Meta name="description" content=seo.description />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content=seo.title />
        <Meta property="og:description" content=seo.description />
        <Meta property="og:image" content=hero_image />
        <Meta property="og:locale" content=content.locale.as_str() />
    }
}
