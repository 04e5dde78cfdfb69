//! Landing page content sections
//!
//! - Hero with two product screenshots and a call to action
//! - Services grid
//! - AI capabilities grid
//!
//! Section ids come from [`PageContent::section_anchor`], the same source the
//! header uses for its links.

use leptos::prelude::*;

use crate::core::{AiFeatureCard, FeatureCard, PageContent, Screenshot, SectionId};
use crate::ui::animated_region::AnimatedRegion;
use crate::ui::icon::{Icon, IconKind};

#[component]
pub fn HeroSection(content: &'static PageContent) -> impl IntoView {
    let hero = &content.hero;
    let cta_href = content
        .nav_item(SectionId::Services)
        .map(|item| item.href())
        .unwrap_or_else(|| format!("#{}", SectionId::Services.slug()));

    view! {
        <section
            id=content.section_anchor(SectionId::Home)
            class="min-h-screen flex items-center justify-center text-white relative overflow-hidden
                   bg-gradient-to-r from-purple-900 to-indigo-900 py-20 md:py-0"
        >
            <div class="container mx-auto flex flex-col md:flex-row items-center justify-between px-4">
                <AnimatedRegion class="w-full md:w-1/4 mb-8 md:mb-0">
                    <ScreenshotFrame shot=hero.left tilt="md:-rotate-6" />
                </AnimatedRegion>

                <AnimatedRegion class="w-full md:w-1/2 text-center px-4 md:px-8 mb-8 md:mb-0">
                    <h2 class="text-3xl md:text-5xl font-bold mb-6">{hero.title}</h2>
                    <p class="text-lg md:text-xl mb-8">{hero.subtitle}</p>
                    <a
                        href=cta_href
                        class="inline-block bg-white text-purple-900 px-6 py-2 md:px-8 md:py-3 rounded-full
                               text-lg font-semibold hover:bg-purple-200 transition duration-300"
                    >
                        {hero.cta_label}
                    </a>
                </AnimatedRegion>

                <AnimatedRegion class="w-full md:w-1/4">
                    <ScreenshotFrame shot=hero.right tilt="md:rotate-6" />
                </AnimatedRegion>
            </div>

            // Scroll indicator
            <div class="absolute bottom-10 left-1/2 transform -translate-x-1/2 animate-bounce" aria-hidden="true">
                <Icon kind=IconKind::ChevronDown class="w-8 h-8" />
            </div>
        </section>
    }
}

/// Tilted screenshot card. A failed image load leaves the alt text in place.
#[component]
fn ScreenshotFrame(shot: Screenshot, tilt: &'static str) -> impl IntoView {
    view! {
        <div class=format!("rounded-lg shadow-lg p-4 transform {tilt}")>
            <img src=shot.src alt=shot.alt loading="lazy" class="w-full h-auto rounded" />
        </div>
    }
}

#[component]
pub fn FeaturesSection(content: &'static PageContent) -> impl IntoView {
    let section = &content.features;

    view! {
        <section id=content.section_anchor(SectionId::Services) class="py-20 bg-gray-100">
            <div class="container mx-auto px-4">
                <AnimatedRegion>
                    <h2 class="text-3xl md:text-4xl font-bold text-center mb-12 text-purple-900">
                        {section.title}
                    </h2>
                </AnimatedRegion>
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-8">
                    {section
                        .cards
                        .iter()
                        .map(|card| {
                            view! {
                                <AnimatedRegion>
                                    <ServiceCard card=*card />
                                </AnimatedRegion>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ServiceCard(card: FeatureCard) -> impl IntoView {
    view! {
        <div class="bg-white p-8 rounded-lg shadow-xl hover:shadow-2xl transition duration-300 transform hover:-translate-y-2">
            <div class="text-purple-600 mb-6">
                <Icon kind=IconKind::from(card.icon) class="w-12 h-12" />
            </div>
            <h3 class="text-2xl font-semibold mb-4 text-purple-900">{card.title}</h3>
            <p class="text-gray-600">{card.description}</p>
        </div>
    }
}

#[component]
pub fn AiFeaturesSection(content: &'static PageContent) -> impl IntoView {
    let section = &content.ai_features;

    view! {
        <section
            id=content.section_anchor(SectionId::AiFeatures)
            class="py-20 bg-gradient-to-r from-purple-900 to-indigo-900 text-white"
        >
            <div class="container mx-auto px-4">
                <AnimatedRegion>
                    <h2 class="text-3xl md:text-4xl font-bold text-center mb-12">{section.title}</h2>
                </AnimatedRegion>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {section
                        .cards
                        .iter()
                        .map(|card| {
                            view! {
                                <AnimatedRegion>
                                    <AiCard card=*card />
                                </AnimatedRegion>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn AiCard(card: AiFeatureCard) -> impl IntoView {
    view! {
        <div class="bg-white bg-opacity-10 p-8 rounded-lg backdrop-filter backdrop-blur-lg hover:bg-opacity-20 transition duration-300">
            <h3 class="text-2xl font-semibold mb-4">{card.title}</h3>
            <p class="text-gray-200">{card.description}</p>
        </div>
    }
}
