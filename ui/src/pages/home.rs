//! Landing page

use leptos::prelude::*;

use crate::components::{icon, Icon};
use crate::content::{self, home, MethodologyContent};
use crate::types::Page;

#[component]
pub fn HomePage(on_navigate: Callback<Page>) -> impl IntoView {
    view! {
        <div class="animate-fade-in">
            // Hero
            <header class="bg-gray-900 text-white text-center py-24 md:py-40 px-6 relative overflow-hidden">
                <div class="absolute inset-0 bg-black opacity-50"></div>
                <div class="relative z-10">
                    <h1 class="text-4xl md:text-6xl font-bold tracking-tight mb-4">{home::HERO_TITLE}</h1>
                    <p class="text-lg md:text-xl text-gray-300 max-w-3xl mx-auto mb-8">{home::HERO_TAGLINE}</p>
                    <button
                        class="bg-blue-600 hover:bg-blue-700 text-white font-bold py-3 px-8 rounded-full text-lg transition duration-300 transform hover:scale-105"
                        on:click=move |_| on_navigate.run(Page::Contact)
                    >
                        {home::HERO_CTA}
                    </button>
                </div>
            </header>

            <section class="py-20 px-6 bg-white">
                <div class="container mx-auto text-center max-w-4xl">
                    <h2 class="text-3xl md:text-4xl font-bold text-gray-900 mb-4">{home::INTRO_TITLE}</h2>
                    <p class="text-lg text-gray-600">{home::INTRO_BODY}</p>
                </div>
            </section>

            <section id="methodology" class="py-20 px-6 bg-gray-50">
                <div class="container mx-auto">
                    <div class="text-center mb-16">
                        <h2 class="text-3xl md:text-4xl font-bold text-gray-900">{home::METHODOLOGY_TITLE}</h2>
                        <p class="text-lg text-gray-600 mt-4 max-w-3xl mx-auto">{home::METHODOLOGY_TAGLINE}</p>
                    </div>
                    <div class="grid md:grid-cols-3 gap-8 text-center">
                        {content::METHODOLOGY
                            .iter()
                            .map(|step| view! { <MethodologyCard step=step on_navigate=on_navigate /> })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section class="py-20 px-6 bg-white">
                <div class="container mx-auto">
                    <div class="text-center mb-12">
                        <h2 class="text-3xl md:text-4xl font-bold text-gray-900">{home::OUTCOMES_TITLE}</h2>
                        <p class="text-lg text-gray-600 mt-4 max-w-3xl mx-auto">{home::OUTCOMES_TAGLINE}</p>
                    </div>
                    <div class="max-w-4xl mx-auto grid md:grid-cols-2 gap-x-12 gap-y-6">
                        {home::OUTCOMES
                            .iter()
                            .map(|outcome| view! {
                                <div class="flex items-start">
                                    <Icon path=icon::CHECK_CIRCLE class="w-6 h-6 text-blue-500 mr-3 flex-shrink-0 mt-1" />
                                    <p class="text-gray-700">{*outcome}</p>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>
        </div>
    }
}

/// Numbered summary card linking to a methodology page
#[component]
fn MethodologyCard(step: &'static MethodologyContent, on_navigate: Callback<Page>) -> impl IntoView {
    let page = step.page;
    let badge = format!(
        "{} rounded-full h-16 w-16 flex items-center justify-center font-bold text-2xl mx-auto mb-4",
        step.accent.badge(),
    );
    let link = format!("{} font-semibold hover:underline", step.accent.link());

    view! {
        <div class="bg-white p-8 rounded-xl shadow-md border border-gray-200">
            <div class=badge>{step.step}</div>
            <h3 class="text-2xl font-bold mb-3">{page.nav_label()}</h3>
            <p class="text-gray-600 mb-4">{step.summary}</p>
            <button class=link on:click=move |_| on_navigate.run(page)>
                "Learn More →"
            </button>
        </div>
    }
}
