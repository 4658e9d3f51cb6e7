//! Shared layout for the Discover, Integrate and Actualize pages

use leptos::prelude::*;

use crate::content::MethodologyContent;
use crate::types::Page;

#[component]
pub fn MethodologyPage(step: &'static MethodologyContent, on_navigate: Callback<Page>) -> impl IntoView {
    let header = format!("{} text-white py-20 px-6", step.accent.header_bg());
    let last = step.paragraphs.len().saturating_sub(1);

    view! {
        <div class="animate-fade-in">
            <header class=header>
                <div class="container mx-auto">
                    <h1 class="text-4xl md:text-5xl font-bold">{step.title}</h1>
                    <p class="text-lg md:text-xl mt-2 opacity-90">{step.subtitle}</p>
                </div>
            </header>
            <section class="py-20 px-6 bg-gray-50">
                <div class="container mx-auto max-w-4xl">
                    <div class="bg-white p-8 md:p-12 rounded-lg shadow-lg">
                        {step
                            .paragraphs
                            .iter()
                            .enumerate()
                            .map(|(i, paragraph)| {
                                let class = if i == last { "text-lg text-gray-700 mb-6" } else { "text-lg text-gray-700 mb-4" };
                                view! { <p class=class>{*paragraph}</p> }
                            })
                            .collect_view()}
                        <h3 class="text-2xl font-bold text-gray-900 mb-4">{step.list_heading}</h3>
                        <ul class="space-y-3 text-gray-700 list-disc list-inside">
                            {step.items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
                        </ul>
                    </div>
                    <div class="mt-12 text-center">
                        <button
                            class="text-gray-600 hover:text-gray-900 font-semibold"
                            on:click=move |_| on_navigate.run(Page::Home)
                        >
                            "← Back to Home"
                        </button>
                    </div>
                </div>
            </section>
        </div>
    }
}
