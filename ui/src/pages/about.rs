use leptos::prelude::*;

use crate::content::{self, Guide};

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="animate-fade-in">
            <header class="bg-gray-100 py-20 px-6">
                <div class="container mx-auto text-center">
                    <h1 class="text-4xl md:text-5xl font-bold text-gray-900">"Meet Your Guides"</h1>
                    <p class="text-lg text-gray-600 mt-2">"Experienced coaches dedicated to your transformation."</p>
                </div>
            </header>
            <section class="py-20 px-6 bg-white">
                <div class="container mx-auto">
                    <div class="grid lg:grid-cols-2 gap-12 items-start max-w-6xl mx-auto">
                        {content::GUIDES.iter().map(|guide| view! { <GuideCard guide=guide /> }).collect_view()}
                    </div>
                </div>
            </section>
        </div>
    }
}

#[component]
fn GuideCard(guide: &'static Guide) -> impl IntoView {
    view! {
        <div class="bg-gray-50 p-8 rounded-lg shadow-md border border-gray-200">
            <h2 class="text-3xl font-bold mb-2">{guide.name}</h2>
            <p class="text-blue-600 font-semibold mb-4">{guide.roles}</p>
            <div class="text-gray-700 space-y-4">
                {guide.bio.iter().map(|line| view! { <p>{*line}</p> }).collect_view()}
            </div>
        </div>
    }
}
