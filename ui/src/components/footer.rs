use chrono::Datelike;
use leptos::prelude::*;

use crate::content;

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Local::now().year();

    view! {
        <footer class="bg-gray-800 text-white">
            <div class="container mx-auto px-6 py-8 text-center">
                <p>{content::copyright(year)}</p>
                <p class="mt-2 text-sm text-gray-400">{content::footer_contact_line()}</p>
            </div>
        </footer>
    }
}
