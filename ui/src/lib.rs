//! Kairos AI Coaching - Leptos single-page site
//!
//! Page identity lives in memory ([`state::Navigation`]), so the browser URL
//! never changes and the server only has to hand back `index.html`.

pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod types;

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};

use components::{Footer, Navbar};
use pages::{AboutPage, ContactPage, HomePage, MethodologyPage};
use state::AppState;
use types::Page;

/// Application shell: navbar, current page, footer
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let state = AppState::new();
    provide_context(state);

    let on_navigate = Callback::new(move |page: Page| state.navigate(page));
    // Menu toggles must not re-render the page body.
    let page = Memo::new(move |_| state.page());

    view! {
        <Title text=move || page.get().document_title() />
        <div class="bg-white text-gray-800 font-sans">
            <Navbar on_navigate=on_navigate />
            <main>{move || render_page(page.get(), on_navigate)}</main>
            <Footer />
        </div>
    }
}

fn render_page(page: Page, on_navigate: Callback<Page>) -> AnyView {
    match page {
        Page::Home => view! { <HomePage on_navigate=on_navigate /> }.into_any(),
        Page::Discover | Page::Integrate | Page::Actualize => match content::methodology(page) {
            Some(step) => view! { <MethodologyPage step=step on_navigate=on_navigate /> }.into_any(),
            None => view! { <HomePage on_navigate=on_navigate /> }.into_any(),
        },
        Page::About => view! { <AboutPage /> }.into_any(),
        Page::Contact => view! { <ContactPage /> }.into_any(),
    }
}
