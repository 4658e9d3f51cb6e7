//! Sticky top navigation
//!
//! Desktop shows Home, the Methodology dropdown, About Us and a Contact
//! button. Below the `md` breakpoint a toggle button opens a flat list of all
//! six pages instead.

use leptos::html;
use leptos::prelude::*;
use web_sys::MouseEvent;

use super::icon::{self, Icon};
use super::outside_click::use_pointer_down_outside;
use crate::content;
use crate::state::AppState;
use crate::types::Page;

#[component]
pub fn Navbar(on_navigate: Callback<Page>) -> impl IntoView {
    let state = expect_context::<AppState>();
    let dropdown_ref: NodeRef<html::Div> = NodeRef::new();

    // Registered once for the navbar's lifetime, not per open/close.
    use_pointer_down_outside(dropdown_ref, move || state.dismiss_dropdown());

    view! {
        <nav class="bg-white shadow-md sticky top-0 z-50">
            <div class="container mx-auto px-6">
                <div class="flex justify-between items-center py-4">
                    <div
                        class="text-2xl font-bold text-gray-800 cursor-pointer"
                        on:click=move |_| on_navigate.run(Page::Home)
                    >
                        "Kairos AI"
                    </div>

                    // Desktop
                    <div class="hidden md:flex items-center space-x-8">
                        <NavLink page=Page::Home on_navigate=on_navigate class="text-gray-600 hover:text-blue-600" />

                        <div class="relative" node_ref=dropdown_ref>
                            <button
                                class="text-gray-600 hover:text-blue-600 flex items-center"
                                aria-haspopup="true"
                                aria-expanded=move || state.is_dropdown_open().to_string()
                                on:click=move |_| state.toggle_dropdown()
                            >
                                "Methodology"
                                <Icon path=icon::CHEVRON_DOWN class="w-4 h-4 ml-1" />
                            </button>
                            <Show when=move || state.is_dropdown_open()>
                                <div class="absolute mt-2 w-48 bg-white rounded-md shadow-xl py-2 z-50">
                                    {content::METHODOLOGY
                                        .iter()
                                        .map(|step| {
                                            let class = format!(
                                                "block px-4 py-2 text-sm text-gray-700 {}",
                                                step.accent.hover_bg(),
                                            );
                                            view! { <NavLink page=step.page on_navigate=on_navigate class=class /> }
                                        })
                                        .collect_view()}
                                </div>
                            </Show>
                        </div>

                        <NavLink page=Page::About on_navigate=on_navigate class="text-gray-600 hover:text-blue-600" />
                        <NavLink
                            page=Page::Contact
                            on_navigate=on_navigate
                            class="bg-blue-600 hover:bg-blue-700 text-white font-bold py-2 px-4 rounded-full transition duration-300"
                        />
                    </div>

                    // Mobile toggle
                    <div class="md:hidden">
                        <button
                            aria-label="Toggle navigation menu"
                            on:click=move |_| state.toggle_mobile_menu()
                        >
                            {move || {
                                let path = if state.is_mobile_menu_open() { icon::CLOSE } else { icon::MENU };
                                view! { <Icon path=path /> }
                            }}
                        </button>
                    </div>
                </div>
            </div>

            <Show when=move || state.is_mobile_menu_open()>
                <div class="md:hidden bg-white py-4 px-6">
                    {Page::ALL
                        .into_iter()
                        .map(|page| {
                            let class = if page == Page::Contact {
                                "block mt-4 bg-blue-600 hover:bg-blue-700 text-white font-bold py-2 px-4 rounded-full transition duration-300 text-center"
                            } else {
                                "block py-2 text-gray-600 hover:text-blue-600"
                            };
                            view! { <NavLink page=page on_navigate=on_navigate class=class /> }
                        })
                        .collect_view()}
                </div>
            </Show>
        </nav>
    }
}

/// In-page link: suppresses the default anchor navigation and switches page
#[component]
fn NavLink(
    page: Page,
    on_navigate: Callback<Page>,
    #[prop(into)] class: String,
) -> impl IntoView {
    view! {
        <a
            href="#"
            class=class
            on:click=move |ev: MouseEvent| {
                ev.prevent_default();
                on_navigate.run(page);
            }
        >
            {page.nav_label()}
        </a>
    }
}
