//! Outline icons (24x24, stroke 1.5)

use leptos::prelude::*;

pub const CHEVRON_DOWN: &str = "M19.5 8.25l-7.5 7.5-7.5-7.5";
pub const MENU: &str = "M3.75 6.75h16.5M3.75 12h16.5m-16.5 5.25h16.5";
pub const CLOSE: &str = "M6 18L18 6M6 6l12 12";
pub const CHECK_CIRCLE: &str = "M9 12.75L11.25 15 15 9.75M21 12a9 9 0 11-18 0 9 9 0 0118 0z";
pub const ENVELOPE: &str = "M21.75 6.75v10.5a2.25 2.25 0 01-2.25 2.25h-15a2.25 2.25 0 01-2.25-2.25V6.75m19.5 0A2.25 2.25 0 0019.5 4.5h-15a2.25 2.25 0 00-2.25 2.25m19.5 0v.243a2.25 2.25 0 01-1.07 1.916l-7.5 4.615a2.25 2.25 0 01-2.36 0L3.32 8.91a2.25 2.25 0 01-1.07-1.916V6.75";

#[component]
pub fn Icon(
    /// SVG path data
    path: &'static str,
    #[prop(default = "w-6 h-6")] class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            fill="none"
            viewBox="0 0 24 24"
            stroke-width="1.5"
            stroke="currentColor"
            class=class
        >
            <path stroke-linecap="round" stroke-linejoin="round" d=path />
        </svg>
    }
}
