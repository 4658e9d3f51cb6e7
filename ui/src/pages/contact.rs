//! Discovery call and pricing

use leptos::prelude::*;

use crate::components::{icon, Icon};
use crate::content::{self, PricingOption};

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <div class="animate-fade-in">
            <header class="bg-gray-100 py-20 px-6">
                <div class="container mx-auto text-center">
                    <h1 class="text-4xl md:text-5xl font-bold text-gray-900">"Get Started"</h1>
                    <p class="text-lg text-gray-600 mt-2">
                        "Take the first step towards a more fulfilling life and career."
                    </p>
                </div>
            </header>

            <section class="py-20 px-6 bg-white">
                <div class="container mx-auto max-w-5xl grid md:grid-cols-2 gap-12">
                    <div class="bg-gray-50 p-8 rounded-lg shadow-md border border-gray-200">
                        <h2 class="text-3xl font-bold mb-6">"Schedule a Discovery Call"</h2>
                        <p class="text-gray-700 mb-6">
                            "Schedule a complimentary discovery call to learn more and see if the Kairos "
                            "Coaching Program is right for you. Reach out to either of us to begin."
                        </p>
                        <div class="space-y-4">
                            {content::CONTACTS
                                .iter()
                                .map(|channel| view! {
                                    <a href=channel.mailto() class="flex items-center text-lg text-blue-600 hover:underline">
                                        <Icon path=icon::ENVELOPE class="w-6 h-6 mr-3" />
                                        {channel.label}
                                    </a>
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="bg-blue-50 p-8 rounded-xl shadow-lg border border-blue-200">
                        <h3 class="text-3xl font-bold text-center mb-6">"Investment"</h3>
                        <p class="text-center text-gray-600 mb-6">"Special pricing for our beta pilot program."</p>
                        <div class="bg-white p-6 rounded-lg">
                            <h4 class="text-xl font-bold text-center mb-4">{content::PACKAGE_NAME}</h4>
                            <ul class="space-y-4 text-lg text-gray-700">
                                {content::PRICING
                                    .iter()
                                    .enumerate()
                                    .map(|(i, option)| view! { <PriceRow option=option first={i == 0} /> })
                                    .collect_view()}
                            </ul>
                        </div>
                        <p class="text-center mt-6 text-gray-600 text-sm">{content::PRICING_NOTE}</p>
                        <div class="mt-6 text-center text-sm text-gray-700">
                            <p class="font-semibold mb-2">"Payable through:"</p>
                            {content::PAYMENT_CHANNELS.iter().map(|line| view! { <p>{*line}</p> }).collect_view()}
                        </div>
                    </div>
                </div>
            </section>
        </div>
    }
}

#[component]
fn PriceRow(option: &'static PricingOption, first: bool) -> impl IntoView {
    let row = if first {
        "flex justify-between items-center"
    } else {
        "flex justify-between items-center border-t pt-4 mt-4"
    };
    let price = if option.highlight {
        "font-bold text-green-600"
    } else {
        "font-bold text-blue-800"
    };

    view! {
        <li class=row>
            <span>{option.label}</span>
            <span class=price>{option.price}</span>
        </li>
    }
}
