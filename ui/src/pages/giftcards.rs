use leptos::IntoView;
use leptos::component;
use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::prelude::For;
use leptos::view;

use crate::components::FadeInScale;

const STEPS: &[(&str, &str)] = &[
    (
        "Pick an amount",
        "Gift cards are available for any value, or for a specific treatment if you already know what they would love.",
    ),
    (
        "We prepare it",
        "Every card is written and wrapped in the studio, ready to collect or to post directly to the recipient.",
    ),
    (
        "They book in",
        "The card covers any treatment we offer; the recipient simply books whenever suits them.",
    ),
];

#[component]
pub fn GiftCards() -> impl IntoView {
    view! {
        <div class="py-16 px-4 sm:px-6 lg:px-8 bg-secondary">
            <div class="max-w-7xl mx-auto">
                <div class="text-center mb-12">
                    <FadeInScale>
                        <h1 class="text-4xl font-extrabold text-main sm:text-5xl">"Gift Cards"</h1>
                        <p class="mt-3 text-xl text-gray-600 max-w-2xl mx-auto">
                            "Give someone the time to feel like themselves again. A Grace gift card covers any treatment in the studio."
                        </p>
                    </FadeInScale>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mb-12">
                    <For
                        each=|| STEPS.iter().enumerate()
                        key=|(_, step)| step.0
                        children=|(i, step)| {
                            let delay_ms = (i as u32 + 1) * 100;
                            view! {
                                <FadeInScale
                                    delay_ms
                                    class="bg-primary p-6 rounded-lg shadow-md text-center min-h-[180px]"
                                >
                                    <p class="text-3xl text-main mb-3">{i + 1}</p>
                                    <h3 class="text-xl font-semibold text-main mb-3">{step.0}</h3>
                                    <p class="text-sm text-gray-700">{step.1}</p>
                                </FadeInScale>
                            }
                        }
                    />
                </div>

                <FadeInScale class="text-center">
                    <p class="text-gray-700 mb-6">
                        "Cards are valid for twelve months. To buy one, send us a message and we will arrange the rest."
                    </p>
                    <a
                        href="/contact"
                        class="inline-block px-8 py-4 rounded-full bg-main text-primary hover:brightness-90 font-medium transition"
                    >
                        "Get in touch"
                    </a>
                </FadeInScale>
            </div>
        </div>
    }
}
