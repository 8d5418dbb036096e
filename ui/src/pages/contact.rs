use leptos::IntoView;
use leptos::component;
use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::prelude::For;
use leptos::view;

use crate::components::FadeInScale;
use crate::components::social_float::{INSTAGRAM_URL, MESSENGER_URL, WHATSAPP_URL};

const HOURS: &[(&str, &str)] = &[
    ("Monday - Friday", "9:00 - 18:00"),
    ("Saturday", "9:00 - 16:00"),
    ("Sunday", "Closed"),
];

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <div class="py-16 px-4 sm:px-6 lg:px-8 bg-secondary">
            <div class="max-w-5xl mx-auto">
                <div class="text-center mb-12">
                    <FadeInScale>
                        <h1 class="text-4xl font-extrabold text-main sm:text-5xl">Contact</h1>
                        <p class="mt-3 text-xl text-gray-600 max-w-2xl mx-auto">
                            "The quickest way to reach us is a message, whether for a booking or just to talk through what would suit you."
                        </p>
                    </FadeInScale>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-6 mb-12">
                    <FadeInScale
                        delay_ms=100
                        class="bg-primary p-6 lg:p-10 rounded-lg shadow-md"
                    >
                        <h2 class="text-xl font-semibold text-main mb-4">"Message us"</h2>
                        <div class="flex flex-col gap-3">
                            <a
                                href=WHATSAPP_URL
                                target="_blank"
                                rel="noopener noreferrer"
                                class="px-6 py-3 rounded-full bg-green-500 hover:bg-green-600 text-white font-medium text-center transition"
                            >
                                WhatsApp
                            </a>
                            <a
                                href=INSTAGRAM_URL
                                target="_blank"
                                rel="noopener noreferrer"
                                class="px-6 py-3 rounded-full bg-main hover:brightness-90 text-primary font-medium text-center transition"
                            >
                                Instagram
                            </a>
                            <a
                                href=MESSENGER_URL
                                target="_blank"
                                rel="noopener noreferrer"
                                class="px-6 py-3 rounded-full border border-main text-main hover:bg-secondary font-medium text-center transition"
                            >
                                Messenger
                            </a>
                        </div>
                    </FadeInScale>

                    <FadeInScale
                        delay_ms=200
                        class="bg-primary p-6 lg:p-10 rounded-lg shadow-md"
                    >
                        <h2 class="text-xl font-semibold text-main mb-4">"Studio hours"</h2>
                        <div class="flex flex-col gap-2">
                            <For
                                each=|| HOURS
                                key=|row| row.0
                                children=|row| view! {
                                    <div class="flex justify-between text-gray-700 text-sm lg:text-base">
                                        <span>{row.0}</span>
                                        <span class="font-medium">{row.1}</span>
                                    </div>
                                }
                            />
                        </div>
                        <p class="mt-6 text-sm text-gray-600 italic">
                            "Visits are by appointment only."
                        </p>
                    </FadeInScale>
                </div>

                <FadeInScale class="text-center">
                    <p class="text-gray-700">
                        "Prefer to look around first? Our latest work is on "
                        <a
                            href=INSTAGRAM_URL
                            target="_blank"
                            rel="noopener noreferrer"
                            class="smooth-underline text-main font-medium"
                        >
                            Instagram
                        </a> "."
                    </p>
                </FadeInScale>
            </div>
        </div>
    }
}
