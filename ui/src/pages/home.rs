use leptos::IntoView;
use leptos::component;
use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::prelude::For;
use leptos::view;

use crate::components::FadeInScale;

struct Highlight {
    title: &'static str,
    blurb: &'static str,
    href: &'static str,
}

const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        title: "Permanent Makeup",
        blurb: "Hairstroke and ombre brows, lip blush and eyeliner that hold their shape from morning to midnight.",
        href: "/treatments#eyebrow-treatments",
    },
    Highlight {
        title: "Facials & Skin",
        blurb: "Treatments built around your skin, from deep cleansing facials to targeted boosters.",
        href: "/treatments#facials",
    },
    Highlight {
        title: "Makeup Artistry",
        blurb: "Bridal, event and photoshoot makeup by an artist working in the industry since 2012.",
        href: "/treatments#beauty-services",
    },
];

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="bg-secondary">
            <section class="py-20 lg:py-32 px-6 text-center">
                <div class="max-w-3xl mx-auto">
                    <FadeInScale>
                        <p class="text-main uppercase tracking-[0.3em] text-sm mb-4">
                            "Beauty & Permanent Makeup"
                        </p>
                        <h1 class="text-4xl lg:text-6xl text-main mb-6">
                            "Welcome to " <span class="italic font-semibold">Grace</span>
                        </h1>
                        <p class="text-lg lg:text-xl italic text-gray-700 mb-10">
                            "Still you, but better."
                        </p>
                    </FadeInScale>
                    <div class="flex flex-col sm:flex-row justify-center gap-3">
                        <a
                            href="/contact"
                            class="px-8 py-4 rounded-full bg-main text-primary hover:brightness-90 font-medium transition"
                        >
                            "Book a consultation"
                        </a>
                        <a
                            href="/treatments"
                            class="px-8 py-4 rounded-full border border-main text-main hover:bg-primary transition"
                        >
                            "Explore treatments"
                        </a>
                    </div>
                </div>
            </section>

            <section class="py-12 lg:py-20 px-4 lg:px-20 bg-primary">
                <div class="max-w-7xl mx-auto grid grid-cols-1 md:grid-cols-3 gap-6">
                    <For
                        each=|| HIGHLIGHTS.iter().enumerate()
                        key=|(_, card)| card.title
                        children=|(i, card)| {
                            let delay_ms = (i as u32 + 1) * 100;
                            view! {
                                <FadeInScale
                                    delay_ms
                                    class="bg-secondary p-6 rounded-lg shadow-md text-center flex flex-col items-center min-h-[220px]"
                                >
                                    <h3 class="text-xl font-semibold text-main mb-3">{card.title}</h3>
                                    <p class="text-sm text-gray-700 mb-4">{card.blurb}</p>
                                    <a href=card.href class="smooth-underline text-main text-sm font-medium mt-auto">
                                        "Find out more"
                                    </a>
                                </FadeInScale>
                            }
                        }
                    />
                </div>
            </section>

            <section class="py-12 lg:py-20 px-6 bg-secondary text-center">
                <FadeInScale class="max-w-2xl mx-auto">
                    <p class="italic text-lg lg:text-2xl text-main mb-6">
                        "“With experience in the beauty industry since 2012, I aim to bring out the most natural beauty in my clients without turning them into someone else.”"
                    </p>
                    <a href="/about" class="smooth-underline text-main font-medium">"Meet Grace"</a>
                </FadeInScale>
            </section>
        </div>
    }
}
