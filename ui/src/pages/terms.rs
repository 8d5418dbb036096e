use leptos::IntoView;
use leptos::component;
use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::prelude::For;
use leptos::view;

use crate::components::FadeInScale;

const TERMS: &[(&str, &str)] = &[
    (
        "Appointments & Deposits",
        "A deposit secures every appointment and is deducted from the final balance on the day. Arriving more than fifteen minutes late may mean rebooking.",
    ),
    (
        "Cancellations & Rescheduling",
        "Please give at least 48 hours notice to move or cancel an appointment. Later cancellations and no-shows forfeit the deposit.",
    ),
    (
        "Patch Tests",
        "Tint, lash and pigment treatments require a patch test at least 48 hours before the first appointment. We cannot treat without one.",
    ),
    (
        "Suitability",
        "Some treatments are unsuitable during pregnancy or alongside certain medical conditions and medication. Tell us in advance and we will advise honestly.",
    ),
    (
        "Results & Aftercare",
        "Healed results vary from person to person, and permanent makeup softens as it heals. Following the written aftercare you receive is part of the treatment.",
    ),
    (
        "Gift Cards",
        "Gift cards are valid for twelve months from purchase, cover any treatment, and cannot be exchanged for cash.",
    ),
];

#[component]
pub fn Terms() -> impl IntoView {
    view! {
        <div class="py-16 px-4 sm:px-6 lg:px-8 bg-secondary">
            <div class="max-w-4xl mx-auto">
                <div class="text-center mb-12">
                    <FadeInScale>
                        <h1 class="text-4xl font-extrabold text-main sm:text-5xl">
                            "Terms & Conditions"
                        </h1>
                        <p class="mt-3 text-xl text-gray-600">
                            "The small print, kept short and fair."
                        </p>
                    </FadeInScale>
                </div>
                <hr class="mb-8 border-gray-200"/>

                <div class="flex flex-col gap-6">
                    <For
                        each=|| TERMS
                        key=|term| term.0
                        children=|term| view! {
                            <FadeInScale class="bg-primary p-6 rounded-lg shadow-sm">
                                <h2 class="text-xl font-semibold text-main mb-2">{term.0}</h2>
                                <p class="text-sm lg:text-base text-gray-700">{term.1}</p>
                            </FadeInScale>
                        }
                    />
                </div>
            </div>
        </div>
    }
}
