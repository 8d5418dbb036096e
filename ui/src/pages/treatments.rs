use leptos::IntoView;
use leptos::component;
use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::prelude::For;
use leptos::prelude::GlobalAttributes;
use leptos::view;

use crate::components::FadeInScale;

struct TreatmentSection {
    /// Anchor id; the menu's child links point at these.
    id: &'static str,
    title: &'static str,
    intro: &'static str,
    services: &'static [&'static str],
}

const SECTIONS: &[TreatmentSection] = &[
    TreatmentSection {
        id: "eyebrow-treatments",
        title: "Eyebrow Treatments",
        intro: "Brows shaped to frame your face, from feather-fine strokes to a soft powdered finish.",
        services: &[
            "Hairstroke Eyebrows",
            "Ombre Eyebrows",
            "Combination Brows",
            "Brow Lamination & Tint",
        ],
    },
    TreatmentSection {
        id: "lip-treatments",
        title: "Lip Treatments",
        intro: "Colour and definition that stay put, matched to your natural lip tone.",
        services: &["Permanent Lipstick", "Lip Blush", "Dark Lip Neutralisation"],
    },
    TreatmentSection {
        id: "eye-treatments",
        title: "Eye Treatments",
        intro: "Subtle, lasting definition that makes every morning easier.",
        services: &["Permanent Eyeliner", "Lash Enhancement", "Lash Lift & Tint"],
    },
    TreatmentSection {
        id: "cosmetic-treatments",
        title: "Cosmetic Treatments",
        intro: "Corrective and camouflage work carried out with medical-grade pigments.",
        services: &[
            "Paramedical Camouflage",
            "Scar Camouflage",
            "Scalp Micropigmentation",
        ],
    },
    TreatmentSection {
        id: "facials",
        title: "Facials",
        intro: "Skin treatments built around your skin type and your goals.",
        services: &[
            "Deep Cleansing Facial",
            "Dermaplaning Facial",
            "Anti-Ageing Facial",
        ],
    },
    TreatmentSection {
        id: "injectables",
        title: "Injectables",
        intro: "Administered by qualified practitioners after a full consultation.",
        services: &["Anti-Wrinkle Injections", "Dermal Fillers", "Skin Boosters"],
    },
    TreatmentSection {
        id: "beauty-services",
        title: "Beauty Services",
        intro: "Makeup artistry for the days that matter.",
        services: &[
            "Bridal Makeup",
            "Event Makeup",
            "Photoshoot Makeup",
            "Makeup Lessons",
        ],
    },
];

#[component]
pub fn Treatments() -> impl IntoView {
    view! {
        <div class="py-12 lg:py-16 px-4 sm:px-6 lg:px-8 bg-secondary text-center">
            <FadeInScale class="max-w-3xl mx-auto">
                <h1 class="text-4xl font-extrabold text-main sm:text-5xl">Treatments</h1>
                <p class="mt-3 text-xl text-gray-600">
                    "Every treatment starts with a consultation, so the result is yours alone."
                </p>
            </FadeInScale>
        </div>

        <For
            each=|| SECTIONS.iter().enumerate()
            key=|(_, section)| section.id
            children=|(i, section)| {
                // scroll-mt keeps anchored headings clear of the sticky header
                let band = if i % 2 == 0 { "bg-primary" } else { "bg-secondary" };
                view! {
                    <section
                        id=section.id
                        class=format!("py-10 lg:py-16 px-4 lg:px-20 scroll-mt-28 {band}")
                    >
                        <div class="mx-auto max-w-7xl">
                            <FadeInScale>
                                <h2 class="text-2xl lg:text-4xl text-main mb-3">{section.title}</h2>
                                <p class="text-gray-700 max-w-2xl mb-6">{section.intro}</p>
                            </FadeInScale>
                            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4">
                                <For
                                    each=move || section.services.iter().enumerate()
                                    key=|(_, service)| *service
                                    children=move |(j, service)| {
                                        let delay_ms = (j as u32 + 1) * 100;
                                        view! {
                                            <FadeInScale
                                                delay_ms
                                                class="bg-white/60 p-5 rounded-lg shadow-sm text-main font-medium"
                                            >
                                                {*service}
                                            </FadeInScale>
                                        }
                                    }
                                />
                            </div>
                        </div>
                    </section>
                }
            }
        />
    }
}

#[cfg(test)]
mod tests {
    use super::SECTIONS;
    use crate::nav::{MENU, NavEntry};

    /// The menu's Treatments children navigate by fragment; each one must
    /// land on a rendered section, in the same order.
    #[test]
    fn section_anchors_match_the_menu() {
        let children = MENU
            .iter()
            .find_map(|entry| match entry {
                NavEntry::Parent { name, children, .. } if *name == "Treatments" => {
                    Some(*children)
                }
                _ => None,
            })
            .expect("menu has a Treatments parent");

        let fragments: Vec<&str> = children
            .iter()
            .map(|child| child.href.split('#').nth(1).expect("child href has a fragment"))
            .collect();
        let ids: Vec<&str> = SECTIONS.iter().map(|s| s.id).collect();
        assert_eq!(fragments, ids);
    }

    #[test]
    fn every_section_lists_at_least_one_service() {
        for section in SECTIONS {
            assert!(
                !section.services.is_empty(),
                "{} has no services",
                section.title
            );
        }
    }
}
