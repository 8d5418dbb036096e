use leptos::html;
use leptos::prelude::AriaAttributes;
use leptos::prelude::ClassAttribute;
use leptos::prelude::CustomAttribute;
use leptos::prelude::ElementChild;
use leptos::prelude::For;
use leptos::prelude::IntoAny;
use leptos::prelude::NodeRef;
use leptos::prelude::NodeRefAttribute;
use leptos::prelude::OnAttribute;
use leptos::prelude::StyleAttribute;
use leptos::prelude::view;
use leptos::prelude::{Get, GetUntracked, RwSignal, Set, Update};
use leptos::{IntoView, component};
use leptos_use::on_click_outside;

use crate::components::icons;

pub const MESSENGER_URL: &str = "https://www.facebook.com/khanhtran.tonnu";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/tranton_makeupartist";
pub const INSTAGRAM_STUDIO_URL: &str =
    "https://www.instagram.com/tranton.pmu?igsh=eGk5aWRuY2pscDJ0&utm_source=qr";
pub const WHATSAPP_URL: &str = "https://wa.me/07466171871";

#[derive(Clone, Copy)]
struct SocialLink {
    name: &'static str,
    icon: &'static str,
    url: &'static str,
    color: &'static str,
    // brand glyphs are dark; most need whiting out on their backgrounds
    invert: bool,
}

const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        name: "Messenger",
        icon: "/assets/icons/messenger.svg",
        url: MESSENGER_URL,
        color: "bg-transparent hover:bg-blue-50",
        invert: false,
    },
    SocialLink {
        name: "Instagram",
        icon: "/assets/icons/instagram.svg",
        url: INSTAGRAM_URL,
        color: "bg-gradient-to-r from-[#833AB4] via-[#FD1D1D] to-[#FCAF45] hover:from-[#9B4DD4] hover:via-[#FF2D2D] hover:to-[#FFC055]",
        invert: true,
    },
    SocialLink {
        name: "Instagram Studio",
        icon: "/assets/icons/instagram.svg",
        url: INSTAGRAM_STUDIO_URL,
        color: "bg-gradient-to-r from-[#FF9A3C] via-[#F54997] to-[#4B4DED] hover:from-[#FFB469] hover:via-[#FF63B0] hover:to-[#6B6DFF]",
        invert: true,
    },
    SocialLink {
        name: "WhatsApp",
        icon: "/assets/icons/whatsapp.svg",
        url: WHATSAPP_URL,
        color: "bg-green-500 hover:bg-green-600",
        invert: true,
    },
];

const PULSE_LAYERS: u32 = 2;
const PULSE_DURATION_S: f64 = 2.0;

/// Staggered glow rings behind a round button. Pointer events pass through.
fn pulse_rings() -> impl IntoView {
    view! {
        <For
            each=|| 0..PULSE_LAYERS
            key=|layer| *layer
            children=|layer| view! {
                <div
                    class="absolute inset-0 bg-blue-500 rounded-full blur-[2px] pointer-events-none pulse-ring"
                    style=format!(
                        "animation-delay:{}s;",
                        f64::from(layer) * PULSE_DURATION_S / f64::from(PULSE_LAYERS),
                    )
                />
            }
        />
    }
}

/// Floating contact menu pinned to the bottom-right corner. Expands into the
/// studio's social links; collapses again on outside clicks.
#[component]
pub fn SocialFloat() -> impl IntoView {
    let open = RwSignal::new(false);

    let root = NodeRef::<html::Div>::new();
    let _ = on_click_outside(root, move |_| {
        if open.get_untracked() {
            open.set(false);
        }
    });

    view! {
        <div node_ref=root class="fixed bottom-6 right-6 z-50">
            <div class="flex flex-col items-end gap-3">
                {move || open.get().then(|| view! {
                    <div class="flex flex-col items-end gap-3">
                        <For
                            each=|| SOCIAL_LINKS
                            key=|link| link.name
                            children=|link| view! {
                                <div class="relative fade-in-scale">
                                    {pulse_rings()}
                                    <a
                                        href=link.url
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label=link.name
                                        class=format!(
                                            "relative {} w-14 h-14 rounded-full flex items-center justify-center shadow-lg transition-transform hover:scale-110 active:scale-95",
                                            link.color,
                                        )
                                    >
                                        <img
                                            src=link.icon
                                            alt=format!("{} icon", link.name)
                                            class=if link.invert { "w-6 h-6 filter invert" } else { "w-6 h-6" }
                                        />
                                    </a>
                                </div>
                            }
                        />
                    </div>
                })}

                <button
                    on:click=move |_| open.update(|o| *o = !*o)
                    class="
                        relative w-14 h-14 rounded-full flex items-center justify-center
                        shadow-lg bg-blue-500 transition-all duration-200 overflow-visible
                        hover:scale-110 active:scale-90
                    "
                    aria-label="Open contact menu"
                >
                    // rings only invite attention while the menu is closed
                    {move || (!open.get()).then(pulse_rings)}
                    {move || if open.get() {
                        view! {
                            <svg
                                class="w-7 h-7 text-white rotate-90 transition-transform"
                                fill="none"
                                stroke="currentColor"
                                viewBox="0 0 24 24"
                            >
                                <path
                                    stroke-linecap="round"
                                    stroke-linejoin="round"
                                    stroke-width="2"
                                    d=icons::CLOSE
                                />
                            </svg>
                        }
                        .into_any()
                    } else {
                        view! { <img src="/assets/icons/contact.svg" alt="Contact" class="h-9 w-9"/> }
                            .into_any()
                    }}
                </button>
            </div>
        </div>
    }
}
