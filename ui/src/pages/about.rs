use leptos::IntoView;
use leptos::component;
use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::prelude::For;
use leptos::view;

use crate::components::FadeInScale;

struct Award {
    image: &'static str,
    alt: &'static str,
    caption: &'static str,
}

const AWARDS: &[Award] = &[
    Award {
        image: "/assets/images/awards01.webp",
        alt: "Semi-Permanent Make Up Specialist of the Year award",
        caption: "Semi-Permanent Make Up Specialist of the Year 2025",
    },
    Award {
        image: "/assets/images/awards02.webp",
        alt: "Shaded Brows winner at the Milan Biotek Championship",
        caption: "Shaded Brows Winner at Milan Biotek Championship 2024",
    },
    Award {
        image: "/assets/images/awards03.webp",
        alt: "England's Business Awards finalist",
        caption: "Finalist as Yorkshire Aesthetician 2025",
    },
    Award {
        image: "/assets/images/awards04.webp",
        alt: "Guest appearance at Oceanic Events",
        caption: "Guest at Oceanic Events",
    },
];

#[component]
pub fn About() -> impl IntoView {
    view! {
        <div class="bg-secondary py-6 lg:py-12 px-10 lg:px-20">
            <div class="flex flex-col md:flex-row mx-auto max-w-7xl relative">
                <FadeInScale class="w-full lg:w-2/5 h-[530px] lg:h-[720px] relative">
                    <img
                        src="/assets/images/about/about1.png"
                        alt="Grace, founder of the studio"
                        class="w-full h-full object-contain"
                    />
                    <div class="fluid-image-overlay"></div>
                </FadeInScale>
                <FadeInScale class="
                    w-full lg:w-3/5 p-4 lg:p-10 flex flex-col justify-center gap-4
                    text-sm lg:text-base absolute lg:relative bottom-0 text-gray-300 lg:text-main
                ">
                    <p class="italic max-w-2xl text-sm lg:text-xl mx-auto">
                        "“With experience in the beauty industry since 2012, I aim to bring out the most natural beauty in my clients without turning them into someone else – Still you, but better.”"
                    </p>
                    <div class="italic max-w-2xl text-sm lg:text-xl mx-auto">"- Grace -"</div>
                </FadeInScale>
            </div>
        </div>

        <div class="py-6 lg:py-12 px-4 lg:px-20 gap-10 lg:gap-16 w-full bg-primary">
            <div class="mx-auto max-w-7xl flex flex-col lg:flex-row gap-4 mb-8 lg:mb-12 items-center">
                <h1 class="text-2xl lg:text-4xl mb-3 text-main">
                    "The " <span class="italic font-semibold">Grace</span> " Journey"
                </h1>
            </div>
            <div class="mx-auto max-w-7xl grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                <FadeInScale
                    delay_ms=100
                    class="bg-secondary p-6 rounded-lg shadow-md text-center flex flex-col items-center justify-center min-h-[250px]"
                >
                    <h3 class="text-xl font-semibold text-main mb-3">Studies</h3>
                    <div class="text-sm text-gray-700 text-left">
                        <ul class="list-disc list-inside space-y-1">
                            <li>"2012: Makeup Artist course in Ho Chi Minh, Vietnam"</li>
                            <li>"2012-2014: Makeup freelancer and founder of Khanh Tran Wedding Studio"</li>
                            <li>"2014: Phibrows Microblading and Permanent Makeup courses in Ho Chi Minh"</li>
                            <li>"2014-2024: Practising and instructing Makeup & Permanent Makeup in Khanh Tran Beauty Academy in Vietnam"</li>
                            <li>"2025: VTCT Level 4 Certificate in Micropigmentation in Leeds"</li>
                            <li>"2025: Makeup Diploma Course from Elizabeth Sands Beauty School."</li>
                        </ul>
                    </div>
                </FadeInScale>

                <FadeInScale
                    delay_ms=200
                    class="bg-secondary p-6 rounded-lg shadow-md text-center flex flex-col items-center justify-center min-h-[250px]"
                >
                    <h3 class="text-xl font-semibold text-main mb-3">Skills</h3>
                    <div class="text-sm text-gray-700 text-left">
                        <ul class="list-disc list-inside space-y-1">
                            <li>"Makeup: Day/night makeup, Event Makeup, Shooting Makeup, Bridal Makeup, SFX Makeup, Costume Makeup"</li>
                            <li>"Permanent Makeup: Hairstroke Eyebrows, Ombre Eyebrows, Permanent Lipstick, Permanent Eyeliner"</li>
                        </ul>
                    </div>
                </FadeInScale>

                <FadeInScale
                    delay_ms=300
                    class="bg-secondary p-6 rounded-lg shadow-md text-center flex flex-col items-center justify-center min-h-[250px]"
                >
                    <h3 class="text-xl font-semibold text-main mb-3">Experience</h3>
                    <p class="text-sm text-gray-700">
                        "Since 2012, I worked in various medical clinics, gaining hands-on experience with advanced medical lasers and diverse skin procedures. I have helped clients from addressing complex skin concerns to achieving their desired results."
                    </p>
                </FadeInScale>

                <FadeInScale
                    delay_ms=400
                    class="bg-secondary p-6 rounded-lg shadow-md text-center flex flex-col items-center justify-center min-h-[250px]"
                >
                    <h3 class="text-xl font-semibold text-main mb-3">Makeup</h3>
                    <p class="text-sm text-gray-700 mb-2">
                        "In 2018, I decided to blend my knowledge of beauty with my expertise in makeup, but with a twist. I decided to focus on makeup that lasts."
                    </p>
                    <p class="italic text-sm text-gray-700 font-semibold">
                        "This is how Grace came to life."
                    </p>
                </FadeInScale>
            </div>
        </div>

        <div class="py-6 lg:py-12 px-4 lg:px-20 w-full bg-secondary">
            <div class="mx-auto max-w-7xl flex flex-col lg:flex-row gap-4 mb-8 lg:mb-12 items-center">
                <h2 class="text-2xl lg:text-4xl mb-3 italic font-semibold text-main">
                    "Awards & Recognition"
                </h2>
            </div>
            <div class="mx-auto max-w-7xl grid grid-cols-1 md:grid-cols-2 gap-5 lg:gap-10">
                <For
                    each=|| AWARDS.iter().enumerate()
                    key=|(_, award)| award.caption
                    children=|(i, award)| {
                        let delay_ms = (i as u32 + 1) * 100;
                        view! {
                            <FadeInScale
                                delay_ms
                                class="bg-primary p-4 lg:p-10 rounded-lg shadow-sm flex flex-col items-center text-center"
                            >
                                <img
                                    src=award.image
                                    alt=award.alt
                                    class="max-h-72 w-72 h-auto object-cover mb-5 lg:mb-10 rounded"
                                />
                                <p class="text-main text-sm lg:text-base font-medium italic">
                                    {award.caption}
                                </p>
                            </FadeInScale>
                        }
                    }
                />
            </div>
        </div>
    }
}
