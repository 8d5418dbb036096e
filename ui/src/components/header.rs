use leptos::html;
use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::prelude::For;
use leptos::prelude::IntoAny;
use leptos::prelude::NodeRef;
use leptos::prelude::NodeRefAttribute;
use leptos::prelude::OnAttribute;
use leptos::prelude::StyleAttribute;
use leptos::prelude::view;
use leptos::prelude::{Effect, Get, GetUntracked, Memo, RwSignal, Set, Signal, Track};
use leptos::{IntoView, component};
use leptos_router::hooks::use_location;
use leptos_use::on_click_outside;
use web_sys::MouseEvent;

use crate::components::fade::FadeInScale;
use crate::components::icons::ChevronIcon;
use crate::nav::{DropdownState, MENU, NavEntry, NavLocation, is_active, link_target};

/// Sticky site header. Owns the canonical location and the single
/// open-dropdown value; both are handed down into the desktop and mobile
/// rows rather than living in any shared global.
#[component]
pub fn Header() -> impl IntoView {
    let location = use_location();
    let at = Memo::new(move |_| NavLocation::new(&location.pathname.get(), &location.hash.get()));

    let open = RwSignal::new(DropdownState::CLOSED);

    // any navigation, route or fragment alike, closes whatever is open
    Effect::new(move |_| {
        at.track();
        open.set(DropdownState::CLOSED);
    });

    // listener lives and dies with the header; clicks on the row or the
    // floating panel land inside the nav element and are ignored here
    let mobile_nav = NodeRef::<html::Nav>::new();
    let _ = on_click_outside(mobile_nav, move |_| {
        if open.get_untracked().is_any_open() {
            open.set(DropdownState::CLOSED);
        }
    });

    view! {
        <header class="bg-primary shadow-lg sticky top-0 z-50 rounded-b-xl font-Lora overflow-visible">
            <div class="w-full mx-auto px-3 lg:px-20 xl:px-40 overflow-visible">
                <div class="flex justify-between items-center h-24">
                    <div class="flex-shrink-0">
                        <a href="/" class="block w-24 lg:w-32">
                            <FadeInScale>
                                <img
                                    class="h-auto w-full rounded-lg"
                                    src="/assets/images/logoBg.png"
                                    alt="Grace logo"
                                />
                            </FadeInScale>
                        </a>
                    </div>

                    <nav class="hidden lg:block">
                        <div class="flex items-baseline gap-5 text-base font-medium">
                            <For
                                each=move || MENU
                                key=|entry| entry.name()
                                children=move |entry| view! { <DesktopNavItem entry at/> }
                            />
                        </div>
                    </nav>

                    <div class="lg:hidden">
                        <p class="text-lg italic font-medium">"Still you but better"</p>
                    </div>
                </div>

                <nav node_ref=mobile_nav class="lg:hidden w-full pb-3 relative z-50">
                    <div
                        class="flex items-baseline gap-2 text-xs font-medium overflow-x-auto"
                        style="overflow-y: visible"
                    >
                        <For
                            each=move || MENU
                            key=|entry| entry.name()
                            children=move |entry| view! { <MobileNavItem entry at open/> }
                        />
                    </div>
                </nav>
            </div>
        </header>
    }
}

#[component]
fn DesktopNavItem(entry: &'static NavEntry, at: Memo<NavLocation>) -> impl IntoView {
    let active = move || is_active(entry, &at.get());

    match *entry {
        NavEntry::Parent { name, path, children } => view! {
            <div class="group relative">
                <FadeInScale>
                    <a
                        href=link_target(path)
                        class=move || format!(
                            "smooth-underline hover:text-main px-3 py-2 rounded-md transition duration-150 flex items-center {}",
                            if active() { "active text-main" } else { "" },
                        )
                    >
                        {name}
                        <ChevronIcon open=Signal::derive(|| false)/>
                    </a>
                </FadeInScale>

                // hover-revealed, so the open-state machine stays out of it
                <div class="hidden group-hover:block absolute left-0 top-full">
                    <div class="
                        px-4 mt-6 w-56 bg-primary rounded-xl shadow-2xl py-2 z-20
                        transition duration-300 origin-top scale-y-0 group-hover:scale-y-100
                    ">
                        <For
                            each=move || children
                            key=|child| child.name
                            children=|child| view! {
                                <a
                                    href=child.href
                                    class="smooth-underline block py-2 hover:text-main px-2 rounded-lg transition duration-150"
                                >
                                    {child.name}
                                </a>
                            }
                        />
                    </div>
                </div>
            </div>
        }
        .into_any(),
        NavEntry::Leaf { name, href } => {
            let target = link_target(href);
            view! {
                <FadeInScale>
                    <a
                        href=target
                        class=move || format!(
                            "smooth-underline hover:text-main px-3 py-2 rounded-md transition duration-150 {}",
                            if active() { "text-main active" } else { "" },
                        )
                    >
                        {name}
                    </a>
                </FadeInScale>
            }
            .into_any()
        }
    }
}

#[component]
fn MobileNavItem(
    entry: &'static NavEntry,
    at: Memo<NavLocation>,
    open: RwSignal<DropdownState>,
) -> impl IntoView {
    let active = move || is_active(entry, &at.get());

    match *entry {
        NavEntry::Parent { name, children, .. } => {
            let button = NodeRef::<html::Button>::new();
            let panel_pos = RwSignal::new((0.0_f64, 0.0_f64));
            let this_open = Memo::new(move |_| open.get().is_open(name));

            let toggle = move |ev: MouseEvent| {
                ev.prevent_default();
                // anchor the floating panel under the button in page
                // coordinates; the scroll row would clip an absolute one
                if let Some(btn) = button.get_untracked() {
                    let rect = btn.get_bounding_client_rect();
                    let (scroll_x, scroll_y) = window_scroll();
                    panel_pos.set((rect.bottom() + scroll_y + 4.0, rect.left() + scroll_x));
                }
                open.set(open.get_untracked().toggled(name));
            };

            view! {
                <div class="relative z-50">
                    <button
                        node_ref=button
                        on:click=toggle
                        class=move || format!(
                            "smooth-underline hover:text-main px-2 py-1 rounded-md transition duration-150 flex items-center whitespace-nowrap {}",
                            if active() { "active text-main" } else { "" },
                        )
                    >
                        {name}
                        <ChevronIcon open=Signal::derive(move || this_open.get())/>
                    </button>
                </div>
                {move || this_open.get().then(|| view! {
                    <div
                        class="fixed w-48 bg-primary rounded-xl shadow-2xl py-2 z-[9999]"
                        style=move || format!(
                            "top:{}px;left:{}px;",
                            panel_pos.get().0,
                            panel_pos.get().1,
                        )
                    >
                        <For
                            each=move || children
                            key=|child| child.name
                            children=move |child| view! {
                                <a
                                    href=child.href
                                    on:click=move |_| open.set(DropdownState::CLOSED)
                                    class="smooth-underline block py-2 hover:text-main px-3 rounded-lg transition duration-150 text-xs"
                                >
                                    {child.name}
                                </a>
                            }
                        />
                    </div>
                })}
            }
            .into_any()
        }
        NavEntry::Leaf { name, href } => {
            let target = link_target(href);
            view! {
                <a
                    href=target
                    // same-location taps fire no navigation event, so close here
                    on:click=move |_| open.set(DropdownState::CLOSED)
                    class=move || format!(
                        "smooth-underline hover:text-main px-2 py-1 rounded-md transition duration-150 whitespace-nowrap {}",
                        if active() { "text-main active" } else { "" },
                    )
                >
                    {name}
                </a>
            }
            .into_any()
        }
    }
}

/// Current window scroll offsets, `(x, y)`.
fn window_scroll() -> (f64, f64) {
    web_sys::window()
        .map(|win| {
            (
                win.scroll_x().unwrap_or_default(),
                win.scroll_y().unwrap_or_default(),
            )
        })
        .unwrap_or_default()
}
