//! Inline SVG glyphs shared by the header and the floating contact widget.

use leptos::prelude::ClassAttribute;
use leptos::prelude::CustomAttribute;
use leptos::prelude::ElementChild;
use leptos::prelude::Get;
use leptos::prelude::Signal;
use leptos::view;
use leptos::{IntoView, component};

/// Downward chevron marking entries that own a submenu.
pub const CHEVRON_DOWN: &str = "M19 9l-7 7-7-7";

/// Close cross shown on the contact widget while it is expanded.
pub const CLOSE: &str = "M6 18L18 6M6 6l12 12";

/// Small chevron that flips upward while its dropdown is open.
#[component]
pub fn ChevronIcon(open: Signal<bool>) -> impl IntoView {
    view! {
        <svg
            class=move || format!(
                "ml-1 h-4 w-4 transform transition duration-150 {}",
                if open.get() { "rotate-180" } else { "" },
            )
            fill="none"
            stroke="currentColor"
            viewBox="0 0 24 24"
        >
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=CHEVRON_DOWN/>
        </svg>
    }
}
