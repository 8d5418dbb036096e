use leptos::prelude::Children;
use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::prelude::StyleAttribute;
use leptos::view;
use leptos::{IntoView, component};

/// Wraps its children in the `fade-in-scale` entrance animation. `delay_ms`
/// staggers cards that enter as a group.
#[component]
pub fn FadeInScale(
    #[prop(optional)] class: Option<&'static str>,
    #[prop(default = 0)] delay_ms: u32,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=format!("fade-in-scale {}", class.unwrap_or_default())
            style=format!("animation-delay:{delay_ms}ms;")
        >
            {children()}
        </div>
    }
}
