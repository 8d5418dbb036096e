use leptos::IntoView;
use leptos::component;
use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::view;
use leptos_router::components::Route;
use leptos_router::components::Routes;
use leptos_router::path;

use crate::pages::{
    about::About, contact::Contact, giftcards::GiftCards, home::Home, terms::Terms,
    treatments::Treatments, videos::Videos,
};

#[component]
pub fn RoutesMenu() -> impl IntoView {
    view! {
      <Routes fallback=NotFound>
        <Route path=path!("")                      view=Home       />
        <Route path=path!("/about")                view=About      />
        <Route path=path!("/treatments")           view=Treatments />
        <Route path=path!("/giftcards")            view=GiftCards  />
        <Route path=path!("/terms-and-conditions") view=Terms      />
        <Route path=path!("/contact")              view=Contact    />
        <Route path=path!("/videos")               view=Videos     />
      </Routes>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
      <div class="py-24 px-6 text-center">
        <h1 class="text-4xl text-main mb-4">"404 – page not found"</h1>
        <p class="text-gray-600 mb-8">"That page has moved on. The treatments are all still here."</p>
        <a href="/" class="smooth-underline text-main font-medium">"Back to the start"</a>
      </div>
    }
}
