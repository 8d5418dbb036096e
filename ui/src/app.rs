use leptos::*;
use leptos::prelude::ElementChild;
use leptos::prelude::ClassAttribute;
use crate::components::{Header, SocialFloat, social_float};
use crate::routes::RoutesMenu;
use leptos_router::components::Router;

use leptos_meta::provide_meta_context;
use leptos_meta::Stylesheet;
use leptos_meta::Title;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();      // NOTE: sets up <head> manager

    view! {
      <Stylesheet href="/assets/css/site.css"/>
      <Title text="Grace | Beauty & Permanent Makeup"/>

      <Router>
        <Header/>

        <main class="min-h-screen bg-secondary font-Lora">
          <RoutesMenu/>
        </main>

        <footer class="bg-primary text-main py-8 font-Lora">
          <div class="max-w-7xl mx-auto px-6 flex flex-col sm:flex-row justify-between gap-8">
            <div>
              <p class="text-xl italic font-semibold">Grace</p>
              <p class="text-sm">"Still you, but better."</p>
            </div>
            <nav class="flex gap-6 underline-offset-4 items-center">
              <a href=social_float::INSTAGRAM_URL target="_blank">Instagram</a>
              <a href=social_float::WHATSAPP_URL target="_blank">WhatsApp</a>
              <a href="/contact">Contact</a>
            </nav>
          </div>
          <p class="text-center text-sm mt-8">"© 2026 Grace Beauty Studio"</p>
        </footer>

        <SocialFloat/>
      </Router>
    }
}
