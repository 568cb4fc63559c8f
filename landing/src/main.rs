// McQueen Solutions - browser entry point
//
// Mounts the same components the static build renders, behind a
// client-side router. Build with `trunk serve` from this directory.

use leptos::prelude::*;
use leptos_router::components::{A, Route, Router, Routes};
use leptos_router::path;
use mcqueen_site::components::HomePage;
use mcqueen_site::styles::SITE_CSS;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    // `time` has no clock on wasm32-unknown-unknown; ask the browser
    let year = js_sys::Date::new_0().get_full_year() as i32;

    view! {
        <style>{SITE_CSS}</style>
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=move || view! { <HomePage year=year /> } />
            </Routes>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <section class="py-20 bg-white">
            <div class="container mx-auto px-6 text-center">
                <h1 class="text-3xl font-bold text-gray-900 mb-6">"Page not found"</h1>
                <A href=mcqueen_site::Route::Home.path()>"Back to home"</A>
            </div>
        </section>
    }
}
