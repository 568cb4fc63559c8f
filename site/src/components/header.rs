use crate::Route;
use crate::content::{BRAND_MARK, BRAND_SUFFIX};
use leptos::prelude::*;

/// Fixed translucent top bar with the home link.
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header id="top" class="fixed top-0 left-0 right-0 z-50 bg-mcqueen-dark/95 backdrop-blur-sm">
            <div class="container mx-auto px-6 py-4">
                <a href=Route::Home.path() class="flex items-center gap-1" aria-label="Home">
                    <span class="text-mcqueen-red font-bold text-xl tracking-tight">{BRAND_MARK}</span>
                    <span class="text-gray-400 font-light text-xl">"|"</span>
                    <span class="text-gray-400 font-light text-xl tracking-wide">{BRAND_SUFFIX}</span>
                </a>
            </div>
        </header>
    }
}
