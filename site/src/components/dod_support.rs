use crate::content::DOD_SUPPORT_TITLE;
use leptos::prelude::*;

#[component]
pub fn DoDSupport() -> impl IntoView {
    view! {
        <section id="dod-support" class="py-16 bg-mcqueen-dark">
            <div class="container mx-auto px-6 text-center">
                <h2 class="text-2xl font-semibold text-white">{DOD_SUPPORT_TITLE}</h2>
            </div>
        </section>
    }
}
