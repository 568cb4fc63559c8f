use super::Button;
use crate::content::{PARTNER_ACTION, PARTNER_LEAD, PARTNER_TITLE};
use leptos::prelude::*;

#[component]
pub fn Partner() -> impl IntoView {
    view! {
        <section id="partner" class="py-20 bg-slate-900">
            <div class="container mx-auto px-6 text-center">
                <h2 class="text-3xl font-bold text-white mb-4">{PARTNER_TITLE}</h2>
                <p class="text-gray-400 mb-8 max-w-2xl mx-auto">{PARTNER_LEAD}</p>
                <Button class="bg-mcqueen-red hover:bg-mcqueen-red/90 text-white">{PARTNER_ACTION}</Button>
            </div>
        </section>
    }
}
