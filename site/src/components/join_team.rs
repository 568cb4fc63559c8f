use super::Button;
use crate::content::{JOIN_TEAM_ACTION, JOIN_TEAM_TITLE};
use leptos::prelude::*;

#[component]
pub fn JoinTeam() -> impl IntoView {
    view! {
        <section id="join-team" class="bg-gray-100 py-16">
            <div class="container mx-auto px-6 text-center">
                <h2 class="text-3xl font-bold text-gray-900 mb-6">{JOIN_TEAM_TITLE}</h2>
                <Button class="bg-mcqueen-red hover:bg-mcqueen-red/90 text-white">{JOIN_TEAM_ACTION}</Button>
            </div>
        </section>
    }
}
