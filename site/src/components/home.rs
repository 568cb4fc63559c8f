// Home page - every section, top to bottom
use super::{
    CloudEngineering, CyberSecurity, DevSecOps, DoDSupport, Footer, Header, Hero, JoinTeam,
    Partner, ServicesGrid, TacticalEdge,
};
use leptos::prelude::*;

#[component]
pub fn HomePage(
    /// Year in the footer copyright line
    year: i32,
) -> impl IntoView {
    view! {
        <div class="min-h-screen">
            <Header />
            <main>
                <Hero />
                <JoinTeam />
                <CloudEngineering />
                <CyberSecurity />
                <DevSecOps />
                <TacticalEdge />
                <ServicesGrid />
                <DoDSupport />
                <Partner />
            </main>
            <Footer year=year />
        </div>
    }
}
