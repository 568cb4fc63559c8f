use super::{Card, CardContent, CardDescription, CardHeader, CardTitle, Glyph, Icon};
use crate::content::{FEATURES, HERO_LEAD, HERO_TITLE};
use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="hero" class="relative bg-mcqueen-dark pt-24 pb-16 overflow-hidden">
            // Background gradient overlay
            <div class="absolute inset-0 bg-gradient-to-br from-mcqueen-dark via-mcqueen-dark to-slate-900"></div>

            <div class="container mx-auto px-6 relative z-10">
                <div class="max-w-3xl mb-16">
                    <h1 class="text-4xl md:text-5xl font-bold text-white mb-6">{HERO_TITLE}</h1>
                    <p class="text-gray-300 text-lg leading-relaxed">{HERO_LEAD}</p>
                </div>

                <div class="grid md:grid-cols-3 gap-6">
                    {FEATURES
                        .iter()
                        .map(|f| view! {
                            <FeatureCard glyph=f.glyph title=f.title description=f.description />
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

/// Icon + title + description card used in the hero.
#[component]
pub fn FeatureCard(glyph: Glyph, title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <Card class="bg-slate-800/50 border-slate-700 text-white">
            <CardHeader>
                <div class="flex items-center gap-3">
                    <Icon glyph=glyph class="size-8 text-mcqueen-red" />
                    <CardTitle class="text-xl text-white">{title}</CardTitle>
                </div>
            </CardHeader>
            <CardContent>
                <CardDescription class="text-gray-400 text-sm leading-relaxed">
                    {description}
                </CardDescription>
            </CardContent>
        </Card>
    }
}
