use super::{Card, CardContent, CardDescription, CardHeader, CardTitle};
use crate::content::{SERVICES, ServiceEntry};
use leptos::prelude::*;

/// Two-column grid of service cards with their technology tags.
#[component]
pub fn ServicesGrid() -> impl IntoView {
    view! {
        <section id="services" class="py-20 bg-white">
            <div class="container mx-auto px-6">
                <div class="grid md:grid-cols-2 gap-8">
                    {SERVICES
                        .iter()
                        .copied()
                        .map(|service| view! { <ServiceCard service=service /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ServiceCard(service: ServiceEntry) -> impl IntoView {
    view! {
        <div data-service=service.title>
            <Card class="border-gray-200">
                <CardHeader>
                    <CardTitle class="text-xl text-gray-900">{service.title}</CardTitle>
                </CardHeader>
                <CardContent class="space-y-4">
                    <CardDescription class="text-gray-600 leading-relaxed">
                        {service.description}
                    </CardDescription>
                    <div class="flex gap-4 pt-2">
                        {service
                            .logos
                            .iter()
                            .copied()
                            .map(|logo| view! {
                                <span class="px-3 py-1 bg-gray-100 rounded text-sm text-gray-600 font-medium" data-tag=logo>
                                    {logo}
                                </span>
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </CardContent>
            </Card>
        </div>
    }
}
