//! Capability sections - text block beside an illustration.
//!
//! The four sections share one layout and alternate the illustration between
//! the right and left column, and the background between white and gray.

use super::ServiceIllustration;
use crate::content::{CLOUD_ENGINEERING, CYBER_SECURITY, Capability, DEVSECOPS, TACTICAL_EDGE};
use leptos::prelude::*;
use serde::Serialize;

/// Column the illustration occupies on wide screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    Right,
    Left,
}

impl Placement {
    pub fn as_str(self) -> &'static str {
        match self {
            Placement::Right => "right",
            Placement::Left => "left",
        }
    }
}

/// Section background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    White,
    Muted,
}

impl Tone {
    fn section_class(self) -> &'static str {
        match self {
            Tone::White => "py-20 bg-white",
            Tone::Muted => "py-20 bg-gray-50",
        }
    }
}

#[component]
pub fn CapabilitySection(capability: Capability) -> impl IntoView {
    let Capability {
        id,
        title,
        body,
        variant,
        placement,
        tone,
    } = capability;

    // Left placement puts the illustration first in document order and
    // swaps the columns back on narrow screens.
    let (text_class, art_class) = match placement {
        Placement::Right => ("", "flex justify-center"),
        Placement::Left => ("order-1 md:order-2", "flex justify-center order-2 md:order-1"),
    };

    let text = view! {
        <div class=text_class>
            <h2 class="text-3xl font-bold text-gray-900 mb-6">{title}</h2>
            <p class="text-gray-600 leading-relaxed">{body}</p>
        </div>
    };
    let art = view! {
        <div class=art_class>
            <ServiceIllustration variant=variant />
        </div>
    };

    let columns = match placement {
        Placement::Right => view! { {text} {art} }.into_any(),
        Placement::Left => view! { {art} {text} }.into_any(),
    };

    view! {
        <section id=id class=tone.section_class() data-illustration=placement.as_str()>
            <div class="container mx-auto px-6">
                <div class="grid md:grid-cols-2 gap-12 items-center">{columns}</div>
            </div>
        </section>
    }
}

#[component]
pub fn CloudEngineering() -> impl IntoView {
    view! { <CapabilitySection capability=CLOUD_ENGINEERING /> }
}

#[component]
pub fn CyberSecurity() -> impl IntoView {
    view! { <CapabilitySection capability=CYBER_SECURITY /> }
}

#[component]
pub fn DevSecOps() -> impl IntoView {
    view! { <CapabilitySection capability=DEVSECOPS /> }
}

#[component]
pub fn TacticalEdge() -> impl IntoView {
    view! { <CapabilitySection capability=TACTICAL_EDGE /> }
}
