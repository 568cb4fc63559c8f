//! Decorative illustration for capability sections.

use super::{Glyph, Icon};
use crate::SiteError;
use leptos::prelude::*;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The four illustration styles, one per capability section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IllustrationVariant {
    Cloud,
    Security,
    DevOps,
    Tactical,
}

impl IllustrationVariant {
    pub const ALL: [IllustrationVariant; 4] = [
        IllustrationVariant::Cloud,
        IllustrationVariant::Security,
        IllustrationVariant::DevOps,
        IllustrationVariant::Tactical,
    ];

    pub fn label(self) -> &'static str {
        match self {
            IllustrationVariant::Cloud => "cloud",
            IllustrationVariant::Security => "security",
            IllustrationVariant::DevOps => "devops",
            IllustrationVariant::Tactical => "tactical",
        }
    }

    pub fn glyph(self) -> Glyph {
        match self {
            IllustrationVariant::Cloud => Glyph::Cloud,
            IllustrationVariant::Security => Glyph::Shield,
            IllustrationVariant::DevOps => Glyph::Network,
            IllustrationVariant::Tactical => Glyph::Box,
        }
    }
}

impl fmt::Display for IllustrationVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for IllustrationVariant {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IllustrationVariant::ALL
            .into_iter()
            .find(|v| v.label() == s)
            .ok_or_else(|| SiteError::UnknownVariant(s.to_string()))
    }
}

#[component]
pub fn ServiceIllustration(variant: IllustrationVariant) -> impl IntoView {
    view! {
        <div
            class="w-64 h-64 bg-gradient-to-br from-slate-100 to-slate-200 rounded-2xl flex items-center justify-center shadow-lg"
            data-variant=variant.label()
        >
            <Icon glyph=variant.glyph() class="size-24 text-mcqueen-red" />
        </div>
    }
}
