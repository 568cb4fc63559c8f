//! Inline stroke SVG icons (Lucide, 24x24 grid).
//!
//! Only the glyphs the page uses are included. Each renders with a
//! `data-icon` attribute naming the glyph.

use leptos::prelude::*;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Glyph {
    Code,
    Brain,
    Cloud,
    Shield,
    Network,
    Box,
}

impl Glyph {
    pub fn name(self) -> &'static str {
        match self {
            Glyph::Code => "code",
            Glyph::Brain => "brain",
            Glyph::Cloud => "cloud",
            Glyph::Shield => "shield",
            Glyph::Network => "network",
            Glyph::Box => "box",
        }
    }

    /// SVG path data (`d` attributes), drawn in order.
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            Glyph::Code => ICON_CODE,
            Glyph::Brain => ICON_BRAIN,
            Glyph::Cloud => ICON_CLOUD,
            Glyph::Shield => ICON_SHIELD,
            Glyph::Network => ICON_NETWORK,
            Glyph::Box => ICON_BOX,
        }
    }
}

/// Renders a glyph as an inline SVG.
///
/// ```rust,ignore
/// view! { <Icon glyph=Glyph::Cloud class="size-8 text-mcqueen-red" /> }
/// ```
#[component]
pub fn Icon(
    glyph: Glyph,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let class = if class.is_empty() {
        format!("lucide lucide-{}", glyph.name())
    } else {
        format!("lucide lucide-{} {}", glyph.name(), class)
    };

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width="24"
            height="24"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            data-icon=glyph.name()
            class=class
        >
            {glyph.paths().iter().copied().map(|d| view! { <path d=d></path> }).collect::<Vec<_>>()}
        </svg>
    }
}

// =============================================================================
// Lucide icons - https://lucide.dev/
// =============================================================================

const ICON_CODE: &[&str] = &["m16 18 6-6-6-6", "m8 6-6 6 6 6"];

const ICON_BRAIN: &[&str] = &[
    "M12 5a3 3 0 1 0-5.997.125 4 4 0 0 0-2.526 5.77 4 4 0 0 0 .556 6.588A4 4 0 1 0 12 18Z",
    "M12 5a3 3 0 1 1 5.997.125 4 4 0 0 1 2.526 5.77 4 4 0 0 1-.556 6.588A4 4 0 1 1 12 18Z",
    "M15 13a4.5 4.5 0 0 1-3-4 4.5 4.5 0 0 1-3 4",
    "M17.599 6.5a3 3 0 0 0 .399-1.375",
    "M6.003 5.125A3 3 0 0 0 6.401 6.5",
    "M3.477 10.896a4 4 0 0 1 .585-.396",
    "M19.938 10.5a4 4 0 0 1 .585.396",
    "M6 18a4 4 0 0 1-1.967-.516",
    "M19.967 17.484A4 4 0 0 1 18 18",
];

const ICON_CLOUD: &[&str] = &["M17.5 19H9a7 7 0 1 1 6.71-9h1.79a4.5 4.5 0 1 1 0 9Z"];

const ICON_SHIELD: &[&str] = &[
    "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z",
];

const ICON_NETWORK: &[&str] = &[
    "M17 16h4a1 1 0 0 1 1 1v4a1 1 0 0 1-1 1h-4a1 1 0 0 1-1-1v-4a1 1 0 0 1 1-1z",
    "M3 16h4a1 1 0 0 1 1 1v4a1 1 0 0 1-1 1H3a1 1 0 0 1-1-1v-4a1 1 0 0 1 1-1z",
    "M10 2h4a1 1 0 0 1 1 1v4a1 1 0 0 1-1 1h-4a1 1 0 0 1-1-1V3a1 1 0 0 1 1-1z",
    "M5 16v-3a1 1 0 0 1 1-1h12a1 1 0 0 1 1 1v3",
    "M12 12V8",
];

const ICON_BOX: &[&str] = &[
    "M21 8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16Z",
    "m3.3 7 8.7 5 8.7-5",
    "M12 22V12",
];

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;
    use std::collections::HashSet;

    const ALL: [Glyph; 6] = [
        Glyph::Code,
        Glyph::Brain,
        Glyph::Cloud,
        Glyph::Shield,
        Glyph::Network,
        Glyph::Box,
    ];

    #[test]
    fn glyph_names_and_paths_are_distinct() {
        let names: HashSet<_> = ALL.iter().map(|g| g.name()).collect();
        let paths: HashSet<_> = ALL.iter().map(|g| g.paths()).collect();
        assert_eq!(names.len(), ALL.len());
        assert_eq!(paths.len(), ALL.len());
    }

    #[test]
    fn renders_svg_with_every_path() {
        let html = view! { <Icon glyph=Glyph::Network class="size-24" /> }.to_html();

        assert!(html.starts_with("<svg"));
        assert!(html.contains("data-icon=\"network\""));
        assert!(html.contains("class=\"lucide lucide-network size-24\""));
        assert_eq!(html.matches("<path").count(), Glyph::Network.paths().len());
    }

    #[test]
    fn class_defaults_to_glyph_classes() {
        let html = view! { <Icon glyph=Glyph::Code /> }.to_html();
        assert!(html.contains("class=\"lucide lucide-code\""));
    }
}
