//! Button and card primitives.
//!
//! Base classes and `data-slot` markers follow the shadcn/ui design system the
//! page was laid out with; callers append their own classes.

use leptos::prelude::*;

const BUTTON_BASE: &str = "inline-flex items-center justify-center gap-2 whitespace-nowrap rounded-md text-sm font-medium transition-all h-9 px-4 py-2";
const CARD_BASE: &str = "bg-card text-card-foreground flex flex-col gap-6 rounded-xl border py-6 shadow-sm";
const CARD_HEADER_BASE: &str = "grid auto-rows-min items-start gap-1.5 px-6";
const CARD_TITLE_BASE: &str = "leading-none font-semibold";
const CARD_DESCRIPTION_BASE: &str = "text-muted-foreground text-sm";
const CARD_CONTENT_BASE: &str = "px-6";

/// Join base classes with caller classes.
///
/// A base class is dropped when a caller class sets the same property
/// (background color, text color, font size, ...), so the caller wins
/// regardless of rule order in the stylesheet.
pub fn cn(base: &str, extra: &str) -> String {
    let extra: Vec<&str> = extra.split_whitespace().collect();
    let overridden: Vec<&str> = extra.iter().filter_map(|c| utility_group(c)).collect();

    base.split_whitespace()
        .filter(|c| utility_group(c).is_none_or(|g| !overridden.contains(&g)))
        .chain(extra.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Property a utility class sets, for the groups that can conflict.
/// Variant-prefixed classes (`hover:`, `md:`) never conflict with base classes.
pub(crate) fn utility_group(class: &str) -> Option<&'static str> {
    if class.contains(':') {
        return None;
    }
    if let Some(rest) = class.strip_prefix("text-") {
        return Some(match rest {
            "xs" | "sm" | "base" | "lg" | "xl" | "2xl" | "3xl" | "4xl" | "5xl" | "6xl" => "font-size",
            "left" | "center" | "right" | "justify" => "text-align",
            _ => "text-color",
        });
    }
    if let Some(rest) = class.strip_prefix("bg-") {
        return (!rest.starts_with("gradient-")).then_some("background-color");
    }
    if let Some(rest) = class.strip_prefix("border-") {
        let width = matches!(rest, "t" | "b" | "l" | "r" | "x" | "y" | "0" | "2" | "4" | "8");
        return (!width).then_some("border-color");
    }
    if let Some(rest) = class.strip_prefix("leading-") {
        return (!rest.is_empty()).then_some("line-height");
    }
    if class.starts_with("font-") {
        return Some("font-weight");
    }
    None
}

#[component]
pub fn Button(#[prop(default = "")] class: &'static str, children: Children) -> impl IntoView {
    view! {
        <button type="button" data-slot="button" class=cn(BUTTON_BASE, class)>
            {children()}
        </button>
    }
}

#[component]
pub fn Card(#[prop(default = "")] class: &'static str, children: Children) -> impl IntoView {
    view! {
        <div data-slot="card" class=cn(CARD_BASE, class)>
            {children()}
        </div>
    }
}

#[component]
pub fn CardHeader(#[prop(default = "")] class: &'static str, children: Children) -> impl IntoView {
    view! {
        <div data-slot="card-header" class=cn(CARD_HEADER_BASE, class)>
            {children()}
        </div>
    }
}

#[component]
pub fn CardTitle(#[prop(default = "")] class: &'static str, children: Children) -> impl IntoView {
    view! {
        <div data-slot="card-title" class=cn(CARD_TITLE_BASE, class)>
            {children()}
        </div>
    }
}

#[component]
pub fn CardDescription(
    #[prop(default = "")] class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div data-slot="card-description" class=cn(CARD_DESCRIPTION_BASE, class)>
            {children()}
        </div>
    }
}

#[component]
pub fn CardContent(#[prop(default = "")] class: &'static str, children: Children) -> impl IntoView {
    view! {
        <div data-slot="card-content" class=cn(CARD_CONTENT_BASE, class)>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cn_appends_extra_classes() {
        assert_eq!(cn("a b", "c"), "a b c");
        assert_eq!(cn("a b", "  "), "a b");
        assert_eq!(cn("a", ""), "a");
    }

    #[test]
    fn caller_classes_replace_conflicting_base_classes() {
        assert_eq!(
            cn(CARD_BASE, "bg-slate-800/50 border-slate-700 text-white"),
            "flex flex-col gap-6 rounded-xl border py-6 shadow-sm bg-slate-800/50 border-slate-700 text-white"
        );
        assert_eq!(
            cn(CARD_DESCRIPTION_BASE, "text-gray-400 text-sm leading-relaxed"),
            "text-gray-400 text-sm leading-relaxed"
        );
        // Variant-prefixed classes leave the base alone
        assert_eq!(cn("bg-card", "hover:bg-white"), "bg-card hover:bg-white");
    }

    #[test]
    fn utility_groups() {
        assert_eq!(utility_group("bg-card"), Some("background-color"));
        assert_eq!(utility_group("bg-gradient-to-br"), None);
        assert_eq!(utility_group("text-sm"), Some("font-size"));
        assert_eq!(utility_group("text-center"), Some("text-align"));
        assert_eq!(utility_group("text-muted-foreground"), Some("text-color"));
        assert_eq!(utility_group("border"), None);
        assert_eq!(utility_group("border-t"), None);
        assert_eq!(utility_group("border-slate-800"), Some("border-color"));
        assert_eq!(utility_group("md:order-2"), None);
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn no_element_on_the_page_carries_conflicting_utilities() {
        use crate::components::HomePage;
        use leptos::tachys::view::RenderHtml;

        let html = view! { <HomePage year=2025 /> }.to_html();

        for classes in html.split("class=\"").skip(1).filter_map(|rest| rest.split('"').next()) {
            let mut seen: Vec<&str> = Vec::new();
            for group in classes.split_whitespace().filter_map(utility_group) {
                assert!(!seen.contains(&group), "conflicting {group} in {classes:?}");
                seen.push(group);
            }
        }
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn hero_card_keeps_its_dark_background_and_white_text() {
        use crate::components::{FeatureCard, Glyph};
        use leptos::tachys::view::RenderHtml;

        let html = view! { <FeatureCard glyph=Glyph::Code title="Code" description="d" /> }.to_html();
        let card = html
            .split("data-slot=\"card\"")
            .nth(1)
            .and_then(|rest| rest.split("class=\"").nth(1))
            .and_then(|rest| rest.split('"').next())
            .expect("card classes");

        assert!(card.contains("bg-slate-800/50") && card.contains("text-white"));
        assert!(!card.contains("bg-card") && !card.contains("text-card-foreground"));
        assert!(!html.contains("text-muted-foreground"));
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn card_parts_nest_with_slots() {
        use leptos::tachys::view::RenderHtml;

        let html = view! {
            <Card class="border-gray-200">
                <CardHeader>
                    <CardTitle class="text-xl">"Title"</CardTitle>
                </CardHeader>
                <CardContent>
                    <CardDescription>"Body"</CardDescription>
                </CardContent>
            </Card>
        }
        .to_html();

        let card = html.find("data-slot=\"card\"").expect("card");
        let header = html.find("data-slot=\"card-header\"").expect("header");
        let title = html.find("data-slot=\"card-title\"").expect("title");
        let content = html.find("data-slot=\"card-content\"").expect("content");
        let description = html.find("data-slot=\"card-description\"").expect("description");

        assert!(card < header && header < title && title < content && content < description);
        assert!(html.contains(&format!("class=\"{} border-gray-200\"", CARD_BASE)));
        assert!(html.contains(">Title<"));
        assert!(html.contains(">Body<"));
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn button_renders_label() {
        use leptos::tachys::view::RenderHtml;

        let html = view! { <Button class="bg-mcqueen-red">"Apply"</Button> }.to_html();

        assert!(html.starts_with("<button"));
        assert!(html.contains("type=\"button\""));
        assert!(html.contains("bg-mcqueen-red"));
        assert!(html.contains(">Apply</button>"));
    }
}
