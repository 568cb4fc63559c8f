//! Root document component - the complete HTML page

use crate::styles::SITE_CSS;
use leptos::prelude::*;

/// `<html>` shell with head metadata and the inline stylesheet.
#[component]
pub fn SiteDocument(
    title: String,
    description: String,
    #[prop(default = "en".to_string())] lang: String,
    children: Children,
) -> impl IntoView {
    view! {
        <html lang=lang>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content=description />
                <title>{title}</title>
                <style>{SITE_CSS}</style>
            </head>
            <body class="antialiased">{children()}</body>
        </html>
    }
}
