//! # mcqueen-site
//!
//! Leptos components and a static HTML renderer for the McQueen Solutions
//! marketing site.
//!
//! The page is a fixed sequence of sections over literal content: a hero with
//! feature cards, a recruiting call-to-action, four capability sections, a
//! services grid, a support banner, a partner call-to-action and a footer.
//!
//! ## Quick Start
//!
//! ```rust
//! use mcqueen_site::{render_home_page, SiteOptions};
//!
//! let options = SiteOptions {
//!     year: 2025,
//!     ..Default::default()
//! };
//!
//! let html = render_home_page(&options);
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("Innovative Solutions for Data Science"));
//! ```
//!
//! ## Architecture
//!
//! - [`content`] - literal content records (feature cards, services, capabilities)
//! - [`components`] - Leptos UI components
//! - [`routes`] - route table (`/` only)
//! - [`styles`] - CSS constants
//!
//! With the `ssr` feature (default) pages render to strings through Leptos'
//! `RenderHtml` trait. With `csr` the same components mount in the browser.

pub mod components;
pub mod content;
pub mod error;
pub mod routes;
pub mod styles;

pub use error::SiteError;
pub use routes::Route;

#[cfg(feature = "ssr")]
use components::{HomePage, SiteDocument};
#[cfg(feature = "ssr")]
use leptos::prelude::*;
#[cfg(feature = "ssr")]
use leptos::tachys::view::RenderHtml;

/// Document-level settings for a rendered page.
#[derive(Clone, Debug)]
pub struct SiteOptions {
    /// `<title>` of the document
    pub title: String,
    /// `<meta name="description">` content
    pub description: String,
    /// `lang` attribute of `<html>`
    pub lang: String,
    /// Year printed in the footer copyright line
    pub year: i32,
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            title: content::COMPANY_NAME.to_string(),
            description: content::SITE_DESCRIPTION.to_string(),
            lang: "en".to_string(),
            year: current_year(),
        }
    }
}

/// Current calendar year (UTC).
pub fn current_year() -> i32 {
    time::OffsetDateTime::now_utc().year()
}

/// Render the home page as a complete HTML document.
///
/// # Example
///
/// ```rust
/// use mcqueen_site::{render_home_page, SiteOptions};
///
/// let html = render_home_page(&SiteOptions { year: 2030, ..Default::default() });
/// assert!(html.contains("2030"));
/// ```
#[cfg(feature = "ssr")]
pub fn render_home_page(options: &SiteOptions) -> String {
    let year = options.year;
    let doc = view! {
        <SiteDocument
            title=options.title.clone()
            description=options.description.clone()
            lang=options.lang.clone()
        >
            <HomePage year=year />
        </SiteDocument>
    };

    let html = doc.to_html();
    tracing::debug!(bytes = html.len(), year, "rendered home page");

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Resolve `path` and render the page behind it.
#[cfg(feature = "ssr")]
pub fn render_route(path: &str, options: &SiteOptions) -> Result<String, SiteError> {
    match Route::resolve(path)? {
        Route::Home => Ok(render_home_page(options)),
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    fn options() -> SiteOptions {
        SiteOptions {
            year: 2024,
            ..Default::default()
        }
    }

    #[test]
    fn renders_complete_document() {
        let html = render_home_page(&options());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("lang=\"en\""));
        assert!(html.contains("<title>McQueen Solutions</title>"));
        assert!(html.contains("<style>"));
        // Stylesheet is emitted raw, child combinators included
        assert!(html.contains(".space-y-4 > :not(:first-child)"));
        assert!(html.contains("</body>"));
    }

    #[test]
    fn document_options_flow_into_head() {
        let opts = SiteOptions {
            title: "McQueen | Home".into(),
            description: "Mission IT".into(),
            lang: "en-US".into(),
            year: 2024,
        };
        let html = render_home_page(&opts);

        assert!(html.contains("McQueen | Home"));
        assert!(html.contains("content=\"Mission IT\""));
        assert!(html.contains("lang=\"en-US\""));
    }

    #[test]
    fn render_route_resolves_home_aliases() {
        let home = render_home_page(&options());

        for path in ["/", "", "/index.html", "/?ref=nav"] {
            let html = render_route(path, &options()).expect("home route");
            assert_eq!(html, home, "path {path:?}");
        }
    }

    #[test]
    fn render_route_rejects_unknown_paths() {
        let err = render_route("/careers", &options()).unwrap_err();
        assert_eq!(err, SiteError::UnknownRoute("/careers".into()));
    }

    #[test]
    fn default_options_use_current_year() {
        assert_eq!(SiteOptions::default().year, current_year());
        assert!(current_year() >= 2024);
    }
}
