//! Leptos UI components for the site.
//!
//! # Component Hierarchy
//!
//! ```text
//! SiteDocument
//! └── HomePage
//!     ├── Header
//!     ├── Hero
//!     │   └── FeatureCard x3
//!     ├── JoinTeam
//!     ├── CloudEngineering / CyberSecurity / DevSecOps / TacticalEdge
//!     │   └── CapabilitySection
//!     │       └── ServiceIllustration
//!     ├── ServicesGrid
//!     │   └── ServiceCard x4
//!     ├── DoDSupport
//!     ├── Partner
//!     └── Footer
//! ```
//!
//! Components render the same markup on the server (`ssr`) and in the
//! browser (`csr`).

mod capability;
mod document;
mod dod_support;
mod footer;
mod header;
mod hero;
mod home;
mod icons;
mod illustration;
mod join_team;
mod partner;
mod services_grid;
mod ui;

pub use capability::{
    CapabilitySection, CloudEngineering, CyberSecurity, DevSecOps, Placement, TacticalEdge, Tone,
};
pub use document::SiteDocument;
pub use dod_support::DoDSupport;
pub use footer::{Footer, copyright_line};
pub use header::Header;
pub use hero::{FeatureCard, Hero};
pub use home::HomePage;
pub use icons::{Glyph, Icon};
pub use illustration::{IllustrationVariant, ServiceIllustration};
pub use join_team::JoinTeam;
pub use partner::Partner;
pub use services_grid::ServicesGrid;
pub use ui::{Button, Card, CardContent, CardDescription, CardHeader, CardTitle, cn};
