//! Error type for the few lookups that can fail.
//!
//! Rendering itself never fails; only resolving a path or parsing a variant
//! label from outside input can.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SiteError {
    #[error("no page is served at '{0}'")]
    UnknownRoute(String),

    #[error("unknown illustration variant '{0}' (expected cloud, security, devops or tactical)")]
    UnknownVariant(String),
}
