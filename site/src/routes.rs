//! Route table for the site.
//!
//! The site has one page. Paths are resolved here so the static builder and
//! the client-side router agree on what `/` means.

use crate::SiteError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
}

impl Route {
    /// Every route, in build order.
    pub const ALL: [Route; 1] = [Route::Home];

    /// Canonical URL path.
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
        }
    }

    /// File written for this route by a static build.
    pub fn file_name(self) -> &'static str {
        match self {
            Route::Home => "index.html",
        }
    }

    /// Resolve a request path, ignoring any query string or fragment.
    pub fn resolve(path: &str) -> Result<Route, SiteError> {
        let bare = path.split(['?', '#']).next().unwrap_or_default();

        match bare {
            "" | "/" | "/index.html" | "index.html" => Ok(Route::Home),
            _ => Err(SiteError::UnknownRoute(path.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_is_root() {
        assert_eq!(Route::Home.path(), "/");
        assert_eq!(Route::Home.file_name(), "index.html");
    }

    #[test]
    fn resolves_root_variants() {
        for path in ["/", "", "/index.html", "index.html", "/?utm=x", "/#services"] {
            assert_eq!(Route::resolve(path), Ok(Route::Home), "path {path:?}");
        }
    }

    #[test]
    fn rejects_other_paths() {
        for path in ["/jobs", "/index.htm", "//", "/home/", " / ", "/ ", " "] {
            assert_eq!(
                Route::resolve(path),
                Err(SiteError::UnknownRoute(path.to_string())),
                "path {path:?}"
            );
        }
    }

    #[test]
    fn every_route_resolves_from_its_own_path() {
        for route in Route::ALL {
            assert_eq!(Route::resolve(route.path()), Ok(route));
        }
    }
}
