//! Static build: one HTML file per route.

use anyhow::{Context, Result};
use mcqueen_site::{Route, SiteOptions, render_route};
use std::path::{Path, PathBuf};
use tracing::info;

/// Render every route into `out_dir`, creating it if needed.
/// Returns the written file paths in route order.
pub fn build_site(out_dir: &Path, options: &SiteOptions) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory {}", out_dir.display()))?;

    let mut written = Vec::with_capacity(Route::ALL.len());
    for route in Route::ALL {
        let html = render_route(route.path(), options)?;
        let target = out_dir.join(route.file_name());
        std::fs::write(&target, &html)
            .with_context(|| format!("Failed to write {}", target.display()))?;
        info!(route = route.path(), bytes = html.len(), "wrote {}", target.display());
        written.push(target);
    }
    Ok(written)
}
