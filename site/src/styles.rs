//! CSS for the site.
//!
//! The components use Tailwind-style utility class names. [`SITE_CSS`]
//! implements exactly the utilities the page uses, plus the two brand
//! colors, so the rendered document needs no build step or CDN.
//!
//! # Customization
//!
//! ```rust
//! use mcqueen_site::styles::SITE_CSS;
//!
//! let my_css = ".custom-class { color: red; }";
//! let combined = format!("{}\n{}", SITE_CSS, my_css);
//! ```

/// Complete stylesheet for the page.
pub const SITE_CSS: &str = r#"
:root {
    --mcqueen-red: #c8102e;
    --mcqueen-dark: #0b1324;
    --card: #ffffff;
    --card-foreground: #0f172a;
    --muted-foreground: #64748b;
    --border: #e5e7eb;
    --font-sans: ui-sans-serif, system-ui, -apple-system, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
}

*, ::before, ::after { box-sizing: border-box; margin: 0; padding: 0; border: 0 solid var(--border); }
html { line-height: 1.5; font-family: var(--font-sans); -webkit-text-size-adjust: 100%; }
body { min-height: 100vh; }
a { color: inherit; text-decoration: inherit; }
button { font: inherit; color: inherit; background: transparent; cursor: pointer; }
svg { display: block; }

/* Component defaults, before utilities so utilities win */
.bg-card { background-color: var(--card); }
.text-card-foreground { color: var(--card-foreground); }
.text-muted-foreground { color: var(--muted-foreground); }

/* Layout */
.container { width: 100%; }
@media (min-width: 640px) { .container { max-width: 640px; } }
@media (min-width: 768px) { .container { max-width: 768px; } }
@media (min-width: 1024px) { .container { max-width: 1024px; } }
@media (min-width: 1280px) { .container { max-width: 1280px; } }
.mx-auto { margin-left: auto; margin-right: auto; }
.min-h-screen { min-height: 100vh; }
.max-w-2xl { max-width: 42rem; }
.max-w-3xl { max-width: 48rem; }
.w-64 { width: 16rem; }
.h-64 { height: 16rem; }
.h-9 { height: 2.25rem; }
.size-8 { width: 2rem; height: 2rem; }
.size-24 { width: 6rem; height: 6rem; }
.fixed { position: fixed; }
.relative { position: relative; }
.absolute { position: absolute; }
.inset-0 { top: 0; right: 0; bottom: 0; left: 0; }
.top-0 { top: 0; }
.left-0 { left: 0; }
.right-0 { right: 0; }
.z-10 { z-index: 10; }
.z-50 { z-index: 50; }
.overflow-hidden { overflow: hidden; }
.flex { display: flex; }
.inline-flex { display: inline-flex; }
.grid { display: grid; }
.flex-col { flex-direction: column; }
.items-center { align-items: center; }
.items-start { align-items: flex-start; }
.justify-center { justify-content: center; }
.justify-between { justify-content: space-between; }
.auto-rows-min { grid-auto-rows: min-content; }
.order-1 { order: 1; }
.order-2 { order: 2; }
.gap-1 { gap: 0.25rem; }
.gap-1\.5 { gap: 0.375rem; }
.gap-2 { gap: 0.5rem; }
.gap-3 { gap: 0.75rem; }
.gap-4 { gap: 1rem; }
.gap-6 { gap: 1.5rem; }
.gap-8 { gap: 2rem; }
.gap-12 { gap: 3rem; }
.space-y-4 > :not(:first-child) { margin-top: 1rem; }

/* Spacing */
.px-3 { padding-left: 0.75rem; padding-right: 0.75rem; }
.px-4 { padding-left: 1rem; padding-right: 1rem; }
.px-6 { padding-left: 1.5rem; padding-right: 1.5rem; }
.py-1 { padding-top: 0.25rem; padding-bottom: 0.25rem; }
.py-2 { padding-top: 0.5rem; padding-bottom: 0.5rem; }
.py-4 { padding-top: 1rem; padding-bottom: 1rem; }
.py-6 { padding-top: 1.5rem; padding-bottom: 1.5rem; }
.py-8 { padding-top: 2rem; padding-bottom: 2rem; }
.py-16 { padding-top: 4rem; padding-bottom: 4rem; }
.py-20 { padding-top: 5rem; padding-bottom: 5rem; }
.pt-2 { padding-top: 0.5rem; }
.pt-24 { padding-top: 6rem; }
.pb-16 { padding-bottom: 4rem; }
.mb-4 { margin-bottom: 1rem; }
.mb-6 { margin-bottom: 1.5rem; }
.mb-8 { margin-bottom: 2rem; }
.mb-16 { margin-bottom: 4rem; }

/* Typography */
.antialiased { -webkit-font-smoothing: antialiased; -moz-osx-font-smoothing: grayscale; }
.text-center { text-align: center; }
.text-sm { font-size: 0.875rem; line-height: 1.25rem; }
.text-lg { font-size: 1.125rem; line-height: 1.75rem; }
.text-xl { font-size: 1.25rem; line-height: 1.75rem; }
.text-2xl { font-size: 1.5rem; line-height: 2rem; }
.text-3xl { font-size: 1.875rem; line-height: 2.25rem; }
.text-4xl { font-size: 2.25rem; line-height: 2.5rem; }
.font-light { font-weight: 300; }
.font-medium { font-weight: 500; }
.font-semibold { font-weight: 600; }
.font-bold { font-weight: 700; }
.tracking-tight { letter-spacing: -0.025em; }
.tracking-wide { letter-spacing: 0.025em; }
.leading-none { line-height: 1; }
.leading-relaxed { line-height: 1.625; }
.whitespace-nowrap { white-space: nowrap; }
.text-white { color: #ffffff; }
.text-gray-300 { color: #d1d5db; }
.text-gray-400 { color: #9ca3af; }
.text-gray-500 { color: #6b7280; }
.text-gray-600 { color: #4b5563; }
.text-gray-900 { color: #111827; }
.text-mcqueen-red { color: var(--mcqueen-red); }

/* Backgrounds */
.bg-white { background-color: #ffffff; }
.bg-gray-50 { background-color: #f9fafb; }
.bg-gray-100 { background-color: #f3f4f6; }
.bg-slate-900 { background-color: #0f172a; }
.bg-slate-800\/50 { background-color: rgb(30 41 59 / 0.5); }
.bg-mcqueen-red { background-color: var(--mcqueen-red); }
.bg-mcqueen-dark { background-color: var(--mcqueen-dark); }
.bg-mcqueen-dark\/95 { background-color: rgb(11 19 36 / 0.95); }
.backdrop-blur-sm { -webkit-backdrop-filter: blur(4px); backdrop-filter: blur(4px); }
.bg-gradient-to-br { background-image: linear-gradient(to bottom right, var(--tw-gradient-stops)); }
.from-mcqueen-dark { --tw-gradient-from: var(--mcqueen-dark); --tw-gradient-to: rgb(11 19 36 / 0); --tw-gradient-stops: var(--tw-gradient-from), var(--tw-gradient-to); }
.from-slate-100 { --tw-gradient-from: #f1f5f9; --tw-gradient-to: rgb(241 245 249 / 0); --tw-gradient-stops: var(--tw-gradient-from), var(--tw-gradient-to); }
.via-mcqueen-dark { --tw-gradient-stops: var(--tw-gradient-from), var(--mcqueen-dark), var(--tw-gradient-to); }
.to-slate-900 { --tw-gradient-to: #0f172a; }
.to-slate-200 { --tw-gradient-to: #e2e8f0; }

/* Borders and effects */
.border { border-width: 1px; }
.border-t { border-top-width: 1px; }
.border-gray-200 { border-color: #e5e7eb; }
.border-slate-700 { border-color: #334155; }
.border-slate-800 { border-color: #1e293b; }
.rounded { border-radius: 0.25rem; }
.rounded-md { border-radius: 0.375rem; }
.rounded-xl { border-radius: 0.75rem; }
.rounded-2xl { border-radius: 1rem; }
.shadow-sm { box-shadow: 0 1px 2px 0 rgb(0 0 0 / 0.05); }
.shadow-lg { box-shadow: 0 10px 15px -3px rgb(0 0 0 / 0.1), 0 4px 6px -4px rgb(0 0 0 / 0.1); }
.transition-all { transition: all 150ms cubic-bezier(0.4, 0, 0.2, 1); }

/* States */
.hover\:bg-mcqueen-red\/90:hover { background-color: rgb(200 16 46 / 0.9); }
.hover\:text-white:hover { color: #ffffff; }

/* Responsive */
@media (min-width: 768px) {
    .md\:text-5xl { font-size: 3rem; line-height: 1; }
    .md\:grid-cols-2 { grid-template-columns: repeat(2, minmax(0, 1fr)); }
    .md\:grid-cols-3 { grid-template-columns: repeat(3, minmax(0, 1fr)); }
    .md\:flex-row { flex-direction: row; }
    .md\:order-1 { order: 1; }
    .md\:order-2 { order: 2; }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn rule_position(selector: &str) -> usize {
        SITE_CSS
            .find(&format!("\n{} {{", selector))
            .unwrap_or_else(|| panic!("no rule for {selector}"))
    }

    #[test]
    fn utilities_come_after_component_defaults() {
        let pairs = [
            (".bg-card", ".bg-slate-800\\/50"),
            (".bg-card", ".bg-white"),
            (".text-card-foreground", ".text-white"),
            (".text-card-foreground", ".text-gray-900"),
            (".text-muted-foreground", ".text-gray-400"),
            (".text-muted-foreground", ".text-gray-600"),
        ];
        for (default, utility) in pairs {
            assert!(
                rule_position(default) < rule_position(utility),
                "{utility} must be declared after {default}"
            );
        }
    }

    #[test]
    fn space_y_only_spaces_direct_children() {
        assert!(SITE_CSS.contains(".space-y-4 > :not(:first-child) { margin-top: 1rem; }"));
        assert!(!SITE_CSS.contains(".space-y-4 :"));
    }

    #[test]
    fn braces_are_balanced() {
        let open = SITE_CSS.matches('{').count();
        let close = SITE_CSS.matches('}').count();
        assert_eq!(open, close);
    }
}
