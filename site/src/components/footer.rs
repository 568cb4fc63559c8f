use crate::content::{COMPANY_NAME, FOOTER_LINKS};
use leptos::prelude::*;

/// Copyright line shown in the footer.
pub fn copyright_line(year: i32) -> String {
    format!("© {} · {}. All rights reserved.", year, COMPANY_NAME)
}

#[component]
pub fn Footer(
    /// Year in the copyright line
    year: i32,
) -> impl IntoView {
    view! {
        <footer id="footer" class="bg-mcqueen-dark py-8 border-t border-slate-800">
            <div class="container mx-auto px-6">
                <div class="flex flex-col md:flex-row justify-between items-center gap-4">
                    <div class="flex items-center gap-4">
                        {FOOTER_LINKS
                            .iter()
                            .map(|label| view! {
                                <a href="#" class="text-gray-400 hover:text-white text-sm">{*label}</a>
                            })
                            .collect::<Vec<_>>()}
                    </div>
                    <p class="text-gray-500 text-sm">{copyright_line(year)}</p>
                </div>
            </div>
        </footer>
    }
}
