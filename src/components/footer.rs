//! Site footer rendered under every route.

use leptos::prelude::*;

pub const COPYRIGHT_YEAR: u16 = 2025;
pub const AUTHOR: &str = "Rekha";

/// Copyright line shown in the footer.
pub fn copyright_notice() -> String {
    format!("\u{a9} {COPYRIGHT_YEAR} - Built with \u{2764}\u{fe0f} by {AUTHOR}.")
}

/// Static footer. No props, no state, no effects.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div class="footer py-3 my-3">
                <hr class="border-bottom"/>
                <p class="text-light text-center">{copyright_notice()}</p>
            </div>
        </footer>
    }
}
