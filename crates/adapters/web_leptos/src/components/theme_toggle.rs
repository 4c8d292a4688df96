//! Dark/light theme toggle button.

use leptos::prelude::*;

use crate::state::use_page;

/// A toggle button that switches between light and dark themes.
///
/// Shows a sun while dark (click for light) and a moon while light.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let page = use_page();
    let dark = page.dark_mode();

    let label = move || {
        if dark.get() {
            "\u{2600}"
        } else {
            "\u{263E}"
        }
    };

    view! {
        <button
            class="theme-toggle"
            aria-label="Toggle dark mode"
            title="Toggle theme"
            on:click=move |_| page.toggle_theme()
        >
            {label}
        </button>
    }
}
