//! Fixed navigation bar with desktop links and a collapsible mobile menu.

use folio_domain::content::PROFILE;
use folio_domain::section::SectionId;
use leptos::prelude::*;

use super::theme_toggle::ThemeToggle;
use crate::state::use_page;

/// Class of a navigation link, highlighted when its section is active.
fn link_class(base: &str, active: bool) -> String {
    if active {
        format!("{base} nav-link active")
    } else {
        format!("{base} nav-link")
    }
}

/// One button per section, in document order.
#[component]
fn SectionLinks(
    /// Extra class applied to every link.
    #[prop(into)]
    link_extra: String,
) -> impl IntoView {
    let page = use_page();
    let active = page.active_section();

    SectionId::ALL
        .into_iter()
        .map(|section| {
            let base = link_extra.clone();
            view! {
                <button
                    class=move || link_class(&base, active.get() == section)
                    on:click=move |_| page.navigate(section)
                >
                    {section.title()}
                </button>
            }
        })
        .collect_view()
}

#[component]
pub fn Nav() -> impl IntoView {
    let page = use_page();
    let scrolled = page.is_scrolled();
    let menu_open = page.is_menu_open();

    view! {
        <nav class=move || if scrolled.get() { "navbar scrolled" } else { "navbar" }>
            <div class="container navbar-inner">
                <a href="#home" class="brand">{PROFILE.brand}</a>

                <div class="nav-desktop">
                    <SectionLinks link_extra="nav-desktop-link"/>
                    <ThemeToggle/>
                </div>

                <div class="nav-mobile-controls">
                    <ThemeToggle/>
                    <button
                        class="menu-toggle"
                        aria-label="Toggle menu"
                        on:click=move |_| page.toggle_menu()
                    >
                        {move || if menu_open.get() { "\u{2715}" } else { "\u{2630}" }}
                    </button>
                </div>
            </div>

            {move || {
                menu_open
                    .get()
                    .then(|| {
                        view! {
                            <div class="nav-mobile-menu">
                                <SectionLinks link_extra="nav-mobile-link"/>
                            </div>
                        }
                    })
            }}
        </nav>
    }
}
