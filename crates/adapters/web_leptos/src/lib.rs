use folio_domain::config::NavConfig;
use leptos::prelude::*;

pub mod browser;
mod components;
pub mod config;
pub mod error;
pub mod state;

use components::{About, Contact, Education, Footer, Hero, Nav, Projects, Skills};
use config::SiteConfig;
use state::PageContext;

/// Root application component.
///
/// Restores the theme before the first render, then keeps the scroll
/// listener attached for as long as the page is mounted.
#[component]
pub fn App(
    /// Thresholds and storage key for the page handlers.
    #[prop(optional)]
    config: NavConfig,
) -> impl IntoView {
    let page = PageContext::new(&config);
    provide_context(page);

    let listener = StoredValue::new_local(Some(page.track_scroll()));
    on_cleanup(move || {
        drop(listener.try_update_value(Option::take));
    });

    view! {
        <div class="page">
            <Nav/>
            <main>
                <Hero/>
                <About/>
                <Education/>
                <Skills/>
                <Projects/>
                <Contact/>
            </main>
            <Footer/>
        </div>
    }
}

/// Install the console logger and panic hook, then mount [`App`].
pub fn start() {
    console_error_panic_hook::set_once();

    // Install first so a rejected folio.toml is still reported, then narrow.
    if let Err(err) = console_log::init_with_level(log::Level::Trace) {
        leptos::logging::warn!("console logger already installed: {err}");
    }
    let config = SiteConfig::load();
    log::set_max_level(config.log_level().to_level_filter());

    let navigation = config.navigation;
    leptos::mount::mount_to_body(move || view! { <App config=navigation/> });
}
