use chrono::Datelike;
use folio_domain::content::PROFILE;
use leptos::prelude::*;

use super::social_links::SocialLinks;

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Local::now().year();

    view! {
        <footer class="footer">
            <div class="container footer-inner">
                <div>
                    <a href="#home" class="brand">{PROFILE.brand}</a>
                    <p class="muted">{PROFILE.headline}</p>
                </div>
                <SocialLinks row_class="social-row"/>
            </div>
            <div class="container footer-copyright muted">
                <p>{format!("\u{00A9} {year} {}. All rights reserved.", PROFILE.full_name)}</p>
            </div>
        </footer>
    }
}
