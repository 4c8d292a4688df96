use folio_domain::content::PROFILE;
use folio_domain::section::SectionId;
use leptos::prelude::*;

use super::social_links::SocialLinks;

#[component]
pub fn About() -> impl IntoView {
    let paragraphs = PROFILE
        .about
        .iter()
        .map(|text| view! { <p>{*text}</p> })
        .collect_view();

    view! {
        <section id=SectionId::About.as_str() class="section about">
            <div class="container narrow">
                <h2 class="section-title">"About Me"</h2>
                <h3 class="accent">"Who I Am"</h3>
                {paragraphs}
                <SocialLinks row_class="social-row"/>
            </div>
        </section>
    }
}
