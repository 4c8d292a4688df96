//! Landing section with greeting, avatar and calls to action.

use folio_domain::content::PROFILE;
use folio_domain::section::SectionId;
use leptos::prelude::*;

use crate::state::use_page;

#[component]
pub fn Hero() -> impl IntoView {
    let page = use_page();

    view! {
        <section id=SectionId::Home.as_str() class="section hero">
            <div class="container hero-inner">
                <div class="hero-text">
                    <h1>
                        "Hi, I'm " <span class="accent">{PROFILE.name}</span>
                        <br/>
                        {PROFILE.headline}
                    </h1>
                    <p class="hero-tagline">{PROFILE.tagline}</p>
                    <div class="hero-actions">
                        <button
                            class="button button-primary"
                            on:click=move |_| page.navigate(SectionId::Projects)
                        >
                            "View My Work"
                        </button>
                        <button
                            class="button button-outline"
                            on:click=move |_| page.navigate(SectionId::Contact)
                        >
                            "Contact Me"
                        </button>
                    </div>
                </div>
                <div class="hero-avatar">
                    <img src=PROFILE.avatar_url alt="Profile"/>
                </div>
            </div>
            <button
                class="scroll-hint"
                aria-label="Scroll to about"
                on:click=move |_| page.navigate(SectionId::About)
            >
                "\u{2304}"
            </button>
        </section>
    }
}
