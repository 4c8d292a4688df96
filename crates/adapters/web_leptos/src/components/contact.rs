//! Contact details and call-to-action links.

use folio_domain::content::{CONTACTS, ContactKind, contact};
use folio_domain::section::SectionId;
use leptos::prelude::*;

#[component]
pub fn Contact() -> impl IntoView {
    let details = CONTACTS
        .iter()
        .map(|link| {
            let target = link.opens_new_tab().then_some("_blank");
            let rel = link.opens_new_tab().then_some("noopener noreferrer");
            view! {
                <div class="contact-item">
                    <span class="contact-icon accent">{link.kind.glyph()}</span>
                    <div>
                        <p class="contact-label">{link.kind.label()}</p>
                        <a href=link.href target=target rel=rel>{link.display}</a>
                    </div>
                </div>
            }
        })
        .collect_view();

    let email = contact(ContactKind::Email).map(|link| {
        view! { <a href=link.href class="button button-primary">"Send Email"</a> }
    });
    let linkedin = contact(ContactKind::LinkedIn).map(|link| {
        view! {
            <a href=link.href target="_blank" rel="noopener noreferrer" class="button button-outline">
                "Connect on LinkedIn"
            </a>
        }
    });

    view! {
        <section id=SectionId::Contact.as_str() class="section contact">
            <div class="container narrow">
                <h2 class="section-title">"Get In Touch"</h2>
                <div class="card contact-card grid grid-2">
                    <div class="contact-panel">
                        <h3 class="accent">"Contact Info"</h3>
                        {details}
                    </div>
                    <div class="contact-panel">
                        <h3 class="accent">"Let's Connect"</h3>
                        <p>
                            "I'm currently looking for new opportunities and would love to hear from you. "
                            "Feel free to reach out if you have any questions or just want to say hi!"
                        </p>
                        <div class="contact-actions">{email} {linkedin}</div>
                    </div>
                </div>
            </div>
        </section>
    }
}
