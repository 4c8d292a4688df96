//! Row of icon links to every contact channel.

use folio_domain::content::CONTACTS;
use leptos::prelude::*;

#[component]
pub fn SocialLinks(
    /// Class of the surrounding row.
    #[prop(into)]
    row_class: String,
) -> impl IntoView {
    let links = CONTACTS
        .iter()
        .map(|link| {
            let target = link.opens_new_tab().then_some("_blank");
            let rel = link.opens_new_tab().then_some("noopener noreferrer");
            view! {
                <a
                    href=link.href
                    target=target
                    rel=rel
                    class="social-link"
                    aria-label=link.kind.label()
                >
                    {link.kind.glyph()}
                </a>
            }
        })
        .collect_view();

    view! { <div class=row_class>{links}</div> }
}
