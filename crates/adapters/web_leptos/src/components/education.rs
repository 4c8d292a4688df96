//! Education timeline; entries alternate sides on wide screens.

use folio_domain::content::EDUCATION;
use folio_domain::section::SectionId;
use leptos::prelude::*;

fn entry_class(index: usize) -> &'static str {
    if index % 2 == 0 {
        "timeline-entry timeline-left"
    } else {
        "timeline-entry timeline-right"
    }
}

#[component]
pub fn Education() -> impl IntoView {
    let entries = EDUCATION
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            view! {
                <div class=entry_class(index)>
                    <span class="timeline-dot"></span>
                    <div class="card">
                        <h3 class="accent">{entry.institution}</h3>
                        <p class="degree">{entry.degree}</p>
                        <div class="timeline-meta">
                            <span>{entry.year}</span>
                            <span class="grade">{entry.grade}</span>
                        </div>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id=SectionId::Education.as_str() class="section education">
            <div class="container">
                <h2 class="section-title">"Education"</h2>
                <div class="timeline">
                    <div class="timeline-line"></div>
                    {entries}
                </div>
            </div>
        </section>
    }
}
