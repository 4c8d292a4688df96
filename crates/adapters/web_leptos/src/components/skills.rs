use folio_domain::content::{OTHER_SKILLS, SkillGroup, TECHNICAL_SKILLS};
use folio_domain::section::SectionId;
use leptos::prelude::*;

/// A card listing one skill group.
#[component]
fn SkillCard(group: &'static SkillGroup) -> impl IntoView {
    let items = group
        .items
        .iter()
        .map(|item| {
            view! {
                <li>
                    <span class="bullet"></span>
                    <span>{*item}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="card skill-card">
            <div class="skill-card-header">
                {group.icon.map(|icon| view! { <span class="skill-icon accent">{icon.glyph()}</span> })}
                <h3>{group.category}</h3>
            </div>
            <ul class="skill-list">{items}</ul>
        </div>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    let technical = TECHNICAL_SKILLS
        .iter()
        .map(|group| view! { <SkillCard group=group/> })
        .collect_view();
    let other = OTHER_SKILLS
        .iter()
        .map(|group| view! { <SkillCard group=group/> })
        .collect_view();

    view! {
        <section id=SectionId::Skills.as_str() class="section skills">
            <div class="container">
                <h2 class="section-title">"Technical Skills"</h2>
                <div class="grid grid-3">{technical}</div>
                <h3 class="subsection-title accent">"Other Skills"</h3>
                <div class="grid grid-3">{other}</div>
            </div>
        </section>
    }
}
