use folio_domain::content::PROJECTS;
use folio_domain::section::SectionId;
use leptos::prelude::*;

#[component]
pub fn Projects() -> impl IntoView {
    let cards = PROJECTS
        .iter()
        .map(|project| {
            let tags = project
                .technologies
                .iter()
                .map(|tech| view! { <span class="tag">{*tech}</span> })
                .collect_view();
            view! {
                <article class="card project-card">
                    <div class="project-image">
                        <img src=project.image_url alt=project.title/>
                    </div>
                    <div class="project-body">
                        <h3>{project.title}</h3>
                        <p>{project.description}</p>
                        <div class="tags">{tags}</div>
                        <a
                            href=project.link
                            target="_blank"
                            rel="noopener noreferrer"
                            class="accent project-link"
                        >
                            "View Project \u{2197}"
                        </a>
                    </div>
                </article>
            }
        })
        .collect_view();

    view! {
        <section id=SectionId::Projects.as_str() class="section projects">
            <div class="container">
                <h2 class="section-title">"My Projects"</h2>
                <div class="grid grid-2">{cards}</div>
            </div>
        </section>
    }
}
