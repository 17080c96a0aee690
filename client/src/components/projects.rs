//! Projects section: category filter bar and project cards.

use leptos::prelude::*;

use crate::content::{PROJECT_FILTERS, Project, ProjectFilter, filter_projects};

#[component]
pub fn Projects() -> impl IntoView {
    let filter = RwSignal::new(ProjectFilter::All);

    view! {
        <section id="projects" class="section projects">
            <div class="container">
                <header class="section__header">
                    <p class="section__eyebrow">"Projects"</p>
                    <h2 class="section__title">"Featured work"</h2>
                    <p class="section__lead">"A selection of things I have designed and built."</p>
                </header>

                <div class="projects__filters" role="tablist">
                    {PROJECT_FILTERS
                        .into_iter()
                        .map(|option| {
                            view! {
                                <button
                                    class=move || {
                                        if filter.get() == option { "chip chip--active" } else { "chip" }
                                    }
                                    role="tab"
                                    aria-selected=move || (filter.get() == option).to_string()
                                    on:click=move |_| filter.set(option)
                                >
                                    {option.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="projects__grid">
                    {move || filter_projects(filter.get()).into_iter().map(project_card).collect_view()}
                </div>

                <div class="projects__more">
                    <a class="btn btn--outline" href="https://github.com" target="_blank" rel="noopener noreferrer">
                        "More on GitHub"
                    </a>
                </div>
            </div>
        </section>
    }
}

fn project_card(project: &'static Project) -> impl IntoView {
    view! {
        <article class="card project-card">
            <div class="project-card__media">
                <img class="project-card__image" src=project.image alt=project.title loading="lazy"/>
                <div class="project-card__overlay">
                    <a href=project.live_url target="_blank" rel="noopener noreferrer" aria-label="View live demo">
                        "↗"
                    </a>
                    <a href=project.github_url target="_blank" rel="noopener noreferrer" aria-label="View source on GitHub">
                        "⌨"
                    </a>
                </div>
            </div>
            <div class="project-card__body">
                <span class="project-card__category">{project.category.label()}</span>
                <h3 class="project-card__title">{project.title}</h3>
                <p class="project-card__description">{project.description}</p>
                <ul class="project-card__tech">
                    {project.technologies.iter().map(|tech| view! { <li class="tag">{*tech}</li> }).collect_view()}
                </ul>
                <div class="project-card__links">
                    <a href=project.live_url target="_blank" rel="noopener noreferrer">"Live demo"</a>
                    <a href=project.github_url target="_blank" rel="noopener noreferrer">"Source"</a>
                </div>
            </div>
        </article>
    }
}
