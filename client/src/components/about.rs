//! About section: bio, highlight cards, and career timeline.

use leptos::prelude::*;

use crate::content::{ABOUT_PARAGRAPHS, CAREER, HIGHLIGHTS};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="section about">
            <div class="container about__grid">
                <div class="about__intro">
                    <p class="section__eyebrow">"About Me"</p>
                    <h2 class="section__title">"Hello! 👋"</h2>
                    {ABOUT_PARAGRAPHS.into_iter().map(|p| view! { <p class="about__paragraph">{p}</p> }).collect_view()}
                </div>

                <div class="about__highlights">
                    {HIGHLIGHTS
                        .into_iter()
                        .map(|item| {
                            view! {
                                <div class="card about__highlight">
                                    <span class="about__highlight-icon">{item.icon}</span>
                                    <h3 class="about__highlight-title">{item.title}</h3>
                                    <p class="about__highlight-text">{item.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="container about__career">
                <h3 class="section__subtitle">"Experience"</h3>
                <ol class="timeline">
                    {CAREER
                        .into_iter()
                        .map(|entry| {
                            view! {
                                <li class="timeline__entry">
                                    <div class="timeline__header">
                                        <h4 class="timeline__role">{entry.role}</h4>
                                        <span class="timeline__period">{entry.period}</span>
                                    </div>
                                    <p class="timeline__company">{entry.company}</p>
                                    <p class="timeline__summary">{entry.summary}</p>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            </div>
        </section>
    }
}
