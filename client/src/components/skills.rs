//! Skills section: one card per category with proficiency bars.

use leptos::prelude::*;

use crate::content::SKILL_CATEGORIES;

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="section skills">
            <div class="container">
                <header class="section__header">
                    <p class="section__eyebrow">"Skills"</p>
                    <h2 class="section__title">"Tech stack"</h2>
                    <p class="section__lead">"Tools I use day to day, and how comfortable I am with each."</p>
                </header>

                <div class="skills__grid">
                    {SKILL_CATEGORIES
                        .into_iter()
                        .map(|category| {
                            view! {
                                <div class="card skills__category">
                                    <h3 class="skills__category-title">{category.title}</h3>
                                    <ul class="skills__list">
                                        {category
                                            .skills
                                            .iter()
                                            .map(|skill| {
                                                view! {
                                                    <li class="skills__item">
                                                        <div class="skills__label">
                                                            <span>{skill.name}</span>
                                                            <span class="skills__level">{format!("{}%", skill.level)}</span>
                                                        </div>
                                                        <div
                                                            class="skills__track"
                                                            role="progressbar"
                                                            aria-valuenow=skill.level.to_string()
                                                            aria-valuemin="0"
                                                            aria-valuemax="100"
                                                        >
                                                            <div class=format!("skills__bar {}", skill.color) style=skill.bar_style()></div>
                                                        </div>
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
