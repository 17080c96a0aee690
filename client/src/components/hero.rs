//! Landing section with greeting, calls to action, and social links.

use leptos::prelude::*;

use crate::content::{RESUME_PATH, SOCIAL_LINKS};
use crate::util::scroll;

#[component]
pub fn Hero() -> impl IntoView {
    let to_about = move |_| scroll::scroll_to_section("about");

    view! {
        <section id="home" class="hero">
            <div class="hero__backdrop" aria-hidden="true">
                <div class="hero__blob hero__blob--pink"></div>
                <div class="hero__blob hero__blob--blue"></div>
                <div class="hero__blob hero__blob--amber"></div>
            </div>

            <div class="hero__content container">
                <p class="hero__greeting">"Hello! 👋"</p>
                <h1 class="hero__headline">
                    "A developer who stays "
                    <span class="text-gradient">"one step ahead"</span>
                </h1>
                <p class="hero__tagline">
                    "I care about user experience and build meaningful digital products with clean, efficient code."
                </p>

                <div class="hero__actions">
                    <button class="btn btn--primary" on:click=to_about>
                        "View projects"
                    </button>
                    <a class="btn btn--outline" href=RESUME_PATH download="resume.pdf">
                        "⤓ Download resume"
                    </a>
                </div>

                <div class="hero__socials">
                    {SOCIAL_LINKS
                        .into_iter()
                        .map(|link| {
                            let external = link.is_external();
                            view! {
                                <a
                                    class="hero__social"
                                    href=link.url
                                    target=external.then_some("_blank")
                                    rel=external.then_some("noopener noreferrer")
                                    aria-label=link.name
                                >
                                    {link.icon}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <button class="hero__scroll-cue" on:click=to_about aria-label="Scroll down">
                "↓"
            </button>
        </section>
    }
}
