//! Footer with social links, quick links, scroll-to-top, and copyright.

use leptos::prelude::*;

use crate::content::{NAV_ITEMS, OWNER_NAME, SITE_TITLE, SOCIAL_LINKS};
use crate::util::scroll;

#[component]
pub fn Footer() -> impl IntoView {
    let year = time::OffsetDateTime::now_utc().year();

    view! {
        <footer class="site-footer">
            <button class="btn btn--icon site-footer__top" on:click=move |_| scroll::scroll_to_top() aria-label="Scroll to top">
                "↑"
            </button>

            <div class="container site-footer__grid">
                <div class="site-footer__brand">
                    <h2 class="text-gradient">{SITE_TITLE}</h2>
                    <p>"Building user-centered web experiences."</p>
                    <div class="site-footer__socials">
                        {SOCIAL_LINKS
                            .into_iter()
                            .map(|link| {
                                let external = link.is_external();
                                view! {
                                    <a
                                        class="site-footer__social"
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

                <nav class="site-footer__links">
                    <h3>"Quick links"</h3>
                    <ul>
                        {NAV_ITEMS
                            .into_iter()
                            .map(|item| {
                                view! {
                                    <li>
                                        <button class="site-footer__link" on:click=move |_| scroll::scroll_to_section(item.anchor)>
                                            {item.label}
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </nav>
            </div>

            <div class="container site-footer__bottom">
                <p>{format!("© {year} {OWNER_NAME}. All rights reserved.")}</p>
                <p>"Made with ♥ in Rust"</p>
            </div>
        </footer>
    }
}
