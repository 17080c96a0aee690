//! Fixed site header: brand, section navigation, theme and menu toggles.
//!
//! SYSTEM CONTEXT
//! ==============
//! The header is the only writer of the theme store. It also owns the
//! scroll listener that switches the header to its solid style.

use leptos::prelude::*;

use crate::content::{NAV_ITEMS, SITE_TITLE};
use crate::state::ui::UiState;
use crate::util::dark_mode::BrowserThemeStore;
use crate::util::scroll;

/// Top navigation bar.
#[component]
pub fn Header() -> impl IntoView {
    let theme = expect_context::<RwSignal<BrowserThemeStore>>();
    let ui = expect_context::<RwSignal<UiState>>();

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let y = scroll::scroll_y();
            if ui.with_untracked(|u| u.scrolled != crate::state::ui::is_scrolled(y)) {
                ui.update(|u| {
                    u.set_scroll_offset(y);
                });
            }
        });
        on_cleanup(move || handle.remove());
    }

    let navigate = move |anchor: &'static str| {
        scroll::scroll_to_section(anchor);
        ui.update(UiState::close_mobile_menu);
    };

    let nav_buttons = move |class: &'static str| {
        NAV_ITEMS
            .into_iter()
            .map(|item| {
                view! {
                    <button class=class on:click=move |_| navigate(item.anchor)>
                        {item.label}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <header class=move || {
            if ui.with(|u| u.scrolled) { "site-header site-header--scrolled" } else { "site-header" }
        }>
            <nav class="site-header__nav container">
                <a
                    class="site-header__brand text-gradient"
                    href="#home"
                    on:click=move |ev| {
                        ev.prevent_default();
                        navigate("home");
                    }
                >
                    {SITE_TITLE}
                </a>

                <div class="site-header__links">{nav_buttons("site-header__link")}</div>

                <div class="site-header__actions">
                    <button
                        class="btn btn--icon site-header__theme-toggle"
                        on:click=move |_| {
                            theme.update(|t| {
                                t.toggle();
                            });
                        }
                        aria-label="Toggle theme"
                        title="Toggle theme"
                    >
                        {move || if theme.with(|t| t.is_dark()) { "☀" } else { "☾" }}
                    </button>
                    <button
                        class="btn btn--icon site-header__menu-toggle"
                        on:click=move |_| ui.update(UiState::toggle_mobile_menu)
                        aria-label="Toggle menu"
                        aria-expanded=move || ui.with(|u| u.mobile_menu_open).to_string()
                    >
                        {move || if ui.with(|u| u.mobile_menu_open) { "✕" } else { "☰" }}
                    </button>
                </div>
            </nav>

            <Show when=move || ui.with(|u| u.mobile_menu_open)>
                <div class="site-header__mobile-menu">{nav_buttons("site-header__mobile-link")}</div>
            </Show>
        </header>
    }
}
