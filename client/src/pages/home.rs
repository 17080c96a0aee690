//! The single portfolio page.

use leptos::prelude::*;

use crate::components::{
    about::About, contact::Contact, footer::Footer, header::Header, hero::Hero, projects::Projects, skills::Skills,
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page">
            <Header/>
            <main>
                <Hero/>
                <About/>
                <Skills/>
                <Projects/>
                <Contact/>
            </main>
            <Footer/>
        </div>
    }
}
