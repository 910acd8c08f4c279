//! The single portfolio page.

use leptos::prelude::*;

use crate::components::{
    contact_form::ContactForm, gallery::Gallery, lightbox::Lightbox, scroll_link::ScrollLink, site_footer::SiteFooter,
    site_nav::SiteNav, theme_toggle::ThemeToggle,
};

const SERVICES: &[(&str, &str)] = &[
    ("Brand identity", "Logos, type systems and guidelines that hold up from favicon to billboard."),
    ("Product design", "Interfaces for web and mobile, prototyped early and tested with real users."),
    ("Art direction", "Photography and motion that give a launch its own visual voice."),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <header id="top" class="site-header">
            <ScrollLink href="#top" class="brand">
                "Stellar"
            </ScrollLink>
            <SiteNav/>
            <ThemeToggle/>
        </header>

        <main>
            <section class="hero">
                <h1>"Design studio for ambitious launches"</h1>
                <p class="hero__lead">"We shape brands and products that people remember."</p>
                <ScrollLink href="#contact" class="btn btn--primary">
                    "Start a project"
                </ScrollLink>
            </section>

            <section id="about" class="section">
                <h2>"About"</h2>
                <p>
                    "Stellar is a small, senior team of designers and engineers. We work closely with "
                    "founders and in-house teams from first sketch to shipped product."
                </p>
            </section>

            <section id="services" class="section">
                <h2>"Services"</h2>
                <ul class="services">
                    {SERVICES
                        .iter()
                        .map(|&(title, body)| {
                            view! {
                                <li class="services__item">
                                    <h3>{title}</h3>
                                    <p>{body}</p>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </section>

            <section id="gallery" class="section">
                <h2>"Selected work"</h2>
                <Gallery/>
            </section>

            <section id="contact" class="section">
                <h2>"Contact"</h2>
                <p>"Tell us about your project and we will get back to you within two working days."</p>
                <ContactForm/>
            </section>
        </main>

        <Lightbox/>
        <SiteFooter/>
    }
}
