use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Link, Meta, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};

use crate::components::{
    About, Clients, ContactSection, Footer, Hero, Navbar, Portfolio, Pricing, ProjectModalView,
    Services, Testimonials, WhatsAppButton,
};
use crate::content::Project;
use crate::modal::{ProjectModal, REVEAL_DELAY};
use crate::seo;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="ar" dir="rtl">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/clicksalesmedia.css"/>

        <Title text="كليك سيلز ميديا - تصميم مواقع ومتاجر إلكترونية في دبي | Click Sales Media"/>
        <Meta name="description" content=seo::DESCRIPTION/>
        <Meta name="keywords" content=seo::KEYWORDS/>
        <Meta name="theme-color" content="#c3a177"/>
        <Link rel="canonical" href=seo::SITE_URL/>
        <StructuredData/>

        <Router>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn StructuredData() -> impl IntoView {
    [seo::organization(), seo::local_business(), seo::website()]
        .into_iter()
        .map(|doc| {
            view! {
                <script type="application/ld+json" inner_html=doc.to_string()></script>
            }
        })
        .collect::<Vec<_>>()
}

#[component]
fn HomePage() -> impl IntoView {
    // The one piece of interactive state on the page. Owned here and handed
    // explicitly to the grid (select) and the modal view (render/close).
    let modal = RwSignal::new(ProjectModal::default());

    let on_select = Callback::new(move |project: &'static Project| {
        if let Some(ticket) = modal.try_update(|m| m.open(project)) {
            set_timeout(
                move || {
                    let _ = modal.try_update(|m| m.reveal(ticket));
                },
                REVEAL_DELAY,
            );
        }
    });

    view! {
        <div class="page">
            <Navbar/>
            <Hero/>
            <About/>
            <Services/>
            <Portfolio on_select=on_select/>
            <Clients/>
            <Testimonials/>
            <Pricing/>
            <ContactSection/>
            <Footer/>
            <WhatsAppButton/>
            <ProjectModalView state=modal/>
        </div>
    }
}
