use leptos::prelude::*;

use crate::content::{Project, PROJECTS};

#[component]
pub fn Portfolio(#[prop(into)] on_select: Callback<&'static Project>) -> impl IntoView {
    view! {
        <section id="portfolio" class="portfolio section section--tinted">
            <div class="container">
                <div class="section-heading">
                    <h2>"معرض أعمالنا"</h2>
                    <p>"مشاريع ناجحة نفخر بإنجازها"</p>
                </div>

                <ul class="portfolio__grid">
                    {PROJECTS
                        .iter()
                        .map(|project| view! { <PortfolioTile project=project on_select=on_select/> })
                        .collect::<Vec<_>>()}
                </ul>
            </div>
        </section>
    }
}

#[component]
fn PortfolioTile(
    project: &'static Project,
    #[prop(into)] on_select: Callback<&'static Project>,
) -> impl IntoView {
    view! {
        <li class="portfolio-tile animate-pop">
            <div class="portfolio-tile__intro">
                <h3>{project.title}</h3>
                <p>{project.description}</p>
            </div>
            <div class="portfolio-tile__media">
                <img src=project.image alt=project.title/>
                <div class="portfolio-tile__overlay">
                    <button class="btn btn--light" on:click=move |_| on_select.run(project)>
                        "عرض المشروع"
                    </button>
                </div>
            </div>
        </li>
    }
}
