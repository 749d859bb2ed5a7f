use leptos::prelude::*;

use crate::content::CLIENT_LOGOS;

static CLIENT_STATS: [(&str, &str); 4] = [
    ("100+", "عميل راضي"),
    ("15+", "دولة مختلفة"),
    ("500+", "مشروع ناجح"),
    ("98%", "معدل الرضا"),
];

#[component]
pub fn Clients() -> impl IntoView {
    view! {
        <section class="clients section">
            <div class="container">
                <div class="section-heading">
                    <h2>"عملاؤنا الكرام"</h2>
                    <p>"شركاء النجاح الذين نفخر بخدمتهم"</p>
                </div>
            </div>

            <div class="clients__carousel">
                <div class="clients__fade clients__fade--start"></div>
                <div class="clients__fade clients__fade--end"></div>

                <div class="clients__track">
                    // duplicated sets make the scroll loop seamless
                    {(0..4)
                        .map(|set| {
                            let duplicate = if set > 0 { "true" } else { "false" };
                            view! {
                                <div class="clients__set" aria-hidden=duplicate>
                                    {CLIENT_LOGOS
                                        .iter()
                                        .map(|logo| {
                                            view! {
                                                <div class="clients__logo">
                                                    <img src=format!("/clients/{logo}") alt="Client Logo"/>
                                                </div>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>

            <div class="container">
                <div class="clients__stats">
                    {CLIENT_STATS
                        .iter()
                        .map(|(value, label)| {
                            view! {
                                <div class="stat stat--card">
                                    <div class="stat__value">{*value}</div>
                                    <div class="stat__label">{*label}</div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
