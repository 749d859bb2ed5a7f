use leptos::prelude::*;

use super::icons::{CheckIcon, WhatsAppIcon};
use crate::contact;
use crate::content::PLANS;

#[component]
pub fn Pricing() -> impl IntoView {
    view! {
        <section id="pricing" class="pricing section">
            <div class="container">
                <div class="section-heading">
                    <h2>"باقات الأسعار"</h2>
                    <p>"اختر الباقة المناسبة لك"</p>
                </div>

                <ul class="pricing__grid">
                    {PLANS
                        .iter()
                        .map(|plan| {
                            let card_class = if plan.popular {
                                "pricing-card pricing-card--popular animate-rise"
                            } else {
                                "pricing-card animate-rise"
                            };

                            view! {
                                <li class=card_class>
                                    {plan.popular.then(|| view! {
                                        <span class="pricing-card__flag">"الأكثر شعبية"</span>
                                    })}

                                    <div class="pricing-card__head">
                                        <div>
                                            <h3>{plan.name}</h3>
                                            <p>{plan.description}</p>
                                        </div>
                                        <button
                                            class="btn btn--gold"
                                            on:click=move |_| {
                                                let message = format!("مرحباً، أريد الاستفسار عن {}", plan.name);
                                                contact::open_conversation(Some(&message));
                                            }
                                        >
                                            <WhatsAppIcon/>
                                            "اختر"
                                        </button>
                                    </div>

                                    <ul class="pricing-card__features">
                                        {plan
                                            .features
                                            .iter()
                                            .map(|feature| {
                                                view! {
                                                    <li>
                                                        <CheckIcon/>
                                                        <span>{*feature}</span>
                                                    </li>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </div>
        </section>
    }
}
