use leptos::prelude::*;

use super::icons::{CheckIcon, ServiceIcon};
use crate::content::SERVICES;

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id="services" class="services section section--tinted">
            <div class="container">
                <div class="section-heading">
                    <h2>"خدماتنا المتميزة"</h2>
                    <p>"نقدم حلول شاملة لجميع احتياجاتك الرقمية"</p>
                </div>

                <ul class="services__grid">
                    {SERVICES
                        .iter()
                        .map(|service| {
                            view! {
                                <li class="service-card animate-rise">
                                    <span class="service-card__icon">
                                        <ServiceIcon name=service.icon/>
                                    </span>
                                    <h3>{service.title}</h3>
                                    <p>{service.description}</p>
                                    <ul class="service-card__features">
                                        {service
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
