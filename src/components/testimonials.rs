use leptos::prelude::*;

use super::icons::StarIcon;
use crate::content::TESTIMONIALS;

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section class="testimonials section">
            <div class="container">
                <div class="section-heading">
                    <h2>"ماذا يقول عملاؤنا"</h2>
                    <p>"شهادات حقيقية من عملائنا الكرام"</p>
                </div>

                <ul class="testimonials__grid">
                    {TESTIMONIALS
                        .iter()
                        .map(|testimonial| {
                            view! {
                                <li class="testimonial animate-rise">
                                    <div class="testimonial__stars">
                                        {(0..testimonial.rating)
                                            .map(|_| view! { <StarIcon/> })
                                            .collect::<Vec<_>>()}
                                    </div>
                                    <blockquote>{testimonial.content}</blockquote>
                                    <div class="testimonial__author">
                                        <h4>{testimonial.name}</h4>
                                        <p>{testimonial.role}</p>
                                    </div>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </div>
        </section>
    }
}
