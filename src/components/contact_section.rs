use leptos::prelude::*;

use super::icons::{EnvelopeIcon, MapPinIcon, ServiceIcon, WhatsAppIcon};
use crate::contact;
use crate::content::{ADDRESS, EMAIL, PHONE_DISPLAY};

static CTA_CARDS: [(&str, &str, &str, &str); 3] = [
    (
        "globe",
        "موقع إلكتروني",
        "احصل على موقع احترافي لعملك",
        "مرحباً، أريد الاستفسار عن تصميم موقع إلكتروني",
    ),
    (
        "cart",
        "متجر إلكتروني",
        "ابدأ بيع منتجاتك أونلاين",
        "مرحباً، أريد الاستفسار عن إنشاء متجر إلكتروني",
    ),
    (
        "rocket",
        "تسويق رقمي",
        "نمي عملك بالتسويق الذكي",
        "مرحباً، أريد الاستفسار عن خدمات التسويق الرقمي",
    ),
];

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="contact section section--tinted">
            <div class="container">
                <div class="section-heading">
                    <h2>"تواصل معنا عبر واتساب"</h2>
                    <p>"ابدأ مشروعك اليوم واحصل على استشارة مجانية فورية"</p>
                </div>

                <ul class="contact__cards">
                    {CTA_CARDS
                        .iter()
                        .map(|&(icon, title, detail, message)| {
                            view! {
                                <li class="contact-card animate-rise">
                                    <span class="contact-card__icon">
                                        <ServiceIcon name=icon/>
                                    </span>
                                    <h3>{title}</h3>
                                    <p>{detail}</p>
                                    <button
                                        class="btn btn--gold"
                                        on:click=move |_| contact::open_conversation(Some(message))
                                    >
                                        <WhatsAppIcon/>
                                        "استفسر الآن"
                                    </button>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>

                <div class="contact__main animate-pop">
                    <span class="contact__main-icon">
                        <WhatsAppIcon/>
                    </span>
                    <h3>"تحدث معنا مباشرة"</h3>
                    <p>"احصل على استشارة مجانية وعرض سعر مخصص لمشروعك في دقائق"</p>
                    <button
                        class="btn btn--light"
                        on:click=|_| contact::open_conversation(Some("مرحباً، أريد الحصول على استشارة مجانية وعرض سعر لمشروعي"))
                    >
                        <WhatsAppIcon/>
                        "ابدأ المحادثة الآن"
                    </button>
                </div>

                <div class="contact__info">
                    <div class="contact__info-item">
                        <WhatsAppIcon/>
                        <div>
                            <div class="contact__info-label">"واتساب"</div>
                            <div class="contact__info-value" dir="ltr">{PHONE_DISPLAY}</div>
                        </div>
                    </div>
                    <div class="contact__info-item">
                        <EnvelopeIcon/>
                        <div>
                            <div class="contact__info-label">"البريد الإلكتروني"</div>
                            <div class="contact__info-value">{EMAIL}</div>
                        </div>
                    </div>
                    <div class="contact__info-item">
                        <MapPinIcon/>
                        <div>
                            <div class="contact__info-label">"العنوان"</div>
                            <div class="contact__info-value">{ADDRESS}</div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
