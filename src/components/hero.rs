use leptos::prelude::*;

use super::icons::WhatsAppIcon;
use crate::contact;
use crate::content::HERO_IMAGE;

static STATS: [(&str, &str); 4] = [
    ("400", "مشروع مكتمل"),
    ("300", "عميل سعيد"),
    ("10", "سنوات خبرة"),
    ("24", "ساعة دعم"),
];

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="hero">
            <div class="hero__backdrop">
                <img src=HERO_IMAGE alt=""/>
            </div>
            <div class="hero__overlay"></div>

            <div class="container hero__content">
                <h1 class="hero__title animate-rise">"نحن نبني مستقبلك الرقمي"</h1>
                <p class="hero__subtitle animate-rise">
                    "نصمم ونطور مواقع إلكترونية ومتاجر رقمية احترافية تساعد عملك على النمو والازدهار في العالم الرقمي"
                </p>

                <div class="hero__actions animate-pop">
                    <button
                        class="btn btn--gold"
                        on:click=|_| contact::open_conversation(Some("مرحباً، أريد بدء مشروع جديد معكم"))
                    >
                        <WhatsAppIcon/>
                        "ابدأ مشروعك الآن"
                    </button>
                    <a class="btn btn--outline" href="#portfolio">"شاهد أعمالنا"</a>
                </div>

                <div class="hero__stats">
                    {STATS
                        .iter()
                        .map(|(value, label)| {
                            view! {
                                <div class="stat">
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
