use leptos::prelude::*;

use super::icons::ServiceIcon;
use crate::contact;

static HIGHLIGHTS: [(&str, &str, &str); 4] = [
    ("zap", "أداء فائق السرعة", "تحسين الأداء والسرعة"),
    ("users", "تجربة مستخدم متميزة", "UX/UI حديث ومتجاوب"),
    ("rocket", "تحسين محركات البحث", "SEO متقدم ومحسن"),
    ("globe", "ذكاء اصطناعي", "تقنيات AI متطورة"),
];

static BOTTOM_STATS: [(&str, &str); 4] = [
    ("100%", "مواقع محسنة للجوال"),
    ("99%", "وقت تشغيل مضمون"),
    ("24/7", "دعم فني متواصل"),
    ("A+", "تقييم الأداء والسرعة"),
];

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section class="about section">
            <div class="container">
                <div class="about__layout">
                    <div class="about__copy">
                        <span class="badge">"من نحن"</span>
                        <h2>
                            <span class="accent">"أكثر من عقد"</span>
                            <br/>
                            "من الخبرة والإبداع"
                        </h2>
                        <div class="rule"></div>

                        <p>
                            "نحن فريق من المحترفين المتخصصين في تصميم وتطوير المواقع الإلكترونية منذ أكثر من 10 سنوات. نجمع بين الخبرة العريقة والتقنيات الحديثة لنقدم لك حلول رقمية متطورة تواكب العصر."
                        </p>
                        <p>
                            "نستخدم أحدث التقنيات والأدوات لضمان سرعة أداء مواقعنا وتحسين تجربة المستخدم وتحسين محركات البحث. فلسفتنا تقوم على جعل كل موقع نصممه أداة تسويقية قوية تحقق أهدافك التجارية."
                        </p>
                        <p>
                            "نواكب التطور التقني ونستفيد من تقنيات الذكاء الاصطناعي في تطوير حلولنا، مما يضمن لك موقع ذكي وتفاعلي يتميز بالأداء العالي والوظائف المتقدمة."
                        </p>

                        <button
                            class="btn btn--gold"
                            on:click=|_| contact::open_conversation(Some("مرحباً، أريد معرفة المزيد عن خبراتكم وخدماتكم"))
                        >
                            "اعرف المزيد عنا"
                        </button>
                    </div>

                    <div class="about__card">
                        <div class="about__badges">
                            <div class="about__badge">
                                <div class="about__badge-value">"+10"</div>
                                <div class="about__badge-label">"سنوات خبرة"</div>
                            </div>
                            <div class="about__badge">
                                <div class="about__badge-value">"AI"</div>
                                <div class="about__badge-label">"تقنيات ذكية"</div>
                            </div>
                        </div>

                        <h3>"تقنياتنا المتقدمة"</h3>
                        <ul class="about__highlights">
                            {HIGHLIGHTS
                                .iter()
                                .map(|&(icon, title, detail)| {
                                    view! {
                                        <li class="about__highlight">
                                            <span class="about__highlight-icon">
                                                <ServiceIcon name=icon/>
                                            </span>
                                            <div>
                                                <div class="about__highlight-title">{title}</div>
                                                <div class="about__highlight-detail">{detail}</div>
                                            </div>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                    </div>
                </div>

                <div class="about__stats">
                    {BOTTOM_STATS
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
