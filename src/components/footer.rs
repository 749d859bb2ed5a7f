use leptos::prelude::*;

use crate::content::{BRAND_NAME, BRAND_NAME_AR, LOGO};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <img class="footer__logo" src=LOGO alt=BRAND_NAME/>
                <p class="footer__tagline">"شريكك المثالي في رحلة التحول الرقمي"</p>
                <div class="footer__legal">
                    <p>"© 2025 " {BRAND_NAME_AR} ". جميع الحقوق محفوظة."</p>
                </div>
            </div>
        </footer>
    }
}
