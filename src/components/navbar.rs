use leptos::prelude::*;

use crate::content::{BRAND_NAME, LOGO, NAV_LINKS};

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="container navbar__inner">
                <a class="navbar__brand" href="#home">
                    <img src=LOGO alt=BRAND_NAME/>
                </a>

                <div class="navbar__links">
                    {NAV_LINKS
                        .iter()
                        .map(|(href, label)| {
                            view! {
                                <a class="navbar__link" href=*href>
                                    {*label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <button class="navbar__burger" aria-label="القائمة">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
        </nav>
    }
}
