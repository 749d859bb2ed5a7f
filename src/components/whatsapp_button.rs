use leptos::prelude::*;

use super::icons::WhatsAppIcon;
use crate::contact;

#[component]
pub fn WhatsAppButton() -> impl IntoView {
    view! {
        <div class="floating-whatsapp">
            <button
                class="floating-whatsapp__button"
                aria-label="تحدث معنا عبر واتساب"
                title="تحدث معنا عبر واتساب"
                on:click=|_| contact::open_conversation(None)
            >
                <WhatsAppIcon/>
            </button>
        </div>
    }
}
