//! Outbound WhatsApp contact action.
//!
//! The recipient number and the messaging-service base are fixed; only the
//! message text varies per call site. When the page-level conversion hook is
//! installed by the analytics integration it is handed the link and decides
//! how to navigate; otherwise the link opens directly in a new tab.

pub const WHATSAPP_DIGITS: &str = "971503412174";
pub const DEFAULT_GREETING: &str = "مرحباً، أريد الاستفسار عن خدماتكم";

const DEEP_LINK_BASE: &str = "https://wa.me";

/// Build the conversation deep link for `message`, falling back to the
/// default greeting when the message is empty or absent.
pub fn whatsapp_url(message: Option<&str>) -> String {
    let text = match message {
        Some(m) if !m.is_empty() => m,
        _ => DEFAULT_GREETING,
    };

    format!(
        "{DEEP_LINK_BASE}/{WHATSAPP_DIGITS}?text={}",
        urlencoding::encode(text)
    )
}

/// Open a WhatsApp conversation for `message`.
///
/// Navigation failures (e.g. a blocked popup) are a browser concern and are
/// not reported. During server rendering this is a no-op; the action only
/// ever fires from hydrated click handlers.
pub fn open_conversation(message: Option<&str>) {
    let url = whatsapp_url(message);

    #[cfg(target_arch = "wasm32")]
    {
        use leptos::wasm_bindgen::prelude::wasm_bindgen;

        #[wasm_bindgen(
            inline_js = "export function dispatch_deep_link(url) { if (typeof window.gtag_report_conversion === 'function') { window.gtag_report_conversion(url); } else { window.open(url, '_blank', 'noopener,noreferrer'); } }"
        )]
        extern "C" {
            fn dispatch_deep_link(url: &str);
        }

        dispatch_deep_link(&url);
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = url;
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    #[test]
    fn empty_and_absent_messages_share_the_default_greeting() {
        assert_eq!(whatsapp_url(None), whatsapp_url(Some("")));
        assert!(whatsapp_url(None).contains(&*urlencoding::encode(DEFAULT_GREETING)));
    }

    #[test]
    fn spaces_are_percent_encoded() {
        let url = whatsapp_url(Some("a b"));
        assert!(url.ends_with("?text=a%20b"));
        assert!(url.contains(WHATSAPP_DIGITS));
    }

    #[test]
    fn link_parses_and_the_text_round_trips() {
        let message = "مرحباً، أريد بدء مشروع جديد معكم";
        let url = Url::parse(&whatsapp_url(Some(message))).unwrap();

        assert_eq!(url.host_str(), Some("wa.me"));
        assert_eq!(url.path(), format!("/{WHATSAPP_DIGITS}"));

        let text = url
            .query_pairs()
            .find(|(key, _)| key == "text")
            .map(|(_, value)| value.into_owned())
            .unwrap();
        assert_eq!(text, message);
    }
}
