//! Structured data (JSON-LD) documents for search engines.
//!
//! Built from the compiled-in content tables so the markup and the metadata
//! can never drift apart.

use serde_json::{json, Value};

use crate::contact;
use crate::content;

pub const SITE_URL: &str = "https://clicksalesmedia.com";

pub const DESCRIPTION: &str = "شركة كليك سيلز ميديا رائدة في تصميم وتطوير المواقع والمتاجر الإلكترونية في دبي والإمارات. نقدم حلول رقمية احترافية، صفحات هبوط، تسويق رقمي وتحسين محركات البحث SEO. خبرة +10 سنوات";

pub const KEYWORDS: &str = "تصميم مواقع دبي, متاجر إلكترونية دبي, صفحات هبوط دبي, تسويق رقمي دبي, شركة تصميم مواقع الإمارات, تحسين محركات البحث دبي, Click Sales Media, website design Dubai, ecommerce development UAE, digital marketing Dubai";

fn offer_catalog() -> Value {
    let offers: Vec<Value> = content::SERVICES
        .iter()
        .map(|service| {
            json!({
                "@type": "Offer",
                "itemOffered": {
                    "@type": "Service",
                    "name": service.title,
                    "description": service.description,
                }
            })
        })
        .collect();

    json!({
        "@type": "OfferCatalog",
        "name": "خدمات كليك سيلز ميديا",
        "itemListElement": offers,
    })
}

pub fn organization() -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Organization",
        "name": content::BRAND_NAME,
        "alternateName": content::BRAND_NAME_AR,
        "url": SITE_URL,
        "logo": format!("{SITE_URL}{}", content::LOGO),
        "description": "شركة رائدة في تصميم وتطوير المواقع والمتاجر الإلكترونية في دبي والإمارات",
        "foundingDate": "2014",
        "address": {
            "@type": "PostalAddress",
            "streetAddress": "ند الشبا",
            "addressLocality": "دبي",
            "addressCountry": "AE"
        },
        "contactPoint": {
            "@type": "ContactPoint",
            "telephone": format!("+{}", contact::WHATSAPP_DIGITS),
            "contactType": "customer service",
            "availableLanguage": ["Arabic", "English"]
        },
        "sameAs": [format!("https://wa.me/{}", contact::WHATSAPP_DIGITS)],
        "hasOfferCatalog": offer_catalog(),
    })
}

pub fn local_business() -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "LocalBusiness",
        "name": content::BRAND_NAME,
        "image": format!("{SITE_URL}{}", content::LOGO),
        "telephone": format!("+{}", contact::WHATSAPP_DIGITS),
        "email": content::EMAIL,
        "address": {
            "@type": "PostalAddress",
            "streetAddress": "ند الشبا",
            "addressLocality": "دبي",
            "addressCountry": "AE"
        },
        "geo": {
            "@type": "GeoCoordinates",
            "latitude": 25.204_849_3,
            "longitude": 55.270_782_8
        },
        "priceRange": "$$",
    })
}

pub fn website() -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "WebSite",
        "name": content::BRAND_NAME,
        "alternateName": content::BRAND_NAME_AR,
        "url": SITE_URL,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn organization_offers_one_entry_per_service() {
        let doc = organization();
        assert_eq!(doc["@type"], "Organization");

        let offers = doc["hasOfferCatalog"]["itemListElement"]
            .as_array()
            .unwrap();
        assert_eq!(offers.len(), content::SERVICES.len());
    }

    #[test]
    fn documents_carry_schema_context() {
        for doc in [organization(), local_business(), website()] {
            assert_eq!(doc["@context"], "https://schema.org");
            assert!(doc["@type"].is_string());
        }
    }

    #[test]
    fn business_phone_matches_the_deep_link_recipient() {
        let doc = local_business();
        let telephone = doc["telephone"].as_str().unwrap();
        assert_eq!(telephone, format!("+{}", contact::WHATSAPP_DIGITS));
    }
}
