//! ページのメタ情報と構造化データ(JSON-LD)

use crate::content::Profile;
use serde::Serialize;
use serde_json::{json, Value};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub author: String,
    pub og_title: String,
    pub og_description: String,
    pub og_image: String,
    pub twitter_card: String,
}

impl PageMeta {
    pub fn site() -> Self {
        let og_title = "Greig Colliar | Bookkeeping & IT Support".to_string();
        Self {
            title: "Greig's Ledgers".to_string(),
            description: "Professional bookkeeping, payroll, and IT support services by Greig Colliar in Perth, Scotland. Helping small businesses stay financially organized and efficient.".to_string(),
            keywords: [
                "bookkeeping Perth",
                "payroll specialist",
                "accountant Scotland",
                "management accounts",
                "Xero advisor",
                "financial reporting",
                "Greig Colliar",
            ]
            .iter()
            .map(|k| k.to_string())
            .collect(),
            author: "Greig Colliar".to_string(),
            og_title,
            og_description: "Bookkeeping, payroll, and IT support services for small businesses in Perth, Scotland.".to_string(),
            og_image: "/profile.jpg".to_string(),
            twitter_card: "summary_large_image".to_string(),
        }
    }

    /// `<meta>` に並べる (属性名, キー, 値)
    pub fn tags(&self) -> Vec<(&'static str, &'static str, String)> {
        vec![
            ("name", "description", self.description.clone()),
            ("name", "keywords", self.keywords.join(", ")),
            ("name", "author", self.author.clone()),
            ("property", "og:title", self.og_title.clone()),
            ("property", "og:description", self.og_description.clone()),
            ("property", "og:image", self.og_image.clone()),
            ("name", "twitter:card", self.twitter_card.clone()),
            ("name", "twitter:title", self.og_title.clone()),
            ("name", "twitter:description", self.og_description.clone()),
            ("name", "twitter:image", self.og_image.clone()),
        ]
    }
}

/// schema.org LocalBusiness
pub fn local_business_json_ld(profile: &Profile, site_url: &str) -> Value {
    let site_url = site_url.trim_end_matches('/');
    let same_as: Vec<&str> = profile.socials.iter().map(|s| s.url).collect();
    json!({
        "@context": "https://schema.org",
        "@type": "LocalBusiness",
        "name": profile.name,
        "image": format!("{site_url}{}", profile.photo),
        "url": site_url,
        "email": profile.email,
        "address": {
            "@type": "PostalAddress",
            "addressLocality": profile.locality,
            "addressRegion": profile.region,
            "addressCountry": profile.country_code,
        },
        "description": format!(
            "Bookkeeping, payroll, and IT support services in {}, {} by {}.",
            profile.locality, profile.region, profile.name
        ),
        "sameAs": same_as,
        "priceRange": "££",
        "areaServed": "United Kingdom",
        "openingHours": "Mo-Fr 09:00-17:00",
    })
}
