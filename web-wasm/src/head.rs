//! `<head>` へのメタタグと JSON-LD の差し込み

use crate::app::asset;
use ledgers_common::content::PROFILE;
use ledgers_common::seo::{local_business_json_ld, PageMeta};
use wasm_bindgen::JsValue;

pub fn apply_page_meta(site_url: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document is not available"))?;
    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("<head> is missing"))?;

    let meta = PageMeta::site();
    document.set_title(&meta.title);

    for (attr, key, value) in meta.tags() {
        let value = if key.ends_with(":image") { asset(&value) } else { value };
        let element = document.create_element("meta")?;
        element.set_attribute(attr, key)?;
        element.set_attribute("content", &value)?;
        head.append_child(&element)?;
    }

    let json_ld = local_business_json_ld(&PROFILE, site_url);
    let script = document.create_element("script")?;
    script.set_attribute("type", "application/ld+json")?;
    script.set_text_content(Some(&json_ld.to_string()));
    head.append_child(&script)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_apply_page_meta() {
        apply_page_meta("https://example.com").unwrap();
        let document = web_sys::window().unwrap().document().unwrap();

        assert_eq!(document.title(), "Greig's Ledgers");
        let script = document
            .query_selector("script[type='application/ld+json']")
            .unwrap()
            .unwrap();
        assert!(script.text_content().unwrap().contains("LocalBusiness"));
        assert!(document
            .query_selector("meta[name='keywords']")
            .unwrap()
            .is_some());
    }
}
