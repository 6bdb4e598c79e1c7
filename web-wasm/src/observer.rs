//! IntersectionObserver によるセクション監視

use ledgers_common::{ActiveBand, VisibilityEvent};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

pub struct SectionObserver {
    observer: IntersectionObserver,
    regions: Vec<String>,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl SectionObserver {
    /// ページ上に存在する id だけを監視する
    pub fn connect<F>(band: ActiveBand, ids: &[String], on_change: F) -> Result<Self, JsValue>
    where
        F: Fn(VisibilityEvent) + 'static,
    {
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    on_change(VisibilityEvent {
                        region_id: entry.target().id(),
                        is_visible: entry.is_intersecting(),
                    });
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_root_margin(&band.root_margin());
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("document is not available"))?;

        let mut regions = Vec::new();
        for id in ids {
            match document.get_element_by_id(id) {
                Some(element) => {
                    observer.observe(&element);
                    regions.push(id.clone());
                }
                None => log::debug!("section #{} not found, skipped", id),
            }
        }

        Ok(Self {
            observer,
            regions,
            _callback: callback,
        })
    }

    pub fn regions(&self) -> &[String] {
        &self.regions
    }
}

impl Drop for SectionObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
