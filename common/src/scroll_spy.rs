//! スクロールスパイ
//!
//! ページ内の領域がビューポート中央の「アクティブ帯」に入ったら、
//! その領域のidをアクティブなナビゲーション項目にする。
//! 同時に複数の通知が来た場合は最後の通知が勝つ（表示面積では選ばない）。

use crate::catalog::Navigation;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// ビューポート中央の判定帯（上下マージンは高さに対する%）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActiveBand {
    pub top_margin_pct: f64,
    pub bottom_margin_pct: f64,
}

impl Default for ActiveBand {
    fn default() -> Self {
        // 中央20%
        Self {
            top_margin_pct: 40.0,
            bottom_margin_pct: 40.0,
        }
    }
}

impl ActiveBand {
    /// IntersectionObserver の rootMargin 表記
    pub fn root_margin(&self) -> String {
        format!(
            "-{}% 0px -{}% 0px",
            self.top_margin_pct, self.bottom_margin_pct
        )
    }

    /// ドキュメント座標での帯の上端・下端
    pub fn bounds(&self, viewport: Viewport) -> (f64, f64) {
        let top = viewport.scroll_top + viewport.height * self.top_margin_pct / 100.0;
        let bottom =
            viewport.scroll_top + viewport.height * (1.0 - self.bottom_margin_pct / 100.0);
        (top, bottom.max(top))
    }

    pub fn intersects(&self, region: &Region, viewport: Viewport) -> bool {
        let (band_top, band_bottom) = self.bounds(viewport);
        let region_bottom = region.top + region.height;
        if band_bottom > band_top {
            region.top < band_bottom && region_bottom > band_top
        } else {
            region.top <= band_top && band_top < region_bottom
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    pub scroll_top: f64,
    pub height: f64,
}

/// 監視対象の領域（ドキュメント座標）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// 可視状態の変化通知
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibilityEvent {
    pub region_id: String,
    pub is_visible: bool,
}

impl VisibilityEvent {
    pub fn visible(region_id: impl Into<String>) -> Self {
        Self {
            region_id: region_id.into(),
            is_visible: true,
        }
    }

    pub fn hidden(region_id: impl Into<String>) -> Self {
        Self {
            region_id: region_id.into(),
            is_visible: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScrollSpy {
    band: ActiveBand,
    sections: Vec<String>,
    active: String,
    observed: Vec<String>,
    visible: HashSet<String>,
    observing: bool,
}

impl ScrollSpy {
    pub fn new(navigation: &Navigation, band: ActiveBand) -> Self {
        Self {
            band,
            sections: navigation.targets().iter().map(|t| t.id.clone()).collect(),
            active: navigation.default_section().to_string(),
            observed: Vec::new(),
            visible: HashSet::new(),
            observing: false,
        }
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn band(&self) -> ActiveBand {
        self.band
    }

    pub fn is_observing(&self) -> bool {
        self.observing
    }

    /// 監視を開始する。領域が1つもなければ監視しない
    pub fn observe<I, S>(&mut self, region_ids: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.observed = region_ids.into_iter().map(Into::into).collect();
        self.visible.clear();
        self.observing = !self.observed.is_empty();
        log::debug!(
            "scroll spy observing {} regions (active: {})",
            self.observed.len(),
            self.active
        );
        self.observing
    }

    /// 通知を1件適用する。アクティブ項目が変わったら true
    pub fn handle(&mut self, event: &VisibilityEvent) -> bool {
        if !self.observing || !event.is_visible {
            return false;
        }
        if !self.observed.iter().any(|id| *id == event.region_id) {
            return false;
        }
        if !self.sections.iter().any(|id| *id == event.region_id) {
            log::trace!("region {} is not a navigation target", event.region_id);
            return false;
        }
        if self.active == event.region_id {
            return false;
        }
        log::debug!("active section: {} -> {}", self.active, event.region_id);
        self.active = event.region_id.clone();
        true
    }

    /// 領域の座標から可視状態の変化を検出して適用する（ポーリング版）
    ///
    /// 変化した領域だけをドキュメント順に通知として返す。
    pub fn poll(&mut self, regions: &[Region], viewport: Viewport) -> Vec<VisibilityEvent> {
        if !self.observing {
            return Vec::new();
        }

        let mut events = Vec::new();
        for region in regions {
            if !self.observed.iter().any(|id| *id == region.id) {
                continue;
            }
            let now = self.band.intersects(region, viewport);
            let before = self.visible.contains(&region.id);
            if now == before {
                continue;
            }
            if now {
                self.visible.insert(region.id.clone());
                events.push(VisibilityEvent::visible(region.id.clone()));
            } else {
                self.visible.remove(&region.id);
                events.push(VisibilityEvent::hidden(region.id.clone()));
            }
        }

        for event in &events {
            self.handle(event);
        }
        events
    }

    /// 監視を終了する。以降の通知は無視される
    pub fn disconnect(&mut self) {
        if self.observing {
            log::debug!("scroll spy disconnected");
        }
        self.observing = false;
        self.observed.clear();
        self.visible.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spy() -> ScrollSpy {
        let mut spy = ScrollSpy::new(&Navigation::site(), ActiveBand::default());
        spy.observe(["home", "about", "services", "resume", "case-studies", "testimonials", "contact"]);
        spy
    }

    /// 各セクション高さ1000のページ
    fn page() -> Vec<Region> {
        ["home", "about", "services", "resume", "case-studies", "testimonials", "contact"]
            .iter()
            .enumerate()
            .map(|(i, id)| Region {
                id: id.to_string(),
                top: i as f64 * 1000.0,
                height: 1000.0,
            })
            .collect()
    }

    #[test]
    fn test_default_section_is_home() {
        let spy = ScrollSpy::new(&Navigation::site(), ActiveBand::default());
        assert_eq!(spy.active(), "home");
        assert!(!spy.is_observing());
    }

    #[test]
    fn test_no_regions_means_no_observation() {
        let mut spy = ScrollSpy::new(&Navigation::site(), ActiveBand::default());
        assert!(!spy.observe(Vec::<String>::new()));
        assert!(!spy.handle(&VisibilityEvent::visible("about")));
        assert_eq!(spy.active(), "home");
    }

    #[test]
    fn test_last_visible_event_wins() {
        let mut spy = spy();
        let batch = [
            VisibilityEvent::visible("resume"),
            VisibilityEvent::visible("about"),
            VisibilityEvent::hidden("about"),
        ];
        for event in &batch {
            spy.handle(event);
        }
        // 非表示通知はハイライトを変えない
        assert_eq!(spy.active(), "about");
    }

    #[test]
    fn test_unknown_region_is_ignored() {
        let mut spy = ScrollSpy::new(&Navigation::site(), ActiveBand::default());
        spy.observe(["home", "about", "footer"]);
        assert!(!spy.handle(&VisibilityEvent::visible("footer")));
        assert!(!spy.handle(&VisibilityEvent::visible("contact")));
        assert_eq!(spy.active(), "home");
    }

    #[test]
    fn test_disconnect_stops_updates() {
        let mut spy = spy();
        assert!(spy.handle(&VisibilityEvent::visible("services")));
        spy.disconnect();
        assert!(!spy.handle(&VisibilityEvent::visible("contact")));
        assert_eq!(spy.active(), "services");
        assert!(spy.poll(&page(), Viewport { scroll_top: 5000.0, height: 1000.0 }).is_empty());
    }

    #[test]
    fn test_root_margin() {
        assert_eq!(ActiveBand::default().root_margin(), "-40% 0px -40% 0px");
    }

    #[test]
    fn test_band_bounds() {
        let band = ActiveBand::default();
        let (top, bottom) = band.bounds(Viewport { scroll_top: 1000.0, height: 500.0 });
        assert!((top - 1200.0).abs() < 1e-9);
        assert!((bottom - 1300.0).abs() < 1e-9);
    }

    #[test]
    fn test_poll_reports_crossings_only() {
        let mut spy = spy();
        let viewport = Viewport { scroll_top: 0.0, height: 1000.0 };

        let events = spy.poll(&page(), viewport);
        assert_eq!(events, vec![VisibilityEvent::visible("home")]);
        assert_eq!(spy.active(), "home");

        // 変化がなければ通知なし
        assert!(spy.poll(&page(), viewport).is_empty());

        // 帯(2400..2600)は services(2000..3000) の中
        let events = spy.poll(&page(), Viewport { scroll_top: 2000.0, height: 1000.0 });
        assert_eq!(
            events,
            vec![VisibilityEvent::hidden("home"), VisibilityEvent::visible("services")]
        );
        assert_eq!(spy.active(), "services");
    }

    #[test]
    fn test_poll_boundary_straddle_last_in_document_order_wins() {
        let mut spy = spy();
        // 帯(900..1100) が home と about にまたがる
        let events = spy.poll(&page(), Viewport { scroll_top: 500.0, height: 1000.0 });
        assert_eq!(
            events,
            vec![VisibilityEvent::visible("home"), VisibilityEvent::visible("about")]
        );
        assert_eq!(spy.active(), "about");
    }

    #[test]
    fn test_zero_height_band_is_a_line() {
        let band = ActiveBand { top_margin_pct: 50.0, bottom_margin_pct: 50.0 };
        let viewport = Viewport { scroll_top: 0.0, height: 2000.0 };
        let about = Region { id: "about".into(), top: 1000.0, height: 1000.0 };
        let home = Region { id: "home".into(), top: 0.0, height: 1000.0 };
        assert!(band.intersects(&about, viewport));
        assert!(!band.intersects(&home, viewport));
    }
}
