//! UI状態コーディネーター
//!
//! スクロールスパイ・カテゴリ絞り込み・画像カルーセルをまとめ、
//! 外部イベントを1件ずつ直列に処理する。状態を書き換えるのはここだけ。
//! 描画側は `snapshot()` / `visible_projects()` を読むだけ。

use crate::carousel::GalleryCarousel;
use crate::catalog::{Catalog, Navigation};
use crate::error::Result;
use crate::filter::FilterSelector;
use crate::scroll_spy::{ActiveBand, ScrollSpy, VisibilityEvent};
use crate::timer::{TimerCommand, TimerToken};
use crate::types::{Filter, ProjectId, ProjectRecord};
use serde::{Deserialize, Serialize};

/// UIのタイミング設定
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CoordinatorConfig {
    /// 案件モーダルの自動送り間隔（0で無効）
    pub auto_advance_ms: u32,
    /// お客様の声スライダーの自動送り間隔
    pub testimonial_autoplay_ms: u32,
    pub active_band: ActiveBand,
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            auto_advance_ms: 4000,
            testimonial_autoplay_ms: 5000,
            active_band: ActiveBand::default(),
        }
    }
}

/// 外部から届くイベント
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum UiEvent {
    /// 監視する領域の登録（ページ描画完了時）
    Observe { regions: Vec<String> },
    Visibility(VisibilityEvent),
    SelectFilter { filter: Filter },
    OpenProject { id: ProjectId },
    CloseModal,
    NextImage,
    PrevImage,
    Tick { token: TimerToken },
    /// ホストのビューが破棄された
    Teardown,
}

/// 描画側に公開する状態
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiState {
    pub active_section: String,
    pub active_filter: Filter,
    pub open_project_id: Option<ProjectId>,
    pub active_image_index: usize,
}

/// 1イベント処理後のスナップショット
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiSnapshot {
    #[serde(flatten)]
    pub state: UiState,
    pub visible_projects: Vec<ProjectId>,
    pub live_timer: Option<TimerToken>,
}

pub struct UiCoordinator {
    catalog: Catalog,
    navigation: Navigation,
    spy: ScrollSpy,
    filter: FilterSelector,
    carousel: GalleryCarousel,
}

impl UiCoordinator {
    pub fn new(catalog: Catalog, navigation: Navigation, config: CoordinatorConfig) -> Self {
        let spy = ScrollSpy::new(&navigation, config.active_band);
        Self {
            catalog,
            navigation,
            spy,
            filter: FilterSelector::new(),
            carousel: GalleryCarousel::new(config.auto_advance_ms),
        }
    }

    /// サイト既定のカタログとナビゲーションで構築
    pub fn site(config: CoordinatorConfig) -> Self {
        Self::new(Catalog::site(), Navigation::site(), config)
    }

    /// イベントを1件処理し、ホストが適用すべきタイマー操作を返す
    pub fn handle(&mut self, event: UiEvent) -> Vec<TimerCommand> {
        log::trace!("event: {:?}", event);
        match event {
            UiEvent::Observe { regions } => {
                self.spy.observe(regions);
                Vec::new()
            }
            UiEvent::Visibility(visibility) => {
                self.spy.handle(&visibility);
                Vec::new()
            }
            UiEvent::SelectFilter { filter } => self.select_filter(filter),
            UiEvent::OpenProject { id } => self.open_project_by_id(id),
            UiEvent::CloseModal => self.carousel.close(),
            UiEvent::NextImage => self.carousel.next(),
            UiEvent::PrevImage => self.carousel.prev(),
            UiEvent::Tick { token } => {
                self.carousel.tick(token);
                Vec::new()
            }
            UiEvent::Teardown => {
                self.spy.disconnect();
                self.carousel.close()
            }
        }
    }

    /// 文字列ラベルでの絞り込み。未知のラベルは状態を変えずにエラー
    pub fn select_filter_label(&mut self, label: &str) -> Result<Vec<TimerCommand>> {
        let filter: Filter = label.parse()?;
        Ok(self.select_filter(filter))
    }

    fn select_filter(&mut self, filter: Filter) -> Vec<TimerCommand> {
        self.filter.select(filter);
        // 絞り込みで見えなくなった案件のモーダルは閉じる
        match self.carousel.state().project() {
            Some(id) if !self.filter.is_visible(&self.catalog, id) => {
                log::debug!("project {} hidden by filter {}, closing", id, filter);
                self.carousel.close()
            }
            _ => Vec::new(),
        }
    }

    fn open_project_by_id(&mut self, id: ProjectId) -> Vec<TimerCommand> {
        if !self.filter.is_visible(&self.catalog, id) {
            log::debug!("project {} is not visible under {}, ignored", id, self.filter.active());
            return Vec::new();
        }
        match self.catalog.get(id) {
            Some(record) => self.carousel.open(record),
            None => Vec::new(),
        }
    }

    pub fn state(&self) -> UiState {
        let carousel = self.carousel.state();
        UiState {
            active_section: self.spy.active().to_string(),
            active_filter: self.filter.active(),
            open_project_id: carousel.project(),
            active_image_index: carousel.image_index(),
        }
    }

    pub fn snapshot(&self) -> UiSnapshot {
        UiSnapshot {
            state: self.state(),
            visible_projects: self.visible_projects().iter().map(|p| p.id).collect(),
            live_timer: self.carousel.live_timer(),
        }
    }

    pub fn visible_projects(&self) -> Vec<&ProjectRecord> {
        self.filter.visible(&self.catalog)
    }

    pub fn open_project(&self) -> Option<&ProjectRecord> {
        self.carousel
            .state()
            .project()
            .and_then(|id| self.catalog.get(id))
    }

    /// 表示中の画像パス
    pub fn current_image(&self) -> Option<&str> {
        let index = self.carousel.state().image_index();
        self.open_project()
            .and_then(|p| p.images.get(index))
            .map(String::as_str)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn navigation(&self) -> &Navigation {
        &self.navigation
    }

    pub fn active_band(&self) -> ActiveBand {
        self.spy.band()
    }

    pub fn is_observing(&self) -> bool {
        self.spy.is_observing()
    }
}
