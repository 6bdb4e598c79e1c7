//! 案件モーダルの画像カルーセル
//!
//! 状態は `Closed` と `Open(project, image_index)` の2つ。
//! 開いている間（画像2枚以上）は自動送りタイマーを1本だけ武装する。
//!
//! - 別案件を開く: 旧タイマーを止めてから新タイマーを武装
//! - 閉じる: タイマーを止める
//! - 手動の前後送り: タイマーを止めて武装し直す（送り間隔をリセット）
//! - tick: 武装中の token と一致したときだけ1枚進める

use crate::timer::{TimerCommand, TimerToken};
use crate::types::{ProjectId, ProjectRecord};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum CarouselState {
    #[default]
    Closed,
    Open {
        project: ProjectId,
        image_index: usize,
    },
}

impl CarouselState {
    pub fn project(&self) -> Option<ProjectId> {
        match self {
            CarouselState::Closed => None,
            CarouselState::Open { project, .. } => Some(*project),
        }
    }

    pub fn image_index(&self) -> usize {
        match self {
            CarouselState::Closed => 0,
            CarouselState::Open { image_index, .. } => *image_index,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GalleryCarousel {
    state: CarouselState,
    image_count: usize,
    auto_advance_ms: u32,
    next_token: u64,
    live: Option<TimerToken>,
}

impl GalleryCarousel {
    /// `auto_advance_ms` が 0 なら自動送りしない
    pub fn new(auto_advance_ms: u32) -> Self {
        Self {
            state: CarouselState::Closed,
            image_count: 0,
            auto_advance_ms,
            next_token: 1,
            live: None,
        }
    }

    pub fn state(&self) -> CarouselState {
        self.state
    }

    pub fn image_count(&self) -> usize {
        self.image_count
    }

    pub fn live_timer(&self) -> Option<TimerToken> {
        self.live
    }

    /// 案件を開く。表示対象かどうかの確認は呼び出し側の責務
    pub fn open(&mut self, project: &ProjectRecord) -> Vec<TimerCommand> {
        if self.state.project() == Some(project.id) {
            return Vec::new();
        }

        let mut commands: Vec<TimerCommand> = self.disarm().into_iter().collect();
        log::debug!("carousel open: project {} ({} images)", project.id, project.image_count());
        self.state = CarouselState::Open {
            project: project.id,
            image_index: 0,
        };
        self.image_count = project.image_count();
        commands.extend(self.arm());
        commands
    }

    pub fn close(&mut self) -> Vec<TimerCommand> {
        if self.state == CarouselState::Closed {
            return Vec::new();
        }
        let commands = self.disarm().into_iter().collect();
        log::debug!("carousel closed");
        self.state = CarouselState::Closed;
        self.image_count = 0;
        commands
    }

    pub fn next(&mut self) -> Vec<TimerCommand> {
        self.navigate(Step::Forward)
    }

    pub fn prev(&mut self) -> Vec<TimerCommand> {
        self.navigate(Step::Backward)
    }

    /// 自動送りの tick。古い token の tick は無視する
    pub fn tick(&mut self, token: TimerToken) -> bool {
        if self.live != Some(token) {
            log::trace!("stale tick {:?} ignored", token);
            return false;
        }
        self.advance(Step::Forward)
    }

    fn navigate(&mut self, step: Step) -> Vec<TimerCommand> {
        if !self.advance(step) {
            return Vec::new();
        }
        let mut commands: Vec<TimerCommand> = self.disarm().into_iter().collect();
        commands.extend(self.arm());
        commands
    }

    fn advance(&mut self, step: Step) -> bool {
        let n = self.image_count;
        let CarouselState::Open { project, image_index } = self.state else {
            return false;
        };
        if n <= 1 {
            return false;
        }
        let image_index = match step {
            Step::Forward => (image_index + 1) % n,
            Step::Backward => (image_index + n - 1) % n,
        };
        self.state = CarouselState::Open { project, image_index };
        true
    }

    fn arm(&mut self) -> Option<TimerCommand> {
        if self.auto_advance_ms == 0 || self.image_count <= 1 {
            return None;
        }
        let token = TimerToken(self.next_token);
        self.next_token += 1;
        self.live = Some(token);
        Some(TimerCommand::Arm {
            token,
            interval_ms: self.auto_advance_ms,
        })
    }

    fn disarm(&mut self) -> Option<TimerCommand> {
        self.live.take().map(|token| TimerCommand::Cancel { token })
    }
}

#[derive(Clone, Copy)]
enum Step {
    Forward,
    Backward,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, ProjectDetails};

    fn project(id: u32, images: usize) -> ProjectRecord {
        ProjectRecord {
            id: ProjectId(id),
            title: format!("P{id}"),
            category: Category::Bookkeeping,
            description: String::new(),
            images: (0..images).map(|i| format!("/images/p{id}-{i}.jpg")).collect(),
            details: ProjectDetails::default(),
        }
    }

    fn open_at(carousel: &GalleryCarousel) -> (Option<ProjectId>, usize) {
        (carousel.state().project(), carousel.state().image_index())
    }

    #[test]
    fn test_open_arms_one_timer() {
        let mut carousel = GalleryCarousel::new(4000);
        let commands = carousel.open(&project(1, 3));
        assert_eq!(
            commands,
            vec![TimerCommand::Arm { token: TimerToken(1), interval_ms: 4000 }]
        );
        assert_eq!(open_at(&carousel), (Some(ProjectId(1)), 0));
    }

    #[test]
    fn test_three_nexts_wrap_to_zero() {
        let mut carousel = GalleryCarousel::new(4000);
        carousel.open(&project(1, 3));
        carousel.next();
        carousel.next();
        assert_eq!(carousel.state().image_index(), 2);
        carousel.next();
        assert_eq!(carousel.state().image_index(), 0);
    }

    #[test]
    fn test_next_then_prev_is_identity() {
        let mut carousel = GalleryCarousel::new(4000);
        carousel.open(&project(1, 4));
        for start in 0..4 {
            while carousel.state().image_index() != start {
                carousel.next();
            }
            carousel.next();
            carousel.prev();
            assert_eq!(carousel.state().image_index(), start);
            carousel.prev();
            carousel.next();
            assert_eq!(carousel.state().image_index(), start);
        }
    }

    #[test]
    fn test_prev_from_zero_wraps_to_last() {
        let mut carousel = GalleryCarousel::new(4000);
        carousel.open(&project(1, 3));
        carousel.prev();
        assert_eq!(carousel.state().image_index(), 2);
    }

    #[test]
    fn test_switch_project_cancels_before_arming() {
        let mut carousel = GalleryCarousel::new(4000);
        carousel.open(&project(1, 3));
        carousel.next();
        let before = carousel.live_timer().unwrap();

        let commands = carousel.open(&project(2, 2));
        assert_eq!(commands.len(), 2);
        assert_eq!(commands[0], TimerCommand::Cancel { token: before });
        assert!(matches!(commands[1], TimerCommand::Arm { token, .. } if token != before));
        assert_eq!(open_at(&carousel), (Some(ProjectId(2)), 0));
    }

    #[test]
    fn test_reopen_same_project_is_noop() {
        let mut carousel = GalleryCarousel::new(4000);
        carousel.open(&project(1, 3));
        carousel.next();
        assert!(carousel.open(&project(1, 3)).is_empty());
        assert_eq!(carousel.state().image_index(), 1);
    }

    #[test]
    fn test_close_from_closed_is_noop() {
        let mut carousel = GalleryCarousel::new(4000);
        assert!(carousel.close().is_empty());
        assert_eq!(carousel.state(), CarouselState::Closed);
    }

    #[test]
    fn test_close_cancels_timer() {
        let mut carousel = GalleryCarousel::new(4000);
        carousel.open(&project(1, 3));
        let live = carousel.live_timer().unwrap();
        assert_eq!(carousel.close(), vec![TimerCommand::Cancel { token: live }]);
        assert_eq!(carousel.live_timer(), None);
        assert!(!carousel.tick(live));
    }

    #[test]
    fn test_navigation_while_closed_is_noop() {
        let mut carousel = GalleryCarousel::new(4000);
        assert!(carousel.next().is_empty());
        assert!(carousel.prev().is_empty());
        assert!(!carousel.tick(TimerToken(1)));
        assert_eq!(carousel.state(), CarouselState::Closed);
    }

    #[test]
    fn test_single_image_has_no_timer_and_no_navigation() {
        let mut carousel = GalleryCarousel::new(4000);
        assert!(carousel.open(&project(1, 1)).is_empty());
        assert!(carousel.next().is_empty());
        assert_eq!(carousel.state().image_index(), 0);
        assert_eq!(carousel.live_timer(), None);
    }

    #[test]
    fn test_manual_next_resets_interval() {
        let mut carousel = GalleryCarousel::new(4000);
        carousel.open(&project(1, 3));
        let first = carousel.live_timer().unwrap();

        let commands = carousel.next();
        let second = carousel.live_timer().unwrap();
        assert_ne!(first, second);
        assert_eq!(
            commands,
            vec![
                TimerCommand::Cancel { token: first },
                TimerCommand::Arm { token: second, interval_ms: 4000 },
            ]
        );

        // 旧タイマーの tick が遅れて届いても二重に進まない
        assert!(!carousel.tick(first));
        assert_eq!(carousel.state().image_index(), 1);
        assert!(carousel.tick(second));
        assert_eq!(carousel.state().image_index(), 2);
    }

    #[test]
    fn test_tick_keeps_same_timer() {
        let mut carousel = GalleryCarousel::new(4000);
        carousel.open(&project(1, 2));
        let live = carousel.live_timer().unwrap();
        assert!(carousel.tick(live));
        assert!(carousel.tick(live));
        assert_eq!(carousel.state().image_index(), 0);
        assert_eq!(carousel.live_timer(), Some(live));
    }

    #[test]
    fn test_zero_interval_disables_auto_advance() {
        let mut carousel = GalleryCarousel::new(0);
        assert!(carousel.open(&project(1, 3)).is_empty());
        assert!(carousel.next().is_empty());
        assert_eq!(carousel.state().image_index(), 1);
    }

    #[test]
    fn test_state_serialization() {
        let state = CarouselState::Open { project: ProjectId(3), image_index: 1 };
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"state":"open","project":3,"imageIndex":1}"#);
    }
}
