use gloo::timers::callback::Interval;
use leptos::prelude::*;
use ledgers_common::{Scheduler, TimerToken, UiCoordinator, UiEvent};

/// ブラウザの setInterval で tick を発火する
///
/// tick はコーディネーターに直接届ける。tick の処理はタイマー操作を返さない。
pub struct IntervalScheduler {
    ui: RwSignal<UiCoordinator>,
}

impl IntervalScheduler {
    pub fn new(ui: RwSignal<UiCoordinator>) -> Self {
        Self { ui }
    }
}

impl Scheduler for IntervalScheduler {
    type Handle = Interval;

    fn arm(&mut self, token: TimerToken, interval_ms: u32) -> Interval {
        let ui = self.ui;
        Interval::new(interval_ms, move || {
            ui.try_update(|ui| ui.handle(UiEvent::Tick { token }));
        })
    }

    fn cancel(&mut self, handle: Interval) {
        // drop で clearInterval
        drop(handle);
    }
}
