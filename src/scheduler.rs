use ledgers_common::{Scheduler, TimerToken};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// tokio のタスクで繰り返しタイマーを動かす
///
/// 発火した token はチャネルに流すだけで、状態には触らない。
pub struct TokioScheduler {
    ticks: UnboundedSender<TimerToken>,
}

impl TokioScheduler {
    pub fn new(ticks: UnboundedSender<TimerToken>) -> Self {
        Self { ticks }
    }
}

impl Scheduler for TokioScheduler {
    type Handle = JoinHandle<()>;

    fn arm(&mut self, token: TimerToken, interval_ms: u32) -> Self::Handle {
        let period = Duration::from_millis(u64::from(interval_ms.max(1)));
        let ticks = self.ticks.clone();
        tokio::spawn(async move {
            // 初回も1周期待つ
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if ticks.send(token).is_err() {
                    break;
                }
            }
        })
    }

    fn cancel(&mut self, handle: Self::Handle) {
        handle.abort();
    }
}
