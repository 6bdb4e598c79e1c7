use crate::scheduler::TokioScheduler;
use crate::script::SessionScript;
use ledgers_common::{TimerSlot, UiCoordinator, UiEvent, UiSnapshot};
use serde::Serialize;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{sleep_until, Instant};

/// 1イベント処理後の記録
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub at_ms: u64,
    pub event: UiEvent,
    pub snapshot: UiSnapshot,
}

/// スクリプトのイベントとタイマーの tick を1本のループで直列に処理する
///
/// 終了時には生きているタイマーを必ず止める。
pub async fn run_session(ui: &mut UiCoordinator, script: SessionScript) -> Vec<SessionRecord> {
    let (tx, mut ticks) = mpsc::unbounded_channel();
    let mut slot = TimerSlot::new(TokioScheduler::new(tx));

    let start = Instant::now();
    let end = start + Duration::from_millis(script.end_ms());
    let mut steps = script.steps.into_iter().peekable();
    let mut records = Vec::new();

    loop {
        let next_at = steps.peek().map(|s| start + Duration::from_millis(s.at_ms));

        let event = tokio::select! {
            biased;
            Some(token) = ticks.recv() => UiEvent::Tick { token },
            _ = sleep_until(next_at.unwrap_or(end)), if next_at.is_some() => {
                match steps.next() {
                    Some(step) => step.event,
                    None => continue,
                }
            }
            _ = sleep_until(end), if next_at.is_none() => break,
        };

        let commands = ui.handle(event.clone());
        slot.apply_all(commands);

        let at_ms = start.elapsed().as_millis() as u64;
        log::debug!("{:>6}ms {:?}", at_ms, event);
        records.push(SessionRecord {
            at_ms,
            event,
            snapshot: ui.snapshot(),
        });
    }

    slot.release();
    records
}
