//! 繰り返しタイマーの管理
//!
//! 状態遷移はタイマーを直接触らず、`TimerCommand` を返す。
//! ホスト側（ブラウザの setInterval / tokio）は `TimerSlot` を通して適用し、
//! 生きているタイマーが常に高々1本であることを保証する。

use serde::{Deserialize, Serialize};

/// 武装済みタイマー1本の識別子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimerToken(pub u64);

/// ホストに依頼するタイマー操作
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum TimerCommand {
    Arm { token: TimerToken, interval_ms: u32 },
    Cancel { token: TimerToken },
}

/// イベントループ側の繰り返しタイマー
///
/// `arm` したタイマーは `interval_ms` ごとに token 付きの tick を発火し続ける。
pub trait Scheduler {
    type Handle;

    fn arm(&mut self, token: TimerToken, interval_ms: u32) -> Self::Handle;
    fn cancel(&mut self, handle: Self::Handle);
}

/// 生きているタイマーを高々1本だけ保持するスロット
///
/// 新しく `Arm` するときは必ず先に既存のタイマーを止める。
/// スロットを drop するとタイマーも解放される。
pub struct TimerSlot<S: Scheduler> {
    scheduler: S,
    live: Option<(TimerToken, S::Handle)>,
}

impl<S: Scheduler> TimerSlot<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            live: None,
        }
    }

    pub fn apply(&mut self, command: TimerCommand) {
        match command {
            TimerCommand::Arm { token, interval_ms } => {
                self.release();
                let handle = self.scheduler.arm(token, interval_ms);
                log::trace!("timer {:?} armed ({} ms)", token, interval_ms);
                self.live = Some((token, handle));
            }
            TimerCommand::Cancel { token } => {
                if self.live_token() == Some(token) {
                    self.release();
                }
            }
        }
    }

    pub fn apply_all<I: IntoIterator<Item = TimerCommand>>(&mut self, commands: I) {
        for command in commands {
            self.apply(command);
        }
    }

    pub fn live_token(&self) -> Option<TimerToken> {
        self.live.as_ref().map(|(token, _)| *token)
    }

    /// 生きているタイマーを止める
    pub fn release(&mut self) {
        if let Some((token, handle)) = self.live.take() {
            self.scheduler.cancel(handle);
            log::trace!("timer {:?} cancelled", token);
        }
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }
}

impl<S: Scheduler> Drop for TimerSlot<S> {
    fn drop(&mut self) {
        self.release();
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{Op, RecordingScheduler};
    use super::*;

    fn arm(token: u64) -> TimerCommand {
        TimerCommand::Arm {
            token: TimerToken(token),
            interval_ms: 4000,
        }
    }

    #[test]
    fn test_arm_replaces_live_timer() {
        let scheduler = RecordingScheduler::default();
        let mut slot = TimerSlot::new(scheduler.clone());

        slot.apply(arm(1));
        slot.apply(arm(2));

        assert_eq!(slot.live_token(), Some(TimerToken(2)));
        assert_eq!(
            *scheduler.ops.borrow(),
            vec![Op::Arm(TimerToken(1)), Op::Cancel(TimerToken(1)), Op::Arm(TimerToken(2))]
        );
        assert_eq!(*scheduler.max_live.borrow(), 1);
    }

    #[test]
    fn test_cancel_stale_token_is_noop() {
        let scheduler = RecordingScheduler::default();
        let mut slot = TimerSlot::new(scheduler.clone());

        slot.apply(arm(5));
        slot.apply(TimerCommand::Cancel { token: TimerToken(4) });
        assert_eq!(slot.live_token(), Some(TimerToken(5)));

        slot.apply(TimerCommand::Cancel { token: TimerToken(5) });
        assert_eq!(slot.live_token(), None);
        assert_eq!(*scheduler.live.borrow(), 0);
    }

    #[test]
    fn test_drop_releases_live_timer() {
        let scheduler = RecordingScheduler::default();
        {
            let mut slot = TimerSlot::new(scheduler.clone());
            slot.apply(arm(1));
            assert_eq!(*scheduler.live.borrow(), 1);
        }
        assert_eq!(*scheduler.live.borrow(), 0);
    }

    #[test]
    fn test_command_serialization() {
        let json = serde_json::to_string(&arm(3)).unwrap();
        assert_eq!(json, r#"{"op":"arm","token":3,"intervalMs":4000}"#);
    }
}
