//! ヒーロー部分のタイプライター表示
//!
//! 1文字ずつ打ち込み、打ち終えたら少し待って1文字ずつ消し、次のフレーズへ進む。
//! `step()` は1ステップ進めて、次のステップまでの待ち時間(ms)を返す。

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingTimings {
    pub type_ms: u32,
    pub erase_ms: u32,
    /// 打ち終えてから消し始めるまで
    pub erase_delay_ms: u32,
    /// 消し終えてから次を打ち始めるまで
    pub typing_delay_ms: u32,
}

impl Default for TypingTimings {
    fn default() -> Self {
        Self {
            type_ms: 100,
            erase_ms: 50,
            erase_delay_ms: 1400,
            typing_delay_ms: 2500,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Erasing,
}

#[derive(Debug, Clone)]
pub struct TypingEffect {
    phrases: Vec<String>,
    timings: TypingTimings,
    phrase: usize,
    shown: usize,
    phase: Phase,
}

impl TypingEffect {
    pub fn new<I, S>(phrases: I, timings: TypingTimings) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            phrases: phrases.into_iter().map(Into::into).collect(),
            timings,
            phrase: 0,
            shown: 0,
            phase: Phase::Typing,
        }
    }

    /// 表示中の文字列
    pub fn text(&self) -> &str {
        let Some(phrase) = self.phrases.get(self.phrase) else {
            return "";
        };
        let end = phrase
            .char_indices()
            .nth(self.shown)
            .map(|(i, _)| i)
            .unwrap_or(phrase.len());
        &phrase[..end]
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase
    }

    pub fn step(&mut self) -> u32 {
        let Some(len) = self.phrases.get(self.phrase).map(|p| p.chars().count()) else {
            return self.timings.type_ms;
        };

        match self.phase {
            Phase::Typing => {
                self.shown = (self.shown + 1).min(len);
                if self.shown == len {
                    self.phase = Phase::Erasing;
                    self.timings.erase_delay_ms
                } else {
                    self.timings.type_ms
                }
            }
            Phase::Erasing => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.phase = Phase::Typing;
                    self.phrase = (self.phrase + 1) % self.phrases.len();
                    self.timings.typing_delay_ms
                } else {
                    self.timings.erase_ms
                }
            }
        }
    }
}
