use crate::error::{PortfolioError, Result};
use ledgers_common::UiEvent;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 時刻付きのイベント列（ページ操作の再現用）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionScript {
    /// 終了時刻。未指定なら最後のステップの時刻
    #[serde(default)]
    pub end_ms: Option<u64>,
    pub steps: Vec<ScriptStep>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptStep {
    pub at_ms: u64,
    pub event: UiEvent,
}

impl SessionScript {
    pub fn from_json(json: &str) -> Result<Self> {
        let mut script: SessionScript = serde_json::from_str(json)?;
        // 同時刻のステップは記述順を保つ
        script.steps.sort_by_key(|s| s.at_ms);

        if let (Some(end), Some(last)) = (script.end_ms, script.steps.last()) {
            if end < last.at_ms {
                return Err(PortfolioError::Script(format!(
                    "endMs ({}) がステップの時刻 ({}) より前です",
                    end, last.at_ms
                )));
            }
        }
        Ok(script)
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(PortfolioError::FileNotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn end_ms(&self) -> u64 {
        self.end_ms
            .or_else(|| self.steps.last().map(|s| s.at_ms))
            .unwrap_or(0)
    }
}
