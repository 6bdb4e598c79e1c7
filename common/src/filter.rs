//! カテゴリ絞り込み
//!
//! 表示対象はキャッシュせず、読むたびに (カタログ, フィルタ) から計算し直す。

use crate::catalog::Catalog;
use crate::error::Result;
use crate::types::{Filter, ProjectId, ProjectRecord};

/// カタログの元の並び順を保ったまま、条件に一致する案件を返す
pub fn visible_projects(catalog: &Catalog, filter: Filter) -> Vec<&ProjectRecord> {
    catalog
        .projects()
        .iter()
        .filter(|p| filter.matches(p.category))
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterSelector {
    active: Filter,
}

impl FilterSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Filter {
        self.active
    }

    pub fn select(&mut self, filter: Filter) {
        if self.active != filter {
            log::debug!("filter: {} -> {}", self.active, filter);
        }
        self.active = filter;
    }

    /// 文字列ラベルから選択する。未知の値は状態を変えずにエラー
    pub fn select_label(&mut self, label: &str) -> Result<Filter> {
        let filter: Filter = label.parse().inspect_err(|e| {
            log::warn!("rejected filter: {e}");
        })?;
        self.select(filter);
        Ok(filter)
    }

    pub fn visible<'a>(&self, catalog: &'a Catalog) -> Vec<&'a ProjectRecord> {
        visible_projects(catalog, self.active)
    }

    pub fn is_visible(&self, catalog: &Catalog, id: ProjectId) -> bool {
        catalog
            .get(id)
            .is_some_and(|p| self.active.matches(p.category))
    }
}
