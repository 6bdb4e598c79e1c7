//! ポートフォリオの型定義
//!
//! WebとCLIで共有される型:
//! - Category / Filter: 案件カテゴリと絞り込み条件
//! - ProjectRecord: 案件ギャラリーの1件
//! - NavigationTarget: サイドバーのナビゲーション項目

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 案件カテゴリ（閉じた集合）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Accounting Efficiency")]
    AccountingEfficiency,
    #[serde(rename = "Financial Reporting")]
    FinancialReporting,
    #[serde(rename = "Bookkeeping")]
    Bookkeeping,
}

impl Category {
    /// フィルタバーの表示順
    pub const ALL: [Category; 3] = [
        Category::AccountingEfficiency,
        Category::FinancialReporting,
        Category::Bookkeeping,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::AccountingEfficiency => "Accounting Efficiency",
            Category::FinancialReporting => "Financial Reporting",
            Category::Bookkeeping => "Bookkeeping",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Category::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| Error::InvalidFilterValue(s.to_string()))
    }
}

/// 絞り込み条件: 全件 または 1カテゴリ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Filter {
    #[default]
    All,
    Category(Category),
}

impl Filter {
    pub const ALL_LABEL: &'static str = "All";

    /// フィルタバーに並べる選択肢
    pub fn options() -> impl Iterator<Item = Filter> {
        std::iter::once(Filter::All).chain(Category::ALL.into_iter().map(Filter::Category))
    }

    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => Self::ALL_LABEL,
            Filter::Category(c) => c.label(),
        }
    }

    /// レコードがこの条件に一致するか
    pub fn matches(&self, category: Category) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(c) => *c == category,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Filter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s == Self::ALL_LABEL {
            return Ok(Filter::All);
        }
        s.parse().map(Filter::Category)
    }
}

impl TryFrom<String> for Filter {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Filter> for String {
    fn from(filter: Filter) -> Self {
        filter.label().to_string()
    }
}

/// 案件ID（正の整数）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub u32);

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// モーダル右側に出す補足情報
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectDetails {
    pub client: String,
    pub date: String,
    pub url: String,
    pub outcome: String,
    pub tools: Vec<String>,
}

/// 案件レコード
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: ProjectId,
    pub title: String,
    pub category: Category,
    pub description: String,
    /// 先頭がサムネイルを兼ねる。空は構築時に弾く
    pub images: Vec<String>,
    #[serde(default)]
    pub details: ProjectDetails,
}

impl ProjectRecord {
    pub fn thumbnail(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    pub fn image_count(&self) -> usize {
        self.images.len()
    }
}

/// ナビゲーション項目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationTarget {
    /// ページ内アンカーのid
    pub id: String,
    pub label: String,
}

impl NavigationTarget {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_roundtrip_labels() {
        for category in Category::ALL {
            let parsed: Category = category.label().parse().expect("ラベル解析失敗");
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn test_filter_parse_all() {
        assert_eq!("All".parse::<Filter>().unwrap(), Filter::All);
        assert_eq!(
            "Bookkeeping".parse::<Filter>().unwrap(),
            Filter::Category(Category::Bookkeeping)
        );
    }

    #[test]
    fn test_filter_parse_rejects_unknown() {
        let err = "Payroll".parse::<Filter>().unwrap_err();
        assert!(matches!(err, Error::InvalidFilterValue(v) if v == "Payroll"));

        // 大文字小文字は区別する
        assert!("bookkeeping".parse::<Filter>().is_err());
        assert!("all".parse::<Filter>().is_err());
    }

    #[test]
    fn test_filter_options_order() {
        let labels: Vec<_> = Filter::options().map(|f| f.label()).collect();
        assert_eq!(
            labels,
            vec!["All", "Accounting Efficiency", "Financial Reporting", "Bookkeeping"]
        );
    }

    #[test]
    fn test_filter_matches() {
        assert!(Filter::All.matches(Category::Bookkeeping));
        let f = Filter::Category(Category::FinancialReporting);
        assert!(f.matches(Category::FinancialReporting));
        assert!(!f.matches(Category::Bookkeeping));
    }

    #[test]
    fn test_filter_serde_as_label() {
        let json = serde_json::to_string(&Filter::Category(Category::AccountingEfficiency)).unwrap();
        assert_eq!(json, "\"Accounting Efficiency\"");

        let parsed: Filter = serde_json::from_str("\"All\"").unwrap();
        assert_eq!(parsed, Filter::All);

        assert!(serde_json::from_str::<Filter>("\"Tax\"").is_err());
    }

    #[test]
    fn test_project_record_deserialize() {
        let json = r#"{
            "id": 9,
            "title": "Year-end Close",
            "category": "Financial Reporting",
            "description": "Closed the books.",
            "images": ["/images/a.jpg", "/images/b.jpg"]
        }"#;

        let record: ProjectRecord = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(record.id, ProjectId(9));
        assert_eq!(record.category, Category::FinancialReporting);
        assert_eq!(record.thumbnail(), Some("/images/a.jpg"));
        assert_eq!(record.image_count(), 2);
        assert_eq!(record.details, ProjectDetails::default());
    }

    #[test]
    fn test_navigation_href() {
        let target = NavigationTarget::new("case-studies", "Case Studies");
        assert_eq!(target.href(), "#case-studies");
    }
}
