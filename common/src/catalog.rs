//! 案件カタログとナビゲーション
//!
//! どちらも起動時に一度だけ構築される不変データ。
//! 不正なデータ（画像なし・ID重複など）は構築時に弾き、実行時には持ち込まない。

use crate::error::{Error, Result};
use crate::types::{Category, NavigationTarget, ProjectDetails, ProjectId, ProjectRecord};
use std::collections::HashSet;

/// 検証済みの案件カタログ
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    projects: Vec<ProjectRecord>,
}

impl Catalog {
    pub fn new(projects: Vec<ProjectRecord>) -> Result<Self> {
        let mut seen = HashSet::new();
        for project in &projects {
            let id = project.id.0;
            if id == 0 {
                return Err(Error::InvalidProjectId(id));
            }
            if !seen.insert(id) {
                return Err(Error::DuplicateProjectId(id));
            }
            if project.title.trim().is_empty() {
                return Err(Error::EmptyTitle(id));
            }
            if project.images.is_empty() {
                return Err(Error::EmptyImageList(id));
            }
        }
        log::debug!("catalog loaded: {} projects", projects.len());
        Ok(Self { projects })
    }

    /// JSON配列からカタログを読み込む
    pub fn from_json(json: &str) -> Result<Self> {
        let projects: Vec<ProjectRecord> = serde_json::from_str(json)?;
        Self::new(projects)
    }

    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    pub fn get(&self, id: ProjectId) -> Option<&ProjectRecord> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// サイトに掲載している案件一覧
    pub fn site() -> Self {
        let dashboard = "Designed and implemented a Power BI dashboard for financial visibility and performance tracking.";
        Self {
            projects: vec![
                site_project(
                    1,
                    "Retail Payroll Automation",
                    Category::AccountingEfficiency,
                    "Automated weekly payroll calculations using Excel macros and data validation. Reduced processing time by over 60% and eliminated manual data entry errors.",
                ),
                site_project(
                    2,
                    "Management Accounts for SME",
                    Category::FinancialReporting,
                    "Developed monthly management accounts for a growing retail client. Improved cash flow visibility and supported key investment decisions.",
                ),
                site_project(
                    3,
                    "Bookkeeping System Overhaul",
                    Category::Bookkeeping,
                    "Migrated a small business from manual ledgers to a cloud-based bookkeeping system. Improved accuracy and accessibility while reducing month-end reconciliation time.",
                ),
                site_project(4, "Financial Dashboard System", Category::Bookkeeping, dashboard),
                site_project(5, "Financial Dashboard System", Category::Bookkeeping, dashboard),
                site_project(6, "Financial Dashboard System", Category::Bookkeeping, dashboard),
            ],
        }
    }
}

fn site_project(id: u32, title: &str, category: Category, description: &str) -> ProjectRecord {
    let base = format!("/images/portfolio/project-{id}");
    ProjectRecord {
        id: ProjectId(id),
        title: title.to_string(),
        category,
        description: description.to_string(),
        images: vec![
            format!("{base}.jpg"),
            format!("{base}-1.jpg"),
            format!("{base}-2.jpg"),
        ],
        details: ProjectDetails {
            client: "Example Client".to_string(),
            date: "2024".to_string(),
            url: "www.example.com".to_string(),
            outcome: "Improved financial accuracy and process efficiency.".to_string(),
            tools: vec!["Excel".to_string(), "Sage".to_string(), "Xero".to_string()],
        },
    }
}

/// 検証済みのナビゲーション項目一覧
#[derive(Debug, Clone, PartialEq)]
pub struct Navigation {
    targets: Vec<NavigationTarget>,
}

impl Navigation {
    pub fn new(targets: Vec<NavigationTarget>) -> Result<Self> {
        if targets.is_empty() {
            return Err(Error::EmptyNavigation);
        }
        let mut seen = HashSet::new();
        for target in &targets {
            if !is_anchor_id(&target.id) {
                return Err(Error::InvalidSectionId(target.id.clone()));
            }
            if !seen.insert(target.id.as_str()) {
                return Err(Error::DuplicateSection(target.id.clone()));
            }
        }
        Ok(Self { targets })
    }

    pub fn targets(&self) -> &[NavigationTarget] {
        &self.targets
    }

    pub fn contains(&self, id: &str) -> bool {
        self.targets.iter().any(|t| t.id == id)
    }

    /// 初期ハイライト（先頭の項目）
    pub fn default_section(&self) -> &str {
        // 空のナビゲーションは new で弾いている
        self.targets.first().map(|t| t.id.as_str()).unwrap_or_default()
    }

    /// サイドバーの7項目
    pub fn site() -> Self {
        Self {
            targets: vec![
                NavigationTarget::new("home", "Home"),
                NavigationTarget::new("about", "About"),
                NavigationTarget::new("services", "Services"),
                NavigationTarget::new("resume", "Resume"),
                NavigationTarget::new("case-studies", "case-studies"),
                NavigationTarget::new("testimonials", "Client Speak"),
                NavigationTarget::new("contact", "Contact"),
            ],
        }
    }
}

fn is_anchor_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u32, images: &[&str]) -> ProjectRecord {
        ProjectRecord {
            id: ProjectId(id),
            title: format!("Project {id}"),
            category: Category::Bookkeeping,
            description: String::new(),
            images: images.iter().map(|s| s.to_string()).collect(),
            details: ProjectDetails::default(),
        }
    }

    #[test]
    fn test_site_catalog_passes_validation() {
        let site = Catalog::site();
        let validated = Catalog::new(site.projects().to_vec()).expect("サイトカタログが不正");
        assert_eq!(validated.len(), 6);
        assert!(site.projects().iter().all(|p| p.image_count() == 3));
    }

    #[test]
    fn test_site_navigation_passes_validation() {
        let site = Navigation::site();
        let validated = Navigation::new(site.targets().to_vec()).expect("ナビゲーションが不正");
        assert_eq!(validated.default_section(), "home");
        assert_eq!(validated.targets().len(), 7);
        assert!(validated.contains("case-studies"));
        assert!(!validated.contains("portfolio"));
    }

    #[test]
    fn test_catalog_rejects_empty_images() {
        let err = Catalog::new(vec![record(1, &["/a.jpg"]), record(2, &[])]).unwrap_err();
        assert!(matches!(err, Error::EmptyImageList(2)));
    }

    #[test]
    fn test_catalog_rejects_duplicate_and_zero_ids() {
        let err = Catalog::new(vec![record(1, &["/a.jpg"]), record(1, &["/b.jpg"])]).unwrap_err();
        assert!(matches!(err, Error::DuplicateProjectId(1)));

        let err = Catalog::new(vec![record(0, &["/a.jpg"])]).unwrap_err();
        assert!(matches!(err, Error::InvalidProjectId(0)));
    }

    #[test]
    fn test_catalog_rejects_blank_title() {
        let mut r = record(3, &["/a.jpg"]);
        r.title = "   ".to_string();
        assert!(matches!(Catalog::new(vec![r]).unwrap_err(), Error::EmptyTitle(3)));
    }

    #[test]
    fn test_catalog_from_json() {
        let json = r#"[
            {"id": 1, "title": "A", "category": "Bookkeeping", "description": "", "images": ["/a.jpg"]},
            {"id": 2, "title": "B", "category": "Financial Reporting", "description": "", "images": []}
        ]"#;
        assert!(matches!(Catalog::from_json(json).unwrap_err(), Error::EmptyImageList(2)));

        let err = Catalog::from_json("[{\"id\": 1}]").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_catalog_get() {
        let catalog = Catalog::site();
        assert_eq!(catalog.get(ProjectId(2)).map(|p| p.title.as_str()), Some("Management Accounts for SME"));
        assert!(catalog.get(ProjectId(42)).is_none());
    }

    #[test]
    fn test_navigation_validation() {
        assert!(matches!(Navigation::new(vec![]).unwrap_err(), Error::EmptyNavigation));

        let dup = vec![NavigationTarget::new("home", "Home"), NavigationTarget::new("home", "Again")];
        assert!(matches!(Navigation::new(dup).unwrap_err(), Error::DuplicateSection(id) if id == "home"));

        let bad = vec![NavigationTarget::new("case studies", "Case Studies")];
        assert!(matches!(Navigation::new(bad).unwrap_err(), Error::InvalidSectionId(_)));
    }
}
