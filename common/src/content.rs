//! サイト掲載コンテンツ（静的データ）

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub tagline: &'static str,
    pub email: &'static str,
    pub from: &'static str,
    pub locality: &'static str,
    pub region: &'static str,
    pub country_code: &'static str,
    pub services_summary: &'static str,
    pub photo: &'static str,
    pub hero_background: &'static str,
    pub cv: &'static str,
    pub typing_phrases: &'static [&'static str],
    pub socials: &'static [SocialLink],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SocialLink {
    pub network: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Certification {
    pub name: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

/// サービス一覧のアイコン
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceIcon {
    BookOpen,
    Wallet,
    FileText,
    Monitor,
    BarChart,
    Settings,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Service {
    pub title: &'static str,
    pub summary: &'static str,
    pub icon: ServiceIcon,
}

/// 学歴・職歴の1行
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ResumeEntry {
    pub title: &'static str,
    pub place: &'static str,
    pub period: &'static str,
    pub summary: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
    pub avatar: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Greig Colliar",
    headline: "Accountant & IT Technician",
    tagline: "Bookkeeping & IT",
    email: "greigcolliar@gmail.com",
    from: "Scotland, UK",
    locality: "Perth",
    region: "Scotland",
    country_code: "GB",
    services_summary: "Accounting, Bookkeeping and IT Support",
    photo: "/profile.jpg",
    hero_background: "/hero-bg.jpg",
    cv: "/Greig-CV.pdf",
    typing_phrases: &["Bookkeeper", "Payroll Specialist", "IT Support Consultant"],
    socials: &[
        SocialLink { network: "LinkedIn", url: "https://www.linkedin.com/in/greigcolliar" },
        SocialLink { network: "GitHub", url: "https://github.com/" },
        SocialLink { network: "Twitter", url: "https://twitter.com/" },
    ],
};

pub const ABOUT: &[&str] = &[
    "I am an HND accounting graduate currently studying ACCA with hands-on experience in bookkeeping and practice-based accounting. \
     I have experience in working in several accounting firms including Drummond Laurie and Dains. \
     I have supported key financial processes including bank and balance sheet reconciliations, month-end and year-end close activities, \
     and the preparation of financial reports. I currently provide freelance bookkeeping services for small businesses, managing day-to-day transactions, VAT returns, \
     and financial reporting using Sage, Xero, and Excel. I'm committed to accuracy, integrity, and continuous improvement, and I strive to deliver \
     reliable financial support that helps organisations stay compliant and make informed decisions.",
    "Alongside my finance background, I also have experience in IT support, helping individuals troubleshoot technical issues, building PCs from the ground up.",
];

pub const SKILLS: &[&str] = &[
    "Management Accounts",
    "Bookkeeping & Reconciliation",
    "Payroll Administration",
    "Tax Preparation",
    "Financial Reporting",
    "Budgeting & Forecasting",
];

pub const CERTIFICATIONS: &[Certification] = &[
    Certification { name: "Xero Certified Advisor", icon: "/images/certs/xero.png" },
    Certification { name: "Sage 50 Specialist", icon: "/images/certs/sage.png" },
];

pub const STATS: &[Stat] = &[
    Stat { value: "3+", label: "Years Experience" },
    Stat { value: "5+", label: "Happy Clients" },
    Stat { value: "5+", label: "Projects Done" },
    Stat { value: "4", label: "Certifications" },
];

pub const SERVICES: &[Service] = &[
    Service {
        title: "Bookkeeping",
        summary: "Accurate and reliable bookkeeping services to keep your financial records organized and up to date.",
        icon: ServiceIcon::BookOpen,
    },
    Service {
        title: "Payroll Management",
        summary: "Timely and compliant payroll processing, ensuring employees are paid correctly and on schedule.",
        icon: ServiceIcon::Wallet,
    },
    Service {
        title: "Tax Preparation",
        summary: "Assistance with tax preparation and filing, helping you stay compliant and maximize returns.",
        icon: ServiceIcon::FileText,
    },
    Service {
        title: "IT Support",
        summary: "Reliable IT troubleshooting and support to keep your systems running smoothly and securely.",
        icon: ServiceIcon::Monitor,
    },
    Service {
        title: "Financial Reporting",
        summary: "Clear financial reporting to help you understand your business performance and make informed decisions.",
        icon: ServiceIcon::BarChart,
    },
    Service {
        title: "Systems Setup",
        summary: "Implementation and setup of accounting and IT systems tailored to your business needs.",
        icon: ServiceIcon::Settings,
    },
];

pub const EDUCATION: &[ResumeEntry] = &[
    ResumeEntry {
        title: "ACCA",
        place: "ACCA Online",
        period: "2025 ongoing",
        summary: "Currently working through Certified Accounting Exams - 4/13 exempt.",
    },
    ResumeEntry {
        title: "HND Accounting",
        place: "Perth College UHI",
        period: "2024",
        summary: "Focused on financial reporting, management accounting, tax, and law.",
    },
    ResumeEntry {
        title: "PDA Bookkeeping",
        place: "Perth College UHI",
        period: "2022",
        summary: "Specialist training in double-entry bookkeeping and payroll.",
    },
];

pub const EXPERIENCE: &[ResumeEntry] = &[
    ResumeEntry {
        title: "Accounts Assistant",
        place: "Campbell Dallas LLP",
        period: "2020-2021",
        summary: "Supported senior accountants with reconciliations, VAT returns, and client bookkeeping tasks.",
    },
    ResumeEntry {
        title: "Retail Manager",
        place: "Semi-Chem",
        period: "2015-2019",
        summary: "Oversaw store operations, staff payroll, and IT systems management.",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "John Smith",
        role: "Business Owner",
        quote: "Greig’s bookkeeping expertise helped us organize our accounts and save valuable time each month.",
        avatar: "https://randomuser.me/api/portraits/men/32.jpg",
    },
    Testimonial {
        name: "Sarah Johnson",
        role: "Retail Manager",
        quote: "His IT support was a lifesaver: quick, professional, and effective at solving complex issues.",
        avatar: "https://randomuser.me/api/portraits/women/44.jpg",
    },
    Testimonial {
        name: "Michael Lee",
        role: "Entrepreneur",
        quote: "With Greig’s financial reporting, I can finally see where my business is heading and make better decisions.",
        avatar: "https://randomuser.me/api/portraits/men/67.jpg",
    },
    Testimonial {
        name: "Emma Wilson",
        role: "Freelancer",
        quote: "Greig handled my taxes seamlessly, letting me focus on growing my freelance business without stress.",
        avatar: "https://randomuser.me/api/portraits/women/85.jpg",
    },
];

pub const CLIENT_LOGOS: &[&str] = &[
    "/images/logos/McDonalds.png",
    "/images/logos/McDonalds.png",
    "/images/logos/McDonalds.png",
    "/images/logos/McDonalds.png",
    "/images/logos/McDonalds.png",
];

/// デプロイ先のベースパスを付けたURL
///
/// 絶対URL（http/https）はそのまま返す。
pub fn asset_url(base_path: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    let base = base_path.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

/// ローカルに置く必要のある画像パス一覧（外部URLを除く）
pub fn local_assets() -> Vec<&'static str> {
    let mut assets = vec![PROFILE.photo, PROFILE.hero_background, PROFILE.cv];
    assets.extend(CERTIFICATIONS.iter().map(|c| c.icon));
    assets.extend(CLIENT_LOGOS.iter().copied());
    assets.sort_unstable();
    assets.dedup();
    assets
}
