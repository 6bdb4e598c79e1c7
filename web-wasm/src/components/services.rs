use super::SectionTitle;
use leptos::prelude::*;
use ledgers_common::content::{ServiceIcon, SERVICES};

fn icon_class(icon: ServiceIcon) -> &'static str {
    match icon {
        ServiceIcon::BookOpen => "icon-book-open",
        ServiceIcon::Wallet => "icon-wallet",
        ServiceIcon::FileText => "icon-file-text",
        ServiceIcon::Monitor => "icon-monitor",
        ServiceIcon::BarChart => "icon-bar-chart",
        ServiceIcon::Settings => "icon-settings",
    }
}

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id="services" class="section services">
            <SectionTitle title="Services" subtitle="What I can do for your business" />
            <div class="service-grid">
                {SERVICES
                    .iter()
                    .map(|s| {
                        view! {
                            <div class="service-card">
                                <i class=icon_class(s.icon)></i>
                                <h3>{s.title}</h3>
                                <p>{s.summary}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
