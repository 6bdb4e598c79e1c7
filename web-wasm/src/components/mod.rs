//! UIコンポーネント

pub mod about;
pub mod case_studies;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod project_modal;
pub mod resume;
pub mod services;
pub mod sidebar;
pub mod testimonials;

use leptos::prelude::*;

/// セクション見出し
#[component]
pub fn SectionTitle(title: &'static str, #[prop(optional)] subtitle: Option<&'static str>) -> impl IntoView {
    view! {
        <div class="section-title">
            <h2>{title}</h2>
            {subtitle.map(|s| view! { <p>{s}</p> })}
        </div>
    }
}
