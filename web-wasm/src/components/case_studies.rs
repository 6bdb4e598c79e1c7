//! 案件一覧（カテゴリ絞り込みとカード）

use super::SectionTitle;
use crate::app::{asset, use_ui};
use leptos::prelude::*;
use ledgers_common::{Filter, ProjectRecord, UiEvent};

#[component]
pub fn CaseStudies() -> impl IntoView {
    let ui = use_ui();
    let active_filter = Memo::new(move |_| ui.with(|u| u.state().active_filter));
    let visible = move || {
        ui.with(|u| u.visible_projects().into_iter().cloned().collect::<Vec<_>>())
    };

    view! {
        <section id="case-studies" class="section case-studies">
            <SectionTitle title="Case Studies" subtitle="Selected client work" />
            <div class="filter-bar" role="tablist">
                {Filter::options()
                    .map(|filter| {
                        view! {
                            <button
                                class="filter-button"
                                class:active=move || active_filter.get() == filter
                                on:click=move |_| ui.dispatch(UiEvent::SelectFilter { filter })
                            >
                                {filter.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="project-grid">
                <For
                    each=visible
                    key=|project| project.id
                    children=move |project| view! { <ProjectCard project=project /> }
                />
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: ProjectRecord) -> impl IntoView {
    let ui = use_ui();
    let id = project.id;
    let thumbnail = project.thumbnail().map(asset).unwrap_or_default();

    view! {
        <div
            class="project-card"
            tabindex="0"
            role="button"
            on:click=move |_| ui.dispatch(UiEvent::OpenProject { id })
            on:keydown=move |ev| {
                if ev.key() == "Enter" {
                    ui.dispatch(UiEvent::OpenProject { id });
                }
            }
        >
            <img src=thumbnail alt=project.title.clone() loading="lazy" />
            <div class="project-info">
                <h4>{project.title.clone()}</h4>
                <span class="project-category">{project.category.label()}</span>
            </div>
        </div>
    }
}
