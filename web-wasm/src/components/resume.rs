use super::SectionTitle;
use leptos::prelude::*;
use ledgers_common::content::{ResumeEntry, EDUCATION, EXPERIENCE};

#[component]
fn ResumeColumn(heading: &'static str, entries: &'static [ResumeEntry]) -> impl IntoView {
    view! {
        <div class="resume-column">
            <h3>{heading}</h3>
            {entries
                .iter()
                .map(|e| {
                    view! {
                        <div class="resume-item">
                            <h4>{e.title}</h4>
                            <span class="resume-period">{e.period}</span>
                            <em>{e.place}</em>
                            <p>{e.summary}</p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn Resume() -> impl IntoView {
    view! {
        <section id="resume" class="section resume">
            <SectionTitle title="Resume" />
            <div class="resume-grid">
                <ResumeColumn heading="Education" entries=EDUCATION />
                <ResumeColumn heading="Professional Experience" entries=EXPERIENCE />
            </div>
        </section>
    }
}
