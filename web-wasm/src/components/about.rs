use super::SectionTitle;
use crate::app::asset;
use leptos::prelude::*;
use ledgers_common::content::{ABOUT, CERTIFICATIONS, PROFILE, SKILLS, STATS};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="section about">
            <SectionTitle title="About" />
            <div class="about-grid">
                <img class="about-photo" src=asset(PROFILE.photo) alt=PROFILE.name />
                <div class="about-content">
                    <h3>{PROFILE.headline}</h3>
                    <ul class="about-info">
                        <li><strong>"Name: "</strong>{PROFILE.name}</li>
                        <li><strong>"Email: "</strong>{PROFILE.email}</li>
                        <li><strong>"From: "</strong>{PROFILE.from}</li>
                        <li><strong>"Services: "</strong>{PROFILE.services_summary}</li>
                    </ul>
                    {ABOUT.iter().map(|p| view! { <p>{*p}</p> }).collect_view()}
                    <a class="button" href=asset(PROFILE.cv) download="">
                        "Download CV"
                    </a>
                </div>
            </div>

            <div class="skills">
                <h3>"Skills"</h3>
                <ul>{SKILLS.iter().map(|s| view! { <li>{*s}</li> }).collect_view()}</ul>
            </div>

            <div class="certifications">
                {CERTIFICATIONS
                    .iter()
                    .map(|c| {
                        view! {
                            <div class="certification">
                                <img src=asset(c.icon) alt=c.name />
                                <span>{c.name}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="stats">
                {STATS
                    .iter()
                    .map(|s| {
                        view! {
                            <div class="stat">
                                <span class="stat-value">{s.value}</span>
                                <span class="stat-label">{s.label}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
