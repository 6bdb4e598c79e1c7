//! ヒーロー（タイプライター表示）

use crate::app::asset;
use leptos::prelude::*;
use ledgers_common::content::PROFILE;
use ledgers_common::{TypingEffect, TypingTimings};
use std::time::Duration;

fn schedule_typing(
    typing: RwSignal<TypingEffect>,
    pending: StoredValue<Option<TimeoutHandle>>,
    delay_ms: u32,
) {
    let handle = set_timeout_with_handle(
        move || {
            if let Some(next) = typing.try_update(|t| t.step()) {
                schedule_typing(typing, pending, next);
            }
        },
        Duration::from_millis(u64::from(delay_ms)),
    );
    match handle {
        Ok(handle) => {
            pending.try_set_value(Some(handle));
        }
        Err(err) => log::warn!("typing effect stopped: {:?}", err),
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    let timings = TypingTimings::default();
    let typing = RwSignal::new(TypingEffect::new(PROFILE.typing_phrases.iter().copied(), timings));
    let pending = StoredValue::new(None::<TimeoutHandle>);
    schedule_typing(typing, pending, timings.type_ms);

    on_cleanup(move || {
        if let Some(Some(handle)) = pending.try_get_value() {
            handle.clear();
        }
    });

    let background = format!("background-image: url('{}')", asset(PROFILE.hero_background));

    view! {
        <section id="home" class="hero" style=background>
            <div class="hero-overlay">
                <h1>{PROFILE.name}</h1>
                <p class="hero-typed">
                    "I'm a "
                    <span class="typed">{move || typing.with(|t| t.text().to_string())}</span>
                    <span class="typed-cursor">"|"</span>
                </p>
            </div>
        </section>
    }
}
