//! お客様の声スライダーと取引先ロゴ

use super::SectionTitle;
use crate::app::asset;
use gloo::timers::callback::Interval;
use leptos::ev;
use leptos::prelude::*;
use ledgers_common::content::{Testimonial, CLIENT_LOGOS, TESTIMONIALS};
use ledgers_common::{CoordinatorConfig, TestimonialRotator};

fn viewport_width() -> u32 {
    window()
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0) as u32
}

#[component]
pub fn Testimonials() -> impl IntoView {
    let config = use_context::<CoordinatorConfig>().unwrap_or_default();
    let rotator = RwSignal::new(TestimonialRotator::new(TESTIMONIALS.len(), viewport_width()));

    let autoplay = StoredValue::new_local(None::<Interval>);
    if config.testimonial_autoplay_ms > 0 {
        autoplay.set_value(Some(Interval::new(config.testimonial_autoplay_ms, move || {
            rotator.try_update(|r| r.tick());
        })));
    }

    let resize = window_event_listener(ev::resize, move |_| {
        let width = viewport_width();
        rotator.update(|r| r.resize(width));
    });
    on_cleanup(move || {
        resize.remove();
        autoplay.try_set_value(None);
    });

    // 操作したら自動送りを止める
    let interact = move |f: fn(&mut TestimonialRotator)| {
        autoplay.set_value(None);
        rotator.update(f);
    };

    view! {
        <section id="testimonials" class="section testimonials">
            <SectionTitle title="Client Speak" subtitle="What my clients say" />
            <div class="testimonial-slider">
                <button class="slider-prev" aria-label="Previous" on:click=move |_| interact(TestimonialRotator::prev)>
                    "‹"
                </button>
                <div class="testimonial-track">
                    {move || {
                        let range = rotator.with(|r| r.visible_range());
                        TESTIMONIALS[range]
                            .iter()
                            .map(|t| view! { <TestimonialCard testimonial=*t /> })
                            .collect_view()
                    }}
                </div>
                <button class="slider-next" aria-label="Next" on:click=move |_| interact(TestimonialRotator::next)>
                    "›"
                </button>
            </div>
            <div class="slider-pagination">
                {move || {
                    (0..rotator.with(|r| r.page_count()))
                        .map(|page| {
                            view! {
                                <button
                                    class="page-dot"
                                    class:active=move || rotator.with(|r| r.page()) == page
                                    aria-label=format!("Go to slide {}", page + 1)
                                    on:click=move |_| {
                                        autoplay.set_value(None);
                                        rotator.update(|r| r.go_to(page));
                                    }
                                ></button>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </section>
    }
}

#[component]
fn TestimonialCard(testimonial: Testimonial) -> impl IntoView {
    view! {
        <div class="testimonial-card">
            <p class="testimonial-quote">{testimonial.quote}</p>
            <img class="testimonial-avatar" src=asset(testimonial.avatar) alt=testimonial.name />
            <h4>{testimonial.name}</h4>
            <span>{testimonial.role}</span>
        </div>
    }
}

#[component]
pub fn Companies() -> impl IntoView {
    view! {
        <section id="companies" class="section companies">
            <SectionTitle title="Companies I've Worked With" />
            <div class="client-logos">
                {CLIENT_LOGOS
                    .iter()
                    .map(|logo| view! { <img class="client-logo" src=asset(logo) alt="Client logo" /> })
                    .collect_view()}
            </div>
        </section>
    }
}
