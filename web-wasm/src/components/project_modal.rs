//! 案件詳細モーダルと画像カルーセル

use crate::app::{asset, use_ui};
use leptos::ev;
use leptos::prelude::*;
use ledgers_common::{ProjectRecord, UiEvent};

#[component]
pub fn ProjectModal() -> impl IntoView {
    let ui = use_ui();

    let keys = window_event_listener(ev::keydown, move |ev| match ev.key().as_str() {
        "Escape" => ui.dispatch(UiEvent::CloseModal),
        "ArrowRight" => ui.dispatch(UiEvent::NextImage),
        "ArrowLeft" => ui.dispatch(UiEvent::PrevImage),
        _ => {}
    });
    on_cleanup(move || keys.remove());

    // 画像送りでモーダル全体を作り直さない
    let open_id = Memo::new(move |_| ui.with(|u| u.state().open_project_id));

    move || {
        open_id
            .get()
            .and_then(|_| ui.with_untracked(|u| u.open_project().cloned()))
            .map(|project| view! { <ModalBody project=project /> })
    }
}

#[component]
fn ModalBody(project: ProjectRecord) -> impl IntoView {
    let ui = use_ui();
    let count = project.image_count();
    let index = move || ui.with(|u| u.state().active_image_index);
    let image = move || ui.with(|u| u.current_image().map(asset).unwrap_or_default());
    let details = project.details.clone();

    view! {
        <div class="modal-backdrop" on:click=move |_| ui.dispatch(UiEvent::CloseModal)>
            <div
                class="modal"
                role="dialog"
                aria-modal="true"
                on:click=|ev| ev.stop_propagation()
            >
                <button
                    class="modal-close"
                    aria-label="Close"
                    on:click=move |_| ui.dispatch(UiEvent::CloseModal)
                >
                    "×"
                </button>

                <div class="modal-gallery">
                    <img src=image alt=project.title.clone() />
                    <Show when=move || { count > 1 }>
                        <button
                            class="gallery-prev"
                            aria-label="Previous image"
                            on:click=move |_| ui.dispatch(UiEvent::PrevImage)
                        >
                            "‹"
                        </button>
                        <button
                            class="gallery-next"
                            aria-label="Next image"
                            on:click=move |_| ui.dispatch(UiEvent::NextImage)
                        >
                            "›"
                        </button>
                        <div class="gallery-dots">
                            {(0..count)
                                .map(|i| view! { <span class="dot" class:active=move || index() == i></span> })
                                .collect_view()}
                        </div>
                    </Show>
                </div>

                <div class="modal-body">
                    <h3>{project.title.clone()}</h3>
                    <span class="project-category">{project.category.label()}</span>
                    <p>{project.description.clone()}</p>
                    <ul class="project-details">
                        <li><strong>"Client: "</strong>{details.client}</li>
                        <li><strong>"Date: "</strong>{details.date}</li>
                        <li><strong>"URL: "</strong>{details.url}</li>
                        <li><strong>"Outcome: "</strong>{details.outcome}</li>
                        <li><strong>"Tools: "</strong>{details.tools.join(", ")}</li>
                    </ul>
                </div>
            </div>
        </div>
    }
}
