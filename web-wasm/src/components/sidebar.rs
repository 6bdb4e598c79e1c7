//! サイドバー（プロフィールとナビゲーション）

use crate::app::{asset, use_ui};
use leptos::prelude::*;
use ledgers_common::content::PROFILE;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ui = use_ui();
    let (menu_open, set_menu_open) = signal(false);
    let active = Memo::new(move |_| ui.with(|u| u.state().active_section));
    let targets = ui.with_untracked(|u| u.navigation().targets().to_vec());

    view! {
        <button
            class="menu-toggle"
            aria-label="Toggle navigation"
            on:click=move |_| set_menu_open.update(|open| *open = !*open)
        >
            "☰"
        </button>
        <aside class="sidebar" class:open=move || menu_open.get()>
            <img class="profile-photo" src=asset(PROFILE.photo) alt=PROFILE.name />
            <h1 class="profile-name">{PROFILE.name}</h1>
            <p class="profile-headline">{PROFILE.headline}</p>
            <div class="socials">
                {PROFILE
                    .socials
                    .iter()
                    .map(|s| {
                        view! {
                            <a href=s.url target="_blank" rel="noopener noreferrer" aria-label=s.network>
                                {s.network}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
            <nav class="nav-menu">
                <ul>
                    {targets
                        .into_iter()
                        .map(|target| {
                            let id = target.id.clone();
                            let href = target.href();
                            view! {
                                <li>
                                    <a
                                        href=href
                                        class:active=move || active.with(|a| *a == id)
                                        on:click=move |_| set_menu_open.set(false)
                                    >
                                        {target.label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </nav>
        </aside>
    }
}
