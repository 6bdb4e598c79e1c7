//! メインアプリケーションコンポーネント

use crate::components::{
    about::About, case_studies::CaseStudies, contact::Contact, footer::Footer, hero::Hero,
    project_modal::ProjectModal, resume::Resume, services::Services, sidebar::Sidebar,
    testimonials::{Companies, Testimonials},
};
use crate::head;
use crate::observer::SectionObserver;
use crate::scheduler::IntervalScheduler;
use leptos::prelude::*;
use ledgers_common::{content, CoordinatorConfig, TimerSlot, UiCoordinator, UiEvent};

/// デプロイ先のベースパス（ビルド時に指定）
const BASE_PATH: &str = match option_env!("LEDGERS_BASE_PATH") {
    Some(path) => path,
    None => "",
};

const SITE_URL: &str = match option_env!("LEDGERS_SITE_URL") {
    Some(url) => url,
    None => "https://yourdomain.com",
};

pub fn asset(path: &str) -> String {
    content::asset_url(BASE_PATH, path)
}

/// コーディネーターとタイマーへの窓口
///
/// イベントは必ず `dispatch` を通す。返ってきたタイマー操作はここで適用する。
#[derive(Clone, Copy)]
pub struct UiHandle {
    ui: RwSignal<UiCoordinator>,
    timers: StoredValue<TimerSlot<IntervalScheduler>, LocalStorage>,
}

impl UiHandle {
    fn new(config: CoordinatorConfig) -> Self {
        let ui = RwSignal::new(UiCoordinator::site(config));
        let timers = StoredValue::new_local(TimerSlot::new(IntervalScheduler::new(ui)));
        Self { ui, timers }
    }

    pub fn dispatch(&self, event: UiEvent) {
        let Some(commands) = self.ui.try_update(|ui| ui.handle(event)) else {
            return;
        };
        if !commands.is_empty() {
            self.timers.try_update_value(|slot| slot.apply_all(commands));
        }
    }

    pub fn with<R>(&self, f: impl FnOnce(&UiCoordinator) -> R) -> R {
        self.ui.with(f)
    }

    pub fn with_untracked<R>(&self, f: impl FnOnce(&UiCoordinator) -> R) -> R {
        self.ui.with_untracked(f)
    }

    fn release(&self) {
        self.timers.try_update_value(|slot| slot.release());
    }
}

pub fn use_ui() -> UiHandle {
    expect_context::<UiHandle>()
}

#[component]
pub fn App() -> impl IntoView {
    let config = CoordinatorConfig::default();
    let ui = UiHandle::new(config);
    provide_context(ui);
    provide_context(config);

    if let Err(err) = head::apply_page_meta(SITE_URL) {
        log::warn!("page meta not applied: {:?}", err);
    }

    // 描画後にセクションの監視を始める
    let observer = StoredValue::new_local(None::<SectionObserver>);
    request_animation_frame(move || {
        let (band, ids) = ui.with_untracked(|u| {
            let ids: Vec<String> = u.navigation().targets().iter().map(|t| t.id.clone()).collect();
            (u.active_band(), ids)
        });
        match SectionObserver::connect(band, &ids, move |event| ui.dispatch(UiEvent::Visibility(event))) {
            Ok(section_observer) => {
                ui.dispatch(UiEvent::Observe {
                    regions: section_observer.regions().to_vec(),
                });
                observer.try_set_value(Some(section_observer));
            }
            Err(err) => log::warn!("scroll spy disabled: {:?}", err),
        }
    });

    on_cleanup(move || {
        observer.try_update_value(|o| {
            o.take();
        });
        ui.dispatch(UiEvent::Teardown);
        ui.release();
    });

    view! {
        <Sidebar />
        <main class="main">
            <Hero />
            <About />
            <Services />
            <Resume />
            <CaseStudies />
            <Testimonials />
            <Companies />
            <Contact />
        </main>
        <Footer />
        <ProjectModal />
    }
}
