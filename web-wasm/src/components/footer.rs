use leptos::prelude::*;
use ledgers_common::content::PROFILE;

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="footer">
            <p>{format!("© {} {}. All Rights Reserved.", year, PROFILE.name)}</p>
        </footer>
    }
}
