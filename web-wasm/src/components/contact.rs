use super::SectionTitle;
use leptos::prelude::*;
use ledgers_common::content::PROFILE;

/// 問い合わせフォーム（送信先は無い）
#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="section contact">
            <SectionTitle title="Contact" subtitle="Get in touch" />
            <div class="contact-grid">
                <div class="contact-info">
                    <div>
                        <h4>"Location"</h4>
                        <p>{format!("{}, {}", PROFILE.locality, PROFILE.region)}</p>
                    </div>
                    <div>
                        <h4>"Email"</h4>
                        <a href=format!("mailto:{}", PROFILE.email)>{PROFILE.email}</a>
                    </div>
                </div>
                <form
                    class="contact-form"
                    on:submit=|ev| {
                        ev.prevent_default();
                        log::info!("contact form has no backend, submission ignored");
                    }
                >
                    <input type="text" name="name" placeholder="Your Name" required />
                    <input type="email" name="email" placeholder="Your Email" required />
                    <input type="text" name="subject" placeholder="Subject" required />
                    <textarea name="message" rows="6" placeholder="Message" required></textarea>
                    <button type="submit">"Send Message"</button>
                </form>
            </div>
        </section>
    }
}
