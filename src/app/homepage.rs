use leptos::prelude::*;
use leptos_meta::Title;

use super::about::AboutSection;
use super::contact::ContactSection;
use super::hero::HeroSection;
use super::skills::SkillsSection;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <HeroSection />
        <AboutSection />
        <SkillsSection />
        <ContactSection />
        <Footer />
    }
}

#[component]
fn Footer() -> impl IntoView {
    let build_time = env!("BUILD_TIME");
    let build_date = build_time.split('T').next().unwrap_or(build_time);
    view! {
        <footer class="py-8 text-center bg-[#0a0820] border-t border-white/5">
            <p class="text-sm text-gray-500">"© 2026 Nicholas Kent"</p>
            <p class="mt-1 text-xs text-gray-600">"Last launched " {build_date}</p>
        </footer>
    }
}
