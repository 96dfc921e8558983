use leptos::{ev::SubmitEvent, prelude::*};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};
use rand::{rngs::SmallRng, SeedableRng};

use crate::contact::form::{SubmitFlow, SUCCESS_MESSAGE_MS};
use crate::starfield::scatter;

use super::starfield::Starfield;

const CONTACT_BACKGROUND: &str = "background:\
    radial-gradient(ellipse at 60% 20%, rgba(60,60,120,0.4) 0%, transparent 60%),\
    radial-gradient(ellipse at 10% 80%, rgba(80,60,140,0.3) 0%, transparent 70%),\
    radial-gradient(ellipse at 80% 70%, rgba(120,80,200,0.2) 0%, transparent 80%),\
    linear-gradient(135deg, #090a1a 0%, #0a0820 100%);";

#[component]
pub fn ContactSection() -> impl IntoView {
    let stars = scatter(120, 0.7, 2.5, &mut SmallRng::from_entropy());

    let (flow, set_flow) = signal(SubmitFlow::default());

    let UseTimeoutFnReturn {
        start: start_hide,
        stop: stop_hide,
        ..
    } = use_timeout_fn(
        move |_: ()| set_flow.update(|f| f.dismiss_sent()),
        SUCCESS_MESSAGE_MS,
    );
    // the confirmation auto-hide must not outlive the section
    on_cleanup(move || stop_hide());
    // schedule the auto-hide exactly once per successful send
    Effect::new(move |was_sent: Option<bool>| {
        let is_sent = flow.with(|f| f.status.is_sent());
        if is_sent && !was_sent.unwrap_or(false) {
            start_hide(());
        }
        is_sent
    });

    let sending = Signal::derive(move || flow.with(|f| f.status.is_sending()));
    let sent = move || flow.with(|f| f.status.is_sent());
    let error_message = move || flow.with(|f| f.status.error().map(|err| err.to_string()));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(request) = set_flow.try_update(|f| f.begin()).flatten() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        wasm_bindgen_futures::spawn_local(async move {
            let result = crate::contact::relay::send(&request).await;
            if let Err(err) = &result {
                log::error!("contact dispatch failed: {err}");
            }
            set_flow.update(|f| f.finish(result));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    view! {
        <section
            id="contact"
            class="relative flex items-center justify-center overflow-hidden w-full min-h-screen"
            style=CONTACT_BACKGROUND
        >
            <Starfield stars />

            <div class="absolute z-0 pointer-events-none">
                <div class="absolute left-[30%] top-[10%] w-96 h-96 bg-purple-900 opacity-25 rounded-full blur-3xl"></div>
                <div class="absolute right-[15%] bottom-[10%] w-72 h-72 bg-blue-900 opacity-30 rounded-full blur-2xl"></div>
                <div class="absolute left-[60%] bottom-[20%] w-60 h-60 bg-pink-900 opacity-20 rounded-full blur-2xl"></div>
            </div>

            <div class="relative z-10 w-full max-w-6xl px-4 md:px-8 flex flex-col items-center py-20">
                <h2 class="text-center text-4xl md:text-5xl font-bold text-blue-200 mb-3 tracking-wide font-mono">
                    "Let's Connect"
                </h2>
                <p class="text-center text-blue-100/80 text-lg mb-12 max-w-2xl">
                    "Ready to collaborate? You can send me your contact information below."
                </p>

                <div class="flex flex-col md:flex-row gap-8 w-full justify-center">
                    <ContactInfoCard />
                    <div
                        class="flex-1 bg-white/5 backdrop-blur-lg border border-white/10 rounded-2xl shadow-lg p-8 min-w-[320px] max-w-md flex flex-col justify-between"
                        style="box-shadow: 0 4px 48px 0 rgba(40,40,80,0.4);"
                    >
                        <h3 class="text-2xl font-bold text-blue-100 mb-6 font-mono">"Send a Message"</h3>
                        <form on:submit=on_submit class="flex flex-col gap-4">
                            <input
                                type="text"
                                placeholder="Your Name"
                                prop:value=move || flow.with(|f| f.draft.name.clone())
                                on:input=move |ev| {
                                    set_flow.update(|f| f.edit(|d| d.name = event_target_value(&ev)))
                                }
                                disabled=move || sending()
                                class="bg-white/10 border border-white/20 rounded-lg px-4 py-3 text-blue-100 placeholder-blue-300 focus:outline-none focus:border-blue-400 disabled:opacity-50 disabled:cursor-not-allowed"
                            />
                            <input
                                type="email"
                                placeholder="Your Email"
                                prop:value=move || flow.with(|f| f.draft.email.clone())
                                on:input=move |ev| {
                                    set_flow.update(|f| f.edit(|d| d.email = event_target_value(&ev)))
                                }
                                disabled=move || sending()
                                class="bg-white/10 border border-white/20 rounded-lg px-4 py-3 text-blue-100 placeholder-blue-300 focus:outline-none focus:border-blue-400 disabled:opacity-50 disabled:cursor-not-allowed"
                            />
                            <textarea
                                placeholder="Your Message"
                                rows=4
                                prop:value=move || flow.with(|f| f.draft.message.clone())
                                on:input=move |ev| {
                                    set_flow.update(|f| f.edit(|d| d.message = event_target_value(&ev)))
                                }
                                disabled=move || sending()
                                class="bg-white/10 border border-white/20 rounded-lg px-4 py-3 text-blue-100 placeholder-blue-300 focus:outline-none focus:border-blue-400 resize-none disabled:opacity-50 disabled:cursor-not-allowed"
                            ></textarea>

                            {move || {
                                error_message()
                                    .map(|message| {
                                        view! {
                                            <div class="bg-red-500/10 border border-red-500/50 rounded-lg px-4 py-2 text-red-400 text-sm">
                                                {message}
                                            </div>
                                        }
                                    })
                            }}

                            {move || {
                                sent()
                                    .then(|| {
                                        view! {
                                            <div class="bg-green-500/10 border border-green-500/50 rounded-lg px-4 py-2 text-green-400 text-sm">
                                                "Thank you! Your message has been sent successfully."
                                            </div>
                                        }
                                    })
                            }}

                            <button
                                type="submit"
                                disabled=move || sending()
                                class="mt-2 w-full py-3 rounded-lg font-semibold bg-gradient-to-r from-blue-700 via-purple-700 to-pink-700 text-white flex items-center justify-center gap-2 shadow-lg hover:from-blue-800 hover:to-purple-800 transition-all duration-300 focus:outline-none focus:ring-2 focus:ring-blue-400 disabled:opacity-50 disabled:cursor-not-allowed"
                            >
                                {move || if sending() { "Sending..." } else { "Send Message" }}
                            </button>
                        </form>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactInfoCard() -> impl IntoView {
    view! {
        <div
            class="flex-1 bg-white/5 backdrop-blur-lg border border-white/10 rounded-2xl shadow-lg p-8 min-w-[320px] max-w-md flex flex-col justify-between"
            style="box-shadow: 0 4px 48px 0 rgba(40,40,80,0.4);"
        >
            <div>
                <h3 class="text-2xl font-bold text-blue-100 mb-6 font-mono">"Get In Touch"</h3>
                <a href="mailto:nicholaskentx@gmail.com" class="flex items-center gap-4 mb-4 group">
                    <div class="w-12 h-12 bg-blue-700 bg-opacity-80 rounded-lg flex items-center justify-center">
                        <i class="extra-email text-white text-xl"></i>
                    </div>
                    <div>
                        <div class="text-blue-100 text-sm">"Email"</div>
                        <div class="text-blue-50 font-semibold">"nicholaskentx@gmail.com"</div>
                    </div>
                </a>
                <a href="#" class="flex items-center gap-4 mb-4 group">
                    <div class="w-12 h-12 bg-purple-700 bg-opacity-80 rounded-lg flex items-center justify-center">
                        <i class="extra-location text-white text-xl"></i>
                    </div>
                    <div>
                        <div class="text-blue-100 text-sm">"Location"</div>
                        <div class="text-blue-50 font-semibold">"Bandung, Indonesia"</div>
                    </div>
                </a>
            </div>
            <div class="mt-8">
                <div class="text-blue-200 text-sm mb-2">"Follow my journey"</div>
                <div class="flex gap-3">
                    <a
                        href="https://github.com/Nichonamo"
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label="GitHub"
                        class="w-10 h-10 bg-white/10 rounded-lg flex items-center justify-center hover:bg-blue-500/30 transition-colors"
                    >
                        <i class="devicon-github-plain text-blue-200 text-xl"></i>
                    </a>
                    <a
                        href="https://www.linkedin.com/in/nicholaskentx/"
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label="LinkedIn"
                        class="w-10 h-10 bg-white/10 rounded-lg flex items-center justify-center hover:bg-blue-500/30 transition-colors"
                    >
                        <i class="devicon-linkedin-plain text-blue-200 text-xl"></i>
                    </a>
                </div>
            </div>
        </div>
    }
}
