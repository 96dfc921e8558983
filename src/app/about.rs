use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};
use rand::{rngs::SmallRng, Rng, SeedableRng};

/// Fraction of the section that must be on screen before it fades in.
const VISIBILITY_THRESHOLD: f64 = 0.3;

struct Stat {
    icon: &'static str,
    value: &'static str,
    label: &'static str,
}

static STATS: [Stat; 4] = [
    Stat {
        icon: "🚀",
        value: "1+",
        label: "Years Experience",
    },
    Stat {
        icon: "🌌",
        value: "2+",
        label: "My Projects",
    },
    Stat {
        icon: "⚡",
        value: "5+",
        label: "Technologies",
    },
    Stat {
        icon: "✨",
        value: "#",
        label: "tba",
    },
];

struct Expertise {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    gradient: &'static str,
}

static EXPERTISE: [Expertise; 4] = [
    Expertise {
        icon: "💻",
        title: "Front End Developer",
        description: "Building interactive and responsive web interfaces using modern technologies.",
        gradient: "from-blue-500 to-cyan-500",
    },
    Expertise {
        icon: "🧑‍💼",
        title: "Software Engineer Freelance",
        description: "Assisting in system maintenance, troubleshooting issues, and ensuring smooth operation of both software and hardware within the organization.",
        gradient: "from-purple-500 to-pink-500",
    },
    Expertise {
        icon: "🧩",
        title: "Software Engineer Intern",
        description: "Contributing to feature development, bug fixing, and implementing best practices in software development workflows.",
        gradient: "from-green-500 to-teal-500",
    },
    Expertise {
        icon: "📊",
        title: "Junior Data Analyst",
        description: "Analyzing basic datasets to extract insights using tools like Excel, Python, or Google Data Studio.",
        gradient: "from-orange-500 to-red-500",
    },
];

#[component]
pub fn AboutSection() -> impl IntoView {
    let mut rng = SmallRng::from_entropy();
    // slow-pulsing accents scattered behind the whole section
    let accents: Vec<(f64, f64, f64, f64)> = (0..30)
        .map(|_| {
            (
                rng.gen_range(0.0..100.0),
                rng.gen_range(0.0..100.0),
                rng.gen_range(0.0..4.0),
                rng.gen_range(4.0..10.0),
            )
        })
        .collect();
    // five floating dots inside each expertise card, kept off the edges
    let floaters: Vec<Vec<(f64, f64)>> = EXPERTISE
        .iter()
        .map(|_| {
            (0..5)
                .map(|_| (rng.gen_range(20.0..80.0), rng.gen_range(20.0..80.0)))
                .collect()
        })
        .collect();

    let section_ref = NodeRef::<html::Section>::new();
    let (is_visible, set_visible) = signal(false);
    use_intersection_observer_with_options(
        section_ref,
        move |entries: Vec<web_sys::IntersectionObserverEntry>, _| {
            if let Some(entry) = entries.first() {
                set_visible(entry.is_intersecting());
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![VISIBILITY_THRESHOLD]),
    );

    let header_class = move || {
        if is_visible() {
            "text-center mb-20 transition-all duration-1000 animate-fade-in"
        } else {
            "text-center mb-20 transition-all duration-1000 opacity-0 translate-y-10"
        }
    };
    let stats_class = move || {
        if is_visible() {
            "grid grid-cols-2 lg:grid-cols-4 gap-8 mb-24 transition-all duration-1000 delay-300 animate-fade-in"
        } else {
            "grid grid-cols-2 lg:grid-cols-4 gap-8 mb-24 transition-all duration-1000 delay-300 opacity-0 translate-y-10"
        }
    };
    let expertise_class = move || {
        if is_visible() {
            "grid md:grid-cols-2 lg:grid-cols-4 gap-8 transition-all duration-1000 delay-500 animate-fade-in"
        } else {
            "grid md:grid-cols-2 lg:grid-cols-4 gap-8 transition-all duration-1000 delay-500 opacity-0 translate-y-10"
        }
    };

    view! {
        <section node_ref=section_ref id="about" class="py-20 relative overflow-hidden">
            <div class="absolute inset-0">
                {accents
                    .into_iter()
                    .map(|(left, top, delay, duration)| {
                        view! {
                            <span
                                class="absolute w-2 h-2 bg-gradient-to-r from-cyan-400 to-purple-400 rounded-full animate-pulse opacity-20"
                                style=format!(
                                    "left:{left:.2}%;top:{top:.2}%;animation-delay:{delay:.2}s;animation-duration:{duration:.2}s;",
                                )
                            ></span>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="max-w-7xl mx-auto px-6 relative z-10">
                <header class=header_class>
                    <div class="relative inline-block">
                        <h2 class="text-3xl md:text-4xl font-bold text-white mb-4">
                            "Core "
                            <span class="bg-gradient-to-r from-cyan-400 via-blue-400 to-purple-500 bg-clip-text text-transparent">
                                "Expertise"
                            </span>
                        </h2>
                        <div class="absolute -inset-4 bg-gradient-to-r from-cyan-400/20 via-blue-400/20 to-purple-500/20 blur-xl animate-pulse"></div>
                    </div>
                    <p class="text-gray-300 text-base max-w-3xl mx-auto leading-relaxed">
                        "Specialized in creating digital experiences that push the boundaries of technology and innovation."
                    </p>
                </header>

                <div class=stats_class>
                    {STATS
                        .iter()
                        .enumerate()
                        .map(|(index, stat)| {
                            view! {
                                <article
                                    class="group relative text-center bg-gradient-to-br from-black/40 via-gray-900/40 to-black/40 backdrop-blur-md border border-cyan-500/30 rounded-2xl p-6 hover:border-cyan-400/70 transition-all duration-500 hover:scale-110 hover:shadow-2xl hover:shadow-cyan-500/25"
                                    style=format!("animation-delay:{:.2}s;", index as f64 * 0.1)
                                >
                                    <div class="absolute inset-0 bg-gradient-to-r from-cyan-500/10 to-purple-500/10 rounded-2xl opacity-0 group-hover:opacity-100 transition-opacity duration-500"></div>
                                    <div class="relative z-10">
                                        <div
                                            class="text-2xl mb-2 animate-bounce"
                                            style=format!("animation-delay:{:.2}s;", index as f64 * 0.2)
                                        >
                                            {stat.icon}
                                        </div>
                                        <div class="text-2xl font-bold bg-gradient-to-r from-cyan-400 to-purple-400 bg-clip-text text-transparent mb-2 animate-pulse">
                                            {stat.value}
                                        </div>
                                        <p class="text-xs text-gray-400 group-hover:text-gray-300 transition-colors">
                                            {stat.label}
                                        </p>
                                    </div>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>

                <div class=expertise_class>
                    {EXPERTISE
                        .iter()
                        .zip(floaters)
                        .enumerate()
                        .map(|(index, (item, dots))| {
                            view! {
                                <article
                                    class="group relative bg-gradient-to-br from-black/40 via-gray-900/40 to-black/40 backdrop-blur-md border border-white/10 rounded-3xl p-6 text-center hover:border-cyan-500/70 transition-all duration-500 hover:scale-105 hover:shadow-2xl overflow-hidden"
                                    style=format!("animation-delay:{:.2}s;", index as f64 * 0.15)
                                >
                                    <div class=format!(
                                        "absolute inset-0 bg-gradient-to-br {} opacity-0 group-hover:opacity-10 transition-all duration-500 rounded-3xl",
                                        item.gradient,
                                    )></div>

                                    <div class="absolute inset-0 overflow-hidden rounded-3xl">
                                        {dots
                                            .into_iter()
                                            .enumerate()
                                            .map(|(dot_index, (left, top))| {
                                                view! {
                                                    <span
                                                        class=format!(
                                                            "absolute w-1 h-1 bg-gradient-to-r {} rounded-full opacity-0 group-hover:opacity-60 transition-all duration-1000 animate-float",
                                                            item.gradient,
                                                        )
                                                        style=format!(
                                                            "left:{left:.2}%;top:{top:.2}%;animation-delay:{:.1}s;",
                                                            dot_index as f64 * 0.3,
                                                        )
                                                    ></span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>

                                    <div class="relative z-10">
                                        <div class="text-3xl mb-4 transform group-hover:scale-125 group-hover:rotate-12 transition-transform duration-500">
                                            {item.icon}
                                        </div>
                                        <h3 class="text-base font-bold text-white mb-2 group-hover:text-cyan-300 transition-colors duration-300">
                                            {item.title}
                                        </h3>
                                        <p class="text-gray-400 text-sm leading-relaxed group-hover:text-gray-300 transition-colors duration-300">
                                            {item.description}
                                        </p>
                                    </div>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
