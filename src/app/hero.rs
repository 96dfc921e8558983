use leptos::prelude::*;
use leptos_use::{use_interval_fn, use_window_scroll, utils::Pausable};
use rand::{rngs::SmallRng, SeedableRng};

use crate::starfield::scatter;

use super::starfield::Starfield;

const TAGLINE: &str = "Front-End Dev | BINUS CS Student";
const TYPE_SPEED_MS: u64 = 65;
const CURSOR_BLINK_MS: u64 = 500;

const HERO_BACKGROUND: &str = "background:\
    radial-gradient(ellipse at 60% 20%, rgba(60,60,120,0.22) 0%, transparent 60%),\
    radial-gradient(ellipse at 10% 80%, rgba(80,60,140,0.18) 0%, transparent 70%),\
    radial-gradient(ellipse at 80% 70%, rgba(120,80,200,0.16) 0%, transparent 80%),\
    linear-gradient(135deg, #090a1a 0%, #0a0820 100%);";

struct Toolkit {
    name: &'static str,
    icon: &'static str,
    gradient: &'static str,
}

static TOOLKITS: [Toolkit; 12] = [
    Toolkit {
        name: "React",
        icon: "https://img.icons8.com/fluency/96/react.png",
        gradient: "from-blue-400 to-cyan-400",
    },
    Toolkit {
        name: "Node.js",
        icon: "https://img.icons8.com/fluency/96/node-js.png",
        gradient: "from-green-400 to-emerald-400",
    },
    Toolkit {
        name: "Python",
        icon: "https://img.icons8.com/fluency/96/python.png",
        gradient: "from-yellow-400 to-orange-400",
    },
    Toolkit {
        name: "TypeScript",
        icon: "https://img.icons8.com/fluency/96/typescript.png",
        gradient: "from-blue-500 to-indigo-500",
    },
    Toolkit {
        name: "Docker",
        icon: "https://img.icons8.com/fluency/96/docker.png",
        gradient: "from-blue-400 to-blue-600",
    },
    Toolkit {
        name: "AWS",
        icon: "https://img.icons8.com/color/96/amazon-web-services.png",
        gradient: "from-orange-400 to-red-400",
    },
    Toolkit {
        name: "PostgreSQL",
        icon: "https://img.icons8.com/color/96/postgreesql.png",
        gradient: "from-blue-600 to-purple-600",
    },
    Toolkit {
        name: "MongoDB",
        icon: "https://img.icons8.com/color/96/mongodb.png",
        gradient: "from-green-500 to-teal-500",
    },
    Toolkit {
        name: "GraphQL",
        icon: "https://img.icons8.com/color/96/graphql.png",
        gradient: "from-pink-400 to-purple-500",
    },
    Toolkit {
        name: "Kubernetes",
        icon: "https://img.icons8.com/fluency/96/kubernetes.png",
        gradient: "from-blue-500 to-cyan-500",
    },
    Toolkit {
        name: "TensorFlow",
        icon: "https://img.icons8.com/color/96/tensorflow.png",
        gradient: "from-orange-500 to-yellow-500",
    },
    Toolkit {
        name: "Git",
        icon: "https://img.icons8.com/color/96/git.png",
        gradient: "from-red-400 to-pink-400",
    },
];

struct HeroStat {
    value: &'static str,
    label: &'static str,
}

static HERO_STATS: [HeroStat; 3] = [
    HeroStat {
        value: "10+",
        label: "Production Projects",
    },
    HeroStat {
        value: "20+",
        label: "Tech Stack Depth",
    },
    HeroStat {
        value: "∞",
        label: "Space UI Missions",
    },
];

#[component]
pub fn HeroSection() -> impl IntoView {
    let stars = scatter(120, 1.2, 3.7, &mut SmallRng::from_entropy());

    let (typed_len, set_typed_len) = signal(0usize);
    let (cursor_on, set_cursor_on) = signal(true);
    let tagline_len = TAGLINE.chars().count();

    let Pausable { pause, .. } =
        use_interval_fn(move || set_typed_len.update(|len| *len += 1), TYPE_SPEED_MS);
    Effect::new(move |_| {
        if typed_len() > tagline_len {
            pause();
        }
    });
    // cursor stays solid until the tagline is fully revealed, then blinks
    use_interval_fn(
        move || {
            if typed_len.get_untracked() > tagline_len {
                set_cursor_on.update(|on| *on = !*on);
            }
        },
        CURSOR_BLINK_MS,
    );
    let typed = move || TAGLINE.chars().take(typed_len()).collect::<String>();

    let (_, scroll_y) = use_window_scroll();
    let parallax = move || format!("transform: translateY({:.1}px)", scroll_y() * 0.3);

    view! {
        <section
            class="min-h-screen flex items-center justify-center relative overflow-hidden py-16"
            style=HERO_BACKGROUND
        >
            <Starfield stars />

            <div class="absolute z-0 pointer-events-none">
                <div class="absolute left-[30%] top-[10%] w-[32rem] h-[32rem] bg-purple-900 opacity-20 rounded-full blur-3xl"></div>
                <div class="absolute right-[15%] bottom-[10%] w-[24rem] h-[24rem] bg-blue-900 opacity-20 rounded-full blur-2xl"></div>
                <div class="absolute left-[60%] bottom-[20%] w-[20rem] h-[20rem] bg-pink-900 opacity-20 rounded-full blur-2xl"></div>
            </div>

            <div
                class="relative z-10 max-w-7xl px-6 grid lg:grid-cols-2 gap-12 items-start"
                style=parallax
            >
                <div class="space-y-8">
                    <h5 class="text-4xl md:text-5xl font-bold text-white">"Hi, I'm"</h5>
                    <h1 class="text-5xl md:text-6xl font-extrabold bg-gradient-to-r from-cyan-400 via-blue-400 to-purple-500 bg-clip-text text-transparent animate-pulse">
                        "Nicholas Kent"
                    </h1>
                    <p class="text-xl text-cyan-300 font-light tracking-wider">
                        {typed}
                        <span class=move || {
                            if cursor_on() {
                                "text-cyan-400 opacity-100 transition-opacity"
                            } else {
                                "text-cyan-400 opacity-0 transition-opacity"
                            }
                        }>"|"</span>
                    </p>
                    <div class="flex items-center space-x-3">
                        <div class="w-3 h-3 bg-gradient-to-r from-orange-400 to-red-500 rounded-full animate-pulse"></div>
                        <p class="text-lg text-gray-300">"Bandung, Indonesia"</p>
                    </div>
                    <p class="text-base text-gray-300 leading-relaxed max-w-lg">
                        "Crafting seamless interfaces driven to turn pixel-perfect designs into real experiences that empower users and communities. Always exploring new creative boundaries."
                    </p>
                    <div class="flex gap-4">
                        <a
                            href="#skills"
                            class="bg-gradient-to-r from-cyan-500 to-purple-500 px-6 py-3 text-white rounded-lg hover:scale-105 transition-transform"
                        >
                            "View My Galaxy"
                        </a>
                        <a
                            href="#contact"
                            class="border border-cyan-400 px-6 py-3 text-cyan-300 rounded-lg hover:bg-cyan-500/10 transition-all"
                        >
                            "Let's Collaborate"
                        </a>
                    </div>

                    <div class="grid grid-cols-3 gap-6 pt-8">
                        {HERO_STATS
                            .iter()
                            .map(|stat| {
                                view! {
                                    <div class="text-center hover:scale-110 transition-transform duration-300">
                                        <div class="text-3xl font-bold bg-gradient-to-r from-cyan-400 to-purple-400 bg-clip-text text-transparent mb-2">
                                            {stat.value}
                                        </div>
                                        <div class="text-sm text-gray-400 hover:text-gray-300">{stat.label}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="space-y-6 flex flex-col items-center justify-center">
                    <div class="text-center mb-4">
                        <h3 class="text-xl font-semibold text-cyan-300 tracking-wide">"Toolkit Universe"</h3>
                        <p class="text-gray-400 text-sm mt-2">"Infinite cosmic scroll of tech skills :)"</p>
                    </div>
                    <AnimatedToolkits />
                </div>
            </div>

            <div class="absolute bottom-8 left-1/2 transform -translate-x-1/2 animate-bounce">
                <div class="w-8 h-12 border-2 border-cyan-400 rounded-full flex justify-center">
                    <div class="w-1 h-3 bg-cyan-400 rounded-full mt-2 animate-pulse"></div>
                </div>
            </div>
        </section>
    }
}

/// Three columns of skill cards on infinite vertical scroll, fading out at
/// the top and bottom edges.
#[component]
fn AnimatedToolkits() -> impl IntoView {
    view! {
        <div class="relative h-96 overflow-hidden rounded-2xl w-full max-w-2xl mx-auto">
            <ToolkitColumn skip=0 position="left-0" animation="animate-scroll-up-20" />
            <ToolkitColumn skip=4 position="left-1/3" animation="animate-scroll-down-25" />
            <ToolkitColumn skip=8 position="right-0" animation="animate-scroll-up-30" />

            <div class="absolute top-0 left-0 right-0 h-16 bg-gradient-to-b from-[#0a0820] to-transparent z-10"></div>
            <div class="absolute bottom-0 left-0 right-0 h-16 bg-gradient-to-t from-[#0a0820] to-transparent z-10"></div>
        </div>
    }
}

#[component]
fn ToolkitColumn(
    skip: usize,
    position: &'static str,
    animation: &'static str,
) -> impl IntoView {
    let items = &TOOLKITS[skip..];
    view! {
        <div class=format!("absolute {position} w-1/3 h-full")>
            <div class=format!("{animation} flex flex-col gap-4 py-4")>
                // the list is doubled so the halfway-point loop is seamless
                {items
                    .iter()
                    .chain(items.iter())
                    .map(|tool| {
                        view! {
                            <div class=format!(
                                "bg-gradient-to-r {} p-4 rounded-xl text-white text-center mx-2 min-h-[80px] flex flex-col items-center justify-center shadow-lg",
                                tool.gradient,
                            )>
                                <img src=tool.icon alt=tool.name class="w-10 h-10 mb-2" />
                                <div class="text-sm font-semibold">{tool.name}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
