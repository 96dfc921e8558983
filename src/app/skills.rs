use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};
use rand::{rngs::SmallRng, SeedableRng};

use crate::starfield::scatter;

use super::starfield::Starfield;

const VISIBILITY_THRESHOLD: f64 = 0.3;

const SKILLS_BACKGROUND: &str = "background:\
    radial-gradient(ellipse at 60% 20%, rgba(60,60,120,0.18) 0%, transparent 60%),\
    radial-gradient(ellipse at 10% 80%, rgba(80,60,140,0.12) 0%, transparent 70%),\
    radial-gradient(ellipse at 80% 70%, rgba(120,80,200,0.10) 0%, transparent 80%),\
    linear-gradient(135deg, #090a1a 0%, #0a0820 100%);";

struct Skill {
    name: &'static str,
    proficiency: u8,
}

struct SkillCategory {
    category: &'static str,
    skills: [Skill; 4],
}

static CATEGORIES: [SkillCategory; 2] = [
    SkillCategory {
        category: "Frontend",
        skills: [
            Skill {
                name: "React/Next.js",
                proficiency: 95,
            },
            Skill {
                name: "TypeScript",
                proficiency: 90,
            },
            Skill {
                name: "Html CSS",
                proficiency: 85,
            },
            Skill {
                name: "Tailwind CSS",
                proficiency: 90,
            },
        ],
    },
    SkillCategory {
        category: "Tools & Technologies",
        skills: [
            Skill {
                name: "Git/GitHub",
                proficiency: 92,
            },
            Skill {
                name: "ESLint",
                proficiency: 80,
            },
            Skill {
                name: "Figma",
                proficiency: 70,
            },
            Skill {
                name: "Dev Tools",
                proficiency: 85,
            },
        ],
    },
];

struct Experience {
    role: &'static str,
    company: &'static str,
    duration: &'static str,
    summary: &'static str,
}

static TIMELINE: [Experience; 2] = [
    Experience {
        role: "Junior Developer",
        company: "PT DUA PULUH TIGA",
        duration: "Feb 2025 - Present",
        summary: "Contributed to multiple projects focusing on modern web technologies",
    },
    Experience {
        role: "Full Stack Developer",
        company: "Growtopia Private Server",
        duration: "2019 - 2022",
        summary: "Built a growtopia sandbox game based private server",
    },
];

#[component]
pub fn SkillsSection() -> impl IntoView {
    let stars = scatter(90, 0.7, 2.2, &mut SmallRng::from_entropy());

    let section_ref = NodeRef::<html::Div>::new();
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

    view! {
        <section
            id="skills"
            class="relative min-h-screen flex items-center justify-center overflow-hidden"
            style=SKILLS_BACKGROUND
        >
            <Starfield stars />

            <div class="absolute z-0 pointer-events-none">
                <div class="absolute left-[30%] top-[10%] w-96 h-96 bg-purple-900 opacity-10 rounded-full blur-3xl"></div>
                <div class="absolute right-[15%] bottom-[10%] w-72 h-72 bg-blue-900 opacity-10 rounded-full blur-2xl"></div>
                <div class="absolute left-[60%] bottom-[20%] w-60 h-60 bg-pink-900 opacity-10 rounded-full blur-2xl"></div>
            </div>

            <div node_ref=section_ref class="relative z-10 w-full max-w-7xl px-6 py-20">
                <header class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold text-white mb-4 tracking-wide font-mono">
                        "Internships & Experience"
                    </h2>
                    <p class="text-gray-400 text-lg">
                        "Technical skills and professional experience across various domains"
                    </p>
                </header>

                <div class="flex flex-col md:flex-row md:justify-center gap-8">
                    {CATEGORIES
                        .iter()
                        .enumerate()
                        .map(|(category_index, category)| {
                            view! {
                                <div
                                    class="bg-white/5 backdrop-blur-lg border border-white/10 rounded-2xl p-6 shadow-lg md:flex-1"
                                    style="box-shadow: 0 4px 48px rgba(40, 40, 80, 0.4);"
                                >
                                    <h3 class="text-xl font-bold text-white mb-6 text-center">
                                        {category.category}
                                    </h3>
                                    <div class="space-y-4">
                                        {category
                                            .skills
                                            .iter()
                                            .enumerate()
                                            .map(|(skill_index, skill)| {
                                                // bars grow one after another once the section is on screen
                                                let delay_ms = (category_index * 4 + skill_index) * 100;
                                                let bar_style = move || {
                                                    if is_visible() {
                                                        format!(
                                                            "width:{}%;transition-delay:{delay_ms}ms;",
                                                            skill.proficiency,
                                                        )
                                                    } else {
                                                        "width:0%;transition-delay:0ms;".to_string()
                                                    }
                                                };
                                                view! {
                                                    <div>
                                                        <div class="flex justify-between items-center mb-2">
                                                            <span class="text-white font-medium">{skill.name}</span>
                                                            <span class="text-blue-300 text-sm">
                                                                {format!("{}%", skill.proficiency)}
                                                            </span>
                                                        </div>
                                                        <div class="h-2 bg-gray-800 rounded-full overflow-hidden">
                                                            <div
                                                                class="h-full bg-gradient-to-r from-blue-500 to-purple-500 rounded-full transition-all duration-1000 ease-out"
                                                                style=bar_style
                                                            ></div>
                                                        </div>
                                                    </div>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <section class="mt-20">
                    <h3 class="text-2xl font-bold text-white mb-8 text-center">
                        "Professional Experience"
                    </h3>
                    <div class="relative space-y-6 before:absolute before:left-2.5 before:top-0 before:bottom-0 before:w-1 before:bg-gradient-to-b before:from-blue-700/30 before:to-purple-700/10 before:rounded-full before:z-0">
                        {TIMELINE
                            .iter()
                            .map(|job| {
                                view! {
                                    <div
                                        class="relative bg-white/5 backdrop-blur-lg border border-white/10 rounded-xl p-6 hover:border-white/20 transition-all duration-300 shadow"
                                        style="margin-left: 1.5rem;"
                                    >
                                        <div class="absolute -left-7 top-7 w-4 h-4 rounded-full bg-gradient-to-br from-blue-500 to-purple-500 border-4 border-white/10 shadow-lg animate-timeline-dot"></div>
                                        <div class="flex flex-col md:flex-row md:items-center md:justify-between mb-2">
                                            <h4 class="text-lg font-semibold text-white">{job.role}</h4>
                                            <span class="text-blue-400 font-medium">{job.duration}</span>
                                        </div>
                                        <p class="text-purple-300 mb-2">{job.company}</p>
                                        <p class="text-gray-400">{job.summary}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>
            </div>
        </section>
    }
}
