//! The static sections of the page. Their markup shape is what the reveal
//! selectors in `animation::catalog` match against.

use chrono::Datelike;
use yew::prelude::*;

use crate::components::slideshow::Slideshow;
use crate::content::{map_embed_url, Skill, FEATURES, PROFILE, PROJECTS, SKILL_GROUPS};

#[derive(Properties, PartialEq)]
struct IntroProps {
    eyebrow: &'static str,
    title: &'static str,
}

#[function_component(Intro)]
fn intro(props: &IntroProps) -> Html {
    html! {
        <div class="text-center mb-16">
            <p class="text-sm font-medium uppercase tracking-widest text-primary mb-2">{props.eyebrow}</p>
            <h2 class="text-4xl font-bold text-text-light font-display">{props.title}</h2>
        </div>
    }
}

#[function_component(Features)]
pub fn features() -> Html {
    html! {
        <section id="features" class="py-12 border-t border-gray-800">
            <h2 class="text-3xl font-bold text-text-light mb-8 font-display">{"Features"}</h2>
            <Slideshow features={FEATURES} />
        </section>
    }
}

fn skill_bar(skill: &Skill) -> Html {
    html! {
        <div>
            <div class="flex justify-between mb-2">
                <span class="text-sm font-medium text-text-light">{skill.name}</span>
                <span class="text-sm font-medium text-text-light">{format!("{}%", skill.percent)}</span>
            </div>
            <div class="w-full bg-black/30 rounded-full h-3">
                <div
                    class="skill-progress bg-primary h-3 rounded-full"
                    style="width: 0%;"
                    data-percent={format!("{}%", skill.percent)}
                ></div>
            </div>
        </div>
    }
}

#[function_component(Skills)]
pub fn skills() -> Html {
    html! {
        <section id="skills" class="py-16 border-t border-gray-800">
            <Intro eyebrow="What I know" title="My Skills" />
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-12">
                { for SKILL_GROUPS.iter().map(|group| html! {
                    <div class="bg-card-dark p-8 rounded-lg shadow-custom-dark">
                        <p class="text-sm font-medium text-primary mb-2">{group.eyebrow}</p>
                        <h3 class="text-2xl font-bold text-white mb-8 font-display">{group.title}</h3>
                        <div class="space-y-8">
                            { for group.skills.iter().map(skill_bar) }
                        </div>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    html! {
        <section id="portfolio" class="py-16 border-t border-gray-800">
            <div class="text-center mb-10">
                <p class="text-sm font-semibold tracking-widest text-primary mb-2 uppercase">
                    {"Visit my portfolio and keep your feedback"}
                </p>
                <h2 class="text-4xl sm:text-5xl font-bold text-text-light font-display">{"My Projects"}</h2>
            </div>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                { for PROJECTS.iter().map(|project| html! {
                    <a
                        href={project.link}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="bg-card-dark rounded-lg overflow-hidden flex flex-col group shadow-custom-dark hover:-translate-y-2 transition-transform duration-300"
                    >
                        <div class="relative bg-[#1e2024] p-6 grow flex items-center justify-center min-h-[200px] sm:min-h-[250px] overflow-hidden">
                            <img
                                alt={project.title}
                                class="h-32 sm:h-40 object-contain transform group-hover:scale-110 transition-transform duration-500 ease-in-out z-10"
                                src={project.image}
                            />
                            <span class="material-symbols-outlined absolute top-4 right-4 text-white opacity-70 z-20">{"open_in_new"}</span>
                        </div>
                        <div class="p-6 space-y-4">
                            <div class="flex justify-between items-center text-sm text-gray-500 dark:text-text-light">
                                <span class="font-medium text-primary tracking-wider uppercase">{project.category}</span>
                                <div class="flex items-center space-x-1">
                                    <span class="material-symbols-outlined text-base">{"favorite"}</span>
                                    <span>{project.likes}</span>
                                </div>
                            </div>
                            <span class="text-lg font-bold text-white leading-snug group-hover:text-primary transition-colors">
                                {project.title}
                                <span class="material-symbols-outlined align-middle ml-1 opacity-0 group-hover:opacity-100 transition-opacity -rotate-45 group-hover:rotate-0 inline-block duration-300">
                                    {"arrow_outward"}
                                </span>
                            </span>
                        </div>
                    </a>
                }) }
            </div>
        </section>
    }
}

#[function_component(Location)]
pub fn location() -> Html {
    html! {
        <section id="location" class="py-16 border-t border-gray-800">
            <Intro eyebrow={PROFILE.location} title="Where I am" />
            <div class="bg-card-dark p-4 rounded-lg shadow-custom-dark h-[400px] w-full overflow-hidden">
                <iframe
                    src={map_embed_url(PROFILE.location)}
                    width="100%"
                    height="100%"
                    style="border: 0;"
                    allowfullscreen=true
                    loading="lazy"
                    referrerpolicy="no-referrer-when-downgrade"
                    class="rounded-lg filter grayscale hover:grayscale-0 transition-all duration-300"
                ></iframe>
            </div>
        </section>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="py-8 text-center border-t border-gray-800">
            <div class="flex justify-center items-center gap-2 mb-4">
                <div class="w-48 h-18">
                    <img src="/assets/logo.png" alt="" />
                </div>
            </div>
            <p class="text-text-light text-sm">
                {format!("© {}. All rights reserved by ", year)}
                <span class="text-primary hover:underline cursor-pointer">{PROFILE.name}</span>
            </p>
        </footer>
    }
}
