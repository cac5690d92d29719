use yew::prelude::*;

use crate::components::social::SocialIcons;
use crate::components::typewriter::TypewriterText;
use crate::content::PROFILE;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    /// Container whose children rise in one after another on load.
    pub text_ref: NodeRef,
    pub image_ref: NodeRef,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    html! {
        <div class="grid grid-cols-1 lg:grid-cols-5 gap-12 items-center mb-20">
            <div ref={props.text_ref.clone()} class="lg:col-span-3 text-left">
                <p class="text-sm font-medium uppercase tracking-widest text-text-light mb-4">{"Welcome to my world"}</p>
                <h2 class="text-5xl lg:text-6xl font-bold text-text-light mb-4 font-display">
                    {"Hi, I'm "}<span class="text-primary">{PROFILE.name}</span>
                </h2>
                <h3 class="text-3xl lg:text-4xl font-bold text-text-light mb-6 font-display">
                    {"a "}
                    <span class="text-primary">
                        <TypewriterText words={PROFILE.roles} />
                    </span>
                </h3>
                <p class="text-text-light text-base leading-relaxed mb-10">{PROFILE.bio}</p>

                <div class="flex flex-col sm:flex-row gap-8 sm:gap-16">
                    <div>
                        <p class="text-xs font-medium uppercase tracking-widest text-text-light mb-4">{"Find with me"}</p>
                        <SocialIcons />
                    </div>
                    <div>
                        <p class="text-xs font-medium uppercase tracking-widest text-text-light mb-4">{"My Resume"}</p>
                        <div class="flex gap-4">
                            <a
                                href={PROFILE.resume_path}
                                download={PROFILE.resume_file_name}
                                class="px-6 py-3 bg-card-dark rounded-lg shadow-custom-dark text-primary font-medium uppercase tracking-wider hover:-translate-y-1 transition-transform duration-300 text-sm inline-block"
                            >
                                {"Download Resume"}
                            </a>
                            <a
                                href="#contact"
                                class="px-6 py-3 bg-card-dark rounded-lg shadow-custom-dark text-text-light font-medium uppercase tracking-wider hover:-translate-y-1 transition-transform duration-300 text-sm hover:text-primary"
                            >
                                {"Contact Me"}
                            </a>
                        </div>
                    </div>
                </div>
            </div>

            <div class="lg:col-span-2 order-first lg:order-last flex justify-center">
                <div
                    ref={props.image_ref.clone()}
                    class="bg-linear-to-br from-gray-700 via-gray-800 to-black p-1 shadow-custom-dark animate-wavy overflow-hidden w-[300px] h-[300px] sm:w-[400px] sm:h-[400px]"
                >
                    <img src="/assets/portfolio.png" class="w-full h-full object-cover" alt="Portrait" />
                </div>
            </div>
        </div>
    }
}
