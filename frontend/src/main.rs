use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

mod config;
mod content;
mod view_state;
mod animation {
    pub mod tween;
    pub mod trigger;
    pub mod timeline;
    pub mod catalog;
    pub mod dom;
    pub mod orchestrator;
}
mod contact {
    pub mod form;
    pub mod relay;
}
mod components {
    pub mod back_to_top;
    pub mod contact;
    pub mod header;
    pub mod hero;
    pub mod sections;
    pub mod slideshow;
    pub mod social;
    pub mod typewriter;
}

use animation::orchestrator::{use_entrance, use_scroll_reveals};
use components::{
    back_to_top::BackToTop,
    contact::Contact,
    header::Header,
    hero::Hero,
    sections::{Features, Footer, Location, Portfolio, Skills},
};
use view_state::{apply_theme, prefers_dark, Theme, ViewAction, ViewState};

#[function_component]
fn App() -> Html {
    let view = use_reducer(|| ViewState::new(Theme::from_preference(prefers_dark())));

    {
        let theme = view.theme;
        use_effect_with_deps(
            move |theme| {
                apply_theme(*theme);
                || ()
            },
            theme,
        );
    }

    // Header size and back-to-top visibility follow the scroll position
    {
        let dispatcher = view.dispatcher();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let scroll_callback = Closure::<dyn Fn()>::new(move || {
                    if let Some(window) = web_sys::window() {
                        dispatcher.dispatch(ViewAction::Scrolled(window.scroll_y().unwrap_or(0.0)));
                    }
                });
                if let Some(window) = &window {
                    let _ = window
                        .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
                move || {
                    if let Some(window) = window {
                        let _ = window
                            .remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                    }
                }
            },
            (),
        );
    }

    let header_ref = use_node_ref();
    let hero_text_ref = use_node_ref();
    let hero_image_ref = use_node_ref();

    use_entrance(header_ref.clone(), hero_text_ref.clone(), hero_image_ref.clone());
    use_scroll_reveals();

    let on_action = {
        let view = view.clone();
        Callback::from(move |action: ViewAction| view.dispatch(action))
    };

    html! {
        <div class="min-h-screen p-4 sm:p-6 md:p-8 lg:px-24 lg:py-12 bg-background-dark text-text-light font-body transition-colors duration-300">
            <Header view={(*view).clone()} {on_action} node_ref={header_ref} />
            <main>
                <Hero text_ref={hero_text_ref} image_ref={hero_image_ref} />
                <Features />
                <Skills />
                <Portfolio />
                <Contact />
                <Location />
            </main>
            <Footer />
            <BackToTop visible={view.show_back_to_top} />
        </div>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
