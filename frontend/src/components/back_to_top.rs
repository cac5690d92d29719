use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[derive(Properties, PartialEq)]
pub struct BackToTopProps {
    pub visible: bool,
}

#[function_component(BackToTop)]
pub fn back_to_top(props: &BackToTopProps) -> Html {
    if !props.visible {
        return html! {};
    }
    let onclick = Callback::from(|_: MouseEvent| scroll_to_top());

    html! {
        <button
            {onclick}
            aria-label="Back to top"
            class="fixed bottom-8 right-8 cursor-pointer z-50 p-3 rounded-full bg-primary text-text-light shadow-lg hover:-translate-y-1 transition-all duration-300 animate-bounce"
        >
            <span class="material-symbols-outlined">{"arrow_upward"}</span>
        </button>
    }
}
