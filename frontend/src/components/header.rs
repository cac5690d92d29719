use yew::prelude::*;

use crate::view_state::{ViewAction, ViewState};

const NAV_LINKS: &[(&str, &str)] = &[
    ("#", "HOME"),
    ("#features", "FEATURES"),
    ("#portfolio", "PORTFOLIO"),
    ("#skills", "SKILLS"),
    ("#contact", "CONTACT"),
];

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub view: ViewState,
    pub on_action: Callback<ViewAction>,
    pub node_ref: NodeRef,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let HeaderProps { view, on_action, node_ref } = props;

    let toggle_menu = {
        let on_action = on_action.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_action.emit(ViewAction::ToggleMenu);
        })
    };

    let toggle_theme = {
        let on_action = on_action.clone();
        Callback::from(move |_: MouseEvent| on_action.emit(ViewAction::ToggleTheme))
    };

    let header_size = if view.header_compact { "h-14 py-2 shadow-lg" } else { "h-10 py-6" };
    let logo_size = if view.header_compact { "w-40 h-13" } else { "w-46 h-17" };
    let shadow = if view.header_compact {
        "box-shadow: 0 2px 16px rgba(0,0,0,0.08);"
    } else {
        "box-shadow: none;"
    };

    html! {
        <>
            <header
                ref={node_ref.clone()}
                class={classes!("sticky", "top-0", "z-40", "flex", "justify-between", "items-center", "mb-19",
                    "bg-background-dark", "transition-all", "duration-300", header_size)}
                style={shadow}
            >
                <div class="flex items-center gap-2">
                    <a href="#">
                        <img src="/assets/logo.png" alt="" class={classes!("transition-all", "duration-300", logo_size)} />
                    </a>
                </div>
                <nav class="hidden lg:flex items-center gap-8">
                    { for NAV_LINKS.iter().enumerate().map(|(i, (href, label))| html! {
                        <a href={*href} class={classes!("text-text-light", (i == 0).then_some("active"))}>{*label}</a>
                    }) }
                </nav>
                <div class="flex items-center gap-2">
                    <button
                        onclick={toggle_theme}
                        class="p-2 rounded-full text-text-light"
                        aria-label="Toggle theme"
                    >
                        <span class="material-symbols-outlined text-2xl">{view.theme.toggle_icon()}</span>
                    </button>
                    <div class="lg:hidden">
                        <button
                            onclick={toggle_menu}
                            class={classes!("p-2", "rounded", "transition-transform", "duration-300",
                                view.menu_open.then_some("rotate-90"))}
                            aria-label="Open mobile menu"
                        >
                            <span class="material-symbols-outlined text-text-light text-3xl">{"menu"}</span>
                        </button>
                    </div>
                </div>
            </header>
            <MobileMenu open={view.menu_open} on_action={on_action.clone()} />
        </>
    }
}

#[derive(Properties, PartialEq)]
struct MobileMenuProps {
    open: bool,
    on_action: Callback<ViewAction>,
}

#[function_component(MobileMenu)]
fn mobile_menu(props: &MobileMenuProps) -> Html {
    let close_menu = {
        let on_action = props.on_action.clone();
        Callback::from(move |_: MouseEvent| on_action.emit(ViewAction::CloseMenu))
    };

    html! {
        <div
            class={classes!("fixed", "top-0", "right-0", "h-full", "w-64", "bg-card-dark", "shadow-custom-dark", "z-50",
                "transform", "transition-transform", "duration-500", "flex", "flex-col", "gap-4", "pt-24", "px-8", "lg:hidden",
                if props.open { "translate-x-0" } else { "translate-x-full" })}
            style="will-change: transform;"
        >
            <button
                onclick={close_menu.clone()}
                class="absolute top-6 right-6 p-2 rounded-full bg-primary text-text-light"
                aria-label="Close mobile menu"
            >
                <span class="material-symbols-outlined text-2xl">{"close"}</span>
            </button>
            { for NAV_LINKS.iter().map(|(href, label)| html! {
                <a href={*href} class="text-text-light" onclick={close_menu.clone()}>{*label}</a>
            }) }
        </div>
    }
}
