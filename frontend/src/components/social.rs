use yew::prelude::*;

use crate::content::SOCIAL_LINKS;

#[function_component(SocialIcons)]
pub fn social_icons() -> Html {
    html! {
        <div class="flex items-center gap-4">
            { for SOCIAL_LINKS.iter().map(|link| html! {
                <a
                    target="_blank"
                    rel="noopener noreferrer"
                    href={link.href}
                    aria-label={link.kind.label()}
                    class="icon-box bg-card-dark text-text-light shadow-custom-dark"
                >
                    <svg class="w-5 h-5 transition-colors" fill="currentColor" viewBox="0 0 24 24" aria-hidden="true">
                        <path fill-rule={link.kind.fill_rule()} clip-rule={link.kind.fill_rule()} d={link.kind.icon_path()}></path>
                    </svg>
                </a>
            }) }
        </div>
    }
}
