use std::rc::Rc;

use serde::{Deserialize, Serialize};
use yew::prelude::*;

use crate::config::{BACK_TO_TOP_OFFSET, HEADER_COMPACT_OFFSET};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn from_preference(prefers_dark: bool) -> Self {
        if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Value of the page's `data-theme` attribute.
    pub fn as_attr(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Material symbol shown on the toggle, naming the theme it switches to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Light => "dark_mode",
            Theme::Dark => "light_mode",
        }
    }
}

/// Page-level UI state. Only [`ViewAction`]s change it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub theme: Theme,
    pub menu_open: bool,
    pub header_compact: bool,
    pub show_back_to_top: bool,
}

impl ViewState {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            menu_open: false,
            header_compact: false,
            show_back_to_top: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewAction {
    Scrolled(f64),
    ToggleTheme,
    ToggleMenu,
    CloseMenu,
}

impl Reducible for ViewState {
    type Action = ViewAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ViewAction::Scrolled(offset) => {
                next.header_compact = offset > HEADER_COMPACT_OFFSET;
                next.show_back_to_top = offset > BACK_TO_TOP_OFFSET;
            }
            ViewAction::ToggleTheme => next.theme = next.theme.toggled(),
            ViewAction::ToggleMenu => next.menu_open = !next.menu_open,
            ViewAction::CloseMenu => next.menu_open = false,
        }
        if next == *self {
            // unchanged state keeps the same Rc so Yew skips the re-render
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Reflects the theme onto `<html>`: `data-theme` plus the `dark` class the
/// stylesheet keys off.
pub fn apply_theme(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let _ = root.set_attribute("data-theme", theme.as_attr());
    let class_list = root.class_list();
    let _ = match theme {
        Theme::Dark => class_list.add_1("dark"),
        Theme::Light => class_list.remove_1("dark"),
    };
}

/// `prefers-color-scheme: dark`, false when it cannot be read.
pub fn prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}
