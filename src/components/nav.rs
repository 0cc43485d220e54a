use yew::prelude::*;

use crate::components::dark_mode_toggle::DarkModeToggle;
use crate::scroll_state::NavState;
use crate::theme::ThemeMode;

/// In-page sections reachable from the navbar, in document order.
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("about", "About"),
    ("services", "Services"),
    ("projects", "Projects"),
    ("contact", "Contact"),
];

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub nav: NavState,
    pub theme: ThemeMode,
    pub on_toggle_menu: Callback<()>,
    pub on_toggle_theme: Callback<()>,
    pub on_navigate: Callback<String>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps {
        nav,
        theme,
        on_toggle_menu,
        on_toggle_theme,
        on_navigate,
    } = props;

    let toggle_menu = {
        let on_toggle_menu = on_toggle_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle_menu.emit(());
        })
    };

    let link_to = |target: &'static str| {
        let on_navigate = on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(target.to_string());
        })
    };

    let menu_open = nav.is_menu_open;

    html! {
        <nav id="navbar" class={classes!("navbar", nav.is_scrolled.then(|| "scrolled"))}>
            <div class="nav-container">
                <a href="#home" class="nav-logo" onclick={link_to("home")}>
                    <span class="logo-mark">{"⚡"}</span>
                    {"H.C. Trading Co"}
                </a>
                <ul id="navMenu" class={classes!("nav-menu", menu_open.then(|| "active"))}>
                    { for NAV_LINKS.iter().map(|(id, label)| {
                        let active = nav.is_active(id);
                        html! {
                            <li>
                                <a
                                    href={format!("#{}", id)}
                                    class={classes!("nav-link", active.then(|| "active"))}
                                    onclick={link_to(*id)}
                                >
                                    {*label}
                                </a>
                            </li>
                        }
                    }) }
                </ul>
                <DarkModeToggle theme={*theme} on_toggle={on_toggle_theme.clone()} />
                <button
                    id="navToggle"
                    class={classes!("nav-toggle", menu_open.then(|| "active"))}
                    aria-label="Toggle navigation"
                    aria-expanded={menu_open.to_string()}
                    onclick={toggle_menu}
                >
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </button>
            </div>
        </nav>
    }
}
