use yew::prelude::*;

use crate::theme::ThemeMode;

#[derive(Properties, PartialEq)]
pub struct DarkModeToggleProps {
    pub theme: ThemeMode,
    pub on_toggle: Callback<()>,
}

#[function_component(DarkModeToggle)]
pub fn dark_mode_toggle(props: &DarkModeToggleProps) -> Html {
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(()))
    };

    html! {
        <button id="darkModeToggle" class="dark-mode-toggle" aria-label="Toggle dark mode" {onclick}>
            {props.theme.toggle_icon()}
        </button>
    }
}
