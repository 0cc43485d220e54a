use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config::PROJECT_PRESS_MS;
use crate::scroll_state::RevealKind;

#[derive(Properties, PartialEq)]
pub struct ProjectItemProps {
    pub reveal_key: AttrValue,
    pub title: AttrValue,
    pub category: AttrValue,
    pub summary: AttrValue,
    pub revealed: bool,
}

#[function_component(ProjectItem)]
pub fn project_item(props: &ProjectItemProps) -> Html {
    let pressed = use_state(|| false);

    let onclick = {
        let pressed = pressed.clone();
        let title = props.title.clone();
        let category = props.category.clone();
        Callback::from(move |_: MouseEvent| {
            log::info!("Project clicked: {} - {}", title, category);
            pressed.set(true);
            let pressed = pressed.clone();
            Timeout::new(PROJECT_PRESS_MS, move || pressed.set(false)).forget();
        })
    };

    let style = if *pressed { "transform: scale(0.98);" } else { "" };

    html! {
        <Reveal
            reveal_key={props.reveal_key.clone()}
            kind={RevealKind::Card}
            revealed={props.revealed}
            class="project-item"
        >
            <div class="project-body" {style} {onclick}>
                <span class="project-category">{props.category.clone()}</span>
                <h3 class="project-title">{props.title.clone()}</h3>
                <p class="project-summary">{props.summary.clone()}</p>
            </div>
        </Reveal>
    }
}
