use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BackToTopProps {
    pub visible: bool,
    pub on_click: Callback<()>,
}

#[function_component(BackToTop)]
pub fn back_to_top(props: &BackToTopProps) -> Html {
    let onclick = {
        let on_click = props.on_click.clone();
        Callback::from(move |_: MouseEvent| on_click.emit(()))
    };

    html! {
        <button
            id="backToTop"
            class={classes!("back-to-top", props.visible.then(|| "visible"))}
            aria-label="Back to top"
            {onclick}
        >
            {"↑"}
        </button>
    }
}
