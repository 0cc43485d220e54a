use yew::prelude::*;

use crate::scroll_state::RevealKind;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub reveal_key: AttrValue,
    pub kind: RevealKind,
    pub revealed: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Wrapper that starts hidden and fades in once the scroll state marks its
/// key as revealed.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let class = classes!(
        props.class.clone(),
        "reveal",
        format!("reveal-{}", props.kind.as_attr()),
        props.revealed.then(|| "revealed")
    );

    html! {
        <div
            {class}
            data-reveal={props.kind.as_attr()}
            data-reveal-key={props.reveal_key.clone()}
        >
            { for props.children.iter() }
        </div>
    }
}
