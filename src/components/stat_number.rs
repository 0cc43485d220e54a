use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::COUNTER_FRAME_MS;
use crate::counter::CounterAnimation;

#[derive(Properties, PartialEq)]
pub struct StatNumberProps {
    pub reveal_key: AttrValue,
    /// Final text, e.g. `"500+"` or `"98%"`.
    pub text: AttrValue,
    pub label: AttrValue,
    pub revealed: bool,
}

/// Counts up from zero the first time it is revealed, one frame per effect
/// run. Never restarts.
#[function_component(StatNumber)]
pub fn stat_number(props: &StatNumberProps) -> Html {
    let display = use_state(|| props.text.to_string());
    let frame = use_state(|| 0u32);
    let animation = use_mut_ref(|| None::<CounterAnimation>);

    {
        let display = display.clone();
        let frame = frame.clone();
        let animation = animation.clone();
        let text = props.text.clone();
        let deps = (props.revealed, *frame);
        use_effect_with_deps(
            move |(revealed, current)| {
                let mut pending = None;
                if *revealed {
                    let running = {
                        let mut slot = animation.borrow_mut();
                        let anim = slot.get_or_insert_with(|| CounterAnimation::from_text(&text));
                        !anim.is_finished()
                    };
                    if running {
                        let next = *current + 1;
                        pending = Some(Timeout::new(COUNTER_FRAME_MS, move || {
                            if let Some(anim) = animation.borrow_mut().as_mut() {
                                display.set(anim.tick());
                            }
                            frame.set(next);
                        }));
                    }
                }
                move || drop(pending)
            },
            deps,
        );
    }

    html! {
        <div class="stat-item">
            <span
                class="stat-number"
                data-reveal="stat"
                data-reveal-key={props.reveal_key.clone()}
            >
                {(*display).clone()}
            </span>
            <span class="stat-label">{props.label.clone()}</span>
        </div>
    }
}
