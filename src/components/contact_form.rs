use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config::FORM_SUCCESS_MS;
use crate::contact::{
    ContactAction, ContactFormState, FieldSpec, FormPhase, CONTACT_FIELDS, SERVICE_OPTIONS,
};
use crate::validation::FieldKind;

const ERROR_BORDER: &str = "border-color: #EF4444;";

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let form = use_reducer(ContactFormState::default);
    let reset_timer = use_mut_ref(|| None::<Timeout>);

    // Log the submission and schedule the reset whenever we enter `Submitted`.
    {
        let dispatcher = form.dispatcher();
        let reset_timer = reset_timer.clone();
        use_effect_with_deps(
            move |phase| {
                if let FormPhase::Submitted(submission) = phase {
                    match serde_json::to_string(submission) {
                        Ok(json) => log::info!("Form submitted: {}", json),
                        Err(e) => log::warn!("Form submitted, values not serializable: {}", e),
                    }
                    *reset_timer.borrow_mut() = Some(Timeout::new(FORM_SUCCESS_MS, move || {
                        dispatcher.dispatch(ContactAction::Reset);
                    }));
                }
                || ()
            },
            form.phase.clone(),
        );
    }

    let onsubmit = {
        let dispatcher = form.dispatcher();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            dispatcher.dispatch(ContactAction::Submit);
        })
    };

    let submitted = form.is_submitted();
    let form_style = if submitted { "display: none;" } else { "display: flex;" };

    html! {
        <div class="contact-form-wrapper">
            <form id="contactForm" class="contact-form" style={form_style} novalidate={true} {onsubmit}>
                { for CONTACT_FIELDS.iter().enumerate().map(|(index, spec)| {
                    let field = &form.fields[index];
                    render_field(index, spec, &field.value, field.error, form.dispatcher())
                }) }
                <button type="submit" class="btn btn-primary btn-submit">{"Send Message"}</button>
            </form>
            <div id="formSuccess" class={classes!("form-success", submitted.then(|| "active"))}>
                <span class="success-icon">{"✓"}</span>
                <h3>{"Thank you!"}</h3>
                <p>{"Your message has been received. We will get back to you shortly."}</p>
            </div>
        </div>
    }
}

fn render_field(
    index: usize,
    spec: &FieldSpec,
    value: &str,
    error: bool,
    dispatcher: UseReducerDispatcher<ContactFormState>,
) -> Html {
    let onblur = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |_: FocusEvent| dispatcher.dispatch(ContactAction::Blur(index)))
    };
    let class = classes!("form-input", error.then(|| "error"));
    let style = if error { ERROR_BORDER } else { "" };
    let id = format!("contact-{}", spec.name);

    let control = match spec.kind {
        FieldKind::TextArea => {
            let oninput = Callback::from(move |e: InputEvent| {
                let input: HtmlTextAreaElement = e.target_unchecked_into();
                dispatcher.dispatch(ContactAction::Input { index, value: input.value() });
            });
            html! {
                <textarea
                    id={id.clone()}
                    name={spec.name}
                    rows="5"
                    placeholder={spec.placeholder}
                    required={spec.required}
                    value={value.to_string()}
                    {class}
                    {style}
                    {oninput}
                    {onblur}
                />
            }
        }
        FieldKind::Select => {
            let onchange = Callback::from(move |e: Event| {
                let select: HtmlSelectElement = e.target_unchecked_into();
                dispatcher.dispatch(ContactAction::Input { index, value: select.value() });
            });
            html! {
                <select
                    id={id.clone()}
                    name={spec.name}
                    required={spec.required}
                    {class}
                    {style}
                    {onchange}
                    {onblur}
                >
                    <option value="" selected={value.is_empty()}>{spec.placeholder}</option>
                    { for SERVICE_OPTIONS.iter().map(|option| html! {
                        <option value={*option} selected={value == *option}>{*option}</option>
                    }) }
                </select>
            }
        }
        kind => {
            let oninput = Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                dispatcher.dispatch(ContactAction::Input { index, value: input.value() });
            });
            html! {
                <input
                    id={id.clone()}
                    type={kind.input_type()}
                    name={spec.name}
                    placeholder={spec.placeholder}
                    required={spec.required}
                    value={value.to_string()}
                    {class}
                    {style}
                    {oninput}
                    {onblur}
                />
            }
        }
    };

    html! {
        <div class="form-group">
            <label for={id}>
                {spec.label}
                { if spec.required { html! { <span class="required">{" *"}</span> } } else { html! {} } }
            </label>
            {control}
        </div>
    }
}
