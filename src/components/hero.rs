use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    /// Background offset in px from the parallax pass.
    pub parallax_y: f64,
    pub on_navigate: Callback<String>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let go_to = |target: &'static str| {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(target.to_string());
        })
    };

    html! {
        <section
            id="home"
            class="hero"
            style={format!("background-position-y: {}px;", props.parallax_y)}
        >
            <div class="hero-overlay"></div>
            <div class="hero-content">
                <p class="hero-eyebrow">{"Vendor Code: 502823 (WBSEDCL)"}</p>
                <h1 class="hero-title">{"M/S H.C. Trading Co"}</h1>
                <p class="hero-subtitle">
                    {"Government Electrical Contractor & Transformer Repair Services"}
                </p>
                <div class="hero-cta-group">
                    <a href="#contact" class="btn btn-primary" onclick={go_to("contact")}>
                        {"Request a Quote"}
                    </a>
                    <a href="#services" class="btn btn-secondary" onclick={go_to("services")}>
                        {"Our Services"}
                    </a>
                </div>
            </div>
        </section>
    }
}
