use yew::prelude::*;

use crate::chrome::{apply_body_flags, release_body, BodyFlags, PageChrome};
use crate::components::{
    back_to_top::BackToTop, contact_form::ContactForm, hero::Hero, nav::Nav,
    project_item::ProjectItem, reveal::Reveal, stat_number::StatNumber,
};
use crate::config::NAVBAR_HEIGHT;
use crate::coordinator::ScrollCoordinator;
use crate::dom::{self, DomChrome};
use crate::scroll_state::{resolve_scroll_target, RevealKind, ScrollAction, ScrollUIState};
use crate::theme::ThemeMode;

const SERVICES: &[(&str, &str, &str)] = &[
    (
        "🔌",
        "Electrical Contracting",
        "HT/LT line erection, service connections and substation works for government and private clients.",
    ),
    (
        "⚙️",
        "Transformer Repair",
        "Rewinding, oil filtration and overhauling of distribution transformers up to 500 kVA.",
    ),
    (
        "🛠️",
        "Maintenance Contracts",
        "Scheduled inspection and preventive maintenance for distribution networks.",
    ),
    (
        "📋",
        "Testing & Commissioning",
        "Insulation, ratio and winding resistance tests with full documentation.",
    ),
];

const PROJECTS: &[(&str, &str, &str)] = &[
    ("Rural Electrification Drive", "Line Erection", "11 kV feeder extension across 14 villages."),
    ("Substation Upgrade", "Substation", "33/11 kV substation capacity augmentation."),
    ("Transformer Overhaul", "Repair", "Complete rewinding of 63 kVA and 100 kVA units."),
    ("Street Lighting", "Municipal", "LED street lighting installation for municipal wards."),
];

const FEATURES: &[(&str, &str)] = &[
    ("Licensed Contractor", "Registered government electrical contractor."),
    ("WBSEDCL Vendor", "Approved vendor, code 502823."),
    ("Skilled Crew", "Experienced linemen and certified technicians."),
];

const STATS: &[(&str, &str)] = &[
    ("500+", "Transformers Repaired"),
    ("150+", "Projects Completed"),
    ("15+", "Years of Service"),
    ("100%", "Safety Record"),
];

const CONTACT_INFO: &[(&str, &str)] = &[
    ("Phone", "+91 97335 54917"),
    ("Phone", "+91 96790 37106"),
    ("Vendor Code", "502823 (WBSEDCL)"),
];

#[function_component(Landing)]
pub fn landing() -> Html {
    let ui = use_reducer(ScrollUIState::default);
    let theme = use_state(ThemeMode::default);

    // Window listeners for the lifetime of the page
    {
        let dispatcher = ui.dispatcher();
        use_effect_with_deps(
            move |_| {
                let coordinator = match ScrollCoordinator::attach(dispatcher.clone()) {
                    Ok(coordinator) => {
                        coordinator.initial_pass(&dispatcher);
                        Some(coordinator)
                    }
                    Err(e) => {
                        log::warn!("scroll listeners not attached: {}", e);
                        None
                    }
                };
                move || {
                    drop(coordinator);
                    release_body(&DomChrome);
                }
            },
            (),
        );
    }

    // Body overflow and theme class follow state
    {
        let flags = BodyFlags::from_state(&ui, *theme);
        use_effect_with_deps(
            move |flags| {
                apply_body_flags(&DomChrome, *flags);
                || ()
            },
            flags,
        );
    }

    let on_toggle_menu = {
        let dispatcher = ui.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(ScrollAction::ToggleMenu))
    };

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_: ()| theme.set(theme.toggled()))
    };

    let on_navigate = {
        let dispatcher = ui.dispatcher();
        Callback::from(move |target: String| {
            let sections = match dom::document().and_then(|d| dom::read_sections(&d)) {
                Ok(sections) => sections,
                Err(_) => return,
            };
            if let Some(top) = resolve_scroll_target(&target, &sections, NAVBAR_HEIGHT) {
                if let Err(e) = DomChrome.scroll_to(top) {
                    log::warn!("smooth scroll failed: {}", e);
                }
                dispatcher.dispatch(ScrollAction::NavigateTo {
                    target_id: target,
                    sections,
                });
            }
        })
    };

    let on_back_to_top = Callback::from(|_: ()| {
        if let Err(e) = DomChrome.scroll_to(0.0) {
            log::warn!("scroll to top failed: {}", e);
        }
    });

    let header = |key: &'static str, title: &'static str, subtitle: &'static str| {
        html! {
            <Reveal reveal_key={key} kind={RevealKind::Section} revealed={ui.is_revealed(key)} class="section-header">
                <h2 class="section-title">{title}</h2>
                <p class="section-subtitle">{subtitle}</p>
            </Reveal>
        }
    };

    html! {
        <div class="landing-page">
            <Nav
                nav={ui.nav.clone()}
                theme={*theme}
                {on_toggle_menu}
                {on_toggle_theme}
                on_navigate={on_navigate.clone()}
            />

            <Hero parallax_y={ui.parallax_y} on_navigate={on_navigate.clone()} />

            <section id="about" class="about">
                <div class="container">
                    { header("about-header", "About Us", "Powering communities across West Bengal") }
                    <Reveal reveal_key="about-content" kind={RevealKind::Section} revealed={ui.is_revealed("about-content")} class="about-content">
                        <p>
                            {"M/S H.C. Trading Co is a government electrical contractor specialising in distribution \
                              network works and transformer repair. We deliver on schedule, to specification, \
                              and with an uncompromising focus on safety."}
                        </p>
                        <div class="feature-list">
                            { for FEATURES.iter().enumerate().map(|(i, (title, text))| {
                                let key = format!("feature-{}", i);
                                html! {
                                    <Reveal reveal_key={key.clone()} kind={RevealKind::Card} revealed={ui.is_revealed(&key)} class="feature-item">
                                        <h4>{*title}</h4>
                                        <p>{*text}</p>
                                    </Reveal>
                                }
                            }) }
                        </div>
                    </Reveal>
                    <div class="stats">
                        { for STATS.iter().enumerate().map(|(i, (text, label))| {
                            let key = format!("stat-{}", i);
                            html! {
                                <StatNumber reveal_key={key.clone()} text={*text} label={*label} revealed={ui.is_revealed(&key)} />
                            }
                        }) }
                    </div>
                </div>
            </section>

            <section id="services" class="services">
                <div class="container">
                    { header("services-header", "Our Services", "End-to-end electrical works") }
                    <div class="services-grid">
                        { for SERVICES.iter().enumerate().map(|(i, (icon, title, text))| {
                            let key = format!("service-{}", i);
                            html! {
                                <Reveal reveal_key={key.clone()} kind={RevealKind::Card} revealed={ui.is_revealed(&key)} class="service-card">
                                    <div class="service-icon">{*icon}</div>
                                    <h3>{*title}</h3>
                                    <p>{*text}</p>
                                </Reveal>
                            }
                        }) }
                    </div>
                </div>
            </section>

            <section id="projects" class="projects">
                <div class="container">
                    { header("projects-header", "Recent Projects", "A selection of completed works") }
                    <div class="projects-grid">
                        { for PROJECTS.iter().enumerate().map(|(i, (title, category, summary))| {
                            let key = format!("project-{}", i);
                            html! {
                                <ProjectItem
                                    reveal_key={key.clone()}
                                    title={*title}
                                    category={*category}
                                    summary={*summary}
                                    revealed={ui.is_revealed(&key)}
                                />
                            }
                        }) }
                    </div>
                </div>
            </section>

            <section id="contact" class="contact">
                <div class="container">
                    { header("contact-header", "Get In Touch", "Tell us about your requirement") }
                    <div class="contact-grid">
                        <div class="contact-info">
                            { for CONTACT_INFO.iter().enumerate().map(|(i, (label, value))| {
                                let key = format!("info-{}", i);
                                html! {
                                    <Reveal reveal_key={key.clone()} kind={RevealKind::Card} revealed={ui.is_revealed(&key)} class="info-card">
                                        <span class="info-label">{*label}</span>
                                        <span class="info-value">{*value}</span>
                                    </Reveal>
                                }
                            }) }
                        </div>
                        <ContactForm />
                    </div>
                </div>
            </section>

            <footer class="footer">
                <p>{"© M/S H.C. Trading Co. Government Electrical Contractor & Transformer Repair Services."}</p>
            </footer>

            <BackToTop visible={ui.back_to_top_visible} on_click={on_back_to_top} />
        </div>
    }
}
