use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod chrome;
mod config;
mod contact;
mod coordinator;
mod counter;
mod debounce;
mod dom;
mod error;
mod scroll_state;
mod theme;
mod validation;

mod components {
    pub mod back_to_top;
    pub mod contact_form;
    pub mod dark_mode_toggle;
    pub mod hero;
    pub mod nav;
    pub mod project_item;
    pub mod reveal;
    pub mod stat_number;
}
mod pages {
    pub mod landing;
    pub mod not_found;
}

use pages::{landing::Landing, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn print_console_banner() {
    gloo_console::log!("%c⚡ M/S H.C. TRADING CO ⚡", "color: #FFD93D; font-size: 24px; font-weight: bold;");
    gloo_console::log!("%cGovernment Electrical Contractor & Transformer Repair Services", "color: #1A2947; font-size: 14px;");
    gloo_console::log!("%cVendor Code: 502823 (WBSEDCL)", "color: #64748B; font-size: 12px;");
    gloo_console::log!("%cContact: +91 97335 54917 | +91 96790 37106", "color: #64748B; font-size: 12px;");
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    print_console_banner();
    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
