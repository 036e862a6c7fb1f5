use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod components {
    pub mod disclosure;
    pub mod footer;
    pub mod header;
    pub mod icons;
}
mod sections {
    pub mod cta;
    pub mod features;
    pub mod hero;
    pub mod how_it_works;
    pub mod pricing;
    pub mod problem;
}
mod pages {
    pub mod landing;
    pub mod not_found;
}
#[cfg(test)]
mod test_support;

use pages::{landing::Landing, not_found::NotFound};

#[derive(Clone, Debug, Routable, PartialEq)]
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
            info!("Rendering Landing page");
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

// Broken anchors only fail silently in the browser, so surface them while developing.
#[cfg(debug_assertions)]
fn check_content() {
    if let Err(err) = content::validate() {
        log::warn!("landing content: {}", err);
    }
}

#[cfg(not(debug_assertions))]
fn check_content() {}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    check_content();

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
