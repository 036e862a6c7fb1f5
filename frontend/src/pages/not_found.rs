use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="flex min-h-screen flex-col items-center justify-center bg-slate-50 px-4 text-center">
            <img draggable="false" src={config::LOGO_PATH} alt={format!("{} Logo", config::BRAND)} class="mb-8 h-8" />
            <h1 class="text-brand mb-3 text-3xl font-bold sm:text-4xl">{"Page not found"}</h1>
            <p class="mb-6 text-base text-gray-600 sm:text-lg">
                {"The page you were looking for doesn't exist."}
            </p>
            <Link<Route> to={Route::Home} classes="bg-brand hover:bg-brand/90 rounded-lg px-6 py-3 text-base font-semibold text-white transition-colors">
                {"Back to home"}
            </Link<Route>>
        </div>
    }
}
