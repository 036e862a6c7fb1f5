use yew::prelude::*;

use crate::config;
use crate::content::{FooterColumn, FOOTER_COLUMNS};

fn column((i, col): (usize, &FooterColumn)) -> Html {
    html! {
        <div key={i}>
            <h3 class="mb-3 text-sm font-semibold sm:mb-4 sm:text-base">{ col.title }</h3>
            <ul class="space-y-2 text-xs text-gray-400 sm:text-sm">
                { for col.links.iter().enumerate().map(|(i, link)| html! {
                    <li key={i}>
                        <a href={link.target} class="transition-colors hover:text-white">
                            { link.label }
                        </a>
                    </li>
                }) }
            </ul>
        </div>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="bg-brand py-8 text-white sm:py-12">
            <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8">
                <div class="grid gap-8 sm:grid-cols-2 md:grid-cols-4">
                    <div class="sm:col-span-2 md:col-span-1">
                        <div class="mb-4 flex items-center space-x-2">
                            <img
                                draggable="false"
                                src={config::LOGO_WHITE_PATH}
                                alt={format!("{} Logo", config::BRAND)}
                                class="h-6 sm:h-8"
                            />
                        </div>
                        <p class="text-sm text-gray-400 sm:text-base">{ config::TAGLINE }</p>
                    </div>

                    { for FOOTER_COLUMNS.iter().enumerate().map(column) }
                </div>

                <div class="mt-8 border-t border-gray-800 pt-6 text-center text-xs text-gray-400 sm:pt-8 sm:text-sm">
                    <p>{ config::COPYRIGHT }</p>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{position, render};

    #[tokio::test]
    async fn footer_renders_columns_in_order() {
        let html = render::<Footer>(()).await;

        let product = position(&html, ">Product<");
        let company = position(&html, ">Company<");
        let legal = position(&html, ">Legal<");
        assert!(product < company && company < legal);

        assert_eq!(html.matches(r#"href="https://qodesrl.com/""#).count(), 2);
        assert!(html.contains(r#"src="/assets/logo-white.svg""#));
        assert!(html.contains("© 2025 QodeSrl - Gardbase. All rights reserved."));
    }
}
