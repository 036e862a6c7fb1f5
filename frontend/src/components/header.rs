use log::debug;
use yew::prelude::*;

use crate::components::disclosure::Disclosure;
use crate::components::icons::Glyph;
use crate::config;
use crate::content::{NavLink, NAV_LINKS};

pub const MOBILE_MENU_ID: &str = "mobile-menu";

#[derive(Properties, PartialEq)]
pub struct NavLinksProps {
    pub links: &'static [NavLink],
    #[prop_or_default]
    pub link_class: Classes,
    /// Fired after a link is clicked. The default scroll still happens.
    #[prop_or_default]
    pub on_navigate: Option<Callback<MouseEvent>>,
}

#[function_component(NavLinks)]
pub fn nav_links(props: &NavLinksProps) -> Html {
    props
        .links
        .iter()
        .map(|link| {
            html! {
                <a
                    key={link.label}
                    href={link.target}
                    class={props.link_class.clone()}
                    onclick={props.on_navigate.clone()}
                >
                    { link.label }
                </a>
            }
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct MobileMenuProps {
    pub on_navigate: Callback<MouseEvent>,
}

/// Panel shown below the header on small screens while the menu is open.
#[function_component(MobileMenu)]
pub fn mobile_menu(props: &MobileMenuProps) -> Html {
    html! {
        <div id={MOBILE_MENU_ID} class="border-t border-gray-100 md:hidden">
            <div class="space-y-1 px-4 pb-3 pt-2">
                <NavLinks
                    links={NAV_LINKS}
                    link_class={classes!("hover:text-brand", "block", "rounded-md", "px-3", "py-2", "text-base", "font-medium", "text-gray-600", "hover:bg-gray-50")}
                    on_navigate={props.on_navigate.clone()}
                />
                <div class="border-t border-gray-100 pt-4">
                    <button class="hover:text-brand block w-full rounded-md px-3 py-2 text-left text-base font-medium text-gray-600 hover:bg-gray-50">
                        {"Sign In"}
                    </button>
                    <button class="bg-brand hover:bg-brand/90 mt-2 block w-full rounded-lg px-3 py-2 text-base font-medium text-white transition-colors">
                        {"Get Started"}
                    </button>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct MenuTriggerProps {
    pub state: Disclosure,
    pub onclick: Callback<MouseEvent>,
}

/// Small-screen button that opens and closes [`MobileMenu`].
#[function_component(MenuTrigger)]
pub fn menu_trigger(props: &MenuTriggerProps) -> Html {
    let state = props.state;
    html! {
        <button
            onclick={props.onclick.clone()}
            aria-label={state.trigger_label()}
            aria-expanded={state.aria_expanded()}
            aria-controls={MOBILE_MENU_ID}
            class="focus:ring-brand inline-flex items-center justify-center rounded-md p-2 text-gray-600 hover:bg-gray-100 hover:text-gray-900 focus:outline-none focus:ring-2 md:hidden"
        >
            <Glyph icon={state.icon()} class="h-6 w-6" />
        </button>
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let menu = use_state(Disclosure::default);

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let next = menu.toggle();
            debug!("mobile menu {}", next);
            menu.set(next);
        })
    };

    // No prevent_default here, the browser still has to scroll to the anchor.
    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            if menu.is_open() {
                debug!("mobile menu closed by navigation");
            }
            menu.set(menu.close());
        })
    };

    html! {
        <header class="sticky top-0 z-50 border-b border-gray-100 bg-white">
            <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8">
                <div class="flex h-16 items-center justify-between">
                    <div class="flex items-center">
                        <a href="/#">
                            <img
                                draggable="false"
                                src={config::LOGO_PATH}
                                alt={format!("{} Logo", config::BRAND)}
                                class="h-6 sm:h-8"
                            />
                        </a>
                    </div>

                    <nav class="hidden space-x-4 md:flex lg:space-x-8">
                        <NavLinks
                            links={NAV_LINKS}
                            link_class={classes!("hover:text-brand", "text-sm", "text-gray-600", "transition-colors", "lg:text-base")}
                        />
                    </nav>

                    <div class="hidden items-center space-x-4 md:flex">
                        <button class="hover:text-brand text-sm text-gray-600 transition-colors lg:text-base">
                            {"Sign In"}
                        </button>
                        <button class="bg-brand hover:bg-brand/90 rounded-lg px-3 py-1.5 text-sm text-white transition-colors lg:px-4 lg:py-2 lg:text-base">
                            {"Get Started"}
                        </button>
                    </div>

                    <MenuTrigger state={*menu} onclick={toggle_menu} />
                </div>
            </div>

            {
                if menu.is_open() {
                    html! { <MobileMenu on_navigate={close_menu} /> }
                } else {
                    html! {}
                }
            }
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render;

    #[tokio::test]
    async fn header_mounts_with_menu_closed() {
        let html = render::<Header>(()).await;

        assert!(html.contains(r#"aria-expanded="false""#));
        assert!(html.contains(r#"aria-label="Open menu""#));
        assert!(html.contains(r#"aria-controls="mobile-menu""#));
        assert!(!html.contains(r#"id="mobile-menu""#));
        assert!(!html.contains("Close menu"));
    }

    #[tokio::test]
    async fn header_lists_desktop_links_once() {
        let html = render::<Header>(()).await;

        for link in NAV_LINKS {
            assert_eq!(html.matches(&format!(r#"href="{}""#, link.target)).count(), 1);
            assert!(html.contains(link.label));
        }
        assert!(html.contains(r#"src="/assets/logo.svg""#));
        assert!(html.contains("Gardbase Logo"));
    }

    #[tokio::test]
    async fn open_trigger_offers_to_close() {
        let html = render::<MenuTrigger>(MenuTriggerProps {
            state: Disclosure::Open,
            onclick: Callback::noop(),
        })
        .await;

        assert!(html.contains(r#"aria-expanded="true""#));
        assert!(html.contains(r#"aria-label="Close menu""#));
        assert!(html.contains("M18 6 6 18"));
        assert!(!html.contains("Open menu"));
    }

    #[tokio::test]
    async fn closed_trigger_offers_to_open() {
        let html = render::<MenuTrigger>(MenuTriggerProps {
            state: Disclosure::Closed,
            onclick: Callback::noop(),
        })
        .await;

        assert!(html.contains(r#"aria-expanded="false""#));
        assert!(html.contains(r#"aria-label="Open menu""#));
        assert!(!html.contains("M18 6 6 18"));
    }

    #[tokio::test]
    async fn mobile_menu_renders_every_link_and_action() {
        let html = render::<MobileMenu>(MobileMenuProps {
            on_navigate: Callback::noop(),
        })
        .await;

        assert!(html.contains(r#"id="mobile-menu""#));
        for link in NAV_LINKS {
            assert!(html.contains(&format!(r#"href="{}""#, link.target)));
        }
        assert!(html.contains("Sign In"));
        assert!(html.contains("Get Started"));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Element, HtmlElement};

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const TRIGGER: &str = "button[aria-controls='mobile-menu']";

    // Lets the scheduler flush the re-render queued by a click.
    async fn settle() {
        TimeoutFuture::new(0).await;
    }

    fn find(root: &Element, selector: &str) -> Option<HtmlElement> {
        root.query_selector(selector)
            .unwrap()
            .map(|el| el.dyn_into::<HtmlElement>().unwrap())
    }

    async fn mount_header() -> Element {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        yew::Renderer::<Header>::with_root(root.clone()).render();
        settle().await;
        root
    }

    #[wasm_bindgen_test]
    async fn trigger_opens_and_closes_panel() {
        let root = mount_header().await;
        assert!(find(&root, "#mobile-menu").is_none());

        find(&root, TRIGGER).unwrap().click();
        settle().await;
        let trigger = find(&root, TRIGGER).unwrap();
        assert_eq!(trigger.get_attribute("aria-expanded").as_deref(), Some("true"));
        assert_eq!(trigger.get_attribute("aria-label").as_deref(), Some("Close menu"));
        assert!(find(&root, "#mobile-menu").is_some());

        trigger.click();
        settle().await;
        assert!(find(&root, "#mobile-menu").is_none());
    }

    #[wasm_bindgen_test]
    async fn following_a_panel_link_closes_panel() {
        let root = mount_header().await;

        for link in NAV_LINKS {
            find(&root, TRIGGER).unwrap().click();
            settle().await;

            let selector = format!("#mobile-menu a[href='{}']", link.target);
            find(&root, &selector).unwrap().click();
            settle().await;

            assert!(find(&root, "#mobile-menu").is_none(), "{} left the menu open", link.label);
            let trigger = find(&root, TRIGGER).unwrap();
            assert_eq!(trigger.get_attribute("aria-expanded").as_deref(), Some("false"));
            assert_eq!(trigger.get_attribute("aria-label").as_deref(), Some("Open menu"));
        }
    }
}
