use log::debug;
use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::sections::cta::CtaSection;
use crate::sections::features::FeaturesSection;
use crate::sections::hero::HeroSection;
use crate::sections::how_it_works::HowItWorksSection;
use crate::sections::pricing::PricingSection;
use crate::sections::problem::ProblemStatementSection;

// Links like /#pricing should land on the section, anything else starts at the top.
fn scroll_to_top_unless_anchored() {
    if let Some(window) = web_sys::window() {
        let anchored = window
            .location()
            .hash()
            .map(|hash| hash.len() > 1)
            .unwrap_or(false);
        if anchored {
            debug!("keeping scroll position for anchored url");
        } else {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            scroll_to_top_unless_anchored();
            || ()
        },
        (),
    );

    html! {
        <div class="min-h-screen bg-white text-gray-900">
            <Header />
            <main>
                <HeroSection />
                <ProblemStatementSection />
                <FeaturesSection />
                <HowItWorksSection />
                <PricingSection />
                <CtaSection />
            </main>
            <Footer />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{SectionId, NAV_LINKS};
    use crate::test_support::{position, render};

    #[tokio::test]
    async fn sections_render_in_page_order() {
        let html = render::<Landing>(()).await;

        let order = [
            position(&html, "<header"),
            position(&html, "The Database That"),
            position(&html, "GDPR Compliance Shouldn't Be This Hard"),
            position(&html, r#"id="features""#),
            position(&html, r#"id="how-it-works""#),
            position(&html, r#"id="pricing""#),
            position(&html, "Ready to Build with Confidence?"),
            position(&html, "<footer"),
        ];
        assert!(order.windows(2).all(|pair| pair[0] < pair[1]), "{order:?}");
    }

    #[tokio::test]
    async fn every_nav_target_has_exactly_one_section() {
        let html = render::<Landing>(()).await;

        for section in SectionId::ALL {
            let id = format!(r#"id="{}""#, section.as_str());
            assert_eq!(html.matches(&id).count(), 1, "{id}");
        }
        for link in NAV_LINKS {
            let anchor = link.anchor().expect("header links are in-page anchors");
            assert_eq!(html.matches(&format!(r#"id="{anchor}""#)).count(), 1);
        }
    }

    #[tokio::test]
    async fn page_mounts_with_mobile_menu_closed() {
        let html = render::<Landing>(()).await;

        assert!(html.contains(r#"aria-expanded="false""#));
        assert!(!html.contains(r#"id="mobile-menu""#));
    }

    #[tokio::test]
    async fn rendering_is_deterministic() {
        let first = render::<Landing>(()).await;
        let second = render::<Landing>(()).await;
        assert_eq!(first, second);
    }
}
