use yew::prelude::*;

use crate::components::icons::{Glyph, Icon};
use crate::content::{PricingPlan, SectionId, MOST_POPULAR_PLAN, PRICING_PLANS};

#[derive(Properties, PartialEq)]
pub struct PricingSectionProps {
    #[prop_or(PRICING_PLANS)]
    pub plans: &'static [PricingPlan],
}

fn plan_card(index: usize, plan: &PricingPlan) -> Html {
    let popular = index == MOST_POPULAR_PLAN;
    let border = if popular {
        "border-brand bg-white shadow-lg"
    } else {
        "border-gray-200 bg-white"
    };

    html! {
        <div key={plan.name} class={classes!("relative", "rounded-2xl", "border", border, "p-6", "sm:p-8")}>
            {
                if popular {
                    html! {
                        <div class="absolute -top-3 left-1/2 -translate-x-1/2 transform sm:-top-4">
                            <span class="bg-brand rounded-full px-3 py-1 text-xs font-medium text-white sm:px-4 sm:py-2 sm:text-sm">
                                {"Most Popular"}
                            </span>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <h3 class="text-brand mb-2 text-xl font-bold sm:text-2xl">{ plan.name }</h3>
            <p class="mb-4 text-sm text-gray-600 sm:mb-6 sm:text-base">{ plan.description }</p>
            <div class="text-brand mb-4 text-3xl font-bold sm:mb-6 sm:text-4xl">
                { plan.price.label() }
                <span class="text-lg font-normal text-gray-600 sm:text-xl">{"/month"}</span>
            </div>
            <ul class="mb-6 space-y-2 sm:mb-8 sm:space-y-3">
                { for plan.features.iter().enumerate().map(|(i, feature)| html! {
                    <li key={i} class="flex items-center">
                        <Glyph icon={Icon::CircleCheck} class="mr-2 h-4 w-4 flex-shrink-0 text-green-500 sm:mr-3 sm:h-5 sm:w-5" />
                        <span class="text-sm text-gray-600 sm:text-base">{ *feature }</span>
                    </li>
                }) }
            </ul>
            {
                if plan.contact_sales() {
                    html! {
                        <button class="bg-brand hover:bg-brand/90 w-full rounded-lg py-2.5 text-sm font-semibold text-white transition-colors sm:py-3 sm:text-base">
                            {"Contact Sales"}
                        </button>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[function_component(PricingSection)]
pub fn pricing_section(props: &PricingSectionProps) -> Html {
    html! {
        <section id={SectionId::Pricing.as_str()} class="bg-slate-50 py-12 sm:py-16 lg:py-20">
            <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8">
                <div class="mb-12 text-center sm:mb-16">
                    <h2 class="text-brand mb-3 text-2xl font-bold tracking-tight sm:mb-4 sm:text-3xl md:text-4xl">
                        {"Simple, Predictable Pricing"}
                    </h2>
                    <p class="mx-auto max-w-3xl text-base text-gray-600 sm:text-lg md:text-xl">
                        {"No hidden costs, no surprise bills. All compliance features included by default."}
                    </p>
                </div>

                <div class="grid gap-6 sm:gap-8 md:grid-cols-3">
                    { for props.plans.iter().enumerate().map(|(index, plan)| plan_card(index, plan)) }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Price;
    use crate::test_support::{position, render};

    async fn render_plans(plans: &'static [PricingPlan]) -> String {
        render::<PricingSection>(PricingSectionProps { plans }).await
    }

    #[tokio::test]
    async fn growth_is_badged_most_popular() {
        let html = render_plans(PRICING_PLANS).await;

        assert_eq!(html.matches("Most Popular").count(), 1);
        let startup = position(&html, ">Startup<");
        let badge = position(&html, "Most Popular");
        let growth = position(&html, ">Growth<");
        assert!(startup < badge && badge < growth);
        assert_eq!(html.matches("border-brand").count(), 1);
    }

    #[tokio::test]
    async fn contact_sales_only_on_scale() {
        let html = render_plans(PRICING_PLANS).await;

        assert_eq!(html.matches("Contact Sales").count(), 1);
        assert!(position(&html, ">Scale<") < position(&html, "Contact Sales"));
        assert!(html.contains("€79+"));
        assert!(html.contains("€349+"));
        assert_eq!(html.matches(r#"sm:text-xl">/month</span>"#).count(), 3);
    }

    #[tokio::test]
    async fn badge_follows_position_not_name() {
        const PLANS: &[PricingPlan] = &[
            PricingPlan {
                name: "Solo",
                description: "One seat",
                price: Price::Monthly("€9+"),
                features: &["1GB storage"],
            },
            PricingPlan {
                name: "Team",
                description: "Five seats",
                price: Price::Monthly("€49+"),
                features: &["10GB storage"],
            },
        ];
        let html = render_plans(PLANS).await;

        assert!(position(&html, ">Solo<") < position(&html, "Most Popular"));
        assert!(position(&html, "Most Popular") < position(&html, ">Team<"));
        assert!(!html.contains("Contact Sales"));
    }

    #[tokio::test]
    async fn repeated_features_are_all_listed() {
        const PLANS: &[PricingPlan] = &[PricingPlan {
            name: "Pilot",
            description: "Trial",
            price: Price::Custom,
            features: &["Email support", "Email support"],
        }];
        let html = render_plans(PLANS).await;

        assert_eq!(html.matches(">Email support<").count(), 2);
        assert!(html.contains("Contact Sales"));
    }

    #[tokio::test]
    async fn defaults_to_shipped_plans() {
        let html = render::<PricingSection>(yew::props!(PricingSectionProps {})).await;
        assert!(html.contains(r#"id="pricing""#));
        for plan in PRICING_PLANS {
            assert!(html.contains(plan.description));
            for feature in plan.features {
                assert!(html.contains(feature));
            }
        }
    }
}
