use yew::prelude::*;

use crate::components::icons::Glyph;
use crate::content::{Highlight, SectionId, HOW_IT_WORKS_STEPS};

fn step(item: &Highlight) -> Html {
    html! {
        <div key={item.title} class="text-center">
            <div class="bg-brand mx-auto mb-4 flex h-12 w-12 items-center justify-center rounded-2xl sm:mb-6 sm:h-16 sm:w-16">
                <Glyph icon={item.icon} class="h-6 w-6 text-white sm:h-8 sm:w-8" />
            </div>
            <h3 class="text-brand mb-3 text-lg font-semibold tracking-tight sm:mb-4 sm:text-xl">
                { item.title }
            </h3>
            <p class="text-sm text-gray-600 sm:text-base">{ item.body }</p>
        </div>
    }
}

#[function_component(HowItWorksSection)]
pub fn how_it_works_section() -> Html {
    html! {
        <section id={SectionId::HowItWorks.as_str()} class="lg:py-25 mb-25 bg-white py-12 sm:py-16">
            <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8">
                <div class="mb-12 text-center sm:mb-16">
                    <h2 class="text-brand mb-3 text-2xl font-bold tracking-tight sm:mb-4 sm:text-3xl md:text-4xl">
                        {"How Gardbase Works"}
                    </h2>
                    <p class="mx-auto max-w-3xl text-base text-gray-600 sm:text-lg md:text-xl">
                        {"Three simple steps to breach-proof, compliant data storage"}
                    </p>
                </div>

                <div class="grid gap-8 md:grid-cols-3">
                    { for HOW_IT_WORKS_STEPS.iter().map(step) }
                </div>
            </div>
        </section>
    }
}
