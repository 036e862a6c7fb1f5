use yew::prelude::*;

use crate::content::{ProblemCard, Tone, PROBLEM_CARDS};

// (card background, category label colours)
fn tone_classes(tone: Tone) -> (&'static str, &'static str) {
    match tone {
        Tone::Red => ("bg-red-50", "text-red-500 group-hover:text-red-400"),
        Tone::Orange => ("bg-orange-50", "text-orange-500 group-hover:text-orange-400"),
        Tone::Yellow => ("bg-yellow-50", "text-amber-500 group-hover:text-amber-400"),
    }
}

fn card(card: &ProblemCard) -> Html {
    let (background, label) = tone_classes(card.tone);
    html! {
        <div key={card.category} class={classes!("rounded-2xl", "p-6", "sm:p-8", background)}>
            <div class={classes!("mb-2", "text-xs", "font-medium", "uppercase", "tracking-wider", "sm:text-sm", label)}>
                { card.category }
            </div>
            <h3 class="text-brand mb-2 text-lg font-semibold sm:text-xl">{ card.headline }</h3>
            <p class="text-sm text-gray-600 sm:text-base">{ card.body }</p>
        </div>
    }
}

#[function_component(ProblemStatementSection)]
pub fn problem_statement_section() -> Html {
    html! {
        <section class="lg:py-25 mb-20 bg-white py-12 sm:py-16">
            <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8">
                <div class="mb-20 text-center sm:mb-16">
                    <h2 class="text-brand mb-3 text-2xl font-bold tracking-tight sm:mb-4 sm:text-3xl md:text-4xl">
                        {"GDPR Compliance Shouldn't Be This Hard"}
                    </h2>
                    <p class="mx-auto max-w-3xl text-base text-gray-600 sm:text-lg md:text-xl">
                        {"Traditional databases make you choose between developer experience and compliance. With complex configurations, shared responsibility models, and constant legal uncertainty."}
                    </p>
                </div>

                <div class="grid gap-6 sm:gap-8 md:grid-cols-3">
                    { for PROBLEM_CARDS.iter().map(card) }
                </div>
            </div>
        </section>
    }
}
