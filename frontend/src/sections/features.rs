use yew::prelude::*;

use crate::components::icons::Glyph;
use crate::content::{
    CodeLine, Highlight, SectionId, Token, TokenKind, CODE_SAMPLE, CODE_SAMPLE_HEADING,
    FEATURE_HIGHLIGHTS,
};

fn token_class(kind: TokenKind) -> Option<&'static str> {
    match kind {
        TokenKind::Comment => Some("text-gray-500"),
        TokenKind::Keyword => Some("text-blue-400"),
        TokenKind::Identifier => Some("text-white"),
        TokenKind::Str => Some("text-yellow-400"),
        TokenKind::Literal => Some("text-orange-400"),
        TokenKind::Punct => None,
    }
}

fn token(token: &Token) -> Html {
    match token_class(token.kind) {
        Some(class) => html! { <span class={class}>{ token.text }</span> },
        None => html! { <>{ token.text }</> },
    }
}

fn code_line(line: &CodeLine) -> Html {
    html! {
        <div class={classes!(line.gap.then(|| "mt-4"), line.indent.then(|| "ml-4"))}>
            { for line.tokens.iter().map(token) }
        </div>
    }
}

fn highlight(item: &Highlight) -> Html {
    html! {
        <div key={item.title} class="flex items-start space-x-3 sm:space-x-4">
            <div class="bg-brand flex h-8 w-8 flex-shrink-0 items-center justify-center rounded-xl sm:h-10 sm:w-10">
                <Glyph icon={item.icon} class="h-4 w-4 text-white sm:h-5 sm:w-5" />
            </div>
            <div>
                <h3 class="text-brand mb-1.5 text-lg font-semibold tracking-tight sm:mb-2 sm:text-xl">
                    { item.title }
                </h3>
                <p class="text-sm text-gray-600 sm:text-base">{ item.body }</p>
            </div>
        </div>
    }
}

#[function_component(FeaturesSection)]
pub fn features_section() -> Html {
    html! {
        <section id={SectionId::Features.as_str()} class="lg:py-30 bg-slate-50 py-12 sm:py-16">
            <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8">
                <div class="mb-12 text-center sm:mb-16">
                    <h2 class="text-brand mb-3 text-2xl font-bold tracking-tight sm:mb-4 sm:text-3xl md:text-4xl">
                        {"Compliance as a Service, Not a Tool"}
                    </h2>
                    <p class="mx-auto max-w-3xl text-base text-gray-600 sm:text-lg md:text-xl">
                        {"Gardbase shifts the paradigm from complex configuration to automatic compliance. Our zero-knowledge architecture makes data breaches technically impossible."}
                    </p>
                </div>

                <div class="grid items-center gap-8 sm:gap-12 md:grid-cols-2">
                    <div>
                        <div class="space-y-6 sm:space-y-8">
                            { for FEATURE_HIGHLIGHTS.iter().map(highlight) }
                        </div>
                    </div>

                    // TODO: replace with a real snippet once the first SDK is published
                    <div class="rounded-2xl bg-white p-4 shadow-lg sm:p-6 lg:p-8">
                        <div class="overflow-x-auto rounded-lg bg-gray-800 p-4 font-mono text-xs text-green-400 sm:p-6 sm:text-sm">
                            <div class="mb-2">
                                <span class="text-gray-500">{ CODE_SAMPLE_HEADING }</span>
                            </div>
                            <div class="space-y-1">
                                { for CODE_SAMPLE.iter().map(code_line) }
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
