use tokio::task::LocalSet;
use yew::{BaseComponent, LocalServerRenderer};

/// Renders `C` to an HTML string, without hydration markers.
pub async fn render<C>(props: C::Properties) -> String
where
    C: BaseComponent,
{
    LocalSet::new()
        .run_until(async move {
            LocalServerRenderer::<C>::with_props(props)
                .hydratable(false)
                .render()
                .await
        })
        .await
}

/// Byte offset of the first match of `needle`. Panics when it is missing.
pub fn position(html: &str, needle: &str) -> usize {
    html.find(needle)
        .unwrap_or_else(|| panic!("{needle:?} not found in rendered html"))
}
