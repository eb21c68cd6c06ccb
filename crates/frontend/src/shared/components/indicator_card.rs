use leptos::prelude::*;

/// Одна карточка показателя: подпись, значение, пояснение
#[component]
pub fn IndicatorCard(
    #[prop(into)] label: String,
    #[prop(into)] value: String,
    /// Строка под значением ("сейчас человек")
    #[prop(optional, into)]
    desc: Option<String>,
) -> impl IntoView {
    view! {
        <div class="pool-indicator-card">
            <div class="pool-indicator-label">{label}</div>
            <div class="pool-indicator-value">{value}</div>
            {desc.map(|d| view! { <div class="pool-indicator-desc">{d}</div> })}
        </div>
    }
}
