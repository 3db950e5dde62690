use leptos::prelude::*;

/// Native `<select>` over a fixed `(value, label)` option table.
///
/// `value` is bound as the `value` property so programmatic resets still
/// move the selection after the user has picked an option.
#[component]
pub fn Select(
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    options: &'static [(&'static str, &'static str)],
) -> impl IntoView {
    view! {
        <select
            class="form__select"
            prop:value=move || value.get()
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            {options
                .iter()
                .map(|&(option_value, label)| {
                    view! {
                        <option value=option_value selected=move || value.with(|v| v == option_value)>
                            {label}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}
