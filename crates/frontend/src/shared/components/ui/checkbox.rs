use leptos::prelude::*;

/// Checkbox with its label passed as children.
#[component]
pub fn Checkbox(
    #[prop(into)] id: String,
    #[prop(into)] checked: Signal<bool>,
    on_change: Callback<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="form__checkbox-wrapper">
            <input
                id=id.clone()
                type="checkbox"
                class="form__checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
            <label class="form__checkbox-label" for=id>{children()}</label>
        </div>
    }
}
