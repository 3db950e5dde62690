use crate::shared::icons::icon;
use leptos::prelude::*;

/// Labelled text field bound to a string signal.
///
/// `revealable` renders a password field with a show/hide toggle;
/// `leading_icon` places an icon inside the field on the left.
#[component]
pub fn Input(
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    /// "text" when omitted
    #[prop(optional, into)]
    input_type: Option<String>,
    #[prop(optional, into)] autocomplete: Option<String>,
    #[prop(optional)] leading_icon: Option<&'static str>,
    #[prop(optional)] revealable: bool,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
) -> impl IntoView {
    let revealed = RwSignal::new(false);
    let base_type = input_type.unwrap_or_else(|| "text".to_string());
    let field_type = move || {
        if revealable {
            if revealed.get() { "text".to_string() } else { "password".to_string() }
        } else {
            base_type.clone()
        }
    };

    let wrapper_class = if leading_icon.is_some() {
        "form__input-wrapper form__input-wrapper--with-icon"
    } else {
        "form__input-wrapper"
    };

    view! {
        <div class="form__group">
            {label.map(|text| view! {
                <label class="form__label" for=id.clone()>{text}</label>
            })}
            <div class=wrapper_class>
                {leading_icon.map(|name| view! { <span class="form__input-icon">{icon(name)}</span> })}
                <input
                    id=id
                    class="form__input"
                    type=field_type
                    placeholder=placeholder
                    autocomplete=autocomplete
                    required=required
                    disabled=move || disabled.get().unwrap_or(false)
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                />
                <Show when=move || revealable>
                    <button
                        type="button"
                        class="form__input-toggle"
                        title=move || if revealed.get() { "Hide password" } else { "Show password" }
                        on:click=move |_| revealed.update(|shown| *shown = !*shown)
                    >
                        {move || if revealed.get() { icon("eye-off") } else { icon("eye") }}
                    </button>
                </Show>
            </div>
        </div>
    }
}
