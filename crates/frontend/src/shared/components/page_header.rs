use crate::shared::icons::icon_sized;
use leptos::prelude::*;

/// Title block at the top of a routed page, with an optional icon and an
/// actions area on the right (filters, export buttons, counters).
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
    #[prop(optional)] icon_name: Option<&'static str>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <header class="page-header">
            <div class="page-header__text">
                <h1 class="page-header__title">
                    {icon_name.map(|name| view! {
                        <span class="page-header__icon">{icon_sized(name, 28)}</span>
                    })}
                    {title}
                </h1>
                <p class="page-header__subtitle">{subtitle}</p>
            </div>
            {children.map(|actions| view! {
                <div class="page-header__actions">{actions()}</div>
            })}
        </header>
    }
}
