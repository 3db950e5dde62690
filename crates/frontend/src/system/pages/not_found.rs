use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::shared::icons::icon_sized;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let pathname = use_location().pathname;
    log::warn!("no route for {}", pathname.get_untracked());

    view! {
        <PageFrame page_id="system_not_found--system" category=PAGE_CAT_SYSTEM>
            <div class="auth-card">
                <div class="auth-card__header">
                    <div class="auth-card__logo">{icon_sized("alert-triangle", 32)}</div>
                    <h1 class="auth-card__title">"404"</h1>
                    <p class="auth-card__subtitle">"Oops! Page not found"</p>
                </div>
                <A href="/" attr:class="button button--primary">"Return to Home"</A>
            </div>
        </PageFrame>
    }
}
