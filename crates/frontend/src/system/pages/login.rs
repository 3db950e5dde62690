use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::icons::icon_sized;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;

/// Navigation target only: there is no authentication behind it.
#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <PageFrame page_id="system_login--system" category=PAGE_CAT_SYSTEM>
            <div class="auth-card">
                <div class="auth-card__header">
                    <div class="auth-card__logo">{icon_sized("lock", 32)}</div>
                    <h1 class="auth-card__title">"Sign In"</h1>
                    <p class="auth-card__subtitle">"Sign-in is not available in the demo."</p>
                </div>
                <p class="auth-card__footer">
                    "New to TalentSync? "
                    <A href="/signup">"Create an account"</A>
                </p>
            </div>
        </PageFrame>
    }
}
