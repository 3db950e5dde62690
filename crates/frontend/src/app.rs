use crate::layout::global_context::AppGlobalContext;
use crate::layout::notification_service::NotificationService;
use crate::routes::routes::AppRoutes;
use crate::shared::config::load_app_config;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = load_app_config();

    // Toasts for pipeline outcomes and validation errors
    provide_context(NotificationService::new(config.notifications.dismiss_ms));

    provide_context(AppGlobalContext::new(config));

    view! {
        <AppRoutes />
    }
}
