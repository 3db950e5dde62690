pub mod global_context;
pub mod notification_service;
pub mod top_header;

use crate::domain::a002_chat::ui::widget::ChatWidget;
use leptos::prelude::*;
use notification_service::NotificationHost;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                   |
/// +------------------------------------------+
/// |              routed page                 |
/// |                               [chat] [t] |
/// +------------------------------------------+
/// ```
///
/// The chat widget and the toast host live outside the routed outlet, so
/// the conversation survives navigation.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />

            <main class="app-main">
                {children()}
            </main>

            <ChatWidget />
            <NotificationHost />
        </div>
    }
}
