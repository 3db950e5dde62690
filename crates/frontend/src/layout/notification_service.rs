use crate::shared::delay::BrowserDelay;
use crate::shared::icons::icon;
use contracts::shared::simulation::Delay;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Default,
    Destructive,
}

impl NotificationKind {
    fn class(self) -> &'static str {
        match self {
            NotificationKind::Default => "toast",
            NotificationKind::Destructive => "toast toast--destructive",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

/// Toast queue shared through context
#[derive(Clone, Copy)]
pub struct NotificationService {
    items: RwSignal<Vec<Notification>>,
    next_id: StoredValue<u64>,
    dismiss_ms: u32,
}

impl NotificationService {
    pub fn new(dismiss_ms: u32) -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
            dismiss_ms,
        }
    }

    pub fn success(&self, title: impl Into<String>, description: impl Into<String>) {
        self.push(NotificationKind::Default, title.into(), description.into());
    }

    pub fn error(&self, title: impl Into<String>, description: impl Into<String>) {
        self.push(NotificationKind::Destructive, title.into(), description.into());
    }

    fn push(&self, kind: NotificationKind, title: String, description: String) {
        self.next_id.update_value(|n| *n += 1);
        let id = self.next_id.get_value();
        log::debug!("notification #{id}: {title}");
        self.items.update(|items| {
            items.push(Notification {
                id,
                kind,
                title,
                description,
            })
        });

        let this = *self;
        spawn_local(async move {
            BrowserDelay.wait(this.dismiss_ms).await;
            this.dismiss(id);
        });
    }

    /// Removes a notification; a no-op once it is gone or the host was disposed
    pub fn dismiss(&self, id: u64) {
        self.items.try_update(|items| items.retain(|n| n.id != id));
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not provided in context")
}

/// Renders the toast stack. Mounted once by the shell.
#[component]
pub fn NotificationHost() -> impl IntoView {
    let service = use_notifications();

    view! {
        <div class="toast-viewport">
            <For
                each=move || service.items.get()
                key=|n| n.id
                children=move |n| {
                    let id = n.id;
                    view! {
                        <div class=n.kind.class() role="status">
                            <div class="toast__body">
                                <div class="toast__title">{n.title}</div>
                                <div class="toast__description">{n.description}</div>
                            </div>
                            <button
                                class="toast__close"
                                title="Close"
                                on:click=move |_| service.dismiss(id)
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
