use contracts::domain::a001_employee::Availability;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeTone {
    Primary,
    Success,
    Warning,
    Error,
    #[default]
    Neutral,
}

impl BadgeTone {
    fn class(self) -> &'static str {
        match self {
            BadgeTone::Primary => "badge badge--primary",
            BadgeTone::Success => "badge badge--success",
            BadgeTone::Warning => "badge badge--warning",
            BadgeTone::Error => "badge badge--error",
            BadgeTone::Neutral => "badge badge--neutral",
        }
    }
}

#[component]
pub fn Badge(#[prop(optional)] tone: BadgeTone, children: Children) -> impl IntoView {
    view! { <span class=tone.class()>{children()}</span> }
}

/// Green for available, amber for busy, grey on leave
#[component]
pub fn AvailabilityBadge(availability: Availability) -> impl IntoView {
    let tone = match availability {
        Availability::Available => BadgeTone::Success,
        Availability::Busy => BadgeTone::Warning,
        Availability::OnLeave => BadgeTone::Neutral,
    };

    view! { <Badge tone=tone>{availability.as_str()}</Badge> }
}
