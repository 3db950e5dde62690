use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::icons::{icon, icon_sized};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LANDING;

/// (icon, headline value, label)
const HIGHLIGHTS: &[(&str, &str, &str)] = &[
    ("brain", "95% Accuracy", "AI-Powered Matching"),
    ("users", "40% Faster", "Resource Optimization"),
    ("bar-chart", "Real-time", "Conflict Resolution"),
    ("clock", "15hrs/week", "Time Saved"),
];

/// Dashboard mockup: (project, resources)
const PREVIEW_ALLOCATIONS: &[(&str, u32)] = &[
    ("Project Alpha", 8),
    ("Project Beta", 12),
    ("Project Gamma", 6),
];

/// Dashboard mockup: (team, utilization %)
const PREVIEW_UTILIZATION: &[(&str, u32)] = &[
    ("AI Engineers", 85),
    ("Frontend Devs", 92),
    ("Designers", 78),
];

const TRUSTED_BY: &[&str] = &["Company A", "Company B", "Company C", "Company D"];

#[component]
fn DashboardPreview() -> impl IntoView {
    view! {
        <div class="preview-card">
            <div class="preview-card__header">
                <h3>"Project Dashboard"</h3>
                <div class="preview-card__dots">
                    <span class="dot dot--red"></span>
                    <span class="dot dot--amber"></span>
                    <span class="dot dot--green"></span>
                </div>
            </div>
            <div class="preview-card__body">
                <h4 class="preview-card__section">"Current Allocations"</h4>
                {PREVIEW_ALLOCATIONS
                    .iter()
                    .enumerate()
                    .map(|(i, &(project, resources))| view! {
                        <div class="preview-row">
                            <span class=format!("chart-swatch chart-swatch--{}", i + 1)></span>
                            <span class="preview-row__label">{project}</span>
                            <span class="preview-row__value">{format!("{resources} resources")}</span>
                        </div>
                    })
                    .collect_view()}

                <h4 class="preview-card__section">"Resource Utilization"</h4>
                {PREVIEW_UTILIZATION
                    .iter()
                    .enumerate()
                    .map(|(i, &(team, percent))| view! {
                        <div class="preview-meter">
                            <div class="preview-meter__labels">
                                <span>{team}</span>
                                <span>{format!("{percent}%")}</span>
                            </div>
                            <div class="progress">
                                <div
                                    class=format!("progress__bar chart-fill--{}", i + 1)
                                    style=format!("width: {percent}%;")
                                ></div>
                            </div>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <PageFrame page_id="system_home--landing" category=PAGE_CAT_LANDING>
            <section class="hero">
                <div class="hero__content">
                    <span class="hero__pill">
                        {icon_sized("brain", 16)}
                        "AI-Powered Resource Management"
                    </span>
                    <h1 class="hero__title">
                        "AI-Driven Talent Management for "
                        <span class="hero__accent">"Project\u{2013}Resource Mapping"</span>
                    </h1>
                    <p class="hero__lead">
                        "Intelligently allocate talent to projects with AI-powered matching, real-time conflict resolution, and dynamic resource optimization. Transform your project management with data-driven insights."
                    </p>
                    <div class="hero__actions">
                        <A href="/upload" attr:class="button button--primary button--large">
                            "Get Started"
                            {icon("arrow-right")}
                        </A>
                        <A href="/results" attr:class="button button--secondary button--large">
                            {icon("play")}
                            "Watch Demo"
                        </A>
                    </div>
                    <div class="hero__highlights">
                        {HIGHLIGHTS
                            .iter()
                            .map(|&(icon_name, value, label)| view! {
                                <div class="highlight">
                                    <div class="highlight__icon">{icon_sized(icon_name, 24)}</div>
                                    <p class="highlight__value">{value}</p>
                                    <p class="highlight__label">{label}</p>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>
                <DashboardPreview />
            </section>

            <section class="trusted">
                <h2>"Trusted by Leading Organizations"</h2>
                <div class="trusted__logos">
                    {TRUSTED_BY
                        .iter()
                        .map(|&company| view! { <div class="trusted__logo">{company}</div> })
                        .collect_view()}
                </div>
            </section>
        </PageFrame>
    }
}
