//! Allocation results dashboard.
//!
//! Charts are plain bar markup scaled against the largest value of each
//! series; there is no charting library behind them.

use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::ui::{Badge, BadgeTone, Select};
use crate::shared::icons::{icon, icon_sized};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::dashboards::d400_allocation_results::{
    chart_ceiling, key_metrics, AllocationRow, Severity, TimeRange, ALLOCATIONS, CONFLICTS,
    DEMAND_SUPPLY, SKILL_DISTRIBUTION, TIMELINE, TIMELINE_PROJECTS, TIME_RANGE_OPTIONS,
};
use leptos::prelude::*;
use thaw::{Tab, TabList};

const TAB_OVERVIEW: &str = "overview";
const TAB_ALLOCATIONS: &str = "allocations";
const TAB_CONFLICTS: &str = "conflicts";
const TAB_TIMELINE: &str = "timeline";

const ALLOCATED_COLOR: &str = "#8B5CF6";
const REQUIRED_COLOR: &str = "#06B6D4";
const SUPPLY_COLOR: &str = "#10B981";

/// Percent of `ceiling`, for bar heights and widths
fn scaled(value: u32, ceiling: u32) -> u32 {
    value * 100 / ceiling.max(1)
}

fn severity_tone(severity: Severity) -> BadgeTone {
    match severity {
        Severity::High => BadgeTone::Error,
        Severity::Medium => BadgeTone::Warning,
        Severity::Low => BadgeTone::Primary,
    }
}

fn efficiency_tone(row: &AllocationRow) -> BadgeTone {
    if row.efficiency >= 85 {
        BadgeTone::Success
    } else {
        BadgeTone::Warning
    }
}

#[component]
fn ChartCard(
    #[prop(into)] title: String,
    #[prop(into)] description: String,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=format!("chart-card {class}")>
            <div class="chart-card__header">
                <h3 class="chart-card__title">{title}</h3>
                <p class="chart-card__description">{description}</p>
            </div>
            <div class="chart-card__body">{children()}</div>
        </div>
    }
}

#[component]
fn Legend(items: Vec<(&'static str, &'static str)>) -> impl IntoView {
    view! {
        <div class="chart-legend">
            {items
                .into_iter()
                .map(|(label, color)| view! {
                    <span class="chart-legend__item">
                        <span class="chart-legend__swatch" style=format!("background: {color};")></span>
                        {label}
                    </span>
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn OverviewTab() -> impl IntoView {
    let allocation_ceiling =
        chart_ceiling(ALLOCATIONS.iter().flat_map(|r| [r.allocated, r.required]));
    let trend_ceiling = chart_ceiling(DEMAND_SUPPLY.iter().flat_map(|p| [p.demand, p.supply]));

    view! {
        <div class="dashboard-grid">
            <ChartCard title="Project Resource Allocation" description="Current vs Required Resources">
                <div class="bar-chart">
                    {ALLOCATIONS
                        .iter()
                        .map(|row| view! {
                            <div class="bar-chart__group">
                                <div class="bar-chart__bars">
                                    <div
                                        class="bar-chart__bar"
                                        title=format!("Allocated: {}", row.allocated)
                                        style=format!(
                                            "height: {}%; background: {ALLOCATED_COLOR};",
                                            scaled(row.allocated, allocation_ceiling),
                                        )
                                    ></div>
                                    <div
                                        class="bar-chart__bar"
                                        title=format!("Required: {}", row.required)
                                        style=format!(
                                            "height: {}%; background: {REQUIRED_COLOR};",
                                            scaled(row.required, allocation_ceiling),
                                        )
                                    ></div>
                                </div>
                                <span class="bar-chart__label">{row.project}</span>
                            </div>
                        })
                        .collect_view()}
                </div>
                <Legend items=vec![("Allocated", ALLOCATED_COLOR), ("Required", REQUIRED_COLOR)] />
            </ChartCard>

            <ChartCard title="Skill Distribution" description="Current team composition by skills">
                <div class="stacked-bar">
                    {SKILL_DISTRIBUTION
                        .iter()
                        .map(|share| view! {
                            <div
                                class="stacked-bar__segment"
                                title=format!("{}: {}%", share.skill, share.percent)
                                style=format!("width: {}%; background: {};", share.percent, share.color)
                            ></div>
                        })
                        .collect_view()}
                </div>
                <ul class="skill-legend">
                    {SKILL_DISTRIBUTION
                        .iter()
                        .map(|share| view! {
                            <li class="skill-legend__item">
                                <span class="chart-legend__swatch" style=format!("background: {};", share.color)></span>
                                <span class="skill-legend__label">{share.skill}</span>
                                <span class="skill-legend__value">{format!("{}%", share.percent)}</span>
                            </li>
                        })
                        .collect_view()}
                </ul>
            </ChartCard>

            <ChartCard
                title="Demand vs Supply Trend"
                description="Resource demand and availability over time"
                class="dashboard-grid__wide"
            >
                <div class="bar-chart">
                    {DEMAND_SUPPLY
                        .iter()
                        .map(|point| {
                            let shortage = point.gap() > 0;
                            view! {
                                <div class="bar-chart__group" class:bar-chart__group--shortage=shortage>
                                    <div class="bar-chart__bars">
                                        <div
                                            class="bar-chart__bar"
                                            title=format!("Demand: {}", point.demand)
                                            style=format!(
                                                "height: {}%; background: {ALLOCATED_COLOR};",
                                                scaled(point.demand, trend_ceiling),
                                            )
                                        ></div>
                                        <div
                                            class="bar-chart__bar"
                                            title=format!("Supply: {}", point.supply)
                                            style=format!(
                                                "height: {}%; background: {SUPPLY_COLOR};",
                                                scaled(point.supply, trend_ceiling),
                                            )
                                        ></div>
                                    </div>
                                    <span class="bar-chart__label">{point.month}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <Legend items=vec![("Demand", ALLOCATED_COLOR), ("Supply", SUPPLY_COLOR)] />
            </ChartCard>
        </div>
    }
}

#[component]
fn AllocationsTab() -> impl IntoView {
    view! {
        <div class="dashboard-grid">
            {ALLOCATIONS
                .iter()
                .map(|row| view! {
                    <div class="chart-card">
                        <div class="chart-card__header chart-card__header--row">
                            <h3 class="chart-card__title">{format!("Project {}", row.project)}</h3>
                            <Badge tone=efficiency_tone(row)>
                                {format!("{}% Efficiency", row.efficiency)}
                            </Badge>
                        </div>
                        <div class="allocation-figures">
                            <div>
                                <p class="allocation-figures__value">{row.allocated}</p>
                                <p class="allocation-figures__label">"Allocated Resources"</p>
                            </div>
                            <div>
                                <p class="allocation-figures__value">{row.required}</p>
                                <p class="allocation-figures__label">"Required Resources"</p>
                            </div>
                            <div>
                                <p class="allocation-figures__value">{row.remaining_need()}</p>
                                <p class="allocation-figures__label">"Remaining Need"</p>
                            </div>
                        </div>
                        <div class="progress">
                            <div
                                class="progress__bar"
                                class:progress__bar--complete=row.is_fully_staffed()
                                style=format!("width: {}%;", row.fill_percent())
                            ></div>
                        </div>
                    </div>
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ConflictsTab() -> impl IntoView {
    view! {
        <div class="conflict-list">
            {CONFLICTS
                .iter()
                .map(|conflict| view! {
                    <div class=format!("conflict-card conflict-card--{}", conflict.severity.as_str())>
                        <div class="conflict-card__header">
                            <div class="conflict-card__title">
                                {icon("alert-triangle")}
                                <div>
                                    <h3>{conflict.kind}</h3>
                                    <p class="conflict-card__description">{conflict.description}</p>
                                </div>
                            </div>
                            <Badge tone=severity_tone(conflict.severity)>
                                {conflict.severity.as_str().to_uppercase()}
                            </Badge>
                        </div>
                        <div class="conflict-card__details">
                            <div>
                                <p class="conflict-card__heading conflict-card__heading--impact">"Impact"</p>
                                <p>{conflict.impact}</p>
                            </div>
                            <div>
                                <p class="conflict-card__heading conflict-card__heading--suggestion">"Suggestion"</p>
                                <p>{conflict.suggestion}</p>
                            </div>
                        </div>
                        <div class="conflict-card__actions">
                            <button class="button button--primary button--small">
                                {icon_sized("check-circle", 16)}
                                " Resolve"
                            </button>
                            <button class="button button--secondary button--small">
                                {icon_sized("x", 16)}
                                " Dismiss"
                            </button>
                        </div>
                    </div>
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn TimelineTab() -> impl IntoView {
    let ceiling = chart_ceiling(TIMELINE.iter().map(|p| p.total()));

    view! {
        <ChartCard title="Resource Allocation Timeline" description="Weekly resource distribution across projects">
            <div class="bar-chart">
                {TIMELINE
                    .iter()
                    .map(|point| view! {
                        <div class="bar-chart__group">
                            <div class="bar-chart__stack" title=format!("Total: {}", point.total())>
                                {point
                                    .counts
                                    .iter()
                                    .zip(TIMELINE_PROJECTS)
                                    .map(|(&count, (project, color))| view! {
                                        <div
                                            class="bar-chart__segment"
                                            title=format!("{project}: {count}")
                                            style=format!("height: {}%; background: {color};", scaled(count, ceiling))
                                        ></div>
                                    })
                                    .collect_view()}
                            </div>
                            <span class="bar-chart__label">{point.week}</span>
                        </div>
                    })
                    .collect_view()}
            </div>
            <Legend items=TIMELINE_PROJECTS.to_vec() />
        </ChartCard>
    }
}

#[component]
pub fn AllocationResultsDashboard() -> impl IntoView {
    let selected_tab = RwSignal::new(TAB_OVERVIEW.to_string());
    let time_range = RwSignal::new(TimeRange::default());

    view! {
        <PageFrame page_id="d400_allocation_results--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader
                title="Allocation Results"
                subtitle="AI-powered resource allocation analysis and recommendations"
                icon_name="bar-chart"
            >
                <Select
                    value=Signal::derive(move || time_range.get().value().to_string())
                    on_change=Callback::new(move |v: String| {
                        if let Some(range) = TimeRange::from_value(&v) {
                            log::debug!("time range: {}", range.label());
                            time_range.set(range);
                        }
                    })
                    options=TIME_RANGE_OPTIONS
                />
                <button class="button button--primary">"Export Report"</button>
            </PageHeader>

            <div class="stat-grid">
                {key_metrics()
                    .into_iter()
                    .map(|metric| view! {
                        <StatCard
                            label=metric.label
                            icon_name=metric.icon
                            value=metric.value
                            subtitle=metric.caption
                        />
                    })
                    .collect_view()}
            </div>

            <TabList selected_value=selected_tab>
                <Tab value=TAB_OVERVIEW.to_string()>"Overview"</Tab>
                <Tab value=TAB_ALLOCATIONS.to_string()>"Allocations"</Tab>
                <Tab value=TAB_CONFLICTS.to_string()>"Conflicts"</Tab>
                <Tab value=TAB_TIMELINE.to_string()>"Timeline"</Tab>
            </TabList>

            <div class="tab-content">
                {move || match selected_tab.get().as_str() {
                    TAB_ALLOCATIONS => view! { <AllocationsTab /> }.into_any(),
                    TAB_CONFLICTS => view! { <ConflictsTab /> }.into_any(),
                    TAB_TIMELINE => view! { <TimelineTab /> }.into_any(),
                    _ => view! { <OverviewTab /> }.into_any(),
                }}
            </div>
        </PageFrame>
    }
}
