mod state;

use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::components::ui::{AvailabilityBadge, Input, Select};
use crate::shared::icons::icon_sized;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_employee::filter::{
    EXPERIENCE_OPTIONS, PROJECT_OPTIONS, SKILL_OPTIONS,
};
use contracts::domain::a001_employee::{
    mock_employees, Availability, DirectoryStats, Employee, UtilizationTone,
};
use leptos::prelude::*;
use state::EmployeeListState;
use thaw::{Button, ButtonAppearance, ButtonSize};

const SKILLS_INLINE: usize = 3;

#[derive(Clone, Debug)]
pub struct EmployeeRow {
    pub id: u32,
    pub initials: String,
    pub name: String,
    pub role: String,
    pub experience: &'static str,
    pub project: String,
    pub availability: Availability,
    pub skills: Vec<String>,
    pub hidden_skills: usize,
    pub location: String,
    pub rating: String,
    pub utilization: u8,
    pub utilization_class: &'static str,
}

impl From<&Employee> for EmployeeRow {
    fn from(e: &Employee) -> Self {
        let (skills, hidden_skills) = e.skill_preview(SKILLS_INLINE);
        Self {
            id: e.id.0,
            initials: e.initials(),
            name: e.name.clone(),
            role: e.role.clone(),
            experience: e.experience.as_str(),
            project: e.project_assigned.clone(),
            availability: e.availability,
            skills: skills.to_vec(),
            hidden_skills,
            location: e.location.clone(),
            rating: format!("{:.1}", e.rating),
            utilization: e.utilization_rate,
            utilization_class: match e.utilization_tone() {
                UtilizationTone::High => "utilization__bar utilization__bar--high",
                UtilizationTone::Elevated => "utilization__bar utilization__bar--elevated",
                UtilizationTone::Normal => "utilization__bar",
            },
        }
    }
}

#[component]
pub fn EmployeeList() -> impl IntoView {
    let state = EmployeeListState::new();
    let stats = DirectoryStats::from_employees(mock_employees());
    let is_filtered = move || state.filter.with(|f| !f.is_default());

    view! {
        <PageFrame page_id="a001_employee--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Employee Directory"
                subtitle="Browse skills, availability and current assignments"
                icon_name="users"
            >
                <span class="page-header__counter">
                    {move || format!("{} of {} employees", state.visible.with(Vec::len), stats.total)}
                </span>
            </PageHeader>

            <div class="stat-grid">
                <StatCard label="Total Employees" icon_name="users" value=stats.total.to_string() />
                <StatCard
                    label="Available"
                    icon_name="check-circle"
                    value=stats.available.to_string()
                    tone=StatTone::Success
                />
                <StatCard
                    label="Busy"
                    icon_name="clock"
                    value=stats.busy.to_string()
                    tone=StatTone::Warning
                />
                <StatCard label="On Leave" icon_name="calendar" value=stats.on_leave.to_string() />
                <StatCard label="Avg Rating" icon_name="star" value=stats.average_rating_label() />
            </div>

            <div class="filter-panel">
                <div class="filter-panel__search">
                    <Input
                        leading_icon="search"
                        value=Signal::derive(move || state.filter.with(|f| f.search.clone()))
                        on_input=Callback::new(move |v| state.set_search(v))
                        placeholder="Search by name, role or skill..."
                    />
                </div>
                <Select
                    value=Signal::derive(move || state.filter.with(|f| f.project.clone()))
                    on_change=Callback::new(move |v| state.set_project(v))
                    options=PROJECT_OPTIONS
                />
                <Select
                    value=Signal::derive(move || state.filter.with(|f| f.experience.clone()))
                    on_change=Callback::new(move |v| state.set_experience(v))
                    options=EXPERIENCE_OPTIONS
                />
                <Select
                    value=Signal::derive(move || state.filter.with(|f| f.skill.clone()))
                    on_change=Callback::new(move |v| state.set_skill(v))
                    options=SKILL_OPTIONS
                />
                <Show when=is_filtered>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        size=ButtonSize::Small
                        on_click=move |_| state.reset()
                    >
                        {icon_sized("filter", 16)}
                        " Clear filters"
                    </Button>
                </Show>
            </div>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Employee"</th>
                            <th class="table__header-cell">"Experience"</th>
                            <th class="table__header-cell">"Project"</th>
                            <th class="table__header-cell">"Availability"</th>
                            <th class="table__header-cell">"Skills"</th>
                            <th class="table__header-cell">"Location"</th>
                            <th class="table__header-cell">"Rating"</th>
                            <th class="table__header-cell">"Utilization"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || state.visible.with(|list| {
                            list.iter().map(EmployeeRow::from).map(|row| view! {
                                <tr class="table__row" data-employee-id=row.id>
                                    <td class="table__cell">
                                        <div class="employee-cell">
                                            <span class="avatar">{row.initials}</span>
                                            <div>
                                                <div class="employee-cell__name">{row.name}</div>
                                                <div class="employee-cell__role">{row.role}</div>
                                            </div>
                                        </div>
                                    </td>
                                    <td class="table__cell">{row.experience}</td>
                                    <td class="table__cell">{row.project}</td>
                                    <td class="table__cell">
                                        <AvailabilityBadge availability=row.availability />
                                    </td>
                                    <td class="table__cell">
                                        <div class="skill-tags">
                                            {row.skills.into_iter().map(|skill| view! {
                                                <span class="skill-tag">{skill}</span>
                                            }).collect_view()}
                                            {(row.hidden_skills > 0).then(|| view! {
                                                <span class="skill-tag skill-tag--more">
                                                    {format!("+{}", row.hidden_skills)}
                                                </span>
                                            })}
                                        </div>
                                    </td>
                                    <td class="table__cell">
                                        <span class="icon-text">{icon_sized("map-pin", 14)}{row.location}</span>
                                    </td>
                                    <td class="table__cell">
                                        <span class="icon-text">{icon_sized("star", 14)}{row.rating}</span>
                                    </td>
                                    <td class="table__cell">
                                        <div class="utilization">
                                            <div class="utilization__track">
                                                <div
                                                    class=row.utilization_class
                                                    style=format!("width: {}%;", row.utilization)
                                                ></div>
                                            </div>
                                            <span class="utilization__label">{format!("{}%", row.utilization)}</span>
                                        </div>
                                    </td>
                                </tr>
                            }).collect_view()
                        })}
                    </tbody>
                </table>
            </div>

            <Show when=move || state.visible.with(Vec::is_empty)>
                <div class="empty-state">
                    {icon_sized("users", 32)}
                    <p>"No employees match the current filters."</p>
                </div>
            </Show>
        </PageFrame>
    }
}
