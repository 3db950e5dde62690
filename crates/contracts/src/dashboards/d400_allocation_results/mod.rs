//! Static data of the allocation results dashboard.
//!
//! Nothing here is computed from the employee directory; these are the
//! fixed figures the demo shows after "processing".

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AllocationRow {
    pub project: &'static str,
    pub allocated: u32,
    pub required: u32,
    /// Percent
    pub efficiency: u32,
}

impl AllocationRow {
    pub fn is_fully_staffed(&self) -> bool {
        self.allocated >= self.required
    }

    pub fn remaining_need(&self) -> u32 {
        self.required.saturating_sub(self.allocated)
    }

    /// Allocated share of the requirement, capped at 100
    pub fn fill_percent(&self) -> u32 {
        if self.required == 0 {
            return 100;
        }
        (self.allocated * 100 / self.required).min(100)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DemandSupplyPoint {
    pub month: &'static str,
    pub demand: u32,
    pub supply: u32,
}

impl DemandSupplyPoint {
    /// Positive when demand exceeds supply
    pub fn gap(&self) -> i64 {
        i64::from(self.demand) - i64::from(self.supply)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillShare {
    pub skill: &'static str,
    pub percent: u32,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimelinePoint {
    pub week: &'static str,
    /// Resources per project, in [`TIMELINE_PROJECTS`] order
    pub counts: [u32; 3],
}

impl TimelinePoint {
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Conflict {
    pub id: u32,
    pub kind: &'static str,
    pub description: &'static str,
    pub severity: Severity,
    pub impact: &'static str,
    pub suggestion: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyMetric {
    pub label: &'static str,
    pub value: String,
    pub caption: String,
    pub icon: &'static str,
}

impl KeyMetric {
    fn new(
        label: &'static str,
        value: impl Into<String>,
        caption: impl Into<String>,
        icon: &'static str,
    ) -> Self {
        Self { label, value: value.into(), caption: caption.into(), icon }
    }
}

/// Period selector of the dashboard header; display only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "1month")]
    OneMonth,
    #[default]
    #[serde(rename = "3months")]
    ThreeMonths,
    #[serde(rename = "6months")]
    SixMonths,
    #[serde(rename = "1year")]
    OneYear,
}

impl TimeRange {
    pub const ALL: [TimeRange; 4] = [
        TimeRange::OneMonth,
        TimeRange::ThreeMonths,
        TimeRange::SixMonths,
        TimeRange::OneYear,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            TimeRange::OneMonth => "1month",
            TimeRange::ThreeMonths => "3months",
            TimeRange::SixMonths => "6months",
            TimeRange::OneYear => "1year",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::OneMonth => "Last Month",
            TimeRange::ThreeMonths => "Last 3 Months",
            TimeRange::SixMonths => "Last 6 Months",
            TimeRange::OneYear => "Last Year",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.value() == value)
    }
}

/// (value, label) pairs for the period select
pub const TIME_RANGE_OPTIONS: &[(&str, &str)] = &[
    ("1month", "Last Month"),
    ("3months", "Last 3 Months"),
    ("6months", "Last 6 Months"),
    ("1year", "Last Year"),
];

/// Header cards; the conflict card is counted from [`CONFLICTS`]
pub fn key_metrics() -> Vec<KeyMetric> {
    vec![
        KeyMetric::new("Match Accuracy", "94.5%", "+5.2% from last month", "target"),
        KeyMetric::new("Resources Allocated", "28/32", "87.5% utilization", "users"),
        KeyMetric::new(
            "Active Conflicts",
            CONFLICTS.len().to_string(),
            format!("{} high priority", conflicts_with(Severity::High)),
            "alert-triangle",
        ),
        KeyMetric::new("Avg Response Time", "2.4s", "Real-time processing", "clock"),
    ]
}

pub const ALLOCATIONS: [AllocationRow; 4] = [
    AllocationRow { project: "Alpha", allocated: 8, required: 10, efficiency: 85 },
    AllocationRow { project: "Beta", allocated: 12, required: 12, efficiency: 92 },
    AllocationRow { project: "Gamma", allocated: 6, required: 8, efficiency: 78 },
    AllocationRow { project: "Delta", allocated: 4, required: 6, efficiency: 67 },
];

pub const DEMAND_SUPPLY: [DemandSupplyPoint; 6] = [
    DemandSupplyPoint { month: "Jan", demand: 45, supply: 42 },
    DemandSupplyPoint { month: "Feb", demand: 52, supply: 48 },
    DemandSupplyPoint { month: "Mar", demand: 48, supply: 50 },
    DemandSupplyPoint { month: "Apr", demand: 61, supply: 55 },
    DemandSupplyPoint { month: "May", demand: 55, supply: 58 },
    DemandSupplyPoint { month: "Jun", demand: 67, supply: 60 },
];

pub const SKILL_DISTRIBUTION: [SkillShare; 5] = [
    SkillShare { skill: "AI/ML", percent: 25, color: "#8B5CF6" },
    SkillShare { skill: "Frontend", percent: 35, color: "#06B6D4" },
    SkillShare { skill: "Backend", percent: 20, color: "#10B981" },
    SkillShare { skill: "DevOps", percent: 12, color: "#F59E0B" },
    SkillShare { skill: "Design", percent: 8, color: "#EF4444" },
];

pub const TIMELINE_PROJECTS: [(&str, &str); 3] = [
    ("Project Alpha", "#8B5CF6"),
    ("Project Beta", "#06B6D4"),
    ("Project Gamma", "#10B981"),
];

pub const TIMELINE: [TimelinePoint; 4] = [
    TimelinePoint { week: "Week 1", counts: [3, 4, 2] },
    TimelinePoint { week: "Week 2", counts: [4, 3, 3] },
    TimelinePoint { week: "Week 3", counts: [2, 5, 4] },
    TimelinePoint { week: "Week 4", counts: [5, 2, 1] },
];

pub const CONFLICTS: [Conflict; 3] = [
    Conflict {
        id: 1,
        kind: "Resource Overlap",
        description: "Sarah Chen is allocated to both Project Alpha and Beta for the same time period",
        severity: Severity::High,
        impact: "Project delays possible",
        suggestion: "Reschedule Project Beta tasks or find alternative resource",
    },
    Conflict {
        id: 2,
        kind: "Skill Gap",
        description: "Project Gamma requires 2 additional DevOps engineers",
        severity: Severity::Medium,
        impact: "Deployment timeline at risk",
        suggestion: "Consider outsourcing or training existing team members",
    },
    Conflict {
        id: 3,
        kind: "Over-allocation",
        description: "Alex Kim is allocated 110% capacity next month",
        severity: Severity::High,
        impact: "Burnout risk and quality concerns",
        suggestion: "Redistribute workload or extend project timeline",
    },
];

pub fn conflicts_with(severity: Severity) -> usize {
    CONFLICTS.iter().filter(|c| c.severity == severity).count()
}

/// Largest value across series, used to scale the bar markup
pub fn chart_ceiling<I: IntoIterator<Item = u32>>(values: I) -> u32 {
    values.into_iter().max().unwrap_or(0).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_distribution_sums_to_100() {
        let total: u32 = SKILL_DISTRIBUTION.iter().map(|s| s.percent).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn test_conflict_card_counts_conflicts() {
        let metrics = key_metrics();
        let card = metrics.iter().find(|m| m.label == "Active Conflicts").unwrap();
        assert_eq!(card.value, "3");
        assert_eq!(card.caption, "2 high priority");
        assert_eq!(conflicts_with(Severity::Medium), 1);
        assert_eq!(conflicts_with(Severity::Low), 0);
    }

    #[test]
    fn test_allocation_fill() {
        assert_eq!(ALLOCATIONS[0].fill_percent(), 80);
        assert!(ALLOCATIONS[1].is_fully_staffed());
        assert_eq!(ALLOCATIONS[1].fill_percent(), 100);
        assert_eq!(ALLOCATIONS[3].fill_percent(), 66);
        assert_eq!(ALLOCATIONS[2].remaining_need(), 2);
    }

    #[test]
    fn test_series_helpers() {
        assert_eq!(DEMAND_SUPPLY[0].gap(), 3);
        assert_eq!(DEMAND_SUPPLY[2].gap(), -2);
        assert_eq!(TIMELINE[2].total(), 11);
        assert_eq!(chart_ceiling(DEMAND_SUPPLY.iter().map(|p| p.demand)), 67);
        assert_eq!(chart_ceiling(Vec::new()), 1);
    }

    #[test]
    fn test_time_range_values() {
        assert_eq!(TimeRange::default(), TimeRange::ThreeMonths);
        assert_eq!(TimeRange::from_value("1year"), Some(TimeRange::OneYear));
        assert_eq!(TimeRange::from_value("2years"), None);
    }

    #[test]
    fn test_time_range_options_follow_variants() {
        assert_eq!(TIME_RANGE_OPTIONS.len(), TimeRange::ALL.len());
        for (range, &(value, label)) in TimeRange::ALL.iter().zip(TIME_RANGE_OPTIONS) {
            assert_eq!(range.value(), value);
            assert_eq!(range.label(), label);
        }
    }
}
