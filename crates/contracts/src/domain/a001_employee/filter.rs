//! Client-side directory search.
//!
//! Four predicates, all ANDed: free-text search over name/role/skills and
//! three selectors. The `available` project selector also matches the
//! unassigned sentinel exactly; every other selector is a case-insensitive
//! substring test.

use super::aggregate::{Availability, Employee, UNASSIGNED_PROJECT};
use serde::{Deserialize, Serialize};

/// Selector value that disables a filter
pub const FILTER_ALL: &str = "all";

const AVAILABLE_SELECTOR: &str = "available";

/// (value, label) pairs offered by the project selector
pub const PROJECT_OPTIONS: &[(&str, &str)] = &[
    (FILTER_ALL, "All Projects"),
    (AVAILABLE_SELECTOR, "Available"),
    ("alpha", "Project Alpha"),
    ("beta", "Project Beta"),
    ("gamma", "Project Gamma"),
];

pub const EXPERIENCE_OPTIONS: &[(&str, &str)] = &[
    (FILTER_ALL, "All Levels"),
    ("1-2 years", "1-2 years"),
    ("2-3 years", "2-3 years"),
    ("3-5 years", "3-5 years"),
    ("5+ years", "5+ years"),
];

pub const SKILL_OPTIONS: &[(&str, &str)] = &[
    (FILTER_ALL, "All Skills"),
    ("python", "Python"),
    ("react", "React"),
    ("aws", "AWS"),
    ("tensorflow", "TensorFlow"),
    ("figma", "Figma"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeFilter {
    pub search: String,
    pub project: String,
    pub experience: String,
    pub skill: String,
}

impl Default for EmployeeFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            project: FILTER_ALL.to_string(),
            experience: FILTER_ALL.to_string(),
            skill: FILTER_ALL.to_string(),
        }
    }
}

impl EmployeeFilter {
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, employee: &Employee) -> bool {
        self.matches_search(employee)
            && self.matches_project(employee)
            && self.matches_experience(employee)
            && self.matches_skill(employee)
    }

    fn matches_search(&self, employee: &Employee) -> bool {
        let query = self.search.to_lowercase();
        employee.name.to_lowercase().contains(&query)
            || employee.role.to_lowercase().contains(&query)
            || employee
                .skillset
                .iter()
                .any(|skill| skill.to_lowercase().contains(&query))
    }

    fn matches_project(&self, employee: &Employee) -> bool {
        self.project == FILTER_ALL
            || employee
                .project_assigned
                .to_lowercase()
                .contains(&self.project.to_lowercase())
            || (self.project == AVAILABLE_SELECTOR
                && employee.project_assigned == UNASSIGNED_PROJECT)
    }

    fn matches_experience(&self, employee: &Employee) -> bool {
        self.experience == FILTER_ALL || employee.experience.as_str() == self.experience
    }

    fn matches_skill(&self, employee: &Employee) -> bool {
        if self.skill == FILTER_ALL {
            return true;
        }
        let skill = self.skill.to_lowercase();
        employee
            .skillset
            .iter()
            .any(|s| s.to_lowercase().contains(&skill))
    }
}

/// Matching employees in roster order
pub fn filter_employees(employees: &[Employee], filter: &EmployeeFilter) -> Vec<Employee> {
    employees
        .iter()
        .filter(|e| filter.matches(e))
        .cloned()
        .collect()
}

/// Summary cards under the directory table
#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryStats {
    pub total: usize,
    pub available: usize,
    pub busy: usize,
    pub on_leave: usize,
    pub average_rating: f32,
}

impl DirectoryStats {
    pub fn from_employees(employees: &[Employee]) -> Self {
        let count = |status: Availability| {
            employees
                .iter()
                .filter(|e| e.availability == status)
                .count()
        };
        let average_rating = if employees.is_empty() {
            0.0
        } else {
            employees.iter().map(|e| e.rating).sum::<f32>() / employees.len() as f32
        };
        Self {
            total: employees.len(),
            available: count(Availability::Available),
            busy: count(Availability::Busy),
            on_leave: count(Availability::OnLeave),
            average_rating,
        }
    }

    pub fn average_rating_label(&self) -> String {
        format!("{:.1}", self.average_rating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_employee::roster::mock_employees;

    fn ids(list: &[Employee]) -> Vec<u32> {
        list.iter().map(|e| e.id.0).collect()
    }

    fn with(search: &str, project: &str, experience: &str, skill: &str) -> EmployeeFilter {
        EmployeeFilter {
            search: search.to_string(),
            project: project.to_string(),
            experience: experience.to_string(),
            skill: skill.to_string(),
        }
    }

    #[test]
    fn test_default_filter_returns_everyone() {
        let all = mock_employees();
        let result = filter_employees(all, &EmployeeFilter::default());
        assert_eq!(result.len(), 8);
        assert_eq!(result, all.to_vec());
    }

    #[test]
    fn test_cleared_filter_lands_on_offered_options() {
        let offered = |options: &[(&str, &str)], value: &str| {
            options.iter().any(|&(v, _)| v == value)
        };

        let mut filter = with("rust", "alpha", "5+ years", "aws");
        assert!(offered(PROJECT_OPTIONS, &filter.project));
        assert!(offered(EXPERIENCE_OPTIONS, &filter.experience));
        assert!(offered(SKILL_OPTIONS, &filter.skill));

        filter = EmployeeFilter::default();
        assert!(filter.is_default());
        assert!(offered(PROJECT_OPTIONS, &filter.project));
        assert!(offered(EXPERIENCE_OPTIONS, &filter.experience));
        assert!(offered(SKILL_OPTIONS, &filter.skill));
        assert_eq!(PROJECT_OPTIONS[0].0, filter.project);
    }

    #[test]
    fn test_search_is_case_insensitive_over_name_role_and_skills() {
        let all = mock_employees();
        assert_eq!(ids(&filter_employees(all, &with("ENGINEER", "all", "all", "all"))), [1, 3, 5]);
        assert_eq!(ids(&filter_employees(all, &with("react", "all", "all", "all"))), [2, 7]);
        assert_eq!(ids(&filter_employees(all, &with("chen", "all", "all", "all"))), [1]);
        assert!(filter_employees(all, &with("zzz", "all", "all", "all")).is_empty());
    }

    #[test]
    fn test_project_selector() {
        let all = mock_employees();
        assert_eq!(ids(&filter_employees(all, &with("", "alpha", "all", "all"))), [1, 6]);
        assert_eq!(ids(&filter_employees(all, &with("", "beta", "all", "all"))), [3, 8]);
        assert_eq!(ids(&filter_employees(all, &with("", "available", "all", "all"))), [2, 4, 7]);
        assert_eq!(ids(&filter_employees(all, &with("", "Gamma", "all", "all"))), [5]);
    }

    #[test]
    fn test_experience_selector_is_exact() {
        let all = mock_employees();
        assert_eq!(ids(&filter_employees(all, &with("", "all", "5+ years", "all"))), [1, 3, 6]);
        assert!(filter_employees(all, &with("", "all", "5+", "all")).is_empty());
    }

    #[test]
    fn test_skill_selector() {
        let all = mock_employees();
        assert_eq!(ids(&filter_employees(all, &with("", "all", "all", "python"))), [1, 3, 8]);
        assert_eq!(ids(&filter_employees(all, &with("", "all", "all", "aws"))), [2, 5]);
    }

    #[test]
    fn test_predicates_are_anded() {
        let all = mock_employees();
        assert_eq!(ids(&filter_employees(all, &with("python", "beta", "all", "all"))), [3, 8]);
        assert_eq!(ids(&filter_employees(all, &with("", "all", "3-5 years", "aws"))), [2, 5]);
        assert!(filter_employees(all, &with("", "alpha", "1-2 years", "all")).is_empty());
    }

    #[test]
    fn test_result_is_subset_and_idempotent() {
        let all = mock_employees();
        let filters = [
            with("", "all", "all", "all"),
            with("a", "available", "all", "react"),
            with("senior", "all", "5+ years", "all"),
            with("", "beta", "3-5 years", "python"),
            with("nobody", "gamma", "all", "figma"),
        ];
        for filter in &filters {
            let once = filter_employees(all, filter);
            assert!(once.iter().all(|e| all.contains(e)));
            let twice = filter_employees(&once, filter);
            assert_eq!(once, twice, "{:?}", filter);
        }
    }

    #[test]
    fn test_directory_stats() {
        let stats = DirectoryStats::from_employees(mock_employees());
        assert_eq!(stats.total, 8);
        assert_eq!(stats.available, 3);
        assert_eq!(stats.busy, 4);
        assert_eq!(stats.on_leave, 1);
        assert_eq!(stats.average_rating_label(), "4.7");

        let empty = DirectoryStats::from_employees(&[]);
        assert_eq!(empty.average_rating_label(), "0.0");
    }
}
