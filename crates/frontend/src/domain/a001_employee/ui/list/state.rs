use contracts::domain::a001_employee::{filter_employees, mock_employees, Employee, EmployeeFilter};
use leptos::prelude::*;

/// Filter selectors of the directory page. Lives as long as the page.
#[derive(Clone, Copy)]
pub struct EmployeeListState {
    pub filter: RwSignal<EmployeeFilter>,
    pub visible: Memo<Vec<Employee>>,
}

impl EmployeeListState {
    pub fn new() -> Self {
        let filter = RwSignal::new(EmployeeFilter::default());
        let visible = Memo::new(move |_| filter.with(|f| filter_employees(mock_employees(), f)));
        Self { filter, visible }
    }

    pub fn set_search(&self, value: String) {
        self.filter.update(|f| f.search = value);
    }

    pub fn set_project(&self, value: String) {
        self.filter.update(|f| f.project = value);
    }

    pub fn set_experience(&self, value: String) {
        self.filter.update(|f| f.experience = value);
    }

    pub fn set_skill(&self, value: String) {
        self.filter.update(|f| f.skill = value);
    }

    pub fn reset(&self) {
        self.filter.set(EmployeeFilter::default());
    }
}
