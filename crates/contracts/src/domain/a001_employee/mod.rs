pub mod aggregate;
pub mod filter;
pub mod roster;

pub use aggregate::{Availability, Employee, EmployeeId, ExperienceBracket, UtilizationTone};
pub use filter::{filter_employees, DirectoryStats, EmployeeFilter};
pub use roster::mock_employees;
