use super::aggregate::{Availability, Employee, EmployeeId, ExperienceBracket, UNASSIGNED_PROJECT};
use once_cell::sync::Lazy;

static EMPLOYEES: Lazy<Vec<Employee>> = Lazy::new(|| {
    vec![
        employee(
            1,
            "Sarah Chen",
            "Senior AI Engineer",
            ExperienceBracket::FivePlus,
            "Project Alpha",
            Availability::Busy,
            &["Python", "TensorFlow", "Computer Vision", "NLP"],
            "San Francisco, CA",
            4.9,
            85,
        ),
        employee(
            2,
            "Mike Rodriguez",
            "Full Stack Developer",
            ExperienceBracket::ThreeToFive,
            UNASSIGNED_PROJECT,
            Availability::Available,
            &["React", "Node.js", "PostgreSQL", "AWS"],
            "New York, NY",
            4.7,
            60,
        ),
        employee(
            3,
            "Alex Kim",
            "Senior AI Engineer",
            ExperienceBracket::FivePlus,
            "Project Beta",
            Availability::Busy,
            &["Python", "PyTorch", "MLOps", "Kubernetes"],
            "Seattle, WA",
            4.8,
            90,
        ),
        employee(
            4,
            "Emily Johnson",
            "UX Designer",
            ExperienceBracket::TwoToThree,
            UNASSIGNED_PROJECT,
            Availability::Available,
            &["Figma", "User Research", "Prototyping", "Design Systems"],
            "Austin, TX",
            4.6,
            45,
        ),
        employee(
            5,
            "David Park",
            "DevOps Engineer",
            ExperienceBracket::ThreeToFive,
            "Project Gamma",
            Availability::Busy,
            &["Docker", "Kubernetes", "AWS", "Terraform"],
            "San Francisco, CA",
            4.8,
            95,
        ),
        employee(
            6,
            "Lisa Wang",
            "Product Manager",
            ExperienceBracket::FivePlus,
            "Project Alpha",
            Availability::Busy,
            &["Product Strategy", "Agile", "Analytics", "Stakeholder Management"],
            "Boston, MA",
            4.9,
            80,
        ),
        employee(
            7,
            "James Wilson",
            "Junior Developer",
            ExperienceBracket::OneToTwo,
            UNASSIGNED_PROJECT,
            Availability::Available,
            &["JavaScript", "React", "CSS", "Git"],
            "Remote",
            4.3,
            30,
        ),
        employee(
            8,
            "Maria Garcia",
            "Data Scientist",
            ExperienceBracket::ThreeToFive,
            "Project Beta",
            Availability::OnLeave,
            &["Python", "R", "SQL", "Machine Learning"],
            "Miami, FL",
            4.7,
            0,
        ),
    ]
});

#[allow(clippy::too_many_arguments)]
fn employee(
    id: u32,
    name: &str,
    role: &str,
    experience: ExperienceBracket,
    project: &str,
    availability: Availability,
    skills: &[&str],
    location: &str,
    rating: f32,
    utilization_rate: u8,
) -> Employee {
    Employee {
        id: EmployeeId(id),
        name: name.to_string(),
        role: role.to_string(),
        experience,
        project_assigned: project.to_string(),
        availability,
        skillset: skills.iter().map(|s| s.to_string()).collect(),
        location: location.to_string(),
        rating,
        utilization_rate,
    }
}

/// The fixed employee directory
pub fn mock_employees() -> &'static [Employee] {
    &EMPLOYEES
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_roster_shape() {
        let employees = mock_employees();
        assert_eq!(employees.len(), 8);

        let ids: HashSet<_> = employees.iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), 8);

        for e in employees {
            assert!((0.0..=5.0).contains(&e.rating), "{} rating", e.name);
            assert!(e.utilization_rate <= 100, "{} utilization", e.name);
            assert!(!e.skillset.is_empty());
        }
    }

    #[test]
    fn test_unassigned_are_available() {
        for e in mock_employees().iter().filter(|e| e.is_unassigned()) {
            assert_eq!(e.availability, Availability::Available);
        }
    }
}
