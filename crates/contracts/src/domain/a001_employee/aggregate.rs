use crate::domain::common::AggregateId;
use serde::{Deserialize, Serialize};

/// Project assignment value of an employee with no project
pub const UNASSIGNED_PROJECT: &str = "Available";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EmployeeId(pub u32);

impl AggregateId for EmployeeId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }
    fn from_string(s: &str) -> Result<Self, String> {
        <u32 as AggregateId>::from_string(s).map(EmployeeId)
    }
}

/// Whether an employee can currently be assigned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Availability {
    Available,
    Busy,
    #[serde(rename = "On Leave")]
    OnLeave,
}

impl Availability {
    pub const ALL: [Availability; 3] = [
        Availability::Available,
        Availability::Busy,
        Availability::OnLeave,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::Available => "Available",
            Availability::Busy => "Busy",
            Availability::OnLeave => "On Leave",
        }
    }

    pub fn from_str(s: &str) -> Result<Self, String> {
        match s {
            "Available" => Ok(Availability::Available),
            "Busy" => Ok(Availability::Busy),
            "On Leave" => Ok(Availability::OnLeave),
            _ => Err(format!("Unknown availability: {}", s)),
        }
    }
}

impl std::fmt::Display for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExperienceBracket {
    #[serde(rename = "1-2 years")]
    OneToTwo,
    #[serde(rename = "2-3 years")]
    TwoToThree,
    #[serde(rename = "3-5 years")]
    ThreeToFive,
    #[serde(rename = "5+ years")]
    FivePlus,
}

impl ExperienceBracket {
    pub const ALL: [ExperienceBracket; 4] = [
        ExperienceBracket::OneToTwo,
        ExperienceBracket::TwoToThree,
        ExperienceBracket::ThreeToFive,
        ExperienceBracket::FivePlus,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceBracket::OneToTwo => "1-2 years",
            ExperienceBracket::TwoToThree => "2-3 years",
            ExperienceBracket::ThreeToFive => "3-5 years",
            ExperienceBracket::FivePlus => "5+ years",
        }
    }

    pub fn from_str(s: &str) -> Result<Self, String> {
        Self::ALL
            .into_iter()
            .find(|b| b.as_str() == s)
            .ok_or_else(|| format!("Unknown experience bracket: {}", s))
    }
}

impl std::fmt::Display for ExperienceBracket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display band of the utilization column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UtilizationTone {
    Normal,
    Elevated,
    High,
}

impl UtilizationTone {
    pub fn for_rate(rate: u8) -> Self {
        if rate >= 90 {
            UtilizationTone::High
        } else if rate >= 70 {
            UtilizationTone::Elevated
        } else {
            UtilizationTone::Normal
        }
    }
}

/// Directory record. Mock data only: nothing mutates an employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub role: String,
    pub experience: ExperienceBracket,
    pub project_assigned: String,
    pub availability: Availability,
    pub skillset: Vec<String>,
    pub location: String,
    /// 0.0 - 5.0
    pub rating: f32,
    /// 0 - 100, display only
    pub utilization_rate: u8,
}

impl Employee {
    pub fn is_unassigned(&self) -> bool {
        self.project_assigned == UNASSIGNED_PROJECT
    }

    /// First letter of every word of the name: "Sarah Chen" -> "SC"
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }

    /// Skills shown inline plus how many were left out
    pub fn skill_preview(&self, limit: usize) -> (&[String], usize) {
        let shown = self.skillset.len().min(limit);
        (&self.skillset[..shown], self.skillset.len() - shown)
    }

    pub fn utilization_tone(&self) -> UtilizationTone {
        UtilizationTone::for_rate(self.utilization_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_employee::roster::mock_employees;

    #[test]
    fn test_initials() {
        let employees = mock_employees();
        assert_eq!(employees[0].initials(), "SC");
        assert_eq!(employees[7].initials(), "MG");
    }

    #[test]
    fn test_skill_preview_overflow() {
        let employees = mock_employees();
        let (shown, rest) = employees[0].skill_preview(3);
        assert_eq!(shown, ["Python", "TensorFlow", "Computer Vision"]);
        assert_eq!(rest, 1);

        let (shown, rest) = employees[0].skill_preview(10);
        assert_eq!(shown.len(), 4);
        assert_eq!(rest, 0);
    }

    #[test]
    fn test_utilization_tone_bands() {
        assert_eq!(UtilizationTone::for_rate(95), UtilizationTone::High);
        assert_eq!(UtilizationTone::for_rate(90), UtilizationTone::High);
        assert_eq!(UtilizationTone::for_rate(70), UtilizationTone::Elevated);
        assert_eq!(UtilizationTone::for_rate(69), UtilizationTone::Normal);
        assert_eq!(UtilizationTone::for_rate(0), UtilizationTone::Normal);
    }

    #[test]
    fn test_enum_labels_round_trip() {
        for a in Availability::ALL {
            assert_eq!(Availability::from_str(a.as_str()), Ok(a));
        }
        for b in ExperienceBracket::ALL {
            assert_eq!(ExperienceBracket::from_str(b.as_str()), Ok(b));
        }
        assert!(ExperienceBracket::from_str("10 years").is_err());
    }

    #[test]
    fn test_serde_uses_display_labels() {
        let json = serde_json::to_string(&Availability::OnLeave).unwrap();
        assert_eq!(json, "\"On Leave\"");
        let json = serde_json::to_string(&ExperienceBracket::FivePlus).unwrap();
        assert_eq!(json, "\"5+ years\"");
    }
}
