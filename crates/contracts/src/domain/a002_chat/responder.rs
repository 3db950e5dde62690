//! Keyword-matched canned replies of the chat assistant.

/// The five fixed replies, in matching priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CannedResponse {
    Allocation,
    Availability,
    Project,
    Conflict,
    Default,
}

const KEYWORD_GROUPS: [(CannedResponse, &[&str]); 4] = [
    (CannedResponse::Allocation, &["allocate", "assign"]),
    (CannedResponse::Availability, &["availability", "available"]),
    (CannedResponse::Project, &["project", "alpha"]),
    (CannedResponse::Conflict, &["conflict", "issue"]),
];

impl CannedResponse {
    pub fn text(&self) -> &'static str {
        match self {
            CannedResponse::Allocation => "I understand you want to allocate resources. Based on current availability and skill matching, I can help you assign the right talent to your project. Would you like me to show available engineers with the required skills?",
            CannedResponse::Availability => "I can check resource availability for you. Currently, we have 12 available engineers, 8 designers, and 5 project managers. Which specific skills or roles are you looking for?",
            CannedResponse::Project => "Project Alpha requires AI/ML expertise. I found 3 available AI engineers: Sarah Chen (Senior, available Monday), Mike Rodriguez (Mid-level, available Tuesday), and Alex Kim (Senior, available Wednesday). Would you like me to allocate them?",
            CannedResponse::Conflict => "I've detected 2 potential conflicts in current allocations. Project Beta and Gamma both need the same React developer next week. I recommend prioritizing based on deadlines. Shall I suggest a resolution?",
            CannedResponse::Default => "I can help you with resource allocation, checking availability, resolving conflicts, and providing insights about your projects. What would you like me to assist with?",
        }
    }
}

/// First keyword group found in the lower-cased input wins.
pub fn select_response(input: &str) -> CannedResponse {
    let lower = input.to_lowercase();
    KEYWORD_GROUPS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(response, _)| *response)
        .unwrap_or(CannedResponse::Default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocation_wins_over_project() {
        assert_eq!(
            select_response("Allocate 2 AI engineers to Project Alpha next Monday"),
            CannedResponse::Allocation
        );
        assert_eq!(select_response("please ASSIGN Mike"), CannedResponse::Allocation);
    }

    #[test]
    fn test_availability() {
        assert_eq!(select_response("What's the availability?"), CannedResponse::Availability);
        assert_eq!(select_response("who is available on the alpha project"), CannedResponse::Availability);
    }

    #[test]
    fn test_project_and_conflict() {
        assert_eq!(select_response("status of alpha"), CannedResponse::Project);
        assert_eq!(select_response("any conflict?"), CannedResponse::Conflict);
        assert_eq!(select_response("there is an Issue"), CannedResponse::Conflict);
        assert_eq!(select_response("project issue"), CannedResponse::Project);
    }

    #[test]
    fn test_default() {
        assert_eq!(select_response("hello"), CannedResponse::Default);
        assert_eq!(select_response(""), CannedResponse::Default);
        assert!(CannedResponse::Default.text().starts_with("I can help you"));
    }
}
