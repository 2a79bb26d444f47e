use serde::Serialize;

/// One extracurricular offering. The activity name is the catalog key and is
/// not repeated inside the descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    /// Informational only, signups are not rejected once this is reached.
    pub max_participants: u32,
    /// Participant emails in signup order.
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    pub fn with_participants<I, S>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.participants = participants.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_registered(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_activity_wire_format() {
        let activity = Activity::new("Learn chess", "Fridays, 3:30 PM - 5:00 PM", 12)
            .with_participants(["michael@mergington.edu"]);

        let value = serde_json::to_value(&activity).unwrap();
        assert_eq!(
            value,
            json!({
                "description": "Learn chess",
                "schedule": "Fridays, 3:30 PM - 5:00 PM",
                "max_participants": 12,
                "participants": ["michael@mergington.edu"]
            })
        );
    }

    #[test]
    fn test_is_registered_matches_exact_email() {
        let activity = Activity::new("Tiny", "Never", 1)
            .with_participants(["a@mergington.edu", "b@mergington.edu"]);

        assert!(!activity.is_registered("B@mergington.edu"));
        assert!(activity.is_registered("b@mergington.edu"));
        assert!(!activity.is_registered("c@mergington.edu"));
    }
}
